use sha2::{Digest, Sha256};

use crate::models::Location;

pub const DEFAULT_TTL_SECONDS: u64 = 12 * 60 * 60; // 12 hours

/// Derives the cache key for a location. Keys are deterministic in the
/// coordinate pair alone; a location missing either coordinate has no key
/// and is never cached.
pub fn cache_key(location: &Location) -> Option<String> {
    let (latitude, longitude) = match (location.latitude, location.longitude) {
        (Some(latitude), Some(longitude)) => (latitude, longitude),
        _ => return None,
    };

    let digest = Sha256::digest(format!("{latitude},{longitude}").as_bytes());
    Some(format!("events:{digest:x}"))
}
