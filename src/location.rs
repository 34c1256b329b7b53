use std::sync::RwLock;

use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::models::Location;

/// Per-user stored location. This replaces the ambient session state the
/// original widget leaned on: the orchestrator only ever goes through this
/// interface, so hosts with a durable session layer implement it against
/// their own store.
pub trait LocationStore: Send + Sync {
    fn get(&self, user: Uuid) -> Option<Location>;

    /// Returns whether the location was persisted.
    fn set(&self, user: Uuid, location: Location) -> bool;
}

#[derive(Default)]
pub struct MemoryLocationStore {
    locations: RwLock<FxHashMap<Uuid, Location>>,
}

impl MemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocationStore for MemoryLocationStore {
    fn get(&self, user: Uuid) -> Option<Location> {
        let locations = self.locations.read().ok()?;
        locations.get(&user).cloned()
    }

    fn set(&self, user: Uuid, location: Location) -> bool {
        match self.locations.write() {
            Ok(mut locations) => {
                locations.insert(user, location);
                true
            }
            Err(_) => false,
        }
    }
}
