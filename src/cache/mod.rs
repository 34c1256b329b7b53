pub mod storage;
pub mod types;

use async_trait::async_trait;

use crate::models::EventsResponse;

/// Storage boundary for cached lookups. Any TTL-capable key/value backend
/// satisfies it; the default is the in-process store in [`storage`].
///
/// Entries expire after the response's `ttl` seconds (12 hour default when
/// absent). Concurrent readers are expected; racing writers resolve
/// last-write-wins.
#[async_trait]
pub trait EventCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<EventsResponse>;

    /// Stores a raw response. Returns whether the write was accepted; a
    /// refused write is not fatal to the lookup that issued it.
    async fn set(&self, key: &str, response: EventsResponse) -> bool;
}
