use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use tracing::debug;

use crate::cache::EventCache;
use crate::cache::types::DEFAULT_TTL_SECONDS;
use crate::models::EventsResponse;

/// Per-entry expiration driven by the `ttl` the directory attached to each
/// response.
struct ResponseTtl;

impl Expiry<String, EventsResponse> for ResponseTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        response: &EventsResponse,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(Duration::from_secs(
            response.ttl.unwrap_or(DEFAULT_TTL_SECONDS),
        ))
    }
}

#[derive(Clone)]
pub struct MemoryEventCache {
    cache: Cache<String, EventsResponse>,
}

impl MemoryEventCache {
    pub fn new() -> Self {
        let cache = Cache::builder()
            .max_capacity(10_000)
            .expire_after(ResponseTtl)
            .build();

        Self { cache }
    }
}

impl Default for MemoryEventCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventCache for MemoryEventCache {
    async fn get(&self, key: &str) -> Option<EventsResponse> {
        let cached = self.cache.get(key).await;
        match cached {
            Some(_) => debug!("cache hit for {}", key),
            None => debug!("cache miss for {}", key),
        }
        cached
    }

    async fn set(&self, key: &str, response: EventsResponse) -> bool {
        self.cache.insert(key.to_string(), response).await;
        true
    }
}
