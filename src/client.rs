use std::sync::Arc;

use reqwest::Client;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cache::EventCache;
use crate::cache::types::cache_key;
use crate::config::Config;
use crate::error::EventsError;
use crate::ip::resolve_client_ip;
use crate::location::LocationStore;
use crate::models::{EventsResponse, Location, LookupResult, RawEventsResponse};
use crate::normalize::normalize_response;
use crate::request::{EventsQuery, build_request_url};

/// Orchestrates the lookup pipeline: cache check, outbound fetch, shape
/// validation, write-through, and read-time normalization. The cache and
/// the per-user location store are injected collaborators.
pub struct EventsClient {
    http: Client,
    config: Config,
    cache: Arc<dyn EventCache>,
    locations: Arc<dyn LocationStore>,
}

impl EventsClient {
    pub fn new(
        config: Config,
        cache: Arc<dyn EventCache>,
        locations: Arc<dyn LocationStore>,
    ) -> Result<Self, EventsError> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            config,
            cache,
            locations,
        })
    }

    /// Looks up events near the user. A fresh cache entry short-circuits the
    /// network; an explicit search always forces a fetch. The cache keeps
    /// the raw response, the caller gets a trimmed and localized copy.
    pub async fn lookup(
        &self,
        user: Uuid,
        headers: &FxHashMap<String, String>,
        search: Option<&str>,
        timezone: Option<&str>,
    ) -> Result<LookupResult, EventsError> {
        let stored = self.locations.get(user);

        if search.is_none() {
            if let Some(cached) = self.read_cache(stored.as_ref()).await {
                let response = self.normalized(cached, timezone);
                return Ok(LookupResult {
                    response,
                    from_cache: true,
                });
            }
        }

        let query = EventsQuery {
            search,
            timezone,
            stored_location: stored.as_ref(),
            client_ip: resolve_client_ip(headers),
            locale: &self.config.locale,
            number: self.config.requested_count,
        };
        let url = build_request_url(&self.config.endpoint, &query);

        let response = self.fetch(&url).await?;

        // Write-through with the raw payload; formatted fields must never
        // reach the cache.
        if let Some(key) = cache_key(&response.location) {
            if !self.cache.set(&key, response.clone()).await {
                warn!("failed to cache events for key {}", key);
            }
        }

        if response.location.has_coordinates() && (search.is_some() || stored.is_none()) {
            if !self.locations.set(user, response.location.clone()) {
                warn!("failed to store resolved location for user {}", user);
            }
        }

        let response = self.normalized(response, timezone);
        Ok(LookupResult {
            response,
            from_cache: false,
        })
    }

    /// Read-only preview of whatever the cache holds for the user's stored
    /// location, normalized for the caller. Never performs network I/O.
    pub async fn peek_cached(&self, user: Uuid, timezone: Option<&str>) -> Option<EventsResponse> {
        let stored = self.locations.get(user);
        let cached = self.read_cache(stored.as_ref()).await?;
        Some(self.normalized(cached, timezone))
    }

    async fn read_cache(&self, stored: Option<&Location>) -> Option<EventsResponse> {
        let key = cache_key(stored?)?;
        self.cache.get(&key).await
    }

    async fn fetch(&self, url: &str) -> Result<EventsResponse, EventsError> {
        info!("fetching events from {}", url);

        let http_response = self.http.get(url).send().await?;
        let status = http_response.status().as_u16();
        let body = http_response.text().await?;

        if !(200..300).contains(&status) {
            return Err(EventsError::Api {
                status,
                url: url.to_string(),
                body,
            });
        }

        validate_body(url, status, body)
    }

    fn normalized(&self, mut response: EventsResponse, timezone: Option<&str>) -> EventsResponse {
        normalize_response(
            &mut response,
            &self.config.locale,
            timezone,
            self.config.displayed_count,
        );
        response
    }
}

/// Shape validation for the upstream payload, centralized here: a response
/// is usable only when it decodes and carries both `location` and `events`.
/// A server-supplied `error` string becomes the failure message.
fn validate_body(url: &str, status: u16, body: String) -> Result<EventsResponse, EventsError> {
    let raw: RawEventsResponse = match serde_json::from_str(&body) {
        Ok(raw) => raw,
        Err(decode_error) => {
            debug!("undecodable events payload: {}", decode_error);
            debug!("events API response body: {}", body);
            return Err(EventsError::InvalidResponse {
                message: "unknown error".to_string(),
                url: url.to_string(),
                status,
                body,
            });
        }
    };

    if let Some(message) = raw.error {
        debug!("events API response body: {}", body);
        return Err(EventsError::InvalidResponse {
            message,
            url: url.to_string(),
            status,
            body,
        });
    }

    match (raw.location, raw.events) {
        (Some(location), Some(events)) => Ok(EventsResponse {
            location,
            events,
            ttl: raw.ttl,
        }),
        _ => {
            debug!("events API response body: {}", body);
            Err(EventsError::InvalidResponse {
                message: "unknown error".to_string(),
                url: url.to_string(),
                status,
                body,
            })
        }
    }
}
