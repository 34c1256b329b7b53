use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Location {
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    /// Caching identity is the coordinate pair; anything else is decoration.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Meetup,
    Wordcamp,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EventLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// One entry from the events directory. `date` is authoritative; the two
/// `formatted_*` fields are derived per read for the requesting user and
/// must never end up in the cache.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<EventLocation>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The unit stored in the cache and the unit returned to callers.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EventsResponse {
    pub location: Location,
    pub events: Vec<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

/// Payload exactly as the directory returns it, before shape validation.
/// Every field is optional so validation happens in one place instead of
/// scattered null checks.
#[derive(Debug, Deserialize)]
pub struct RawEventsResponse {
    pub location: Option<Location>,
    pub events: Option<Vec<Event>>,
    pub ttl: Option<u64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LookupResult {
    pub response: EventsResponse,
    pub from_cache: bool,
}
