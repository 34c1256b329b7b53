use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.wordpress.org/events/1.0/";

/// Five events are requested so that three still remain after trimming
/// drops expired meetups.
pub const REQUESTED_EVENT_COUNT: u32 = 5;
pub const DISPLAYED_EVENT_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub locale: String,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub requested_count: u32,
    pub displayed_count: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("EVENTS_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let locale = std::env::var("EVENTS_LOCALE").unwrap_or_else(|_| "en_US".to_string());
        let user_agent =
            std::env::var("EVENTS_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            endpoint,
            locale,
            user_agent,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            locale: "en_US".to_string(),
            user_agent: default_user_agent(),
            request_timeout: Duration::from_secs(10),
            requested_count: REQUESTED_EVENT_COUNT,
            displayed_count: DISPLAYED_EVENT_COUNT,
        }
    }
}

fn default_user_agent() -> String {
    format!("nearby-events/{}", env!("CARGO_PKG_VERSION"))
}
