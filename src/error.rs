use thiserror::Error;

/// Failure modes of an events lookup. `Api` and `InvalidResponse` carry the
/// request URL, status and raw body so callers have enough to diagnose the
/// upstream without re-issuing the request.
#[derive(Error, Debug)]
pub enum EventsError {
    /// The events directory answered with a non-success status code.
    /// Transient; a later trigger may retry, this crate never does.
    #[error("events API request to {url} failed with status {status}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },

    /// The directory answered with a success status but the payload failed
    /// shape validation. Retrying a malformed contract is unlikely to help.
    #[error("events API returned an invalid response: {message}")]
    InvalidResponse {
        message: String,
        url: String,
        status: u16,
        body: String,
    },

    /// Transport-level failure before a response arrived.
    #[error("events API request error: {0}")]
    Request(#[from] reqwest::Error),
}
