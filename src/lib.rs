//! Location-aware events lookup with a read-through TTL cache. Resolves a
//! best-guess location, queries a remote events directory, validates the
//! payload, and returns it trimmed and localized for the requesting user.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod ip;
pub mod location;
pub mod models;
pub mod normalize;
pub mod request;

pub use cache::EventCache;
pub use cache::storage::MemoryEventCache;
pub use client::EventsClient;
pub use config::Config;
pub use error::EventsError;
pub use location::{LocationStore, MemoryLocationStore};
pub use models::{Event, EventKind, EventsResponse, Location, LookupResult};
