use crate::fixtures::{hours_ahead, meetup_at, new_york, sample_response};
use nearby_events::cache::types::cache_key;
use nearby_events::{EventCache, Location, LocationStore, MemoryEventCache, MemoryLocationStore};
use std::time::Duration;
use uuid::Uuid;

#[test]
fn same_coordinates_derive_the_same_key() {
    let first = cache_key(&Location::from_coordinates(40.7, -74.0)).unwrap();
    let second = cache_key(&Location::from_coordinates(40.7, -74.0)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn different_coordinates_derive_different_keys() {
    let new_york = cache_key(&Location::from_coordinates(40.7, -74.0)).unwrap();
    let paris = cache_key(&Location::from_coordinates(48.85, 2.35)).unwrap();
    let nudged = cache_key(&Location::from_coordinates(40.7001, -74.0)).unwrap();

    assert_ne!(new_york, paris);
    assert_ne!(new_york, nudged);
}

#[test]
fn key_ignores_non_coordinate_fields() {
    let bare = cache_key(&Location::from_coordinates(40.7, -74.0)).unwrap();
    let decorated = cache_key(&new_york()).unwrap();

    assert_eq!(bare, decorated);
}

#[test]
fn missing_coordinates_derive_no_key() {
    assert!(cache_key(&Location::default()).is_none());
    assert!(
        cache_key(&Location {
            latitude: Some(40.7),
            ..Location::default()
        })
        .is_none()
    );
    assert!(
        cache_key(&Location {
            longitude: Some(-74.0),
            ..Location::default()
        })
        .is_none()
    );
}

#[tokio::test]
async fn set_then_get_returns_the_raw_response() {
    let cache = MemoryEventCache::new();
    let response = sample_response(new_york(), vec![meetup_at(&hours_ahead(2), "Rust Meetup")]);
    let key = cache_key(&response.location).unwrap();

    assert!(cache.set(&key, response.clone()).await);

    let cached = cache.get(&key).await.unwrap();
    assert_eq!(cached.events.len(), 1);
    assert_eq!(cached.events[0].title, "Rust Meetup");
    assert!(cached.events[0].formatted_date.is_none());
}

#[tokio::test]
async fn entries_expire_after_their_own_ttl() {
    let cache = MemoryEventCache::new();
    let mut response = sample_response(new_york(), vec![]);
    response.ttl = Some(1);
    let key = cache_key(&response.location).unwrap();

    cache.set(&key, response).await;
    assert!(cache.get(&key).await.is_some());

    tokio::time::sleep(Duration::from_secs(2)).await;

    assert!(cache.get(&key).await.is_none());
}

#[tokio::test]
async fn unknown_keys_miss() {
    let cache = MemoryEventCache::new();

    assert!(cache.get("events:no-such-key").await.is_none());
}

#[test]
fn location_store_roundtrips_per_user() {
    let store = MemoryLocationStore::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    assert!(store.get(alice).is_none());
    assert!(store.set(alice, Location::from_coordinates(40.7, -74.0)));

    let stored = store.get(alice).unwrap();
    assert_eq!(stored.latitude, Some(40.7));
    assert!(store.get(bob).is_none());
}
