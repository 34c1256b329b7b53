use std::sync::Arc;

use nearby_events::{Config, EventsClient, MemoryEventCache, MemoryLocationStore};
use rustc_hash::FxHashMap;
use uuid::Uuid;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let search = args.next();
    let timezone = args.next();

    let client = match EventsClient::new(
        Config::from_env(),
        Arc::new(MemoryEventCache::new()),
        Arc::new(MemoryLocationStore::new()),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to initialize events client: {}", e);
            std::process::exit(1);
        }
    };

    let user = Uuid::new_v4();
    let headers = FxHashMap::default();

    match client
        .lookup(user, &headers, search.as_deref(), timezone.as_deref())
        .await
    {
        Ok(result) => match serde_json::to_string_pretty(&result.response) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize response: {}", e),
        },
        Err(e) => {
            eprintln!("Lookup failed: {}", e);
            std::process::exit(1);
        }
    }
}
