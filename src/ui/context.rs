use std::time::Duration;

use dioxus::prelude::*;

use crate::store::StoreClient;

/// App-wide services, provided once at the root.
#[derive(Clone)]
pub struct AppContext {
    pub store: StoreClient,
    pub flip_duration: Duration,
}

/// Hook to access the album store client
pub fn use_store() -> StoreClient {
    let context = use_context::<AppContext>();
    context.store.clone()
}

/// Hook to access the configured page-flip duration
pub fn use_flip_duration() -> Duration {
    use_context::<AppContext>().flip_duration
}
