use std::time::Duration;

use tracing::debug;

const DEFAULT_PROJECT_ID: &str = "instant-photos-9a258";
const DEFAULT_PROXY_BASE_URL: &str =
    "https://us-central1-instant-photos-9a258.cloudfunctions.net/proxyImage";
const DEFAULT_FLIP_DURATION_MS: u64 = 400;

/// Application configuration, loaded from environment variables.
/// In debug builds a `.env` file is picked up first.
#[derive(Clone, Debug)]
pub struct Config {
    /// Firestore project hosting the album collections.
    pub firestore_project_id: String,
    /// Cloud function that proxies storage paths to public image URLs.
    pub proxy_base_url: String,
    /// How long one page flip takes.
    pub flip_duration_ms: u64,
}

impl Config {
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            debug!("loaded .env file");
        }

        let firestore_project_id = std::env::var("FLIPBOOK_FIRESTORE_PROJECT")
            .unwrap_or_else(|_| DEFAULT_PROJECT_ID.to_string());
        let proxy_base_url = std::env::var("FLIPBOOK_PROXY_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PROXY_BASE_URL.to_string());
        let flip_duration_ms = std::env::var("FLIPBOOK_FLIP_DURATION_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_FLIP_DURATION_MS);

        debug!(
            project = %firestore_project_id,
            flip_duration_ms,
            "configuration loaded"
        );

        Self {
            firestore_project_id,
            proxy_base_url,
            flip_duration_ms,
        }
    }

    pub fn flip_duration(&self) -> Duration {
        Duration::from_millis(self.flip_duration_ms)
    }
}
