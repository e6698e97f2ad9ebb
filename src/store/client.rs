use std::collections::HashMap;

use reqwest::{Client, Error as ReqwestError};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::album::{is_valid_code, AlbumImage};
use crate::config::Config;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Album not found")]
    NotFound,
    #[error("Album contains no usable images")]
    Empty,
}

/// Firestore list-documents response for one album's image collection.
#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: HashMap<String, FieldValue>,
}

/// Firestore wraps every field value in a typed envelope; only string
/// fields are of interest here.
#[derive(Debug, Clone, Deserialize)]
struct FieldValue {
    #[serde(rename = "stringValue")]
    string_value: Option<String>,
}

/// Field names the uploader has used for the image location over time,
/// in lookup order.
const IMAGE_PATH_FIELDS: [&str; 5] = ["path", "url", "imagePath", "src", "image"];

/// Read-only client for the album document store. Albums live at
/// `favorites/{code}/imgs`; each document carries one image location.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
    proxy_base_url: String,
}

impl StoreClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: format!(
                "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
                config.firestore_project_id
            ),
            proxy_base_url: config.proxy_base_url.clone(),
        }
    }

    fn collection_url(&self, code: &str) -> String {
        format!("{}/favorites/{}/imgs", self.base_url, code)
    }

    /// Fetch the ordered image list for an album code. A malformed code
    /// can never name an album, so it is rejected before any request.
    pub async fn fetch_album_images(&self, code: &str) -> Result<Vec<AlbumImage>, StoreError> {
        if !is_valid_code(code) {
            return Err(StoreError::NotFound);
        }

        let url = self.collection_url(code);
        debug!(code, "fetching album images");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: ListDocumentsResponse = response.json().await?;

        if body.documents.is_empty() {
            return Err(StoreError::NotFound);
        }

        let total = body.documents.len();
        let images = collect_images(&body.documents, &self.proxy_base_url);
        debug!(code, found = images.len(), total, "album images resolved");

        if images.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(images)
    }

    /// True iff a non-empty album exists for the code.
    pub async fn validate_album(&self, code: &str) -> Result<bool, StoreError> {
        if !is_valid_code(code) {
            return Ok(false);
        }

        let url = self.collection_url(code);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: ListDocumentsResponse = response.json().await?;
        Ok(!body.documents.is_empty())
    }
}

/// Map store documents to display images, skipping documents without a
/// usable location field.
fn collect_images(documents: &[Document], proxy_base_url: &str) -> Vec<AlbumImage> {
    documents
        .iter()
        .filter_map(|doc| match image_path(doc) {
            Some(path) => Some(resolve_url(&path, proxy_base_url)),
            None => {
                warn!(document = %doc.name, "no image path field in document");
                None
            }
        })
        .enumerate()
        .map(|(index, url)| AlbumImage {
            id: format!("img-{index}"),
            url,
            alt: format!("Album image {}", index + 1),
        })
        .collect()
}

fn image_path(doc: &Document) -> Option<String> {
    IMAGE_PATH_FIELDS
        .iter()
        .filter_map(|field| doc.fields.get(*field))
        .filter_map(|value| value.string_value.clone())
        .find(|value| !value.is_empty())
}

/// Absolute http(s) URLs pass through untouched; `gs://` locations and
/// bare storage paths are rewritten to the image proxy.
fn resolve_url(path: &str, proxy_base_url: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let storage_path = match path.strip_prefix("gs://") {
        // Drop the bucket segment, keep the object path.
        Some(rest) => rest.split_once('/').map(|(_, p)| p).unwrap_or(rest),
        None => path,
    };

    format!(
        "{}?path={}",
        proxy_base_url,
        urlencoding::encode(storage_path)
    )
}
