//! Google Photos Library API HTTP client.

use reqwest::{Client, Response};

use crate::api::types::{SearchRequest, SearchResponse};
use crate::error::{Error, Result};

/// Photos Library API base URL.
const API_BASE: &str = "https://photoslibrary.googleapis.com";

/// Suffix requesting the full-resolution original bytes of a base URL.
pub const DOWNLOAD_SUFFIX: &str = "=d";

/// Photos Library API client around a bearer token.
///
/// The token is read once at construction and never mutated during a run.
#[derive(Debug, Clone)]
pub struct PhotosApi {
    client: Client,
    token: String,
}

impl PhotosApi {
    /// Create a new API client.
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }

    /// Fetch one page of favorited media items.
    pub async fn search_favorites(
        &self,
        page_size: i32,
        page_token: Option<&str>,
    ) -> Result<SearchResponse> {
        let url = format!("{}/v1/mediaItems:search", API_BASE);
        let request = SearchRequest::favorites(page_size, page_token.map(str::to_string));

        tracing::debug!("POST {} (pageToken: {:?})", url, page_token);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        // A rejected token fails the run; there is no automatic re-auth.
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            let detail = if body.is_empty() {
                "access token was rejected".to_string()
            } else {
                body
            };
            return Err(Error::Auth(format!("HTTP {}: {}", status, detail)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Listing(format!("HTTP {}: {}", status, body)));
        }

        let text = response.text().await?;
        let search: SearchResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Listing(format!(
                "Failed to parse search response: {} - Response: {}",
                e,
                &text[..text.len().min(500)]
            ))
        })?;

        Ok(search)
    }

    /// Download a file from a URL as a byte stream.
    ///
    /// Base URLs are self-authorizing; no bearer header is attached.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}
