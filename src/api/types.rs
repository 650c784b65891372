//! API request and response type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feature value selecting favorited items.
pub const FEATURE_FAVORITES: &str = "FAVORITES";

/// Body of a mediaItems:search request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub filters: SearchFilters,
    pub page_size: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl SearchRequest {
    /// Build a favorites search request.
    pub fn favorites(page_size: i32, page_token: Option<String>) -> Self {
        Self {
            filters: SearchFilters {
                feature_filter: FeatureFilter {
                    included_features: vec![FEATURE_FAVORITES.to_string()],
                },
            },
            page_size,
            page_token,
        }
    }
}

/// Search filter container.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub feature_filter: FeatureFilter,
}

/// Feature filter selecting items by library feature.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFilter {
    pub included_features: Vec<String>,
}

/// Response of a mediaItems:search request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub media_items: Vec<ApiMediaItem>,
    pub next_page_token: Option<String>,
}

/// A media item as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMediaItem {
    pub id: String,
    pub filename: Option<String>,
    pub mime_type: Option<String>,
    pub base_url: Option<String>,
    pub media_metadata: Option<ApiMediaMetadata>,
}

/// Metadata of a media item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMediaMetadata {
    pub creation_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_first_page() {
        let request = SearchRequest::favorites(100, None);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["filters"]["featureFilter"]["includedFeatures"][0],
            "FAVORITES"
        );
        assert_eq!(json["pageSize"], 100);
        // Absent pageToken must be omitted, not serialized as null
        assert!(json.get("pageToken").is_none());
    }

    #[test]
    fn test_search_request_with_token() {
        let request = SearchRequest::favorites(100, Some("next123".to_string()));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["pageToken"], "next123");
    }

    #[test]
    fn test_search_response_full() {
        let body = r#"{
            "mediaItems": [{
                "id": "item-1",
                "filename": "IMG_1.HEIC",
                "mimeType": "image/heif",
                "baseUrl": "https://lh3.googleusercontent.com/x",
                "mediaMetadata": {"creationTime": "2021-05-03T10:00:00Z"}
            }],
            "nextPageToken": "abc"
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.media_items.len(), 1);
        assert_eq!(response.media_items[0].filename.as_deref(), Some("IMG_1.HEIC"));
        assert_eq!(response.next_page_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_search_response_last_page() {
        let body = r#"{"mediaItems": [{"id": "item-1"}]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(response.next_page_token.is_none());
    }

    #[test]
    fn test_search_response_empty() {
        // A response with no items at all still parses
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.media_items.is_empty());
        assert!(response.next_page_token.is_none());
    }
}
