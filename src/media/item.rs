//! Media item representation.

use chrono::{DateTime, Utc};

use crate::api::DOWNLOAD_SUFFIX;

/// Type of media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
    Unknown,
}

/// A favorited media item ready for download.
#[derive(Debug, Clone)]
pub struct MediaItem {
    /// Unique media item ID.
    pub id: String,

    /// Original filename as stored in the library.
    pub filename: String,

    /// MIME type of the media.
    pub mime_type: String,

    /// Base content URL; requires a suffix to yield bytes.
    pub base_url: String,

    /// Creation timestamp of the underlying media.
    pub creation_time: DateTime<Utc>,
}

impl MediaItem {
    /// Get the media type based on MIME type.
    pub fn media_type(&self) -> MediaType {
        if self.mime_type.starts_with("image/") {
            MediaType::Image
        } else if self.mime_type.starts_with("video/") {
            MediaType::Video
        } else {
            MediaType::Unknown
        }
    }

    /// Whether this item is a downloadable image.
    pub fn is_image(&self) -> bool {
        self.media_type() == MediaType::Image
    }

    /// URL returning the full-resolution original bytes.
    pub fn download_url(&self) -> String {
        format!("{}{}", self.base_url, DOWNLOAD_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item_with_mime(mime_type: &str) -> MediaItem {
        MediaItem {
            id: "item-1".to_string(),
            filename: "IMG_1.HEIC".to_string(),
            mime_type: mime_type.to_string(),
            base_url: "https://lh3.googleusercontent.com/x".to_string(),
            creation_time: Utc.with_ymd_and_hms(2021, 5, 3, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_media_type() {
        assert_eq!(item_with_mime("image/heif").media_type(), MediaType::Image);
        assert_eq!(item_with_mime("image/jpeg").media_type(), MediaType::Image);
        assert_eq!(item_with_mime("video/mp4").media_type(), MediaType::Video);
        assert_eq!(
            item_with_mime("application/pdf").media_type(),
            MediaType::Unknown
        );
    }

    #[test]
    fn test_video_is_not_image() {
        assert!(!item_with_mime("video/mp4").is_image());
    }

    #[test]
    fn test_download_url() {
        assert_eq!(
            item_with_mime("image/jpeg").download_url(),
            "https://lh3.googleusercontent.com/x=d"
        );
    }
}
