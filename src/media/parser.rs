//! Media item parsing.

use crate::api::types::ApiMediaItem;
use crate::media::item::MediaItem;

/// Parse an API media item into a downloadable [`MediaItem`].
///
/// Items missing any field needed to derive a local path or download URL
/// are dropped.
pub fn parse_media_item(item: &ApiMediaItem) -> Option<MediaItem> {
    let filename = item.filename.clone()?;
    let mime_type = item.mime_type.clone()?;
    let base_url = item.base_url.clone()?;
    let creation_time = item.media_metadata.as_ref()?.creation_time?;

    Some(MediaItem {
        id: item.id.clone(),
        filename,
        mime_type,
        base_url,
        creation_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ApiMediaMetadata;
    use chrono::{TimeZone, Utc};

    fn full_item() -> ApiMediaItem {
        ApiMediaItem {
            id: "item-1".to_string(),
            filename: Some("IMG_1.HEIC".to_string()),
            mime_type: Some("image/heif".to_string()),
            base_url: Some("https://lh3.googleusercontent.com/x".to_string()),
            media_metadata: Some(ApiMediaMetadata {
                creation_time: Some(Utc.with_ymd_and_hms(2021, 5, 3, 10, 0, 0).unwrap()),
            }),
        }
    }

    #[test]
    fn test_parse_full_item() {
        let item = parse_media_item(&full_item()).unwrap();
        assert_eq!(item.id, "item-1");
        assert_eq!(item.filename, "IMG_1.HEIC");
        assert!(item.is_image());
    }

    #[test]
    fn test_parse_missing_base_url() {
        let mut raw = full_item();
        raw.base_url = None;
        assert!(parse_media_item(&raw).is_none());
    }

    #[test]
    fn test_parse_missing_metadata() {
        let mut raw = full_item();
        raw.media_metadata = None;
        assert!(parse_media_item(&raw).is_none());
    }

    #[test]
    fn test_parse_video_item() {
        let mut raw = full_item();
        raw.mime_type = Some("video/mp4".to_string());

        // Videos parse fine; the download loop filters them out
        let item = parse_media_item(&raw).unwrap();
        assert!(!item.is_image());
    }
}
