//! Target path and directory management.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::fs::naming::target_filename;
use crate::media::MediaItem;

/// Get the local target path for a media item.
///
/// The path is deterministic per item, so no two downloads race on the
/// same file.
pub fn target_path(config: &Config, item: &MediaItem) -> Result<PathBuf> {
    let filename = target_filename(&item.creation_time, &item.filename)?;
    Ok(config.download_directory().join(filename))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_target_path() {
        let mut config = Config::default();
        config.options.download_directory = Some(PathBuf::from("/downloads"));

        let item = MediaItem {
            id: "item-1".to_string(),
            filename: "IMG_1.HEIC".to_string(),
            mime_type: "image/heif".to_string(),
            base_url: "https://lh3.googleusercontent.com/x".to_string(),
            creation_time: Utc.with_ymd_and_hms(2021, 5, 3, 10, 0, 0).unwrap(),
        };

        let path = target_path(&config, &item).unwrap();
        assert_eq!(path, PathBuf::from("/downloads/2021-05-03_IMG_1.HEIC"));
    }

    #[test]
    fn test_ensure_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Idempotent
        ensure_dir(&nested).unwrap();
    }
}
