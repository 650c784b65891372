//! Media file downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::PhotosApi;
use crate::config::OptionsConfig;
use crate::error::{Error, Result};
use crate::media::MediaItem;

/// Download a media item to the target path, unless it already exists.
///
/// Returns `None` when the file is already present. Existing files are
/// never overwritten or re-validated; their presence is the sole
/// deduplication signal.
pub async fn download_media_item(
    api: &PhotosApi,
    options: &OptionsConfig,
    item: &MediaItem,
    target_path: &Path,
) -> Result<Option<PathBuf>> {
    if target_path.exists() {
        if options.show_skipped_downloads {
            tracing::info!("File already exists: {}", target_path.display());
        }
        return Ok(None);
    }

    let downloaded = download_direct(api, item, target_path).await?;

    if options.show_downloads {
        tracing::info!("Downloaded: {}", downloaded.display());
    }

    Ok(Some(downloaded))
}

/// Stream the full-resolution bytes of an item to disk.
///
/// The write is awaited to completion; failure surfaces as this item's
/// error, never as a crash of the surrounding loop.
async fn download_direct(
    api: &PhotosApi,
    item: &MediaItem,
    output_path: &Path,
) -> Result<PathBuf> {
    let response = api.download_file(&item.download_url()).await?;

    let mut file = File::create(output_path).await?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;

    Ok(output_path.to_path_buf())
}
