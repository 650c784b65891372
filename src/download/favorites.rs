//! Favorites listing and download dispatch.

use tokio::task::JoinSet;

use crate::api::PhotosApi;
use crate::config::Config;
use crate::convert::{heic_to_jpg, is_heic};
use crate::download::media::download_media_item;
use crate::download::state::{DownloadStats, ItemOutcome};
use crate::error::Result;
use crate::fs::{ensure_dir, target_path};
use crate::media::{parse_media_item, MediaItem};
use crate::output::print_info;

/// Download every favorited image not already present locally.
///
/// Pages are fetched strictly in sequence. The items of a page are
/// dispatched as independent tasks and the loop moves on without waiting
/// for them, so many downloads may be in flight at once. A listing failure
/// breaks the loop; an item failure only affects its own task.
pub async fn download_favorites(
    api: &PhotosApi,
    config: &Config,
    stats: &mut DownloadStats,
) -> Result<()> {
    let download_dir = config.download_directory();
    ensure_dir(&download_dir)?;

    let mut tasks: JoinSet<ItemOutcome> = JoinSet::new();
    let mut page_token: Option<String> = None;
    let mut first_page = true;

    loop {
        let response = match api
            .search_favorites(config.options.page_size, page_token.as_deref())
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error fetching favorite photos: {}", e);
                break;
            }
        };

        if response.media_items.is_empty() {
            if first_page {
                print_info("No favorite photos found.");
            }
            break;
        }
        first_page = false;

        for raw in &response.media_items {
            let Some(item) = parse_media_item(raw) else {
                tracing::debug!("Skipping incomplete media item {}", raw.id);
                continue;
            };

            if !item.is_image() {
                stats.record_non_image();
                continue;
            }

            dispatch_item(&mut tasks, api, config, item);
        }

        page_token = response.next_page_token;
        if page_token.is_none() {
            break;
        }
    }

    // Let every in-flight download settle before reporting.
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(outcome) => stats.record(outcome),
            Err(e) => {
                tracing::warn!("Download task aborted: {}", e);
                stats.record(ItemOutcome::Failed);
            }
        }
    }

    Ok(())
}

/// Spawn the download (and conversion) of one item, fire-and-continue.
fn dispatch_item(
    tasks: &mut JoinSet<ItemOutcome>,
    api: &PhotosApi,
    config: &Config,
    item: MediaItem,
) {
    let api = api.clone();
    let config = config.clone();

    tasks.spawn(async move {
        match process_item(&api, &config, &item).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Error processing {}: {}", item.filename, e);
                ItemOutcome::Failed
            }
        }
    });
}

/// Download one item, converting it if it is a HEIC original.
///
/// The item counts as fully processed only once any conversion has
/// finished and the original is gone.
async fn process_item(api: &PhotosApi, config: &Config, item: &MediaItem) -> Result<ItemOutcome> {
    let path = target_path(config, item)?;

    let Some(downloaded) = download_media_item(api, &config.options, item, &path).await? else {
        return Ok(ItemOutcome::SkippedExisting);
    };

    if config.options.convert_heic && is_heic(&downloaded) {
        heic_to_jpg(&downloaded).await?;
        return Ok(ItemOutcome::Converted);
    }

    Ok(ItemOutcome::Downloaded)
}
