//! Download module for favorites downloading.
//!
//! This module provides:
//! - The paginated favorites download loop
//! - Per-item media file downloading
//! - Run statistics tracking

pub mod favorites;
pub mod media;
pub mod state;

pub use favorites::download_favorites;
pub use media::download_media_item;
pub use state::{DownloadStats, ItemOutcome};
