//! GPhotos Favorites - a Google Photos favorites downloader
//!
//! This library provides functionality for downloading a user's favorited
//! photos from the Google Photos Library API.
//!
//! # Features
//!
//! - OAuth authorization-code flow with a cached token
//! - Paginated listing of favorited media items
//! - Idempotent downloads (existing files are never overwritten)
//! - HEIC to JPEG conversion of downloaded originals
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use gphotos_favorites::{
//!     api::PhotosApi,
//!     auth::{authorize, ClientCredentials},
//!     download::{download_favorites, DownloadStats},
//!     Config,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let credentials = ClientCredentials::load(&config.auth.credentials_file)?;
//!     let token = authorize(&config, &credentials).await?;
//!     let api = PhotosApi::new(token.access_token.clone());
//!
//!     let mut stats = DownloadStats::default();
//!     download_favorites(&api, &config, &mut stats).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod convert;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::PhotosApi;
pub use auth::{authorize, AccessToken, ClientCredentials};
pub use config::Config;
pub use download::{download_favorites, DownloadStats};
pub use error::{Error, Result};
pub use media::{MediaItem, MediaType};
