//! Google Photos Library API module.
//!
//! This module provides:
//! - HTTP client for the Photos Library REST API
//! - Request and response wire types

pub mod client;
pub mod types;

pub use client::{PhotosApi, DOWNLOAD_SUFFIX};
pub use types::*;
