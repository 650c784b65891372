//! Filesystem module.
//!
//! Provides:
//! - Local filename derivation and sanitization
//! - Target path and directory management

pub mod naming;
pub mod paths;

pub use naming::{sanitize_filename, target_filename};
pub use paths::{ensure_dir, target_path};
