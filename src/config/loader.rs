//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Credential and token cache locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path to the OAuth client credentials file.
    #[serde(default = "default_credentials_file")]
    pub credentials_file: PathBuf,

    /// Path to the cached access token file.
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for downloads.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Number of media items requested per search page.
    #[serde(default = "default_page_size")]
    pub page_size: i32,

    /// Whether to convert downloaded HEIC files to JPEG.
    #[serde(default = "default_true")]
    pub convert_heic: bool,

    /// Whether to log completed downloads.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to log skipped (already existing) files.
    #[serde(default = "default_true")]
    pub show_skipped_downloads: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credentials_file: default_credentials_file(),
            token_file: default_token_file(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            page_size: default_page_size(),
            convert_heic: true,
            show_downloads: true,
            show_skipped_downloads: true,
        }
    }
}

fn default_credentials_file() -> PathBuf {
    PathBuf::from("credentials.json")
}

fn default_token_file() -> PathBuf {
    PathBuf::from("token.json")
}

fn default_page_size() -> i32 {
    100
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("downloads"))
    }
}
