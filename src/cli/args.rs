//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Google Photos favorites downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "gphotos-favorites",
    version,
    about = "Download favorited photos from Google Photos",
    long_about = "A CLI tool to download every photo favorited in a Google Photos library.\n\n\
                  Authorizes against the Photos Library API, skips files already on disk,\n\
                  and converts downloaded HEIC originals to JPEG."
)]
pub struct Args {
    /// Path to the OAuth client credentials file.
    #[arg(long, env = "GPHOTOS_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Path to the cached access token file.
    #[arg(long = "token-file", env = "GPHOTOS_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Number of media items requested per search page.
    #[arg(long)]
    pub page_size: Option<i32>,

    /// Keep downloaded HEIC files instead of converting them to JPEG.
    #[arg(long)]
    pub no_convert: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Show information about skipped downloads.
    #[arg(long)]
    pub show_skipped: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(credentials) = self.credentials {
            config.auth.credentials_file = credentials;
        }

        if let Some(token_file) = self.token_file {
            config.auth.token_file = token_file;
        }

        if let Some(dir) = self.download_directory {
            config.options.download_directory = Some(dir);
        }

        if let Some(page_size) = self.page_size {
            config.options.page_size = page_size;
        }

        // Boolean flags (only override if set to non-default)
        if self.no_convert {
            config.options.convert_heic = false;
        }

        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_skipped_downloads = false;
        }

        if self.show_skipped {
            config.options.show_skipped_downloads = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_defaults() -> Args {
        Args {
            credentials: None,
            token_file: None,
            download_directory: None,
            page_size: None,
            no_convert: false,
            config: PathBuf::from("config.toml"),
            quiet: false,
            show_skipped: false,
            debug: false,
        }
    }

    #[test]
    fn test_merge_overrides() {
        let mut config = Config::default();
        let mut args = args_with_defaults();
        args.page_size = Some(50);
        args.no_convert = true;
        args.download_directory = Some(PathBuf::from("/photos"));

        args.merge_into_config(&mut config);

        assert_eq!(config.options.page_size, 50);
        assert!(!config.options.convert_heic);
        assert_eq!(config.download_directory(), PathBuf::from("/photos"));
    }

    #[test]
    fn test_merge_keeps_defaults() {
        let mut config = Config::default();
        args_with_defaults().merge_into_config(&mut config);

        assert_eq!(config.options.page_size, 100);
        assert!(config.options.convert_heic);
        assert!(config.options.show_downloads);
    }

    #[test]
    fn test_quiet_silences_both() {
        let mut config = Config::default();
        let mut args = args_with_defaults();
        args.quiet = true;

        args.merge_into_config(&mut config);

        assert!(!config.options.show_downloads);
        assert!(!config.options.show_skipped_downloads);
    }
}
