//! GPhotos Favorites - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gphotos_favorites::{
    api::PhotosApi,
    auth::{authorize, ClientCredentials},
    cli::Args,
    config::{validate_config, Config},
    download::{download_favorites, DownloadStats},
    error::Result,
    output::{print_banner, print_config_summary, print_error, print_info, print_stats, print_warning},
};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = run().await {
        // Fatal errors are surfaced through the log output; the exit
        // status stays 0.
        print_error(&format!("{}", e));
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Load OAuth client credentials
    let credentials = ClientCredentials::load(&config.auth.credentials_file)?;

    // Validate configuration
    validate_config(&config, &credentials)?;

    // Print configuration summary
    print_config_summary(
        &config.download_directory().display().to_string(),
        config.options.page_size,
        config.options.convert_heic,
    );

    // Obtain an access token, from cache or interactively
    let token = authorize(&config, &credentials).await?;

    // Initialize API client
    let api = PhotosApi::new(token.access_token.clone());

    // Download all favorited images
    let mut stats = DownloadStats::default();
    download_favorites(&api, &config, &mut stats).await?;

    // Print run statistics
    print_stats(&stats);

    Ok(())
}
