//! Configuration validation logic.

use regex::Regex;

use crate::auth::ClientCredentials;
use crate::config::Config;
use crate::error::{Error, Result};

/// Maximum page size accepted by the mediaItems:search endpoint.
const MAX_PAGE_SIZE: i32 = 100;

/// Validate the configuration and the loaded client credentials.
pub fn validate_config(config: &Config, credentials: &ClientCredentials) -> Result<()> {
    validate_page_size(config.options.page_size)?;
    validate_client_id(&credentials.installed.client_id)?;
    validate_client_secret(&credentials.installed.client_secret)?;
    validate_redirect_uris(&credentials.installed.redirect_uris)?;

    Ok(())
}

/// Validate the search page size.
pub fn validate_page_size(page_size: i32) -> Result<()> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(Error::ConfigValidation {
            field: "page_size".to_string(),
            message: format!(
                "Page size must be between 1 and {} (got {})",
                MAX_PAGE_SIZE, page_size
            ),
        });
    }

    Ok(())
}

/// Validate the OAuth client ID.
pub fn validate_client_id(client_id: &str) -> Result<()> {
    if client_id.is_empty() {
        return Err(Error::MissingConfig("client_id".to_string()));
    }

    // Installed-application client IDs carry the googleusercontent suffix
    let id_pattern = Regex::new(r"\.apps\.googleusercontent\.com$").unwrap();
    if !id_pattern.is_match(client_id) {
        return Err(Error::ConfigValidation {
            field: "client_id".to_string(),
            message: format!(
                "'{}' does not look like an installed-application OAuth client ID",
                client_id
            ),
        });
    }

    Ok(())
}

/// Validate the OAuth client secret.
pub fn validate_client_secret(client_secret: &str) -> Result<()> {
    if client_secret.is_empty() {
        return Err(Error::MissingConfig("client_secret".to_string()));
    }

    // Check for placeholder values
    let secret_lower = client_secret.to_lowercase();
    if secret_lower.contains("replaceme") || secret_lower.contains("your_secret") {
        return Err(Error::ConfigValidation {
            field: "client_secret".to_string(),
            message: "Client secret appears to be a placeholder. Please export real credentials."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the configured redirect URIs.
pub fn validate_redirect_uris(redirect_uris: &[String]) -> Result<()> {
    if redirect_uris.is_empty() {
        return Err(Error::MissingConfig(
            "redirect_uris (at least one redirect URI required)".to_string(),
        ));
    }

    Ok(())
}
