//! Interactive authorization-code flow.

use std::io::{self, BufRead, Write};

use url::Url;

use crate::auth::credentials::ClientCredentials;
use crate::auth::token::{load_token, save_token, AccessToken};
use crate::config::Config;
use crate::error::{Error, Result};

/// Google's OAuth token endpoint.
const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Scope granting read-only access to the photo library.
const SCOPES: &[&str] = &["https://www.googleapis.com/auth/photoslibrary.readonly"];

/// Produce a valid access token, either from cache or interactively.
///
/// A cached token is returned without validation: a stale token is only
/// detected later, when the API rejects it. The interactive path blocks on
/// a terminal prompt before any API work proceeds.
pub async fn authorize(config: &Config, credentials: &ClientCredentials) -> Result<AccessToken> {
    if let Some(token) = load_token(&config.auth.token_file)? {
        tracing::debug!("Using cached token from {}", config.auth.token_file.display());
        return Ok(token);
    }

    let auth_url = build_auth_url(credentials)?;
    println!("Authorize this app by visiting this url:\n\n  {}\n", auth_url);

    let code = prompt_for_code()?;
    let token = exchange_code(credentials, code.trim()).await?;

    save_token(&config.auth.token_file, &token)?;
    tracing::info!("Token stored to {}", config.auth.token_file.display());

    Ok(token)
}

/// Build the authorization URL the user must visit.
pub fn build_auth_url(credentials: &ClientCredentials) -> Result<Url> {
    let mut url = Url::parse(credentials.auth_uri())?;
    url.query_pairs_mut()
        .append_pair("client_id", &credentials.installed.client_id)
        .append_pair("redirect_uri", credentials.redirect_uri()?)
        .append_pair("response_type", "code")
        .append_pair("scope", &SCOPES.join(" "));

    Ok(url)
}

/// Read the pasted authorization code from the terminal.
fn prompt_for_code() -> Result<String> {
    print!("Enter the code from that page here: ");
    io::stdout().flush()?;

    let mut code = String::new();
    io::stdin().lock().read_line(&mut code)?;

    if code.trim().is_empty() {
        return Err(Error::Auth("No authorization code entered".to_string()));
    }

    Ok(code)
}

/// Exchange an authorization code for an access token.
///
/// Network failure or a non-success response aborts the run.
async fn exchange_code(credentials: &ClientCredentials, code: &str) -> Result<AccessToken> {
    let client = reqwest::Client::new();
    let response = client
        .post(TOKEN_URI)
        .form(&[
            ("code", code),
            ("client_id", credentials.installed.client_id.as_str()),
            ("client_secret", credentials.installed.client_secret.as_str()),
            ("redirect_uri", credentials.redirect_uri()?),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| Error::Auth(format!("Token exchange request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Auth(format!(
            "Token endpoint returned HTTP {}: {}",
            status, body
        )));
    }

    let token: AccessToken = response
        .json()
        .await
        .map_err(|e| Error::Auth(format!("Malformed token response: {}", e)))?;

    Ok(token)
}
