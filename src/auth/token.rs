//! Access token caching.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// An OAuth access token, mirroring the token-endpoint response shape.
///
/// No expiry validation is performed on cached tokens; a stale token is
/// only detected when the API rejects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Load a cached token.
///
/// A missing file is not an error: it signals that no token has been
/// obtained yet and interactive authorization is required. Corrupt JSON
/// is fatal.
pub fn load_token(path: &Path) -> Result<Option<AccessToken>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::Io(e)),
    };

    let token: AccessToken = serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("Corrupt token cache {}: {}", path.display(), e)))?;

    Ok(Some(token))
}

/// Persist a token to the cache file.
pub fn save_token(path: &Path, token: &AccessToken) -> Result<()> {
    let content = serde_json::to_string(token)?;
    fs::write(path, content)?;
    Ok(())
}
