//! OAuth client credential loading.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Google's OAuth authorization endpoint, used when the credentials file
/// does not carry its own `auth_uri`.
pub const DEFAULT_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";

/// OAuth client credentials, as exported for an installed application.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentials {
    pub installed: InstalledCredentials,
}

/// The nested `installed` object of a credentials file.
#[derive(Debug, Clone, Deserialize)]
pub struct InstalledCredentials {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
    #[serde(default)]
    pub auth_uri: Option<String>,
}

impl ClientCredentials {
    /// Load client credentials from a JSON file.
    ///
    /// Absence or malformed content is fatal: without a client identity no
    /// authorization can be performed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Client credentials file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let credentials: ClientCredentials = serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Malformed credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(credentials)
    }

    /// The authorization endpoint to send the user to.
    pub fn auth_uri(&self) -> &str {
        self.installed
            .auth_uri
            .as_deref()
            .unwrap_or(DEFAULT_AUTH_URI)
    }

    /// The redirect URI used for the authorization-code exchange.
    pub fn redirect_uri(&self) -> Result<&str> {
        self.installed
            .redirect_uris
            .first()
            .map(String::as_str)
            .ok_or_else(|| {
                Error::MissingConfig(
                    "redirect_uris (at least one redirect URI required)".to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "installed": {
            "client_id": "123456-abcdef.apps.googleusercontent.com",
            "client_secret": "GOCSPX-secret",
            "redirect_uris": ["urn:ietf:wg:oauth:2.0:oob", "http://localhost"]
        }
    }"#;

    #[test]
    fn test_load_valid() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let credentials = ClientCredentials::load(file.path()).unwrap();
        assert_eq!(
            credentials.installed.client_id,
            "123456-abcdef.apps.googleusercontent.com"
        );
        assert_eq!(credentials.redirect_uri().unwrap(), "urn:ietf:wg:oauth:2.0:oob");
        assert_eq!(credentials.auth_uri(), DEFAULT_AUTH_URI);
    }

    #[test]
    fn test_load_missing() {
        let result = ClientCredentials::load(Path::new("/nonexistent/credentials.json"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let result = ClientCredentials::load(file.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_no_redirect_uris() {
        let credentials = ClientCredentials {
            installed: InstalledCredentials {
                client_id: "id.apps.googleusercontent.com".to_string(),
                client_secret: "secret".to_string(),
                redirect_uris: Vec::new(),
                auth_uri: None,
            },
        };
        assert!(credentials.redirect_uri().is_err());
    }
}
