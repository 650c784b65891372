//! Filename derivation and sanitization.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// Derive the local filename for a media item.
///
/// The name is the ISO calendar date of the creation timestamp, an
/// underscore, then the sanitized original filename:
/// `2021-05-03_IMG_1.HEIC`.
pub fn target_filename(creation_time: &DateTime<Utc>, filename: &str) -> Result<String> {
    let date = creation_time.format("%Y-%m-%d");
    Ok(format!("{}_{}", date, sanitize_filename(filename)?))
}

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the filename contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    // Also reject if it contains path separators (should be sanitized, not allowed)
    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    // Sanitize remaining problematic characters
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Reject empty or whitespace-only names
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}
