//! HEIC to JPEG conversion.
//!
//! Downloaded HEIC originals are decoded with libheif, re-encoded as
//! maximum-quality JPEG, and the original is removed.

use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

use crate::error::{Error, Result};

/// JPEG quality used for converted files (maximum).
const JPEG_QUALITY: u8 = 100;

/// Check whether a path refers to a HEIC file (case-insensitive).
pub fn is_heic(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("heic"))
        .unwrap_or(false)
}

/// Derive the sibling `.jpg` path for a HEIC file.
pub fn jpg_sibling(path: &Path) -> PathBuf {
    path.with_extension("jpg")
}

/// Convert a downloaded HEIC file to a JPEG sibling and remove the original.
///
/// The whole file is read into memory; on success no HEIC file remains.
pub async fn heic_to_jpg(path: &Path) -> Result<PathBuf> {
    let data = tokio::fs::read(path).await?;
    let jpeg = heic_bytes_to_jpeg(&data)?;

    let jpg_path = jpg_sibling(path);
    tokio::fs::write(&jpg_path, jpeg).await?;
    tokio::fs::remove_file(path).await?;

    tracing::info!("Converted {} to {}", path.display(), jpg_path.display());

    Ok(jpg_path)
}

/// Decode HEIC bytes and re-encode them as a maximum-quality JPEG.
pub fn heic_bytes_to_jpeg(data: &[u8]) -> Result<Vec<u8>> {
    let lib_heif = LibHeif::new();
    let context = HeifContext::read_from_bytes(data)
        .map_err(|e| Error::Conversion(format!("Failed to read HEIC container: {}", e)))?;
    let handle = context
        .primary_image_handle()
        .map_err(|e| Error::Conversion(format!("No primary image in HEIC container: {}", e)))?;

    let decoded = lib_heif
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
        .map_err(|e| Error::Conversion(format!("Failed to decode HEIC image: {}", e)))?;

    let width = decoded.width();
    let height = decoded.height();
    let planes = decoded.planes();
    let plane = planes.interleaved.ok_or_else(|| {
        Error::Conversion("Decoded HEIC image has no interleaved plane".to_string())
    })?;

    // Decoded rows may be padded; copy exactly width * 3 bytes per row.
    let row_len = width as usize * 3;
    let mut pixels = Vec::with_capacity(row_len * height as usize);
    for row in 0..height as usize {
        let start = row * plane.stride;
        pixels.extend_from_slice(&plane.data[start..start + row_len]);
    }

    let mut jpeg = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    encoder
        .encode(&pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| Error::Conversion(format!("Failed to encode JPEG: {}", e)))?;

    Ok(jpeg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_heic() {
        assert!(is_heic(Path::new("2021-05-03_IMG_1.HEIC")));
        assert!(is_heic(Path::new("photo.heic")));
        assert!(is_heic(Path::new("photo.HeIc")));
        assert!(!is_heic(Path::new("photo.jpg")));
        assert!(!is_heic(Path::new("photo")));
        assert!(!is_heic(Path::new("heic")));
    }

    #[test]
    fn test_jpg_sibling() {
        assert_eq!(
            jpg_sibling(Path::new("2021-05-03_IMG_1.HEIC")),
            PathBuf::from("2021-05-03_IMG_1.jpg")
        );
        assert_eq!(
            jpg_sibling(Path::new("downloads/photo.heic")),
            PathBuf::from("downloads/photo.jpg")
        );
    }

    #[test]
    fn test_garbage_input_fails_cleanly() {
        let result = heic_bytes_to_jpeg(b"definitely not a heic container");
        assert!(matches!(result, Err(Error::Conversion(_))));
    }
}
