//! Image decoding and downsampling to the chart grid.
//!
//! The engine accepts anything the `image` crate can decode (PNG, JPEG,
//! GIF, ...) and draws it into a W×H grid of raw RGBA samples with a
//! bilinear filter. The kernel choice is not part of the engine contract;
//! determinism for a fixed input and size is.

use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::{ChartError, Result};
use crate::types::PixelGrid;

/// Decode an image from encoded bytes.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| ChartError::ImageDecode {
        message: e.to_string(),
        help: Some("Supported source formats include PNG, JPEG, and GIF".to_string()),
    })
}

/// Load and decode an image file.
pub fn open(path: &Path) -> Result<DynamicImage> {
    let bytes = std::fs::read(path).map_err(|e| ChartError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;
    decode(&bytes)
}

/// Downsample an image to a `width`×`height` grid of RGBA samples.
///
/// Uses `FilterType::Triangle` (bilinear), which is deterministic for a
/// fixed image and size. Width or height of zero is rejected; the
/// conventional `[5, 200]` range is the caller's concern.
pub fn resample(image: &DynamicImage, width: usize, height: usize) -> Result<PixelGrid> {
    if width == 0 || height == 0 {
        return Err(ChartError::InvalidDimensions { width, height });
    }

    tracing::debug!(width, height, "resampling source image");

    let resized = image.resize_exact(width as u32, height as u32, FilterType::Triangle);
    let rgba = resized.to_rgba8();

    Ok(PixelGrid::from_rgba(width, height, rgba.into_raw()))
}

/// Decode bytes and downsample in one step.
pub fn resample_bytes(bytes: &[u8], width: usize, height: usize) -> Result<PixelGrid> {
    let image = decode(bytes)?;
    resample(&image, width, height)
}
