//! PNG output for rendered charts.

use std::io::Cursor;
use std::path::Path;

use chrono::NaiveDate;
use image::{ImageFormat, RgbaImage};

use crate::error::{ChartError, Result};

/// Encode a rendered chart as a PNG byte stream.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| ChartError::Render {
            message: format!("Failed to encode PNG: {}", e),
        })?;
    Ok(bytes)
}

/// Write a rendered chart to a PNG file.
pub fn write_chart(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|e| ChartError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// The export filename convention: `crochet-{W}x{H}-{YYYY-MM-DD}.png`.
pub fn export_filename(width: usize, height: usize, date: NaiveDate) -> String {
    format!("crochet-{}x{}-{}.png", width, height, date.format("%Y-%m-%d"))
}

/// [`export_filename`] stamped with the local date.
pub fn export_filename_today(width: usize, height: usize) -> String {
    export_filename(width, height, chrono::Local::now().date_naive())
}
