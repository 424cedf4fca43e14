//! Generation orchestrator: resample → filter → render.
//!
//! `generate` is the pure pipeline over an already-decoded image; decoding
//! is the only I/O-bound step and is isolated in [`generate_from_bytes`].
//! Single-flight coordination across overlapping requests lives in
//! [`Session`].

mod session;

pub use session::{Session, Ticket};

use chrono::NaiveDate;
use image::DynamicImage;

use crate::error::{ChartError, Result};
use crate::filters::Algorithm;
use crate::render::{encode_png, export_filename, render_chart, ChartStyle};
use crate::resample;
use crate::types::Palette;

/// An immutable description of one chart generation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Grid width in cells. Conventionally within `[5, 200]`.
    pub width: usize,

    /// Grid height in cells. Conventionally within `[5, 200]`.
    pub height: usize,

    /// Which quantization algorithm to run.
    pub algorithm: Algorithm,

    /// The colours the chart may use. At least 2 entries.
    pub palette: Palette,

    /// Rendering options.
    pub style: ChartStyle,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            algorithm: Algorithm::Simple,
            palette: Palette::basic(),
            style: ChartStyle::default(),
        }
    }
}

/// A finished chart. Immutable; superseded, never merged, by the next
/// generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// The encoded PNG.
    pub png: Vec<u8>,

    /// Grid width the chart was generated at.
    pub width: usize,

    /// Grid height the chart was generated at.
    pub height: usize,
}

impl Generation {
    /// Export filename for this chart, stamped with `date`.
    pub fn suggested_filename(&self, date: NaiveDate) -> String {
        export_filename(self.width, self.height, date)
    }
}

/// Run the full pipeline over a decoded image.
///
/// Strictly sequential: resample, apply the requested filter in place,
/// render, encode. Errors from any stage propagate unchanged; there are
/// no retries — every stage is a pure computation over in-memory data.
pub fn generate(image: &DynamicImage, request: &GenerationRequest) -> Result<Generation> {
    if request.palette.len() < 2 {
        return Err(ChartError::PaletteTooSmall {
            len: request.palette.len(),
            help: Some("A meaningful chart needs at least two colours to map to".to_string()),
        });
    }

    tracing::debug!(
        width = request.width,
        height = request.height,
        algorithm = request.algorithm.id(),
        palette = request.palette.len(),
        "generating chart"
    );

    let mut grid = resample::resample(image, request.width, request.height)?;
    request.algorithm.apply(&mut grid, &request.palette);
    let chart = render_chart(&grid, &request.style);
    let png = encode_png(&chart)?;

    Ok(Generation {
        png,
        width: request.width,
        height: request.height,
    })
}

/// Decode source bytes, then run the pipeline.
///
/// The decode is the single suspension point of the generation: an async
/// host can await its own decode and call [`generate`] directly, or wrap
/// this call between [`Session::begin`] and [`Session::complete`].
pub fn generate_from_bytes(bytes: &[u8], request: &GenerationRequest) -> Result<Generation> {
    let image = resample::decode(bytes)?;
    generate(&image, request)
}
