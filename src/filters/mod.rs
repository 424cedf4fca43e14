//! The filter bank: six quantization algorithms over a pixel grid.
//!
//! Every filter consumes the resampled grid, the palette, and nothing
//! else, and rewrites visible samples in place to palette colours. Samples
//! below [`ALPHA_VISIBLE_MIN`](crate::types::ALPHA_VISIBLE_MIN) are never
//! touched.

mod cartoon;
mod floyd_steinberg;
mod high_contrast;
mod kmeans_advanced;
mod simple;
mod simple_enhanced;

use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, Result};
use crate::types::{Palette, PixelGrid};

/// The quantization algorithm to run on the resampled grid.
///
/// A closed set: dispatch is a match, not a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Direct nearest-colour mapping. The fastest, and the baseline.
    Simple,
    /// 3×3 weighted box blur before mapping; denoised, smoother output.
    SimpleEnhanced,
    /// One-shot dominant-colour bucketing with memoized palette resolution.
    KmeansAdvanced,
    /// Edge-preserving smoothing: Sobel edge map plus 5×5 weighted blur.
    Cartoon,
    /// Sigmoidal contrast and 4-level posterize before mapping.
    HighContrast,
    /// Classic error-diffusion dithering in raster order.
    FloydSteinberg,
}

impl Algorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Simple,
        Algorithm::SimpleEnhanced,
        Algorithm::KmeansAdvanced,
        Algorithm::Cartoon,
        Algorithm::HighContrast,
        Algorithm::FloydSteinberg,
    ];

    /// The stable string identifier.
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Simple => "simple",
            Algorithm::SimpleEnhanced => "simple-enhanced",
            Algorithm::KmeansAdvanced => "kmeans-advanced",
            Algorithm::Cartoon => "cartoon",
            Algorithm::HighContrast => "high-contrast",
            Algorithm::FloydSteinberg => "floyd-steinberg",
        }
    }

    /// Resolve an algorithm from its string identifier.
    ///
    /// Unknown identifiers are an error, never a silent fallback; a typo in
    /// an algorithm id is a caller bug and must surface.
    pub fn from_id(id: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| ChartError::UnknownAlgorithm {
                name: id.to_string(),
                help: Some(format!(
                    "Valid algorithms: {}",
                    Self::ALL.map(|a| a.id()).join(", ")
                )),
            })
    }

    /// Run this algorithm over the grid, mutating it in place.
    pub fn apply(self, grid: &mut PixelGrid, palette: &Palette) {
        tracing::debug!(algorithm = self.id(), "applying filter");
        match self {
            Algorithm::Simple => simple::apply(grid, palette),
            Algorithm::SimpleEnhanced => simple_enhanced::apply(grid, palette),
            Algorithm::KmeansAdvanced => kmeans_advanced::apply(grid, palette),
            Algorithm::Cartoon => cartoon::apply(grid, palette),
            Algorithm::HighContrast => high_contrast::apply(grid, palette),
            Algorithm::FloydSteinberg => floyd_steinberg::apply(grid, palette),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s)
    }
}
