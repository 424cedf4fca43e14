//! Colour type, hex parsing, and the redmean distance metric.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string in `#RRGGBB` form (the `#` is optional).
    ///
    /// This is the strict parser used when loading palette files; malformed
    /// input is a [`ChartError::Parse`]. The quantization engine itself uses
    /// [`Colour::from_hex_lossy`], which never fails.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ChartError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RRGGBB format".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::rgb(r, g, b))
    }

    /// Parse a hex colour string, yielding black on malformed input.
    ///
    /// The engine contract keeps the pipeline total: a bad swatch value
    /// becomes `(0, 0, 0)` rather than an error.
    pub fn from_hex_lossy(s: &str) -> Self {
        Self::from_hex(s).unwrap_or(Self::BLACK)
    }

    /// Build an opaque colour from float channels, rounding and clamping
    /// each to `[0, 255]`. This is the write path after any channel
    /// arithmetic (blur sums, contrast curves, diffusion error).
    pub fn from_rgb_f64(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(
            r.round().clamp(0.0, 255.0) as u8,
            g.round().clamp(0.0, 255.0) as u8,
            b.round().clamp(0.0, 255.0) as u8,
        )
    }

    /// Format as a zero-padded `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to an RGBA byte quad.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Squared redmean distance between two colours.
///
/// The low-cost perceptual approximation from
/// <https://www.compuphase.com/cmetric.htm>, weighting the red and blue
/// channels by the mean red intensity:
///
/// ```text
/// rMean = (r1 + r2) / 2
/// d² = (2 + rMean/256)·dr² + 4·dg² + (2 + (255 - rMean)/256)·db²
/// ```
///
/// Computed in `f64` with these exact constants; callers compare distances,
/// so the square root is omitted. Alpha is ignored.
pub fn redmean_distance_sq(a: Colour, b: Colour) -> f64 {
    let rmean = (a.r as f64 + b.r as f64) / 2.0;
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;

    (2.0 + rmean / 256.0) * dr * dr
        + 4.0 * dg * dg
        + (2.0 + (255.0 - rmean) / 256.0) * db * db
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| ChartError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
