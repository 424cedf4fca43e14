//! Core domain types for stitchpx.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values and the redmean distance metric
//! - `Palette` - Ordered, named colour collections
//! - `PixelGrid` - The flat W×H RGBA buffer the filters operate on
//! - `adjust` - HSL-space colour adjustment helpers

pub mod adjust;
mod colour;
mod grid;
mod palette;

pub use colour::{redmean_distance_sq, Colour};
pub use grid::{PixelGrid, ALPHA_VISIBLE_MIN};
pub use palette::{ColourEntry, Palette};
