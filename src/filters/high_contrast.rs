//! Contrast boost and posterize before mapping.

use crate::types::{Colour, Palette, PixelGrid};

/// Sigmoid steepness for the contrast curve.
const CONTRAST: f64 = 2.0;

/// Posterization levels per channel.
const LEVELS: u8 = 4;

/// Apply sigmoidal contrast, posterize to 4 levels per channel, then map
/// to the palette. Three sequential in-place passes over every visible
/// sample.
pub fn apply(grid: &mut PixelGrid, palette: &Palette) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.is_visible(x, y) {
                continue;
            }

            let c = grid.rgba(x, y);
            grid.set_rgb(
                x,
                y,
                Colour::from_rgb_f64(sigmoid(c.r), sigmoid(c.g), sigmoid(c.b)),
            );
        }
    }

    let step = 256 / LEVELS as u16; // 64
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.is_visible(x, y) {
                continue;
            }

            let c = grid.rgba(x, y);
            grid.set_rgb(
                x,
                y,
                Colour::rgb(
                    posterize(c.r, step),
                    posterize(c.g, step),
                    posterize(c.b, step),
                ),
            );
        }
    }

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.is_visible(x, y) {
                continue;
            }

            let snapped = palette.closest(grid.rgba(x, y));
            grid.set_rgb(x, y, snapped);
        }
    }
}

/// Sigmoidal contrast curve: `255 / (1 + e^(-k·(v/255 - 0.5)))`.
fn sigmoid(value: u8) -> f64 {
    let v = value as f64 / 255.0;
    255.0 / (1.0 + (-CONTRAST * (v - 0.5)).exp())
}

/// Snap a channel down to its posterization level.
fn posterize(value: u8, step: u16) -> u8 {
    ((value as u16 / step) * step) as u8
}
