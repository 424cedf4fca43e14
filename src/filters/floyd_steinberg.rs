//! Floyd–Steinberg error-diffusion dithering.
//!
//! Processed in raster order (row-major, left-to-right, top-to-bottom)
//! through the same mutable buffer being read, so later samples see the
//! corrections of earlier ones. Inherently sequential.

use crate::types::{Colour, Palette, PixelGrid};

/// The diffusion kernel: offsets and weights relative to the current
/// sample.
///
/// ```text
///        *   7/16
///  3/16 5/16 1/16
/// ```
///
/// The weights sum to 16/16, so the full quantization error is conserved
/// across the neighbours that exist.
const KERNEL: [(i32, i32, f64); 4] = [
    (1, 0, 7.0 / 16.0),
    (-1, 1, 3.0 / 16.0),
    (0, 1, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Apply Floyd–Steinberg dithering against the palette.
///
/// Each neighbour channel is rounded and clamped to `[0, 255]` immediately
/// after each addition. Out-of-bounds neighbours are skipped without
/// weight redistribution, and so are neighbours below the visibility
/// threshold (error never leaks into samples the filters must not touch).
pub fn apply(grid: &mut PixelGrid, palette: &Palette) {
    let width = grid.width() as i32;
    let height = grid.height() as i32;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.is_visible(x, y) {
                continue;
            }

            let old = grid.rgba(x, y);
            let new = palette.closest(old);
            grid.set_rgb(x, y, new);

            let err_r = old.r as f64 - new.r as f64;
            let err_g = old.g as f64 - new.g as f64;
            let err_b = old.b as f64 - new.b as f64;

            for (dx, dy, weight) in KERNEL {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx < 0 || nx >= width || ny < 0 || ny >= height {
                    continue;
                }

                let (nx, ny) = (nx as usize, ny as usize);
                if !grid.is_visible(nx, ny) {
                    continue;
                }

                let c = grid.rgba(nx, ny);
                let adjusted = Colour::from_rgb_f64(
                    c.r as f64 + err_r * weight,
                    c.g as f64 + err_g * weight,
                    c.b as f64 + err_b * weight,
                );
                grid.set_rgb(nx, ny, adjusted);
            }
        }
    }
}
