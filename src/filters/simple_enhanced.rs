//! Nearest-colour mapping with a denoising blur.

use crate::types::{Colour, Palette, PixelGrid, ALPHA_VISIBLE_MIN};

/// Apply a light 3×3 weighted box blur, then map to the palette.
///
/// The kernel weights the centre 4 and each neighbour 1, normalized by the
/// weight actually summed: neighbours below the visibility threshold drop
/// out of the average instead of dragging it toward transparent black.
/// The border ring is outside the kernel's reach and keeps its original
/// values into the mapping pass.
pub fn apply(grid: &mut PixelGrid, palette: &Palette) {
    let width = grid.width();
    let height = grid.height();

    // Blur into a snapshot so every kernel reads pre-blur samples.
    let mut blurred = grid.data().to_vec();

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            if !grid.is_visible(x, y) {
                continue;
            }

            let mut sum_r = 0.0;
            let mut sum_g = 0.0;
            let mut sum_b = 0.0;
            let mut count = 0.0;

            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let nx = (x as i32 + dx) as usize;
                    let ny = (y as i32 + dy) as usize;
                    let n = grid.idx(nx, ny);

                    if grid.data()[n + 3] >= ALPHA_VISIBLE_MIN {
                        let weight = if dx == 0 && dy == 0 { 4.0 } else { 1.0 };
                        sum_r += grid.data()[n] as f64 * weight;
                        sum_g += grid.data()[n + 1] as f64 * weight;
                        sum_b += grid.data()[n + 2] as f64 * weight;
                        count += weight;
                    }
                }
            }

            let i = grid.idx(x, y);
            let c = Colour::from_rgb_f64(sum_r / count, sum_g / count, sum_b / count);
            blurred[i] = c.r;
            blurred[i + 1] = c.g;
            blurred[i + 2] = c.b;
        }
    }

    for y in 0..height {
        for x in 0..width {
            if !grid.is_visible(x, y) {
                continue;
            }

            let i = grid.idx(x, y);
            let smoothed = Colour::rgb(blurred[i], blurred[i + 1], blurred[i + 2]);
            grid.set_rgb(x, y, palette.closest(smoothed));
        }
    }
}
