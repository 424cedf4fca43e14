//! Edge-preserving stylization.
//!
//! A Sobel pass marks high-gradient samples as edges; flat regions get a
//! strong Gaussian-like smooth while edges keep their original colour;
//! everything visible is then mapped to the palette. The Sobel pass runs
//! on BT.601 luminance. Border cells within 1 (Sobel) or 2 (smoothing)
//! cells of the grid boundary are outside the respective kernel's reach
//! and keep unsmoothed values.

use crate::types::adjust::luminance;
use crate::types::{Colour, Palette, PixelGrid, ALPHA_VISIBLE_MIN};

/// Gradient magnitude above which a sample counts as an edge.
const EDGE_THRESHOLD: f64 = 50.0;

/// Apply the cartoon filter.
pub fn apply(grid: &mut PixelGrid, palette: &Palette) {
    let edges = edge_map(grid);
    let smoothed = smooth_flat_regions(grid, &edges);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.is_visible(x, y) {
                continue;
            }

            let i = grid.idx(x, y);
            let c = Colour::rgb(smoothed[i], smoothed[i + 1], smoothed[i + 2]);
            grid.set_rgb(x, y, palette.closest(c));
        }
    }
}

/// Build the per-sample edge map from Sobel gradients on luminance.
///
/// `1` marks a high-gradient sample to preserve, `0` a flat region
/// eligible for smoothing. The outermost ring stays `0`.
fn edge_map(grid: &PixelGrid) -> Vec<u8> {
    let width = grid.width();
    let height = grid.height();
    let mut edges = vec![0u8; width * height];

    let luma = |x: usize, y: usize| luminance(grid.rgba(x, y));

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            if !grid.is_visible(x, y) {
                continue;
            }

            let gx = -luma(x - 1, y - 1) + luma(x + 1, y - 1)
                - 2.0 * luma(x - 1, y)
                + 2.0 * luma(x + 1, y)
                - luma(x - 1, y + 1)
                + luma(x + 1, y + 1);

            let gy = -luma(x - 1, y - 1) - 2.0 * luma(x, y - 1) - luma(x + 1, y - 1)
                + luma(x - 1, y + 1)
                + 2.0 * luma(x, y + 1)
                + luma(x + 1, y + 1);

            let magnitude = (gx * gx + gy * gy).sqrt();
            if magnitude > EDGE_THRESHOLD {
                edges[y * width + x] = 1;
            }
        }
    }

    edges
}

/// Smooth non-edge samples over a 5×5 neighbourhood with `exp(-d/2)`
/// spatial weights, restricted to visible neighbours.
///
/// Reads from the grid snapshot and writes to a separate buffer: the
/// Sobel pass has already completed, and no smoothed value feeds back
/// into another sample's window.
fn smooth_flat_regions(grid: &PixelGrid, edges: &[u8]) -> Vec<u8> {
    let width = grid.width();
    let height = grid.height();
    let mut smoothed = grid.data().to_vec();

    for y in 2..height.saturating_sub(2) {
        for x in 2..width.saturating_sub(2) {
            if !grid.is_visible(x, y) {
                continue;
            }
            if edges[y * width + x] == 1 {
                continue;
            }

            let mut sum_r = 0.0;
            let mut sum_g = 0.0;
            let mut sum_b = 0.0;
            let mut total_weight = 0.0;

            for dy in -2i32..=2 {
                for dx in -2i32..=2 {
                    let nx = (x as i32 + dx) as usize;
                    let ny = (y as i32 + dy) as usize;
                    let n = grid.idx(nx, ny);

                    if grid.data()[n + 3] >= ALPHA_VISIBLE_MIN {
                        let dist = ((dx * dx + dy * dy) as f64).sqrt();
                        let weight = (-dist / 2.0).exp();

                        sum_r += grid.data()[n] as f64 * weight;
                        sum_g += grid.data()[n + 1] as f64 * weight;
                        sum_b += grid.data()[n + 2] as f64 * weight;
                        total_weight += weight;
                    }
                }
            }

            let i = grid.idx(x, y);
            let c = Colour::from_rgb_f64(
                sum_r / total_weight,
                sum_g / total_weight,
                sum_b / total_weight,
            );
            smoothed[i] = c.r;
            smoothed[i + 1] = c.g;
            smoothed[i + 2] = c.b;
        }
    }

    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::*;

    /// Left half black, right half white, split at `split`.
    fn split_grid(width: usize, height: usize, split: usize) -> PixelGrid {
        let mut grid = PixelGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let i = grid.idx(x, y);
                let v = if x < split { 0 } else { 255 };
                grid.data_mut()[i..i + 4].copy_from_slice(&[v, v, v, 255]);
            }
        }
        grid
    }

    #[test]
    fn test_edge_map_marks_columns_beside_a_hard_edge() {
        let grid = split_grid(12, 7, 6);
        let edges = edge_map(&grid);

        for y in 1..6 {
            // The two columns touching the boundary are edges
            assert_eq!(edges[y * 12 + 5], 1, "({}, 5) should be an edge", y);
            assert_eq!(edges[y * 12 + 6], 1, "({}, 6) should be an edge", y);
            // Columns 3+ cells away are flat
            assert_eq!(edges[y * 12 + 2], 0);
            assert_eq!(edges[y * 12 + 9], 0);
        }
    }

    #[test]
    fn test_edge_map_is_zero_on_flat_grid() {
        let grid = solid_grid(8, 8, Colour::rgb(120, 130, 140));
        assert!(edge_map(&grid).iter().all(|&e| e == 0));
    }

    #[test]
    fn test_edge_samples_keep_original_values_through_smoothing() {
        let grid = split_grid(12, 7, 6);
        let edges = edge_map(&grid);
        let smoothed = smooth_flat_regions(&grid, &edges);

        // Edge columns sit beside contrasting cells; smoothing would have
        // mixed them. They must keep their exact original values.
        for y in 2..5 {
            assert_eq!(smoothed[grid.idx(5, y)], 0);
            assert_eq!(smoothed[grid.idx(6, y)], 255);
        }
    }

    #[test]
    fn test_flat_regions_are_smoothed() {
        // A sub-threshold speck (peak gradient 2·8 = 16 < 50) in a black
        // field is averaged away by the 5×5 window.
        let mut grid = solid_grid(9, 9, Colour::BLACK);
        grid.set_rgb(4, 4, Colour::rgb(8, 8, 8));

        let edges = edge_map(&grid);
        assert!(edges.iter().all(|&e| e == 0), "speck must stay sub-threshold");

        let smoothed = smooth_flat_regions(&grid, &edges);
        assert!(smoothed[grid.idx(4, 4)] < 8);
    }

    #[test]
    fn test_apply_snaps_both_sides_of_an_edge() {
        let palette = bw_palette();
        let mut grid = split_grid(12, 7, 6);
        apply(&mut grid, &palette);

        for y in 0..7 {
            assert_eq!(grid.rgba(0, y), Colour::BLACK);
            assert_eq!(grid.rgba(5, y), Colour::BLACK);
            assert_eq!(grid.rgba(6, y), Colour::WHITE);
            assert_eq!(grid.rgba(11, y), Colour::WHITE);
        }
    }

    #[test]
    fn test_transparent_samples_survive() {
        let palette = bw_palette();
        let mut grid = split_grid(10, 6, 5);
        let i = grid.idx(3, 3);
        grid.data_mut()[i..i + 4].copy_from_slice(&[9, 9, 9, 3]);

        apply(&mut grid, &palette);

        assert_eq!(grid.rgba(3, 3), Colour::new(9, 9, 9, 3));
    }

    #[test]
    fn test_tiny_grids_do_not_panic() {
        let palette = bw_palette();
        for (w, h) in [(1, 1), (2, 2), (3, 3), (4, 1)] {
            let mut grid = solid_grid(w, h, Colour::rgb(240, 240, 240));
            apply(&mut grid, &palette);
            assert_eq!(grid.rgba(0, 0), Colour::WHITE);
        }
    }
}
