//! Chart rendering: grid cells to magnified blocks with grid lines.

use image::{Rgba, RgbaImage};

use crate::types::{adjust, Colour, PixelGrid};

/// Default magnification factor per grid cell.
pub const DEFAULT_BLOCK_SIZE: u32 = 10;

/// Mix factor of black composited over cell colours at grid lines.
pub const GRID_LINE_STRENGTH: f32 = 0.15;

/// Visual options for chart rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    /// Output pixels per grid cell.
    pub block_size: u32,

    /// Draw grid lines between cells.
    pub show_grid: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            show_grid: true,
        }
    }
}

/// Render a quantized grid to a block image.
///
/// Every cell fills a `block_size` square with its colour; cells below the
/// visibility threshold render as opaque white, a defined choice so charts
/// print on white stock without surprises. With `show_grid`, a one-pixel
/// rule is composited at every cell boundary (and along the outer
/// right/bottom edge) by mixing [`GRID_LINE_STRENGTH`] black over the
/// underlying cell colour. Deterministic for identical inputs.
pub fn render_chart(grid: &PixelGrid, style: &ChartStyle) -> RgbaImage {
    let block = style.block_size.max(1);
    let width_px = grid.width() as u32 * block;
    let height_px = grid.height() as u32 * block;

    tracing::debug!(
        cells_w = grid.width(),
        cells_h = grid.height(),
        block,
        "rendering chart"
    );

    let mut image = RgbaImage::new(width_px, height_px);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let colour = if grid.is_visible(x, y) {
                let c = grid.rgba(x, y);
                Colour::rgb(c.r, c.g, c.b)
            } else {
                Colour::WHITE
            };
            let pixel = Rgba(colour.to_rgba());

            for sy in 0..block {
                for sx in 0..block {
                    let px = x as u32 * block + sx;
                    let py = y as u32 * block + sy;
                    image.put_pixel(px, py, pixel);
                }
            }
        }
    }

    if style.show_grid {
        stroke_grid_lines(&mut image, grid.width() as u32, grid.height() as u32, block);
    }

    image
}

/// Composite the grid rules over the block image.
fn stroke_grid_lines(image: &mut RgbaImage, cells_w: u32, cells_h: u32, block: u32) {
    let width_px = cells_w * block;
    let height_px = cells_h * block;
    if width_px == 0 || height_px == 0 {
        return;
    }

    // Vertical rules at every cell boundary, outer right edge clamped in.
    // Each rule pixel is composited exactly once, even where the clamped
    // outer rule lands on the last boundary.
    let mut last_px = None;
    for cell_x in 0..=cells_w {
        let px = (cell_x * block).min(width_px - 1);
        if last_px == Some(px) {
            continue;
        }
        last_px = Some(px);
        for py in 0..height_px {
            darken_pixel(image, px, py);
        }
    }

    // Horizontal rules, skipping the columns already darkened above
    let mut last_py = None;
    for cell_y in 0..=cells_h {
        let py = (cell_y * block).min(height_px - 1);
        if last_py == Some(py) {
            continue;
        }
        last_py = Some(py);
        for px in 0..width_px {
            if px % block != 0 && px != width_px - 1 {
                darken_pixel(image, px, py);
            }
        }
    }
}

/// Composite one grid-rule pixel over the block image.
fn darken_pixel(image: &mut RgbaImage, px: u32, py: u32) {
    let Rgba([r, g, b, a]) = *image.get_pixel(px, py);
    let mixed = adjust::mix(Colour::rgb(r, g, b), Colour::BLACK, GRID_LINE_STRENGTH);
    image.put_pixel(px, py, Rgba([mixed.r, mixed.g, mixed.b, a]));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(colours: &[(u8, u8, u8, u8)], width: usize, height: usize) -> PixelGrid {
        let mut data = Vec::with_capacity(width * height * 4);
        for &(r, g, b, a) in colours {
            data.extend_from_slice(&[r, g, b, a]);
        }
        PixelGrid::from_rgba(width, height, data)
    }

    #[test]
    fn test_output_dimensions() {
        let grid = grid_of(&[(0, 0, 0, 255); 6], 3, 2);
        let image = render_chart(&grid, &ChartStyle::default());
        assert_eq!(image.width(), 30);
        assert_eq!(image.height(), 20);

        let style = ChartStyle {
            block_size: 4,
            show_grid: false,
        };
        let image = render_chart(&grid, &style);
        assert_eq!(image.width(), 12);
        assert_eq!(image.height(), 8);
    }

    #[test]
    fn test_cell_colour_fills_block() {
        let grid = grid_of(&[(200, 50, 25, 255)], 1, 1);
        let style = ChartStyle {
            block_size: 4,
            show_grid: false,
        };
        let image = render_chart(&grid, &style);

        for py in 0..4 {
            for px in 0..4 {
                assert_eq!(image.get_pixel(px, py).0, [200, 50, 25, 255]);
            }
        }
    }

    #[test]
    fn test_transparent_cells_render_white() {
        let grid = grid_of(&[(40, 40, 40, 5)], 1, 1);
        let style = ChartStyle {
            block_size: 2,
            show_grid: false,
        };
        let image = render_chart(&grid, &style);

        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_grid_lines_darken_cell_boundaries() {
        let grid = grid_of(&[(255, 255, 255, 255); 4], 2, 2);
        let style = ChartStyle {
            block_size: 10,
            show_grid: true,
        };
        let image = render_chart(&grid, &style);

        // 15% black over white: round(255 · 0.85) = 217
        assert_eq!(image.get_pixel(0, 5).0, [217, 217, 217, 255]);
        assert_eq!(image.get_pixel(10, 3).0, [217, 217, 217, 255]);
        assert_eq!(image.get_pixel(3, 10).0, [217, 217, 217, 255]);
        // Outer right/bottom rules are clamped inside the canvas
        assert_eq!(image.get_pixel(19, 5).0, [217, 217, 217, 255]);
        assert_eq!(image.get_pixel(5, 19).0, [217, 217, 217, 255]);
        // Cell interiors stay untouched
        assert_eq!(image.get_pixel(5, 5).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(15, 14).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_grid_lines_composite_once_at_crossings() {
        let grid = grid_of(&[(255, 255, 255, 255); 4], 2, 2);
        let image = render_chart(
            &grid,
            &ChartStyle {
                block_size: 10,
                show_grid: true,
            },
        );

        // A crossing must not be darkened twice (217, not 184)
        assert_eq!(image.get_pixel(10, 10).0, [217, 217, 217, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [217, 217, 217, 255]);
    }

    #[test]
    fn test_zero_block_size_is_clamped_to_one() {
        let grid = grid_of(&[(1, 2, 3, 255); 4], 2, 2);
        let image = render_chart(
            &grid,
            &ChartStyle {
                block_size: 0,
                show_grid: false,
            },
        );
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
    }

    #[test]
    fn test_render_is_deterministic() {
        let grid = grid_of(
            &[
                (10, 20, 30, 255),
                (200, 100, 0, 255),
                (0, 0, 0, 4),
                (255, 255, 255, 255),
            ],
            2,
            2,
        );
        let a = render_chart(&grid, &ChartStyle::default());
        let b = render_chart(&grid, &ChartStyle::default());
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
