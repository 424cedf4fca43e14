//! Rendering module for stitchpx.
//!
//! Expands a quantized pixel grid into a magnified block image with grid
//! lines and serializes it to PNG.

mod chart;
mod png;

pub use chart::{render_chart, ChartStyle, DEFAULT_BLOCK_SIZE, GRID_LINE_STRENGTH};
pub use png::{encode_png, export_filename, export_filename_today, write_chart};
