//! stitchpx - Crochet chart and pixel grid generator
//!
//! An embeddable engine that converts a raster image into a fixed-size
//! grid of palette colours and renders it as a magnified chart PNG. The
//! pipeline is a strict sequence: resample the source to a W×H grid of
//! RGBA samples, quantize it in place with one of six algorithms, and
//! render the quantized grid as blocks with grid lines.

pub mod error;
pub mod filters;
pub mod generate;
pub mod render;
pub mod resample;
pub mod types;

pub use error::{ChartError, Result};
pub use filters::Algorithm;
pub use generate::{generate, generate_from_bytes, Generation, GenerationRequest, Session, Ticket};
pub use render::{
    encode_png, export_filename, export_filename_today, render_chart, write_chart, ChartStyle,
    DEFAULT_BLOCK_SIZE, GRID_LINE_STRENGTH,
};
pub use resample::{decode, open, resample, resample_bytes};
pub use types::{
    redmean_distance_sq, Colour, ColourEntry, Palette, PixelGrid, ALPHA_VISIBLE_MIN,
};
