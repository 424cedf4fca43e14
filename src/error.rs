use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for stitchpx operations
#[derive(Error, Diagnostic, Debug)]
pub enum ChartError {
    #[error("IO error: {0}")]
    #[diagnostic(code(stitchpx::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(stitchpx::io))]
    Io { path: PathBuf, message: String },

    #[error("Failed to decode image: {message}")]
    #[diagnostic(code(stitchpx::decode))]
    ImageDecode {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown algorithm: {name}")]
    #[diagnostic(code(stitchpx::algorithm))]
    UnknownAlgorithm {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(stitchpx::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Palette has {len} colour(s); at least 2 are required")]
    #[diagnostic(code(stitchpx::palette))]
    PaletteTooSmall {
        len: usize,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid grid dimensions: {width}x{height}")]
    #[diagnostic(code(stitchpx::dimensions))]
    InvalidDimensions { width: usize, height: usize },

    #[error("Render error: {message}")]
    #[diagnostic(code(stitchpx::render))]
    Render { message: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;
