//! Error types for the rasterizer and its surfaces

use thiserror::Error;

/// Result type alias for fallible trifill operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building surfaces, loading configuration or
/// drawing with input validation enabled.
///
/// The fill routines themselves never fail; see `Rasterizer::draw_triangle`.
#[derive(Error, Debug)]
pub enum Error {
    /// Width, height or depth outside the supported range
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Caller supplied storage does not match the declared dimensions
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Vertex is not finite or does not fit the fixed-point range
    #[error("Vertex out of range: {0}")]
    VertexOutOfRange(String),

    /// Bad palette size or colour index
    #[error("Palette error: {0}")]
    PaletteError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to read a configuration or scene file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
