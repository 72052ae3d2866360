//! Error handling for MotionKit
//!
//! Motion and selection are total operations and never fail; geometry that
//! is out of range is clamped instead. The errors here cover the edge of the
//! system: render targets and image encoding.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Render error type
///
/// Represents failures of concrete render targets. The abstract drawing
/// contract itself cannot fail.
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    /// The requested raster size cannot be allocated
    #[error("Invalid surface size {width}x{height}")]
    InvalidSurfaceSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Encoding a rendered frame failed
    #[error("Failed to encode frame: {reason}")]
    Encode {
        /// The reason encoding failed.
        reason: String,
    },
}

/// Main error type for MotionKit
///
/// A unified error type that can represent any error from the core crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Render error
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
