//! Error types for glyphweave text reconstruction.

use thiserror::Error;

/// Primary error type for layout operations.
///
/// Imperfect input (missing space widths, zero-width glyphs, mixed fonts) is
/// never an error; these variants only cover broken preconditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("operation requires at least one glyph run")]
    EmptyInput,

    #[error("invalid split index {index} for word of {len} glyph runs")]
    InvalidSplitIndex { index: usize, len: usize },

    #[error("malformed region: width {width}, height {height}")]
    MalformedRegion { width: f64, height: f64 },
}

/// Convenience Result type alias for LayoutError.
pub type Result<T> = std::result::Result<T, LayoutError>;
