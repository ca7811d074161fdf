//! Layout element types for text reconstruction.
//!
//! Contains all element definitions:
//! - GlyphRun: One positioned, styled piece of text from the glyph source
//! - Word: Glyph runs merged into a word, in reading order
//! - Line: Words sharing one visual text row
//! - Ruling: A vertical ruling line that blocks word merging

mod glyph;
mod line;
mod ruling;
mod word;

// Re-export all public types
pub use glyph::{GlyphRun, GlyphRunBuilder};
pub use line::Line;
pub use ruling::Ruling;
pub use word::{Word, all_same_char};
