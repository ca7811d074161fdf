//! glyphweave - word, line and table-cell text reconstruction from positioned
//! glyph runs.
//!
//! The input is a flat stream of [`GlyphRun`]s (one positioned, styled piece of
//! text each, usually a single character). The crate infers words, text lines
//! and cell text from it:
//!
//! - [`merge_words`] joins glyph runs into [`Word`]s and resolves mixed
//!   left-to-right/right-to-left text;
//! - [`group_by_lines`] groups words into [`Line`]s, dropping leader lines;
//! - [`Cell`] renders the words inside a table cell region.

pub mod error;
pub mod layout;
pub mod utils;

// Re-export table module for convenience
pub use layout::table;

pub use error::{LayoutError, Result};
pub use layout::analysis::{group_by_lines, group_by_lines_with, merge_words, merge_words_with};
pub use layout::elements::{GlyphRun, Line, Ruling, Word};
pub use layout::table::Cell;
pub use layout::{LineParams, MergeParams};
pub use utils::{BBox, HasBBox, HasText};
