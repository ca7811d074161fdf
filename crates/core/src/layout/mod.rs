//! Layout reconstruction module.
//!
//! This module contains:
//! - Layout element types (GlyphRun, Word, Line, Ruling)
//! - Layout parameters (MergeParams, LineParams)
//! - Word merging and line grouping algorithms
//! - Directionality reordering of merged words
//! - Table cell text aggregation

pub mod analysis;
pub mod bidi;
pub mod elements;
pub mod params;
pub mod table;

// Re-export params
pub use params::*;

// Re-export element types
pub use elements::*;

// Re-export analysis functions
pub use analysis::*;

// Re-export table types
pub use table::*;
