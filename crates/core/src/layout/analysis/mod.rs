//! Layout reconstruction algorithms.
//!
//! This module contains:
//! - Word merging (merge.rs)
//! - Line grouping and leader-line removal (lines.rs)
//! - Filler run squeezing for words and lines (squeeze.rs)

mod lines;
mod merge;
mod squeeze;

pub use lines::{group_by_lines, group_by_lines_with, is_leader_line};
pub use merge::{merge_words, merge_words_with};
