//! Table cells.
//!
//! Cell regions come from an upstream table-structure detector; this module
//! collects the words falling inside each region and renders them as text.

mod cell;

pub use cell::{Cell, LINE_BREAK};
