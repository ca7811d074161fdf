//! Table cell text aggregation.

use crate::error::{LayoutError, Result};
use crate::utils::{BBox, HasBBox, HasText, Point, ill_defined_order, stable_sort_by};

use super::super::elements::Word;

/// Marker emitted between visual lines of a cell's text.
pub const LINE_BREAK: char = '\r';

/// A rectangular table cell and the words inside it.
///
/// The region comes from the table-structure detector. `spanning` and
/// `placeholder` describe the cell's place in the grid and never change its
/// text.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    bbox: BBox,
    words: Vec<Word>,
    spanning: bool,
    placeholder: bool,
}

impl Cell {
    /// Creates an empty cell. Fails with [`LayoutError::MalformedRegion`]
    /// unless both `width` and `height` are positive.
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(LayoutError::MalformedRegion { width, height });
        }
        Ok(Self {
            bbox: BBox::from_xywh(left, top, width, height),
            words: Vec::new(),
            spanning: false,
            placeholder: false,
        })
    }

    /// Creates an empty cell between two `(x, y)` corners.
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Result<Self> {
        let (x0, top) = top_left;
        let (x1, bottom) = bottom_right;
        Self::new(top, x0, x1 - x0, bottom - top)
    }

    /// Adds a word; the cell box grows to cover it.
    pub fn add(&mut self, word: Word) {
        self.bbox = self.bbox.union(&word.bbox());
        self.words.push(word);
    }

    /// Adds every word whose box lies inside the cell and returns how many
    /// were taken.
    pub fn assign_words(&mut self, words: &[Word]) -> usize {
        let region = self.bbox;
        let mut taken = 0;
        for word in words.iter().filter(|w| region.contains(&w.bbox())) {
            self.add(word.clone());
            taken += 1;
        }
        taken
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn is_spanning(&self) -> bool {
        self.spanning
    }

    pub fn set_spanning(&mut self, spanning: bool) {
        self.spanning = spanning;
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: bool) {
        self.placeholder = placeholder;
    }
}

impl HasBBox for Cell {
    fn bbox(&self) -> BBox {
        self.bbox
    }
}

impl HasText for Cell {
    fn text(&self) -> String {
        self.text_with_breaks(true)
    }

    /// Word texts in reading order. With `include_line_breaks`, a
    /// [`LINE_BREAK`] precedes every word whose top is below the previous
    /// word's top.
    fn text_with_breaks(&self, include_line_breaks: bool) -> String {
        let mut ordered: Vec<&Word> = self.words.iter().collect();
        stable_sort_by(&mut ordered, |a, b| ill_defined_order(*a, *b));

        let Some(first) = ordered.first() else {
            return String::new();
        };

        let mut out = String::new();
        let mut current_top = first.top();
        for word in ordered {
            if include_line_breaks && word.top() > current_top {
                out.push(LINE_BREAK);
            }
            out.push_str(&word.text());
            current_top = word.top();
        }
        out.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::GlyphRun;

    fn word_at(x: f64, top: f64, text: &str) -> Word {
        Word::from_runs(text.chars().enumerate().map(|(i, c)| {
            GlyphRun::new(
                BBox::from_xywh(x + i as f64 * 5.0, top, 5.0, 10.0),
                &c.to_string(),
                "F1",
                10.0,
                2.5,
            )
        }))
        .unwrap()
    }

    #[test]
    fn rejects_malformed_regions() {
        assert_eq!(
            Cell::new(0.0, 0.0, 0.0, 10.0),
            Err(LayoutError::MalformedRegion {
                width: 0.0,
                height: 10.0
            })
        );
        assert!(Cell::new(0.0, 0.0, 10.0, -1.0).is_err());
        assert!(Cell::new(0.0, 0.0, f64::NAN, 1.0).is_err());
        assert!(Cell::from_corners((10.0, 10.0), (5.0, 20.0)).is_err());
    }

    #[test]
    fn from_corners_builds_region() {
        let cell = Cell::from_corners((10.0, 20.0), (50.0, 30.0)).unwrap();
        assert_eq!(cell.bbox(), BBox::new(10.0, 20.0, 50.0, 30.0));
        assert!(!cell.is_spanning());
        assert!(!cell.is_placeholder());
    }

    #[test]
    fn empty_cell_has_empty_text() {
        let cell = Cell::new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert_eq!(cell.text(), "");
    }

    #[test]
    fn line_breaks_between_rows() {
        let mut cell = Cell::new(0.0, 0.0, 100.0, 100.0).unwrap();
        cell.add(word_at(40.0, 40.0, "c"));
        cell.add(word_at(0.0, 0.0, "a"));
        cell.add(word_at(20.0, 20.0, "b"));
        let text = cell.text();
        assert_eq!(text, "a\rb\rc");
        assert_eq!(text.matches(LINE_BREAK).count(), 2);
        assert_eq!(cell.text_with_breaks(false), "abc");
    }

    #[test]
    fn same_top_words_share_a_line_in_x_order() {
        let mut cell = Cell::new(0.0, 0.0, 100.0, 100.0).unwrap();
        cell.add(word_at(30.0, 0.0, "world"));
        cell.add(word_at(0.0, 0.0, "hello"));
        cell.add(word_at(0.0, 15.0, "next"));
        assert_eq!(cell.text(), "helloworld\rnext");
    }

    #[test]
    fn rtl_words_on_one_line_read_right_to_left() {
        let mut cell = Cell::new(0.0, 0.0, 100.0, 100.0).unwrap();
        cell.add(word_at(0.0, 0.0, "\u{05D0}"));
        cell.add(word_at(20.0, 0.0, "\u{05D1}"));
        assert_eq!(cell.text(), "\u{05D1}\u{05D0}");
    }

    #[test]
    fn flags_do_not_change_text() {
        let mut cell = Cell::new(0.0, 0.0, 100.0, 100.0).unwrap();
        cell.add(word_at(0.0, 0.0, "x"));
        let before = cell.text();
        cell.set_spanning(true);
        cell.set_placeholder(true);
        assert_eq!(cell.text(), before);
    }

    #[test]
    fn assign_words_takes_contained_words_only() {
        let mut cell = Cell::new(0.0, 0.0, 50.0, 20.0).unwrap();
        let words = [
            word_at(0.0, 0.0, "in"),
            word_at(45.0, 0.0, "out"),
            word_at(0.0, 30.0, "below"),
        ];
        assert_eq!(cell.assign_words(&words), 1);
        assert_eq!(cell.text(), "in");
        assert_eq!(cell.bbox(), BBox::new(0.0, 0.0, 50.0, 20.0));
    }
}
