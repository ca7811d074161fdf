//! Line type: words sharing one visual text row.

use std::fmt;

use crate::utils::{BBox, HasBBox, HasText};

use super::word::Word;

/// A text line.
///
/// Words live in index-addressed slots. [`Line::push`] appends a slot;
/// [`Line::add_word_at`] places a word at a column index, leaving empty slots
/// for columns not filled yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    bbox: Option<BBox>,
    slots: Vec<Option<Word>>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    fn grow(&mut self, bbox: BBox) {
        self.bbox = Some(match self.bbox {
            Some(b) => b.union(&bbox),
            None => bbox,
        });
    }

    /// Appends a word after the last slot.
    pub fn push(&mut self, word: Word) {
        self.grow(word.bbox());
        self.slots.push(Some(word));
    }

    /// Places `word` in slot `index`.
    ///
    /// Missing slots up to `index` are created empty. If the slot already
    /// holds a word, the new word's runs are appended to it.
    pub fn add_word_at(&mut self, index: usize, word: Word) {
        self.grow(word.bbox());
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }
        match &mut self.slots[index] {
            Some(existing) => existing.append(word),
            slot => *slot = Some(word),
        }
    }

    /// Filled slots in order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.slots.iter().flatten()
    }

    /// All slots, empty ones included.
    pub fn slots(&self) -> &[Option<Word>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl HasBBox for Line {
    fn bbox(&self) -> BBox {
        self.bbox.unwrap_or_default()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bbox();
        write!(
            f,
            "Line[top={},left={},width={},height={},words=",
            b.top,
            b.x0,
            b.width(),
            b.height()
        )?;
        for word in self.words() {
            write!(f, "'{}', ", word.text())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::GlyphRun;

    fn word(x: f64, text: &str) -> Word {
        Word::new(GlyphRun::new(
            BBox::from_xywh(x, 10.0, 5.0 * text.len() as f64, 10.0),
            text,
            "F1",
            10.0,
            2.5,
        ))
    }

    #[test]
    fn first_word_sets_bbox() {
        let mut line = Line::new();
        line.push(word(100.0, "ab"));
        assert_eq!(line.bbox(), BBox::from_xywh(100.0, 10.0, 10.0, 10.0));
        line.push(word(120.0, "c"));
        assert_eq!(line.bbox(), BBox::new(100.0, 10.0, 125.0, 20.0));
    }

    #[test]
    fn add_word_at_leaves_gaps() {
        let mut line = Line::new();
        line.add_word_at(2, word(50.0, "x"));
        assert_eq!(line.len(), 3);
        assert!(line.slots()[0].is_none());
        assert!(line.slots()[1].is_none());
        assert_eq!(line.words().count(), 1);
        assert_eq!(line.bbox(), BBox::from_xywh(50.0, 10.0, 5.0, 10.0));
    }

    #[test]
    fn add_word_at_merges_into_filled_slot() {
        let mut line = Line::new();
        line.add_word_at(0, word(0.0, "ab"));
        line.add_word_at(0, word(10.0, "cd"));
        let words: Vec<String> = line.words().map(|w| w.text()).collect();
        assert_eq!(words, vec!["abcd"]);
        assert_eq!(line.slots()[0].as_ref().map(Word::len), Some(2));
    }

    #[test]
    fn display_lists_words() {
        let mut line = Line::new();
        line.push(word(0.0, "ab"));
        line.push(word(20.0, "c"));
        assert_eq!(
            line.to_string(),
            "Line[top=10,left=0,width=25,height=10,words='ab', 'c', ]"
        );
    }
}
