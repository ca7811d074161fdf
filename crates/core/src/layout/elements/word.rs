//! Word type: an ordered group of glyph runs.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

use crate::error::{LayoutError, Result};
use crate::layout::bidi::ltr_dominance;
use crate::utils::{BBox, HasBBox, HasText};

use super::glyph::GlyphRun;

/// A run of glyphs merged into one word, in reading order.
///
/// The bounding box is always the union of the member boxes; it is updated on
/// every insertion. An empty word has a zero box and empty text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Word {
    bbox: BBox,
    runs: Vec<GlyphRun>,
}

impl Word {
    /// Creates a word holding a single run.
    pub fn new(run: GlyphRun) -> Self {
        Self {
            bbox: run.bbox(),
            runs: vec![run],
        }
    }

    /// Creates a word from runs already in reading order.
    pub fn from_runs<I: IntoIterator<Item = GlyphRun>>(runs: I) -> Result<Self> {
        let mut iter = runs.into_iter();
        let mut word = Self::new(iter.next().ok_or(LayoutError::EmptyInput)?);
        for run in iter {
            word.push(run);
        }
        Ok(word)
    }

    /// Appends a run and grows the bounding box.
    pub fn push(&mut self, run: GlyphRun) {
        if self.runs.is_empty() {
            self.bbox = run.bbox();
        } else {
            self.bbox = self.bbox.union(&run.bbox());
        }
        self.runs.push(run);
    }

    /// Appends all runs of `other`.
    pub fn append(&mut self, other: Word) {
        for run in other.runs {
            self.push(run);
        }
    }

    pub fn runs(&self) -> &[GlyphRun] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<GlyphRun> {
        self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub(crate) fn last_run(&self) -> Option<&GlyphRun> {
        self.runs.last()
    }

    /// Returns true if every character of the word's text is one of `chars`.
    pub fn is_same_char(&self, chars: &[char]) -> bool {
        self.text().chars().all(|c| chars.contains(&c))
    }

    /// Splits the word in two before the run at `index`.
    ///
    /// Both halves must be non-empty, so `index` must satisfy
    /// `0 < index < self.len()`.
    pub fn split_at(&self, index: usize) -> Result<(Word, Word)> {
        if index == 0 || index >= self.runs.len() {
            return Err(LayoutError::InvalidSplitIndex {
                index,
                len: self.runs.len(),
            });
        }
        let (head, tail) = self.runs.split_at(index);
        Ok((
            Word::from_runs(head.iter().cloned())?,
            Word::from_runs(tail.iter().cloned())?,
        ))
    }
}

impl HasBBox for Word {
    fn bbox(&self) -> BBox {
        self.bbox
    }
}

impl HasText for Word {
    /// Concatenated run text, NFKC-normalized and trimmed.
    fn text(&self) -> String {
        if self.runs.is_empty() {
            return String::new();
        }
        let raw: String = self.runs.iter().map(|r| r.text()).collect();
        raw.as_str().nfkc().collect::<String>().trim().to_string()
    }

    fn ltr_dominance(&self) -> Ordering {
        ltr_dominance(&self.runs)
    }
}

/// Returns true if there are at least two non-empty words and all of them
/// consist of the same single repeated character.
pub fn all_same_char<'a, I>(words: I) -> bool
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut first: Option<char> = None;
    let mut non_empty = 0usize;
    for word in words {
        let text = word.text();
        let Some(c) = text.chars().next() else {
            continue;
        };
        let target = *first.get_or_insert(c);
        if !word.is_same_char(&[target]) {
            return false;
        }
        non_empty += 1;
    }
    non_empty >= 2
}
