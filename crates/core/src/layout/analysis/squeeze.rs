//! Removal of repeated filler runs from words and lines.
//!
//! A long run of one filler glyph (spaces between table columns, dots in a
//! leader) inside a merged word is not text. Squeezing cuts such runs out and
//! keeps the pieces around them as separate words.

use tracing::trace;

use crate::error::Result;

use super::super::elements::{GlyphRun, Line, Word};

/// First character of the trimmed run text, or of the raw text when it is all
/// whitespace.
fn key_char(run: &GlyphRun) -> Option<char> {
    let text = run.text();
    text.trim().chars().next().or_else(|| text.chars().next())
}

/// Finds the first run of at least `min_run_length` consecutive glyph runs
/// keyed by `filler`, as a half-open index range.
fn find_filler_run(runs: &[GlyphRun], filler: char, min_run_length: usize) -> Option<(usize, usize)> {
    let mut i = 0;
    while i < runs.len() {
        if key_char(&runs[i]) != Some(filler) {
            i += 1;
            continue;
        }
        let start = i;
        while i < runs.len() && key_char(&runs[i]) == Some(filler) {
            i += 1;
        }
        if i - start >= min_run_length {
            return Some((start, i));
        }
    }
    None
}

impl Word {
    /// Cuts every run of at least `min_run_length` consecutive `filler` glyphs
    /// out of the word.
    ///
    /// For example, squeezing `"1234xxxxx56xx"` with `'x'` and a minimum run
    /// of 4 yields `["1234", "56xx"]`. A word without such a run, or made of
    /// nothing but one, is returned unchanged as the only element.
    pub fn squeeze(&self, filler: char, min_run_length: usize) -> Result<Vec<Word>> {
        let mut pieces = Vec::new();
        let mut rest = self.clone();

        while let Some((start, end)) = find_filler_run(rest.runs(), filler, min_run_length) {
            if start > 0 {
                let (head, tail) = rest.split_at(start)?;
                pieces.push(head);
                rest = tail;
            }
            // `rest` now starts with the filler run.
            let run_len = end - start;
            trace!(filler = %filler, len = run_len, "squeezing filler run");
            if run_len == rest.len() {
                rest = Word::default();
                break;
            }
            rest = rest.split_at(run_len)?.1;
        }

        if !rest.is_empty() {
            pieces.push(rest);
        }
        if pieces.is_empty() {
            return Ok(vec![self.clone()]);
        }
        Ok(pieces)
    }
}

impl Line {
    /// Returns a copy of the line with every word squeezed.
    pub fn remove_repeated_characters(&self, filler: char, min_run_length: usize) -> Result<Line> {
        let mut line = Line::new();
        for word in self.words() {
            for piece in word.squeeze(filler, min_run_length)? {
                line.push(piece);
            }
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{BBox, HasBBox, HasText};

    fn word_of(text: &str) -> Word {
        Word::from_runs(text.chars().enumerate().map(|(i, c)| {
            GlyphRun::new(
                BBox::from_xywh(i as f64 * 5.0, 0.0, 5.0, 10.0),
                &c.to_string(),
                "F1",
                10.0,
                2.5,
            )
        }))
        .unwrap()
    }

    fn texts(words: &[Word]) -> Vec<String> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn squeezes_dot_run_between_text() {
        let w = word_of("AB.............CD");
        let pieces = w.squeeze('.', 3).unwrap();
        assert_eq!(texts(&pieces), vec!["AB", "CD"]);
        assert_eq!(pieces[1].bbox(), BBox::from_xywh(75.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn keeps_short_runs() {
        let w = word_of("1234xxxxx56xx");
        let pieces = w.squeeze('x', 4).unwrap();
        assert_eq!(texts(&pieces), vec!["1234", "56xx"]);
    }

    #[test]
    fn word_without_run_is_unchanged() {
        let w = word_of("a..b");
        let pieces = w.squeeze('.', 3).unwrap();
        assert_eq!(pieces, vec![w]);
    }

    #[test]
    fn leading_and_trailing_runs_are_dropped() {
        let w = word_of("...ab....");
        let pieces = w.squeeze('.', 3).unwrap();
        assert_eq!(texts(&pieces), vec!["ab"]);
        assert_eq!(pieces[0].len(), 2);
    }

    #[test]
    fn word_of_only_filler_is_unchanged() {
        let w = word_of("......");
        let pieces = w.squeeze('.', 3).unwrap();
        assert_eq!(pieces, vec![w]);
    }

    #[test]
    fn squeezes_repeated_runs_in_a_loop() {
        let text: String = std::iter::repeat_n("a   ", 500).collect();
        let w = word_of(&text);
        let pieces = w.squeeze(' ', 3).unwrap();
        assert_eq!(pieces.len(), 500);
        assert!(pieces.iter().all(|p| p.text() == "a"));
    }

    #[test]
    fn line_squeeze_splits_words() {
        let mut line = Line::new();
        line.push(word_of("ab   cd"));
        line.push(word_of("ef"));
        let squeezed = line.remove_repeated_characters(' ', 3).unwrap();
        let words: Vec<String> = squeezed.words().map(|w| w.text()).collect();
        assert_eq!(words, vec!["ab", "cd", "ef"]);
    }
}
