//! Word-to-line grouping.
//!
//! Contains group_by_lines() for grouping words into text lines and dropping
//! leader lines (rows of dots or dashes as used in a table of contents).

use tracing::{debug, warn};

use crate::utils::{HasBBox, HasText, bounding_box_of};

use super::super::elements::{Line, Word};
use super::super::params::LineParams;

/// Groups words into lines with default parameters.
///
/// See [`group_by_lines_with`].
pub fn group_by_lines(words: &[Word]) -> Vec<Line> {
    group_by_lines_with(&LineParams::default(), words)
}

/// Returns true if `line` is a leader line: wider than
/// `leader_width_ratio` of the region and made of one repeated character.
///
/// The dots may arrive as one word per dot or merged into a single word.
pub fn is_leader_line(params: &LineParams, line: &Line, region_width: f64) -> bool {
    region_width > 0.0
        && line.width() / region_width > params.leader_width_ratio
        && is_repeated_char(line)
}

/// Every non-empty word consists of the same character, and that character
/// appears at least twice across the line.
fn is_repeated_char(line: &Line) -> bool {
    let mut target: Option<char> = None;
    let mut count = 0usize;
    for word in line.words() {
        let text = word.text();
        let Some(c) = text.chars().next() else {
            continue;
        };
        let target = *target.get_or_insert(c);
        if !word.is_same_char(&[target]) {
            return false;
        }
        count += text.chars().count();
    }
    count >= 2
}

/// Groups words into lines.
///
/// Words are visited in input order; a word that barely overlaps the current
/// line vertically starts a new line. Leader lines are dropped, and repeated
/// `squeeze_char` runs are squeezed out of the surviving lines.
///
/// Never fails: a line that cannot be squeezed is kept as grouped.
pub fn group_by_lines_with(params: &LineParams, words: &[Word]) -> Vec<Line> {
    let Some(region) = bounding_box_of(words) else {
        return Vec::new();
    };
    let region_width = region.width();

    let mut lines: Vec<Line> = Vec::new();
    let mut current = Line::new();

    for word in words {
        if !current.is_empty()
            && current.bbox().vertical_overlap_ratio(&word.bbox()) < params.line_overlap_ratio
        {
            let done = std::mem::take(&mut current);
            if is_leader_line(params, &done, region_width) {
                debug!(line = %done, "dropping leader line");
            } else {
                lines.push(done);
            }
        }
        current.push(word.clone());
    }

    if is_leader_line(params, &current, region_width) {
        debug!(line = %current, "dropping leader line");
    } else {
        lines.push(current);
    }

    debug!(words = words.len(), lines = lines.len(), "grouped words into lines");

    lines
        .into_iter()
        .map(|line| {
            match line.remove_repeated_characters(params.squeeze_char, params.squeeze_min_run) {
                Ok(squeezed) => squeezed,
                Err(err) => {
                    warn!(%err, line = %line, "keeping line unsqueezed");
                    line
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::analysis::merge_words;
    use crate::layout::elements::GlyphRun;
    use crate::utils::{BBox, HasText};

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

    fn line_texts(lines: &[Line]) -> Vec<Vec<String>> {
        lines
            .iter()
            .map(|l| l.words().map(|w| w.text()).collect())
            .collect()
    }

    #[test]
    fn empty_input_gives_no_lines() {
        assert!(group_by_lines(&[]).is_empty());
    }

    #[test]
    fn groups_rows() {
        let words = [
            word_at(0.0, 0.0, "one"),
            word_at(30.0, 1.0, "two"),
            word_at(0.0, 20.0, "three"),
        ];
        let lines = group_by_lines(&words);
        assert_eq!(
            line_texts(&lines),
            vec![vec!["one", "two"], vec!["three"]]
        );
        assert_eq!(lines[0].bbox(), BBox::new(0.0, 0.0, 45.0, 11.0));
    }

    #[test]
    fn drops_dot_leader_line() {
        let mut words = vec![word_at(0.0, 0.0, "Chapter"), word_at(180.0, 0.0, "1")];
        for i in 0..40 {
            words.push(word_at(i as f64 * 5.0, 20.0, "."));
        }
        words.push(word_at(0.0, 40.0, "Index"));
        let lines = group_by_lines(&words);
        assert_eq!(
            line_texts(&lines),
            vec![vec!["Chapter", "1"], vec!["Index"]]
        );
    }

    #[test]
    fn drops_trailing_leader_line() {
        let mut words = vec![word_at(0.0, 0.0, "Title")];
        for i in 0..20 {
            words.push(word_at(i as f64 * 10.0, 20.0, "-"));
        }
        let lines = group_by_lines(&words);
        assert_eq!(line_texts(&lines), vec![vec!["Title"]]);
    }

    #[test]
    fn narrow_dot_line_is_kept() {
        let mut words = vec![word_at(0.0, 0.0, "a long heading line")];
        for i in 0..5 {
            words.push(word_at(i as f64 * 5.0, 20.0, "."));
        }
        let lines = group_by_lines(&words);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn lines_are_squeezed() {
        let words = [word_at(0.0, 0.0, "ab    cd")];
        let lines = group_by_lines(&words);
        assert_eq!(line_texts(&lines), vec![vec!["ab", "cd"]]);
    }

    #[test]
    fn drops_leader_merged_into_one_word() {
        let mut runs = vec![GlyphRun::new(
            BBox::from_xywh(0.0, 0.0, 25.0, 10.0),
            "Title",
            "F1",
            10.0,
            2.5,
        )];
        for i in 0..40 {
            runs.push(GlyphRun::new(
                BBox::from_xywh(i as f64 * 5.0, 20.0, 5.0, 10.0),
                ".",
                "F1",
                10.0,
                2.5,
            ));
        }
        let words = merge_words(&runs, &[]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), ".".repeat(40));

        let lines = group_by_lines(&words);
        assert_eq!(line_texts(&lines), vec![vec!["Title"]]);
    }

    #[test]
    fn lone_character_is_not_a_leader() {
        let lines = group_by_lines(&[word_at(0.0, 0.0, "x")]);
        assert_eq!(line_texts(&lines), vec![vec!["x"]]);

        let params = LineParams::default();
        let mut dashes = Line::new();
        dashes.push(word_at(0.0, 0.0, "--"));
        assert!(is_leader_line(&params, &dashes, 10.0));
        let mut mixed = Line::new();
        mixed.push(word_at(0.0, 0.0, "--"));
        mixed.push(word_at(10.0, 0.0, ".."));
        assert!(!is_leader_line(&params, &mixed, 20.0));
    }
}
