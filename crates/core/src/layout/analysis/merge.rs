//! Glyph-run-to-word merging.
//!
//! Contains merge_words() for joining a stream of glyph runs into words,
//! inserting synthetic spaces where the gap between runs looks like a word
//! break.

use tracing::{debug, trace};

use crate::utils::{BBox, HasBBox, feq, overlap};

use super::super::bidi::reorder_word;
use super::super::elements::{GlyphRun, Ruling, Word};
use super::super::params::MergeParams;

/// Running vertical extent of the line being merged.
#[derive(Debug, Clone, Copy)]
struct LineExtent {
    max_y: f64,
    max_height: f64,
    min_top: f64,
}

impl LineExtent {
    fn of(run: &GlyphRun) -> Self {
        Self {
            max_y: run.bottom(),
            max_height: run.height(),
            min_top: run.top(),
        }
    }

    /// Extent with no members; any run widens it.
    fn reset() -> Self {
        Self {
            max_y: f64::MIN,
            max_height: -1.0,
            min_top: f64::MAX,
        }
    }

    fn include(&mut self, run: &GlyphRun) {
        self.max_y = self.max_y.max(run.bottom());
        self.max_height = self.max_height.max(run.height());
        self.min_top = self.min_top.min(run.top());
    }
}

/// Merges glyph runs into words with default parameters.
///
/// See [`merge_words_with`].
pub fn merge_words(runs: &[GlyphRun], vertical_rulings: &[Ruling]) -> Vec<Word> {
    merge_words_with(&MergeParams::default(), runs, vertical_rulings)
}

/// Merges glyph runs into words.
///
/// Runs are visited in input order. Each run either joins the current word or
/// starts a new one, depending on whether it shares the current line, whether
/// a vertical ruling separates it from the previous run, and how its gap
/// compares to the estimated inter-word space. Every resulting word is then
/// reordered into reading order (see [`crate::layout::bidi::reorder`]).
///
/// Empty input yields no words. The input slice is never modified.
pub fn merge_words_with(
    params: &MergeParams,
    runs: &[GlyphRun],
    vertical_rulings: &[Ruling],
) -> Vec<Word> {
    let Some((first, rest)) = runs.split_first() else {
        return Vec::new();
    };

    let mut words = vec![Word::new(first.clone())];

    let mut previous_average_char_width: Option<f64> = Some(first.width());
    let mut end_of_last_text_x: Option<f64> = Some(first.right());
    let mut extent = LineExtent::of(first);
    let mut last_word_spacing: Option<f64> = None;

    for chr in rest {
        let Some(current) = words.last_mut() else {
            break;
        };
        let Some(prev) = current.last_run() else {
            break;
        };

        // Same text drawn twice at (nearly) the same spot.
        if chr.text() == prev.text()
            && prev.bbox().overlap_ratio(&chr.bbox()) > params.duplicate_overlap_ratio
        {
            trace!(text = chr.text(), x = chr.left(), "skipping duplicate glyph run");
            continue;
        }

        if chr.text() == " " && feq(prev.left(), chr.left()) && feq(prev.top(), chr.top()) {
            continue;
        }

        if chr.font() != prev.font() || !feq(chr.font_size(), prev.font_size()) {
            previous_average_char_width = None;
        }

        let across_vertical_ruling = vertical_rulings.iter().any(|r| r.crosses(prev, chr));

        let word_spacing = chr.width_of_space();
        let delta_space = if word_spacing.is_nan() || word_spacing == 0.0 {
            f64::INFINITY
        } else {
            match last_word_spacing {
                None => word_spacing * params.space_tolerance,
                Some(last) => ((word_spacing + last) / 2.0) * params.space_tolerance,
            }
        };

        let char_width = chr.width() / chr.char_count() as f64;
        let average_char_width = match previous_average_char_width {
            None => char_width,
            Some(previous) => (previous + char_width) / 2.0,
        };
        let delta_char_width = average_char_width * params.average_char_tolerance;

        let mut expected_start_of_next_word_x =
            end_of_last_text_x.map(|end| end + delta_char_width.min(delta_space));

        let same_line = overlap(
            chr.bottom(),
            chr.height(),
            extent.max_y,
            extent.max_height,
            params.same_line_variance,
        );
        if !same_line {
            expected_start_of_next_word_x = None;
            extent = LineExtent::reset();
        }

        end_of_last_text_x = Some(chr.right());

        let space = match expected_start_of_next_word_x {
            Some(expected)
                if !across_vertical_ruling
                    && same_line
                    && expected < chr.left()
                    && !prev.text().ends_with(' ') =>
            {
                // Ends exactly where the next word is expected to start.
                let bbox = BBox::new(prev.left(), prev.top(), expected, prev.bottom());
                Some(GlyphRun::space_like(prev, bbox))
            }
            _ => None,
        };

        extent.include(chr);

        let dist = chr.left() - space.as_ref().map_or(prev.right(), |sp| sp.right());
        let space_width = space.as_ref().map(|sp| sp.width());

        if let Some(sp) = space {
            current.push(sp);
        }

        let joins = !across_vertical_ruling
            && same_line
            && if dist < 0.0 {
                current.bbox().vertically_overlaps(&chr.bbox())
            } else {
                dist < word_spacing
            };

        if joins {
            current.push(chr.clone());
        } else {
            if across_vertical_ruling {
                debug!(x = chr.left(), "vertical ruling separates glyph runs");
            }
            words.push(Word::new(chr.clone()));
        }

        // An unknown spacing leaves no estimate for the next run.
        last_word_spacing = (!word_spacing.is_nan() && word_spacing != 0.0).then_some(word_spacing);
        previous_average_char_width = Some(match space_width {
            Some(w) => (average_char_width + w) / 2.0,
            None => average_char_width,
        });
    }

    debug!(runs = runs.len(), words = words.len(), "merged glyph runs into words");

    words.into_iter().map(reorder_word).collect()
}
