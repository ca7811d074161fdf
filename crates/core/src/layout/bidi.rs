//! Bidirectional text helpers for word reconstruction.
//!
//! Glyph sources emit right-to-left text in visual order. This module splits a
//! merged word into maximal directional runs, reverses the right-to-left ones
//! and orders the runs by the word's dominant direction. It is a reduced
//! inverse of UAX#9 that works per glyph run instead of per character.

use std::cmp::Ordering;
use std::collections::VecDeque;

use unicode_bidi::{BidiClass, bidi_class};

use crate::error::{LayoutError, Result};
use crate::utils::HasText;

use super::elements::{GlyphRun, Word};

/// Directionality bucket of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directionality {
    Ltr,
    Rtl,
    Neutral,
}

impl Directionality {
    fn opposite(self) -> Self {
        match self {
            Directionality::Ltr => Directionality::Rtl,
            Directionality::Rtl => Directionality::Ltr,
            Directionality::Neutral => Directionality::Neutral,
        }
    }
}

/// Classify a character into a directionality bucket.
///
/// Numbers and number separators count as left-to-right here.
pub fn directionality(c: char) -> Directionality {
    match bidi_class(c) {
        BidiClass::L
        | BidiClass::LRE
        | BidiClass::LRO
        | BidiClass::EN
        | BidiClass::ES
        | BidiClass::ET
        | BidiClass::AN
        | BidiClass::CS => Directionality::Ltr,
        BidiClass::R | BidiClass::AL | BidiClass::RLE | BidiClass::RLO => Directionality::Rtl,
        BidiClass::WS
        | BidiClass::B
        | BidiClass::S
        | BidiClass::BN
        | BidiClass::NSM
        | BidiClass::ON
        | BidiClass::PDF
        | BidiClass::LRI
        | BidiClass::RLI
        | BidiClass::FSI
        | BidiClass::PDI => Directionality::Neutral,
    }
}

/// Strong direction of a character for dominance counting; weak and neutral
/// classes do not vote.
fn strong_direction(c: char) -> Option<Directionality> {
    match bidi_class(c) {
        BidiClass::L | BidiClass::LRE | BidiClass::LRO => Some(Directionality::Ltr),
        BidiClass::R | BidiClass::AL | BidiClass::RLE | BidiClass::RLO => Some(Directionality::Rtl),
        _ => None,
    }
}

/// Compare strong LTR against strong RTL characters across all runs.
///
/// Greater means LTR dominates, Less means RTL dominates.
pub fn ltr_dominance(runs: &[GlyphRun]) -> Ordering {
    let (mut ltr, mut rtl) = (0usize, 0usize);
    for c in runs.iter().flat_map(|r| r.text().chars()) {
        match strong_direction(c) {
            Some(Directionality::Ltr) => ltr += 1,
            Some(Directionality::Rtl) => rtl += 1,
            _ => {}
        }
    }
    ltr.cmp(&rtl)
}

/// Directionality of a run's first character, and whether it is whitespace.
fn classify_run(run: &GlyphRun) -> (Directionality, bool) {
    match run.first_char() {
        Some(c) => (directionality(c), bidi_class(c) == BidiClass::WS),
        None => (Directionality::Neutral, false),
    }
}

fn close_run(buff: VecDeque<GlyphRun>, dir: Directionality) -> Vec<GlyphRun> {
    if dir == Directionality::Rtl {
        buff.into_iter().rev().collect()
    } else {
        buff.into_iter().collect()
    }
}

/// Reorder a word's glyph runs from visual into reading order.
///
/// Fails with [`LayoutError::EmptyInput`] for a word without runs. A word with
/// no right-to-left characters keeps its run order.
pub fn reorder(word: &Word) -> Result<Word> {
    if word.is_empty() {
        return Err(LayoutError::EmptyInput);
    }
    Ok(reorder_word(word.clone()))
}

/// Infallible core of [`reorder`]; an empty word is returned as is.
pub(crate) fn reorder_word(word: Word) -> Word {
    if word.is_empty() {
        return word;
    }

    // Ties and all-neutral words read left to right.
    let ltr_dominant = word.ltr_dominance() != Ordering::Less;
    let dominant = if ltr_dominant {
        Directionality::Ltr
    } else {
        Directionality::Rtl
    };

    let mut runs: Vec<Vec<GlyphRun>> = Vec::new();
    let mut buff: VecDeque<GlyphRun> = VecDeque::new();
    let mut buff_dir = Directionality::Neutral;

    for run in word.into_runs() {
        let (run_dir, is_whitespace) = classify_run(&run);
        if buff.is_empty() {
            buff_dir = run_dir;
            buff.push_back(run);
            continue;
        }
        if buff_dir == Directionality::Neutral {
            buff_dir = run_dir;
        }

        if run_dir == buff_dir || run_dir == Directionality::Neutral {
            // Leading space of a run against the dominant direction must
            // survive the reversal on the correct side.
            if is_whitespace && buff_dir == dominant.opposite() {
                buff.push_front(run);
            } else {
                buff.push_back(run);
            }
        } else {
            runs.push(close_run(std::mem::take(&mut buff), buff_dir));
            buff_dir = run_dir;
            buff.push_back(run);
        }
    }
    runs.push(close_run(buff, buff_dir));

    if !ltr_dominant {
        runs.reverse();
    }

    let mut out = Word::default();
    for run in runs.into_iter().flatten() {
        out.push(run);
    }
    out
}
