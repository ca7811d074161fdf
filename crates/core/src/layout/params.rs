//! Layout reconstruction parameters.
//!
//! Contains MergeParams and LineParams for controlling how glyph runs are
//! merged into words and how words are grouped into lines.

/// Parameters for word merging.
///
/// The defaults are tuned for typical document text and should rarely need
/// changing.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeParams {
    /// Two runs with identical text whose boxes overlap by more than this
    /// ratio (intersection over union) are treated as one duplicated glyph.
    pub duplicate_overlap_ratio: f64,

    /// Fraction of the font's space width used as the inter-word gap estimate.
    pub space_tolerance: f64,

    /// Fraction of the running average character width used as the inter-word
    /// gap estimate.
    pub average_char_tolerance: f64,

    /// Slack, in page units, when comparing bottoms for same-line detection.
    pub same_line_variance: f64,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            duplicate_overlap_ratio: 0.5,
            space_tolerance: 0.5,
            average_char_tolerance: 0.3,
            same_line_variance: 0.1,
        }
    }
}

/// Parameters for line grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct LineParams {
    /// A word whose vertical overlap ratio with the current line falls below
    /// this starts a new line.
    pub line_overlap_ratio: f64,

    /// Minimum share of the region width a line must cover to be a leader line.
    pub leader_width_ratio: f64,

    /// Filler character squeezed out of every surviving line.
    pub squeeze_char: char,

    /// Shortest run of `squeeze_char` that gets squeezed out.
    pub squeeze_min_run: usize,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            line_overlap_ratio: 0.1,
            leader_width_ratio: 0.9,
            squeeze_char: ' ',
            squeeze_min_run: 3,
        }
    }
}

impl LineParams {
    /// Creates line parameters with the specified values.
    ///
    /// # Panics
    /// Panics if `squeeze_min_run` is 0.
    pub fn new(
        line_overlap_ratio: f64,
        leader_width_ratio: f64,
        squeeze_char: char,
        squeeze_min_run: usize,
    ) -> Self {
        assert!(squeeze_min_run > 0, "squeeze_min_run should be positive");

        Self {
            line_overlap_ratio,
            leader_width_ratio,
            squeeze_char,
            squeeze_min_run,
        }
    }
}
