//! Glyph run type: GlyphRun and its builder.
//!
//! Use `GlyphRun::builder()` to construct runs with optional fields.

use smol_str::SmolStr;

use crate::utils::{BBox, HasBBox, HasText};

/// Builder for GlyphRun with fluent API for optional fields.
///
/// # Example
/// ```
/// use glyphweave_core::{BBox, GlyphRun};
///
/// let run = GlyphRun::builder(BBox::from_xywh(10.0, 20.0, 6.0, 12.0), "A", "Helvetica", 12.0)
///     .width_of_space(3.3)
///     .direction(Some(0.0))
///     .build();
/// assert_eq!(run.text(), "A");
/// ```
#[derive(Debug, Clone)]
pub struct GlyphRunBuilder {
    bbox: BBox,
    text: String,
    font: SmolStr,
    font_size: f64,
    width_of_space: f64,
    direction: Option<f64>,
}

impl GlyphRunBuilder {
    /// Creates a new builder with required fields.
    /// Optional fields default to: width_of_space=NaN (unknown), direction=None.
    pub fn new(bbox: BBox, text: &str, font: &str, font_size: f64) -> Self {
        Self {
            bbox,
            text: text.to_string(),
            font: SmolStr::new(font),
            font_size,
            width_of_space: f64::NAN,
            direction: None,
        }
    }

    /// Sets the typographic width of a space for this font and size.
    pub const fn width_of_space(mut self, width_of_space: f64) -> Self {
        self.width_of_space = width_of_space;
        self
    }

    /// Sets the text direction hint reported by the glyph source, in degrees.
    pub const fn direction(mut self, direction: Option<f64>) -> Self {
        self.direction = direction;
        self
    }

    /// Builds the GlyphRun instance.
    pub fn build(self) -> GlyphRun {
        GlyphRun {
            bbox: self.bbox,
            text: self.text,
            font: self.font,
            font_size: self.font_size,
            width_of_space: self.width_of_space,
            direction: self.direction,
        }
    }
}

/// One positioned, styled piece of text, usually a single character or
/// ligature.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    bbox: BBox,
    text: String,
    /// Font identity; runs compare fonts by name
    font: SmolStr,
    font_size: f64,
    /// Width of a space in this font and size; NaN or 0 when unknown
    width_of_space: f64,
    direction: Option<f64>,
}

impl GlyphRun {
    /// Creates a new builder for constructing GlyphRun instances.
    pub fn builder(bbox: BBox, text: &str, font: &str, font_size: f64) -> GlyphRunBuilder {
        GlyphRunBuilder::new(bbox, text, font, font_size)
    }

    /// Creates a run with all fields the word merger looks at.
    pub fn new(bbox: BBox, text: &str, font: &str, font_size: f64, width_of_space: f64) -> Self {
        Self::builder(bbox, text, font, font_size)
            .width_of_space(width_of_space)
            .build()
    }

    /// Synthetic space run covering `bbox`, styled like `like`.
    pub(crate) fn space_like(like: &GlyphRun, bbox: BBox) -> Self {
        GlyphRun {
            bbox,
            text: " ".to_string(),
            font: like.font.clone(),
            font_size: like.font_size,
            width_of_space: like.width_of_space,
            direction: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn width_of_space(&self) -> f64 {
        self.width_of_space
    }

    pub fn direction(&self) -> Option<f64> {
        self.direction
    }

    pub(crate) fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Character count of the text, at least 1 so it can divide a width.
    pub(crate) fn char_count(&self) -> usize {
        self.text.chars().count().max(1)
    }
}

impl HasBBox for GlyphRun {
    fn bbox(&self) -> BBox {
        self.bbox
    }
}

impl HasText for GlyphRun {
    fn text(&self) -> String {
        self.text.clone()
    }
}
