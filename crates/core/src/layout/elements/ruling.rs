//! Vertical ruling lines consumed by the word merger.

use crate::utils::HasBBox;

/// A vertical ruling line (typically a table border) at `x`, spanning
/// `top..bottom`. Detected elsewhere; only read here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ruling {
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Ruling {
    pub fn vertical(x: f64, top: f64, bottom: f64) -> Self {
        Self {
            x,
            top: top.min(bottom),
            bottom: top.max(bottom),
        }
    }

    /// Returns true if `obj` and the ruling share a positive vertical extent.
    pub fn vertically_overlaps<T: HasBBox>(&self, obj: &T) -> bool {
        (obj.bottom().min(self.bottom) - obj.top().max(self.top)).max(0.0) > 0.0
    }

    /// Returns true if the ruling separates `a` and `b`: both overlap it
    /// vertically and its x lies strictly between their left edges.
    pub fn crosses<A: HasBBox, B: HasBBox>(&self, a: &A, b: &B) -> bool {
        if !(self.vertically_overlaps(a) && self.vertically_overlaps(b)) {
            return false;
        }
        let (xa, xb) = (a.left(), b.left());
        (xa < self.x && self.x < xb) || (xb < self.x && self.x < xa)
    }
}
