//! Geometry primitives and shared traits.
//!
//! Provides:
//! - `BBox`, an axis-aligned box in top-left-origin page space
//! - `HasBBox` / `HasText` traits shared by glyph runs, words, lines and cells
//! - Float comparison helpers and the tolerant vertical overlap test
//! - The "ill-defined" reading order used to sort words inside a cell

use std::cmp::Ordering;

/// Tolerance for approximate float equality of page coordinates.
pub const FEQ_EPSILON: f64 = 0.01;

/// Compares two floats for approximate equality within `FEQ_EPSILON`.
#[inline]
pub fn feq(a: f64, b: f64) -> bool {
    (a - b).abs() < FEQ_EPSILON
}

/// Returns true if `second` is within `variance` of `first` (exclusive).
#[inline]
pub fn within(first: f64, second: f64, variance: f64) -> bool {
    second < first + variance && second > first - variance
}

/// Tolerant vertical overlap of two spans given by their bottom edge and height.
///
/// The spans overlap when their bottoms are within `variance` of each other or
/// when either bottom lies inside the other span.
pub fn overlap(y1: f64, height1: f64, y2: f64, height2: f64, variance: f64) -> bool {
    within(y1, y2, variance) || (y2 <= y1 && y2 >= y1 - height1) || (y1 <= y2 && y1 >= y2 - height2)
}

/// An `(x, y)` page coordinate.
pub type Point = (f64, f64);

/// An axis-aligned bounding box. `top < bottom` since y grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Builds a box from its top-left corner and extent.
    pub fn from_xywh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Returns true if `other` lies entirely inside this box (edges inclusive).
    pub fn contains(&self, other: &BBox) -> bool {
        other.x0 >= self.x0 && other.x1 <= self.x1 && other.top >= self.top && other.bottom <= self.bottom
    }

    /// Height of the vertical intersection, 0 when disjoint.
    pub fn vertical_overlap(&self, other: &BBox) -> f64 {
        (self.bottom.min(other.bottom) - self.top.max(other.top)).max(0.0)
    }

    pub fn vertically_overlaps(&self, other: &BBox) -> bool {
        self.vertical_overlap(other) > 0.0
    }

    /// Vertical overlap relative to the smaller of the two heights.
    pub fn vertical_overlap_ratio(&self, other: &BBox) -> f64 {
        let delta = self.height().min(other.height());
        let (a, b) = (self, other);

        let overlap = if b.top <= a.top && a.top <= b.bottom && b.bottom <= a.bottom {
            b.bottom - a.top
        } else if a.top <= b.top && b.top <= a.bottom && a.bottom <= b.bottom {
            a.bottom - b.top
        } else if a.top <= b.top && b.top <= b.bottom && b.bottom <= a.bottom {
            b.bottom - b.top
        } else if b.top <= a.top && a.top <= a.bottom && a.bottom <= b.bottom {
            a.bottom - a.top
        } else {
            return 0.0;
        };

        if delta <= 0.0 {
            return 0.0;
        }
        overlap / delta
    }

    /// Intersection area over union area.
    pub fn overlap_ratio(&self, other: &BBox) -> f64 {
        let iw = (self.x1.min(other.x1) - self.x0.max(other.x0)).max(0.0);
        let ih = (self.bottom.min(other.bottom) - self.top.max(other.top)).max(0.0);
        let intersection = iw * ih;
        let union = self.area() + other.area() - intersection;
        if union <= 0.0 {
            return 0.0;
        }
        intersection / union
    }
}

/// Union of all boxes, or `None` for an empty iterator.
pub fn bounding_box_of<'a, T, I>(items: I) -> Option<BBox>
where
    T: HasBBox + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| item.bbox())
        .reduce(|acc, b| acc.union(&b))
}

/// Anything positioned on the page.
pub trait HasBBox {
    fn bbox(&self) -> BBox;

    fn left(&self) -> f64 {
        self.bbox().x0
    }

    fn right(&self) -> f64 {
        self.bbox().x1
    }

    fn top(&self) -> f64 {
        self.bbox().top
    }

    fn bottom(&self) -> f64 {
        self.bbox().bottom
    }

    fn width(&self) -> f64 {
        self.bbox().width()
    }

    fn height(&self) -> f64 {
        self.bbox().height()
    }
}

impl HasBBox for BBox {
    fn bbox(&self) -> BBox {
        *self
    }
}

/// A positioned container that renders to text.
pub trait HasText: HasBBox {
    fn text(&self) -> String;

    /// Text with optional line-break markers. Containers without an inner
    /// line structure ignore the flag.
    fn text_with_breaks(&self, _include_line_breaks: bool) -> String {
        self.text()
    }

    /// Greater for LTR-dominant content, Less for RTL-dominant, Equal when
    /// neither dominates.
    fn ltr_dominance(&self) -> Ordering {
        Ordering::Equal
    }
}

/// Minimum absolute vertical overlap for two boxes to compare by x.
const VERTICAL_COMPARISON_THRESHOLD: f64 = 0.4;

/// Loose reading order: side by side when boxes overlap vertically, else by
/// bottom edge.
///
/// Not a total order (vertical overlap is not transitive), so it must only be
/// used with [`stable_sort_by`].
pub fn ill_defined_order<T: HasText>(a: &T, b: &T) -> Ordering {
    let (ba, bb) = (a.bbox(), b.bbox());
    if ba == bb {
        return Ordering::Equal;
    }
    if ba.vertical_overlap(&bb) > VERTICAL_COMPARISON_THRESHOLD {
        let both_rtl = a.ltr_dominance() == Ordering::Less && b.ltr_dominance() == Ordering::Less;
        let by_x = ba.x0.total_cmp(&bb.x0);
        if both_rtl { by_x.reverse() } else { by_x }
    } else {
        ba.bottom.total_cmp(&bb.bottom)
    }
}

/// Stable insertion sort that accepts comparators which are not total orders.
///
/// `slice::sort_by` may panic on inconsistent comparators; this never does and
/// gives the same result as any stable sort when the comparator is consistent.
pub fn stable_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
