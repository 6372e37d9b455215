// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The banded region container and its point/rect queries.

use alloc::vec;
use alloc::vec::Vec;

use crate::ops::{self, Op};
use crate::poly;
use crate::rect::{Overlap, Point, Rect};

/// One x-interval `[x0, x1)` within a band.
///
/// Within a band, spans are sorted ascending and strictly separated:
/// `spans[i + 1].x0 > spans[i].x1`. Abutting spans are always merged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Span {
    pub(crate) x0: i32,
    pub(crate) x1: i32,
}

/// A horizontal strip `[y0, y1)` with a non-empty sorted span list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Band {
    pub(crate) y0: i32,
    pub(crate) y1: i32,
    pub(crate) spans: Vec<Span>,
}

/// A 2D point set stored as y-sorted bands of disjoint x-spans.
///
/// This is the classic clipping/damage-region structure: an arbitrary
/// (possibly disjoint, possibly non-rectangular) area is represented as a
/// union of non-overlapping rectangles, grouped into horizontal bands that
/// share an x-structure. The representation is canonical: every operation
/// maintains two coalescing invariants (abutting spans in a band are
/// merged, and y-abutting bands with identical span lists are merged into
/// one taller band), so two regions cover the same point set if and only
/// if they compare equal.
///
/// Boolean operations come in a pure form (`union`, `intersect`,
/// `subtract`, `xor`) and an in-place form (`union_with`, ...) that
/// replaces the receiver's contents.
///
/// # Example
///
/// ```
/// use bracken_region::{Rect, Region};
///
/// let a = Region::from_rect(Rect::new(0, 0, 10, 10));
/// let b = Region::from_rect(Rect::new(5, 5, 15, 15));
///
/// let both = a.intersect(&b);
/// assert_eq!(both, Region::from_rect(Rect::new(5, 5, 10, 10)));
///
/// let either = a.union(&b);
/// assert_eq!(either.bounding_rect(), Rect::new(0, 0, 15, 15));
/// assert_eq!(either.to_rects().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub(crate) bands: Vec<Band>,
}

impl Region {
    /// Create an empty region.
    pub const fn new() -> Self {
        Self { bands: Vec::new() }
    }

    /// Create a region covering a single rectangle.
    ///
    /// Empty (or malformed, negative-extent) rectangles yield the empty
    /// region.
    pub fn from_rect(rect: Rect) -> Self {
        if rect.is_empty() {
            return Self::new();
        }
        Self {
            bands: vec![Band {
                y0: rect.y0,
                y1: rect.y1,
                spans: vec![Span {
                    x0: rect.x0,
                    x1: rect.x1,
                }],
            }],
        }
    }

    /// Scan-convert a closed polygon into a region.
    ///
    /// The outline is the point sequence with an implicit closing edge from
    /// the last point back to the first. See [`FillRule`](crate::FillRule)
    /// for how self-intersecting outlines are filled. Fewer than three
    /// points yield the empty region.
    pub fn from_polygon(points: &[Point], fill_rule: crate::FillRule) -> Self {
        poly::fill_polygon(points, fill_rule)
    }

    /// True if this region covers no points.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// The bounding rectangle (clip box) of the region.
    ///
    /// Computed in O(bands). The empty region yields [`Rect::ZERO`].
    pub fn bounding_rect(&self) -> Rect {
        let (Some(first), Some(last)) = (self.bands.first(), self.bands.last()) else {
            return Rect::ZERO;
        };
        let mut x0 = i32::MAX;
        let mut x1 = i32::MIN;
        for band in &self.bands {
            if let (Some(l), Some(r)) = (band.spans.first(), band.spans.last()) {
                x0 = x0.min(l.x0);
                x1 = x1.max(r.x1);
            }
        }
        Rect::new(x0, first.y0, x1, last.y1)
    }

    /// The constituent disjoint rectangles, in band order (top to bottom,
    /// left to right within a band).
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.bands.iter().flat_map(|band| {
            band.spans
                .iter()
                .map(move |s| Rect::new(s.x0, band.y0, s.x1, band.y1))
        })
    }

    /// The constituent disjoint rectangles, collected.
    pub fn to_rects(&self) -> Vec<Rect> {
        self.rects().collect()
    }

    /// Whether the region contains the point.
    ///
    /// Binary search on bands, then on spans: O(log bands + log spans).
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        let idx = self.bands.partition_point(|b| b.y1 <= y);
        let Some(band) = self.bands.get(idx) else {
            return false;
        };
        if band.y0 > y {
            return false;
        }
        let sidx = band.spans.partition_point(|s| s.x1 <= x);
        band.spans.get(sidx).is_some_and(|s| s.x0 <= x)
    }

    /// Classify a rectangle as fully inside, fully outside, or partially
    /// overlapping the region.
    pub fn rect_overlap(&self, rect: Rect) -> Overlap {
        if rect.is_empty() || self.is_empty() {
            return Overlap::Outside;
        }
        let mut some_in = false;
        let mut some_out = false;
        // Cursor through the rect's y extent; anything a band doesn't
        // reach is uncovered.
        let mut y = rect.y0;
        let start = self.bands.partition_point(|b| b.y1 <= rect.y0);
        for band in &self.bands[start..] {
            if band.y0 >= rect.y1 {
                break;
            }
            if band.y0 > y {
                some_out = true;
            }
            span_coverage(&band.spans, rect.x0, rect.x1, &mut some_in, &mut some_out);
            if some_in && some_out {
                return Overlap::Partial;
            }
            y = band.y1;
        }
        if y < rect.y1 {
            some_out = true;
        }
        match (some_in, some_out) {
            (true, true) => Overlap::Partial,
            (true, false) => Overlap::Inside,
            (false, _) => Overlap::Outside,
        }
    }

    /// Translate the region by `(dx, dy)` in place.
    ///
    /// O(n) coordinate shift with no restructuring. Coordinates must stay
    /// within `i32` range.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for band in &mut self.bands {
            band.y0 += dy;
            band.y1 += dy;
            for span in &mut band.spans {
                span.x0 += dx;
                span.x1 += dx;
            }
        }
    }

    /// The union of two regions: points covered by either.
    pub fn union(&self, other: &Self) -> Self {
        ops::combine(self, other, Op::Union)
    }

    /// The intersection of two regions: points covered by both.
    pub fn intersect(&self, other: &Self) -> Self {
        ops::combine(self, other, Op::Intersect)
    }

    /// The difference of two regions: points covered by `self` but not
    /// `other`.
    pub fn subtract(&self, other: &Self) -> Self {
        ops::combine(self, other, Op::Subtract)
    }

    /// The symmetric difference: points covered by exactly one operand.
    pub fn xor(&self, other: &Self) -> Self {
        ops::combine(self, other, Op::Xor)
    }

    /// Replace this region with its union with `other`.
    pub fn union_with(&mut self, other: &Self) {
        *self = self.union(other);
    }

    /// Replace this region with its intersection with `other`.
    pub fn intersect_with(&mut self, other: &Self) {
        *self = self.intersect(other);
    }

    /// Remove every point of `other` from this region.
    pub fn subtract_with(&mut self, other: &Self) {
        *self = self.subtract(other);
    }

    /// Replace this region with its symmetric difference with `other`.
    pub fn xor_with(&mut self, other: &Self) {
        *self = self.xor(other);
    }

    /// Structural invariant check, used by debug assertions and tests.
    pub(crate) fn is_valid(&self) -> bool {
        let mut prev: Option<&Band> = None;
        for band in &self.bands {
            if band.y1 <= band.y0 || band.spans.is_empty() {
                return false;
            }
            let mut prev_x1: Option<i32> = None;
            for span in &band.spans {
                if span.x1 <= span.x0 {
                    return false;
                }
                if let Some(px1) = prev_x1
                    && span.x0 <= px1
                {
                    return false;
                }
                prev_x1 = Some(span.x1);
            }
            if let Some(p) = prev {
                if band.y0 < p.y1 {
                    return false;
                }
                if band.y0 == p.y1 && p.spans == band.spans {
                    return false;
                }
            }
            prev = Some(band);
        }
        true
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

/// Record whether `[x0, x1)` is covered / uncovered by the span list.
fn span_coverage(spans: &[Span], x0: i32, x1: i32, some_in: &mut bool, some_out: &mut bool) {
    let mut x = x0;
    let start = spans.partition_point(|s| s.x1 <= x0);
    for span in &spans[start..] {
        if span.x0 >= x1 {
            break;
        }
        if span.x0 > x {
            *some_out = true;
        }
        *some_in = true;
        x = span.x1;
        if x >= x1 {
            break;
        }
    }
    if x < x1 {
        *some_out = true;
    }
}

/// Append a span to a band under construction, merging if it abuts the
/// previous one. Empty spans are dropped.
pub(crate) fn push_span(spans: &mut Vec<Span>, x0: i32, x1: i32) {
    if x1 <= x0 {
        return;
    }
    if let Some(last) = spans.last_mut()
        && last.x1 == x0
    {
        last.x1 = x1;
        return;
    }
    spans.push(Span { x0, x1 });
}

/// Append a band to a region under construction, extending the previous
/// band instead when it y-abuts and carries the same span list. Empty
/// strips are dropped.
pub(crate) fn push_band(bands: &mut Vec<Band>, y0: i32, y1: i32, spans: Vec<Span>) {
    if y1 <= y0 || spans.is_empty() {
        return;
    }
    if let Some(last) = bands.last_mut()
        && last.y1 == y0
        && last.spans == spans
    {
        last.y1 = y1;
        return;
    }
    bands.push(Band { y0, y1, spans });
}
