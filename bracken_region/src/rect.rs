// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: integer rectangles and points.

/// Axis-aligned integer rectangle, half-open on both axes.
///
/// Covers the points `(x, y)` with `x0 <= x < x1` and `y0 <= y < y1`.
/// A rectangle with `x1 <= x0` or `y1 <= y0` is empty and covers nothing;
/// region constructors normalize such inputs to the empty region rather
/// than treating them as errors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Minimum x (left).
    pub x0: i32,
    /// Minimum y (top).
    pub y0: i32,
    /// Maximum x (right, exclusive).
    pub x1: i32,
    /// Maximum y (bottom, exclusive).
    pub y1: i32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle from min/max corners.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a rectangle from origin and size.
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + w,
            y1: y + h,
        }
    }

    /// Width. Negative for malformed rectangles.
    pub const fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    /// Height. Negative for malformed rectangles.
    pub const fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// True if this rectangle covers no points.
    pub const fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Whether this rectangle contains the point.
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }

    /// The intersection of two rectangles. May be empty (possibly inverted).
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    /// The smallest rectangle covering both inputs.
    ///
    /// An empty operand does not contribute; the union of two empty
    /// rectangles is [`Rect::ZERO`].
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            if other.is_empty() { Self::ZERO } else { *other }
        } else if other.is_empty() {
            *self
        } else {
            Self {
                x0: self.x0.min(other.x0),
                y0: self.y0.min(other.y0),
                x1: self.x1.max(other.x1),
                y1: self.y1.max(other.y1),
            }
        }
    }

    /// Translate by `(dx, dy)`.
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
        }
    }
}

/// A point on the integer grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Result of classifying a rectangle against a region.
///
/// See [`Region::rect_overlap`](crate::Region::rect_overlap).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// The rectangle shares no points with the region.
    Outside,
    /// Every point of the rectangle is inside the region.
    Inside,
    /// The rectangle is partially covered.
    Partial,
}
