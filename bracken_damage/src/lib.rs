// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_damage --heading-base-level=0

//! Bracken Damage: a Kurbo-facing damage accumulator for repaint tracking.
//!
//! A [`DamageTracker`] collects invalidated areas of a surface between
//! paints. Callers mark damage in Kurbo's `f64` coordinates (or directly as
//! integer regions); the tracker rounds outward to the integer grid, clips
//! to the surface, and accumulates everything into a single canonical
//! [`Region`]. At paint time, [`DamageTracker::take`] drains the
//! accumulated damage as a set of disjoint rectangles to repaint.
//!
//! Because the region representation coalesces as it goes, overlapping and
//! abutting invalidations collapse instead of piling up, and a
//! full-surface invalidation short-circuits all further marking until the
//! next take.
//!
//! # Example
//!
//! ```rust
//! use bracken_damage::DamageTracker;
//! use bracken_region::Rect;
//!
//! let mut damage = DamageTracker::new(800, 600);
//!
//! // A fresh surface needs a first full paint.
//! assert_eq!(damage.take().bounding_rect(), Rect::new(0, 0, 800, 600));
//!
//! // A widget moved: its old and new positions are both dirty.
//! damage.mark_rect(kurbo::Rect::new(10.0, 10.0, 60.5, 40.0));
//! damage.mark_rect(kurbo::Rect::new(30.0, 10.0, 80.0, 40.0));
//!
//! let region = damage.take();
//! assert_eq!(region.to_rects(), vec![Rect::new(10, 10, 80, 40)]);
//! assert!(damage.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`; enable the `std` feature
//! (default) or `libm` to pick Kurbo's float backend.

#![no_std]

extern crate alloc;

use bracken_region::{Rect, Region};

/// Accumulates invalidated areas of one surface between paints.
///
/// The tracker owns a clip rectangle (the surface) and a pending damage
/// [`Region`]; everything marked is clipped to the surface. A
/// full-surface mark is tracked as a flag so that subsequent marks are
/// free, the same way tile-based dirty trackers short-circuit on "all
/// dirty".
#[derive(Clone, Debug)]
pub struct DamageTracker {
    surface: Rect,
    pending: Region,
    full: bool,
}

impl DamageTracker {
    /// Create a tracker for a `width` x `height` surface at the origin.
    ///
    /// The new tracker starts fully damaged: a fresh surface has never
    /// been painted.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_surface(Rect::new(0, 0, width, height))
    }

    /// Create a tracker clipping damage to an arbitrary surface rectangle.
    pub fn with_surface(surface: Rect) -> Self {
        Self {
            surface,
            pending: Region::new(),
            full: true,
        }
    }

    /// The surface rectangle damage is clipped to.
    pub fn surface(&self) -> Rect {
        self.surface
    }

    /// Resize the surface. Discards pending damage and marks everything,
    /// since resized surfaces need a full repaint anyway.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.surface = Rect::new(
            self.surface.x0,
            self.surface.y0,
            self.surface.x0 + width,
            self.surface.y0 + height,
        );
        self.pending = Region::new();
        self.full = true;
    }

    /// Mark the whole surface as damaged.
    pub fn mark_all(&mut self) {
        self.pending = Region::new();
        self.full = true;
    }

    /// Mark a Kurbo rectangle as damaged.
    ///
    /// The rectangle is rounded outward to the integer grid, so fractional
    /// damage never under-reports. Empty and off-surface rectangles are
    /// ignored.
    pub fn mark_rect(&mut self, rect: kurbo::Rect) {
        if self.full {
            return;
        }
        let clipped = round_out(rect).intersect(&self.surface);
        self.pending.union_with(&Region::from_rect(clipped));
    }

    /// Mark an integer region as damaged, clipped to the surface.
    pub fn mark_region(&mut self, region: &Region) {
        if self.full {
            return;
        }
        let clipped = region.intersect(&Region::from_rect(self.surface));
        self.pending.union_with(&clipped);
    }

    /// True if nothing needs repainting.
    pub fn is_empty(&self) -> bool {
        !self.full && self.pending.is_empty()
    }

    /// The bounding box of pending damage, in Kurbo coordinates.
    pub fn bounding_box(&self) -> Option<kurbo::Rect> {
        if self.full {
            return Some(to_kurbo(self.surface));
        }
        if self.pending.is_empty() {
            return None;
        }
        Some(to_kurbo(self.pending.bounding_rect()))
    }

    /// Drain the accumulated damage, leaving the tracker clean.
    ///
    /// Returns the region to repaint; decompose it with
    /// [`Region::rects`] or [`Region::to_rects`].
    pub fn take(&mut self) -> Region {
        if self.full {
            self.full = false;
            self.pending = Region::new();
            return Region::from_rect(self.surface);
        }
        core::mem::take(&mut self.pending)
    }
}

/// Round a Kurbo rectangle outward to the integer grid.
fn round_out(rect: kurbo::Rect) -> Rect {
    // `expand` rounds each coordinate away from the center, which for a
    // non-inverted rect is floor(min)/ceil(max).
    let r = rect.expand();
    const LO: f64 = i32::MIN as f64;
    const HI: f64 = i32::MAX as f64;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Coordinates are clamped to i32 range before the cast."
    )]
    Rect::new(
        r.x0.clamp(LO, HI) as i32,
        r.y0.clamp(LO, HI) as i32,
        r.x1.clamp(LO, HI) as i32,
        r.y1.clamp(LO, HI) as i32,
    )
}

fn to_kurbo(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        f64::from(rect.x0),
        f64::from(rect.y0),
        f64::from(rect.x1),
        f64::from(rect.y1),
    )
}
