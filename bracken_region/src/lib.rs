// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_region --heading-base-level=0

//! Bracken Region: a banded integer region algebra.
//!
//! A [`Region`] is an arbitrary 2D point set, possibly disjoint and
//! possibly non-rectangular, stored as a union of non-overlapping
//! rectangles in sorted-band form. This is the classic structure windowing systems use
//! for clipping and damage tracking.
//!
//! - Build regions from rectangles or by scan-converting polygons
//!   ([`Region::from_polygon`], [`FillRule`]).
//! - Combine them with the full boolean algebra: union, intersection,
//!   difference, symmetric difference.
//! - Query point membership, classify rectangle overlap, take the bounding
//!   rectangle, or decompose back into disjoint rectangles.
//!
//! The representation is canonical: every operation merges abutting spans
//! and coalesces y-abutting bands with identical span lists, so two regions
//! cover the same point set if and only if they compare equal. All
//! coordinates are `i32` with half-open intervals on both axes; there is no
//! floating-point tolerance anywhere.
//!
//! # Example
//!
//! ```rust
//! use bracken_region::{FillRule, Overlap, Point, Rect, Region};
//!
//! // Two overlapping squares.
//! let a = Region::from_rect(Rect::new(0, 0, 10, 10));
//! let b = Region::from_rect(Rect::new(5, 5, 15, 15));
//!
//! // Their union decomposes into three disjoint rectangles.
//! let u = a.union(&b);
//! assert_eq!(u.bounding_rect(), Rect::new(0, 0, 15, 15));
//! assert_eq!(u.to_rects().len(), 3);
//!
//! // Subtraction leaves an L-shape that a hole-sized rect only grazes.
//! let l = a.subtract(&b);
//! assert_eq!(l.rect_overlap(Rect::new(0, 0, 5, 5)), Overlap::Inside);
//! assert_eq!(l.rect_overlap(Rect::new(6, 6, 9, 9)), Overlap::Outside);
//!
//! // Polygon fill: a triangle contains its centroid.
//! let tri = [Point::new(0, 0), Point::new(10, 0), Point::new(5, 10)];
//! let t = Region::from_polygon(&tri, FillRule::EvenOdd);
//! assert!(t.contains_point(5, 3));
//! ```
//!
//! ## Performance notes
//!
//! Boolean operations run in O((B₁ + B₂) · (S₁ + S₂)) for band counts B and
//! per-band span counts S: one synchronized sweep over the y-boundaries of
//! both inputs, with a linear two-cursor merge per elementary strip. Point
//! queries are a double binary search. Translation is a plain O(n) shift.
//!
//! Regions are plain owned values: cloning deep-copies the band storage and
//! no two regions ever alias. If you mutate from multiple threads, use
//! disjoint instances; there is no internal locking.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod ops;
mod poly;
mod rect;
mod region;

pub use poly::FillRule;
pub use rect::{Overlap, Point, Rect};
pub use region::Region;
