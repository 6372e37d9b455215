// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scanline polygon fill: converting a closed outline into a region.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::rect::Point;
use crate::region::{Region, push_band, push_span};

/// How self-overlapping areas of a polygon outline are filled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// A point is filled if a ray from it crosses the outline an odd
    /// number of times.
    #[default]
    EvenOdd,
    /// A point is filled if the outline's signed winding number around it
    /// is non-zero.
    Winding,
}

/// One non-horizontal polygon edge, normalized to point downward.
///
/// The edge participates in scanline `y` iff `y_top <= y < y_bot`
/// (top-closed, bottom-open), so a vertex shared by two edges is counted
/// exactly once. Its crossing with scanline `y` is the exact rational
/// `x_top + (y - y_top) * dx / dy`.
#[derive(Clone, Debug)]
struct Edge {
    y_top: i32,
    y_bot: i32,
    x_top: i32,
    dx: i64,
    dy: i64,
    /// +1 if the input edge pointed downward, -1 if upward.
    dir: i32,
}

/// An edge/scanline crossing `q + r/den` with `0 <= r < den`.
#[derive(Clone, Debug)]
struct Crossing {
    q: i64,
    r: i64,
    den: i64,
    dir: i32,
}

impl Crossing {
    /// The first pixel boundary at or right of the crossing.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Crossings on an active scanline lie between the edge's i32 endpoints."
    )]
    fn px(&self) -> i32 {
        (self.q + i64::from(self.r != 0)) as i32
    }
}

fn cmp_crossing(a: &Crossing, b: &Crossing) -> Ordering {
    a.q.cmp(&b.q).then_with(|| {
        (i128::from(a.r) * i128::from(b.den)).cmp(&(i128::from(b.r) * i128::from(a.den)))
    })
}

/// Scan-convert a closed polygon.
///
/// See [`Region::from_polygon`] for the public contract.
pub(crate) fn fill_polygon(points: &[Point], fill_rule: FillRule) -> Region {
    if points.len() < 3 {
        return Region::new();
    }
    let mut edges: Vec<Edge> = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        // Horizontal edges contribute no scanline crossings.
        match p.y.cmp(&q.y) {
            Ordering::Equal => {}
            Ordering::Less => edges.push(Edge {
                y_top: p.y,
                y_bot: q.y,
                x_top: p.x,
                dx: i64::from(q.x) - i64::from(p.x),
                dy: i64::from(q.y) - i64::from(p.y),
                dir: 1,
            }),
            Ordering::Greater => edges.push(Edge {
                y_top: q.y,
                y_bot: p.y,
                x_top: q.x,
                dx: i64::from(p.x) - i64::from(q.x),
                dy: i64::from(p.y) - i64::from(q.y),
                dir: -1,
            }),
        }
    }
    if edges.is_empty() {
        return Region::new();
    }
    edges.sort_unstable_by_key(|e| e.y_top);
    let y_min = edges[0].y_top;
    let y_max = edges.iter().map(|e| e.y_bot).max().unwrap_or(y_min);

    let mut region = Region::new();
    let mut active: Vec<Edge> = Vec::new();
    let mut crossings: Vec<Crossing> = Vec::new();
    let mut next = 0;
    for y in y_min..y_max {
        while next < edges.len() && edges[next].y_top <= y {
            active.push(edges[next].clone());
            next += 1;
        }
        active.retain(|e| e.y_bot > y);

        crossings.clear();
        for e in &active {
            let num = i128::from(e.x_top) * i128::from(e.dy)
                + (i128::from(y) - i128::from(e.y_top)) * i128::from(e.dx);
            let den = i128::from(e.dy);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Quotient and remainder of an on-edge crossing fit i64 by construction."
            )]
            crossings.push(Crossing {
                q: num.div_euclid(den) as i64,
                r: num.rem_euclid(den) as i64,
                den: e.dy,
                dir: e.dir,
            });
        }
        crossings.sort_unstable_by(cmp_crossing);

        let mut spans = Vec::new();
        match fill_rule {
            FillRule::EvenOdd => {
                // A closed outline always produces an even crossing count.
                for pair in crossings.chunks_exact(2) {
                    push_span(&mut spans, pair[0].px(), pair[1].px());
                }
            }
            FillRule::Winding => {
                let mut count = 0;
                let mut open = 0;
                for c in &crossings {
                    if count == 0 {
                        open = c.px();
                    }
                    count += c.dir;
                    if count == 0 {
                        push_span(&mut spans, open, c.px());
                    }
                }
            }
        }
        push_band(&mut region.bands, y, y + 1, spans);
    }
    debug_assert!(region.is_valid(), "polygon fill must uphold region invariants");
    region
}
