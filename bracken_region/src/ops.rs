// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boolean set operations: a band-synchronized sweep over two regions.

use alloc::vec::Vec;

use crate::region::{Band, Region, Span, push_band, push_span};

/// Which boolean combination a sweep computes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Union,
    Intersect,
    Subtract,
    Xor,
}

impl Op {
    /// Whether a point covered by `in_a` / `in_b` belongs to the result.
    const fn keeps(self, in_a: bool, in_b: bool) -> bool {
        match self {
            Self::Union => in_a || in_b,
            Self::Intersect => in_a && in_b,
            Self::Subtract => in_a && !in_b,
            Self::Xor => in_a != in_b,
        }
    }
}

/// Combine two regions.
///
/// The y-axis is cut at every band boundary of either input; each resulting
/// elementary strip gets the two inputs' covering span lists merged with a
/// single linear pass. Output bands coalesce with their predecessor when
/// they y-abut with an identical span list, so the result is canonical.
pub(crate) fn combine(a: &Region, b: &Region, op: Op) -> Region {
    // Empty operands have trivial answers; skip the sweep.
    if a.is_empty() {
        return match op {
            Op::Union | Op::Xor => b.clone(),
            Op::Intersect | Op::Subtract => Region::new(),
        };
    }
    if b.is_empty() {
        return match op {
            Op::Union | Op::Xor | Op::Subtract => a.clone(),
            Op::Intersect => Region::new(),
        };
    }

    let mut out: Vec<Band> = Vec::new();
    let mut ia = 0;
    let mut ib = 0;
    // Bottom of the previously emitted strip.
    let mut y = i32::MIN;
    loop {
        while ia < a.bands.len() && a.bands[ia].y1 <= y {
            ia += 1;
        }
        while ib < b.bands.len() && b.bands[ib].y1 <= y {
            ib += 1;
        }
        let na = a.bands.get(ia);
        let nb = b.bands.get(ib);
        match op {
            // Once one side runs out, nothing further can intersect.
            Op::Intersect if na.is_none() || nb.is_none() => break,
            // Nothing left to subtract from.
            Op::Subtract if na.is_none() => break,
            _ => {}
        }
        let y0 = match (na, nb) {
            (Some(ba), Some(bb)) => ba.y0.max(y).min(bb.y0.max(y)),
            (Some(ba), None) => ba.y0.max(y),
            (None, Some(bb)) => bb.y0.max(y),
            (None, None) => break,
        };
        // The strip ends at the nearest boundary past y0 on either side.
        let mut y1 = i32::MAX;
        if let Some(band) = na {
            y1 = y1.min(if band.y0 > y0 { band.y0 } else { band.y1 });
        }
        if let Some(band) = nb {
            y1 = y1.min(if band.y0 > y0 { band.y0 } else { band.y1 });
        }
        let sa = na
            .filter(|band| band.y0 <= y0)
            .map_or(&[][..], |band| &band.spans[..]);
        let sb = nb
            .filter(|band| band.y0 <= y0)
            .map_or(&[][..], |band| &band.spans[..]);
        let mut spans = Vec::new();
        merge_spans(sa, sb, op, &mut spans);
        push_band(&mut out, y0, y1, spans);
        y = y1;
    }
    let result = Region { bands: out };
    debug_assert!(result.is_valid(), "combine must uphold region invariants");
    result
}

/// Linear merge of two sorted span lists under `op`.
///
/// Both inputs are sorted and strictly separated, so their boundaries form
/// a strictly increasing event sequence; at each event the membership state
/// of one or both sides flips, and the output opens or closes a span
/// whenever the kept-state changes.
fn merge_spans(a: &[Span], b: &[Span], op: Op, out: &mut Vec<Span>) {
    let mut ia = 0;
    let mut ib = 0;
    let mut in_a = false;
    let mut in_b = false;
    let mut start = 0;
    loop {
        let xa = a.get(ia).map(|s| if in_a { s.x1 } else { s.x0 });
        let xb = b.get(ib).map(|s| if in_b { s.x1 } else { s.x0 });
        let x = match (xa, xb) {
            (Some(p), Some(q)) => p.min(q),
            (Some(p), None) => p,
            (None, Some(q)) => q,
            (None, None) => break,
        };
        let before = op.keeps(in_a, in_b);
        if xa == Some(x) {
            if in_a {
                ia += 1;
            }
            in_a = !in_a;
        }
        if xb == Some(x) {
            if in_b {
                ib += 1;
            }
            in_b = !in_b;
        }
        let after = op.keeps(in_a, in_b);
        if after && !before {
            start = x;
        } else if before && !after {
            push_span(out, start, x);
        }
    }
}
