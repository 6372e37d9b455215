// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region algebra basics.
//!
//! Build regions from rectangles, combine them, and run queries.
//!
//! Run:
//! - `cargo run -p bracken_demos --example region_basics`

use bracken_region::{Overlap, Rect, Region};

fn main() {
    // Two overlapping squares
    let a = Region::from_rect(Rect::new(0, 0, 10, 10));
    let b = Region::from_rect(Rect::new(5, 5, 15, 15));

    let union = a.union(&b);
    println!("union clip box: {:?}", union.bounding_rect());
    println!("union rects:");
    for r in union.rects() {
        println!("  {r:?}");
    }
    assert_eq!(union.to_rects().len(), 3, "two offset squares make 3 bands");

    let overlap = a.intersect(&b);
    println!("overlap: {:?}", overlap.to_rects());
    assert_eq!(overlap, Region::from_rect(Rect::new(5, 5, 10, 10)));

    // Punch the overlap back out of the union
    let mut ring = union.clone();
    ring.subtract_with(&overlap);
    println!("ring contains (7,7): {}", ring.contains_point(7, 7));
    assert!(!ring.contains_point(7, 7));

    // Classify rectangles against the ring
    for probe in [
        Rect::new(1, 1, 4, 4),
        Rect::new(6, 6, 9, 9),
        Rect::new(0, 0, 15, 15),
    ] {
        let class = ring.rect_overlap(probe);
        println!("{probe:?} -> {class:?}");
    }
    assert_eq!(ring.rect_overlap(Rect::new(1, 1, 4, 4)), Overlap::Inside);
    assert_eq!(ring.rect_overlap(Rect::new(6, 6, 9, 9)), Overlap::Outside);
}
