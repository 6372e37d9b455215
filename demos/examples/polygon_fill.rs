// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon scan conversion.
//!
//! Fill a self-intersecting star under both fill rules and render the
//! result as ASCII art.
//!
//! Run:
//! - `cargo run -p bracken_demos --example polygon_fill`

use bracken_region::{FillRule, Point, Rect, Region};

fn render(region: &Region, bounds: Rect, step: i32) {
    let mut y = bounds.y0;
    while y < bounds.y1 {
        let mut line = String::new();
        let mut x = bounds.x0;
        while x < bounds.x1 {
            line.push(if region.contains_point(x, y) { '#' } else { '.' });
            x += step;
        }
        println!("{line}");
        y += step;
    }
}

fn main() {
    let star = [
        Point::new(50, 0),
        Point::new(79, 91),
        Point::new(2, 35),
        Point::new(98, 35),
        Point::new(21, 91),
    ];

    for rule in [FillRule::EvenOdd, FillRule::Winding] {
        let region = Region::from_polygon(&star, rule);
        println!("{rule:?}: clip box {:?}", region.bounding_rect());
        render(&region, Rect::new(0, 0, 100, 92), 4);
        println!();
    }

    let even_odd = Region::from_polygon(&star, FillRule::EvenOdd);
    let winding = Region::from_polygon(&star, FillRule::Winding);
    // The rules differ exactly in the doubly-wound center pentagon
    let pentagon = winding.subtract(&even_odd);
    println!("center pentagon rects: {}", pentagon.to_rects().len());
    assert!(pentagon.contains_point(50, 50));
    assert!(!even_odd.contains_point(50, 50));
}
