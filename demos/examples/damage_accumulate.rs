// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage accumulation.
//!
//! Track dirty areas across simulated frames and drain them for repaint.
//!
//! Run:
//! - `cargo run -p bracken_demos --example damage_accumulate`

use bracken_damage::DamageTracker;
use bracken_region::Rect;

fn main() {
    let mut damage = DamageTracker::new(800, 600);

    // Frame 0: first paint covers the whole surface
    let first = damage.take();
    println!("frame 0 repaints {:?}", first.bounding_rect());
    assert_eq!(first.bounding_rect(), Rect::new(0, 0, 800, 600));

    // Frame 1: a widget moves; old and new bounds are both dirty
    damage.mark_rect(kurbo::Rect::new(100.0, 100.0, 160.5, 140.0));
    damage.mark_rect(kurbo::Rect::new(120.0, 100.0, 180.0, 140.0));
    // A tooltip fades near the corner, partially off-surface
    damage.mark_rect(kurbo::Rect::new(760.0, 580.0, 840.0, 640.0));

    println!("pending bbox: {:?}", damage.bounding_box());
    let frame1 = damage.take();
    println!("frame 1 repaints:");
    for r in frame1.rects() {
        println!("  {r:?}");
    }
    // Fractional move coalesced into one rect, tooltip clipped
    assert_eq!(
        frame1.to_rects(),
        vec![Rect::new(100, 100, 180, 140), Rect::new(760, 580, 800, 600)]
    );

    // Frame 2: nothing happened
    assert!(damage.is_empty());
    println!("frame 2 repaints nothing: {}", damage.take().is_empty());

    // A resize forces a full repaint
    damage.resize(1024, 768);
    let resized = damage.take();
    println!("after resize: {:?}", resized.bounding_rect());
    assert_eq!(resized.bounding_rect(), Rect::new(0, 0, 1024, 768));
}
