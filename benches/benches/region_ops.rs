// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use bracken_region::{FillRule, Point, Rect, Region};

struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u64) -> i32 {
        (self.next_u64() % n) as i32
    }
}

/// A dense n x n grid of cells, unioned into one region.
fn gen_grid_region(n: i32, cell: i32, gap: i32) -> Region {
    let mut region = Region::new();
    for ty in 0..n {
        for tx in 0..n {
            let x0 = tx * (cell + gap);
            let y0 = ty * (cell + gap);
            region.union_with(&Region::from_rect(Rect::from_xywh(x0, y0, cell, cell)));
        }
    }
    region
}

/// One color of an n x n checkerboard; worst case for band fragmentation.
fn gen_checkerboard_region(n: i32, cell: i32, parity: i32) -> Region {
    let mut region = Region::new();
    for ty in 0..n {
        for tx in 0..n {
            if (tx + ty) % 2 == parity {
                region.union_with(&Region::from_rect(Rect::from_xywh(
                    tx * cell,
                    ty * cell,
                    cell,
                    cell,
                )));
            }
        }
    }
    region
}

fn gen_random_region(count: usize, side: u64, rng: &mut Rng) -> Region {
    let mut region = Region::new();
    for _ in 0..count {
        let x0 = rng.below(side);
        let y0 = rng.below(side);
        let w = 1 + rng.below(side / 4);
        let h = 1 + rng.below(side / 4);
        region.union_with(&Region::from_rect(Rect::from_xywh(x0, y0, w, h)));
    }
    region
}

fn gen_comb_polygon(teeth: i32, tooth_w: i32, tooth_h: i32) -> Vec<Point> {
    // A comb outline: teeth rising from a spine, producing many spans per
    // scanline in the tooth rows.
    let spine = tooth_w * 2;
    let mut points = Vec::new();
    for t in 0..teeth {
        let x = t * 2 * tooth_w;
        points.push(Point::new(x, 0));
        points.push(Point::new(x + tooth_w, 0));
        points.push(Point::new(x + tooth_w, tooth_h));
        points.push(Point::new(x + 2 * tooth_w, tooth_h));
    }
    points.push(Point::new(teeth * 2 * tooth_w, tooth_h + spine));
    points.push(Point::new(0, tooth_h + spine));
    points
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");
    for &n in &[8i32, 16, 32] {
        let a = gen_grid_region(n, 8, 4);
        let b = {
            let mut r = gen_grid_region(n, 8, 4);
            r.translate(6, 6);
            r
        };
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("offset_grids_n{}", n), |bench| {
            bench.iter(|| black_box(a.union(&b)));
        });
    }
    let black = gen_checkerboard_region(32, 4, 0);
    let white = gen_checkerboard_region(32, 4, 1);
    group.bench_function("checkerboard_halves", |bench| {
        bench.iter(|| black_box(black.union(&white)));
    });
    group.finish();
}

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");
    for &n in &[8i32, 16, 32] {
        let a = gen_grid_region(n, 8, 4);
        let b = {
            let mut r = gen_grid_region(n, 8, 4);
            r.translate(6, 6);
            r
        };
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("offset_grids_n{}", n), |bench| {
            bench.iter(|| black_box(a.intersect(&b)));
        });
    }
    group.finish();
}

fn bench_subtract_xor(c: &mut Criterion) {
    let mut group = c.benchmark_group("subtract_xor");
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let a = gen_random_region(256, 1024, &mut rng);
    let b = gen_random_region(256, 1024, &mut rng);
    group.bench_function("subtract_random_256", |bench| {
        bench.iter(|| black_box(a.subtract(&b)));
    });
    group.bench_function("xor_random_256", |bench| {
        bench.iter(|| black_box(a.xor(&b)));
    });
    group.finish();
}

fn bench_incremental_damage(c: &mut Criterion) {
    // The damage-tracking usage pattern: a long chain of small in-place
    // unions into one accumulator region.
    let mut group = c.benchmark_group("incremental_damage");
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let mut updates = Vec::with_capacity(512);
    for _ in 0..512 {
        let x0 = rng.below(2048);
        let y0 = rng.below(2048);
        updates.push(Rect::from_xywh(x0, y0, 1 + rng.below(64), 1 + rng.below(64)));
    }
    group.throughput(Throughput::Elements(updates.len() as u64));
    group.bench_function("union_with_512_rects", |bench| {
        bench.iter(|| {
            let mut acc = Region::new();
            for &r in &updates {
                acc.union_with(&Region::from_rect(r));
            }
            black_box(acc)
        });
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let region = gen_checkerboard_region(64, 4, 0);
    group.bench_function("contains_point_checkerboard", |bench| {
        let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
        bench.iter(|| {
            let x = rng.below(256);
            let y = rng.below(256);
            black_box(region.contains_point(x, y))
        });
    });
    group.bench_function("rect_overlap_checkerboard", |bench| {
        let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
        bench.iter(|| {
            let x0 = rng.below(240);
            let y0 = rng.below(240);
            black_box(region.rect_overlap(Rect::from_xywh(x0, y0, 16, 16)))
        });
    });
    group.bench_function("bounding_rect_checkerboard", |bench| {
        bench.iter(|| black_box(region.bounding_rect()));
    });
    group.finish();
}

fn bench_polygon_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_fill");
    let star = [
        Point::new(500, 0),
        Point::new(790, 910),
        Point::new(20, 350),
        Point::new(980, 350),
        Point::new(210, 910),
    ];
    for rule in [FillRule::EvenOdd, FillRule::Winding] {
        group.bench_function(format!("star_{rule:?}"), |bench| {
            bench.iter(|| black_box(Region::from_polygon(&star, rule)));
        });
    }
    let comb = gen_comb_polygon(64, 4, 128);
    group.throughput(Throughput::Elements(comb.len() as u64));
    group.bench_function("comb_64_teeth", |bench| {
        bench.iter(|| black_box(Region::from_polygon(&comb, FillRule::EvenOdd)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_union,
    bench_intersect,
    bench_subtract_xor,
    bench_incremental_damage,
    bench_queries,
    bench_polygon_fill,
);
criterion_main!(benches);
