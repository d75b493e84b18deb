// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use treeline_tracker::{Host, Outcome, Target, VisibilityTracker};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_f64(&mut self, upper: f64) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX) * upper
    }
}

struct Page {
    scroll: Point,
    document_height: f64,
    elements: Vec<Rect>,
}

impl Host<usize> for Page {
    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn window_height(&self) -> f64 {
        800.0
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn bounding_rect(&self, handle: &usize) -> Option<Rect> {
        self.elements
            .get(*handle)
            .map(|rect| *rect - Vec2::new(self.scroll.x, self.scroll.y))
    }
}

fn build_tracker(n: usize, seed: u64) -> VisibilityTracker<usize, Page> {
    let document_height = 40_000.0;
    let mut rng = Lcg::new(seed);
    let elements = (0..n)
        .map(|_| {
            let top = rng.next_f64(document_height);
            let height = 50.0 + rng.next_f64(1200.0);
            Rect::new(0.0, top, 400.0, top + height)
        })
        .collect();

    let mut tracker = VisibilityTracker::new(Page {
        scroll: Point::ZERO,
        document_height,
        elements,
    });
    for handle in 0..n {
        tracker.bind(Target::handle(handle), |_, transit, _, _| {
            black_box(transit);
            Outcome::Retain
        });
    }
    tracker
}

fn bench_check_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_pass");

    for n in [64_usize, 512] {
        group.bench_function(format!("moving_scroll_{n}"), |b| {
            let mut tracker = build_tracker(n, 11);
            let mut y = 0.0;
            b.iter(|| {
                y = (y + 97.0) % 40_000.0;
                tracker.host_mut().scroll = Point::new(0.0, y);
                tracker.check_views(true);
            });
        });

        group.bench_function(format!("deduped_scroll_{n}"), |b| {
            let mut tracker = build_tracker(n, 11);
            tracker.host_mut().scroll = Point::new(0.0, 1234.0);
            tracker.check_views(true);
            // Offset never moves again: every call short-circuits.
            b.iter(|| tracker.check_views(black_box(true)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_check_pass);
criterion_main!(benches);
