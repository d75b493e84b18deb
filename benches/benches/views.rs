// Copyright 2025 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use treeline_views::{Dimensions, ScrollPosition, Transit, ViewConfig, Viewport, inner, outer};

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

fn build_elements(n: usize, document_height: f64, seed: u64) -> Vec<Dimensions> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let top = rng.next_f64(document_height);
            let height = 50.0 + rng.next_f64(1200.0);
            Dimensions::from_bounding_rect(
                Rect::new(0.0, top, 400.0, top + height),
                Point::ZERO,
            )
        })
        .collect()
}

fn bench_views(c: &mut Criterion) {
    let viewport = Viewport::new(800.0, 40_000.0);
    let config = ViewConfig::default();
    let elements = build_elements(1024, viewport.document_height, 7);

    let mut group = c.benchmark_group("views");

    group.bench_function("outer_1024", |b| {
        let mut scroll = ScrollPosition::new(Point::ZERO);
        b.iter(|| {
            scroll.advance_to(Point::new(0.0, (scroll.y + 97.0) % 40_000.0));
            let mut acc = Transit::default();
            for dimensions in &elements {
                acc = outer(black_box(dimensions), &scroll, &viewport, &config);
            }
            acc
        });
    });

    group.bench_function("inner_1024", |b| {
        let mut scroll = ScrollPosition::new(Point::ZERO);
        b.iter(|| {
            scroll.advance_to(Point::new(0.0, (scroll.y + 97.0) % 40_000.0));
            let mut acc = Transit::default();
            for dimensions in &elements {
                acc = inner(black_box(dimensions), &scroll, &viewport, &config);
            }
            acc
        });
    });

    group.finish();
}

criterion_group!(benches, bench_views);
criterion_main!(benches);
