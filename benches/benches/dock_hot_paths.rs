// Copyright 2026 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use quayside_dockable::{Dockable, Pose};
use quayside_edge::{DockConfig, classify};
use quayside_transition::{DockTransition, Easing};

const CONTAINER: Size = Size::new(1920.0, 1080.0);
const ITEM_HEIGHT: f64 = 240.0;

fn gen_release_points(n: usize) -> Vec<Point> {
    // A sweep covering all four bands, every corner, and the interior.
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(
                x as f64 / (n - 1) as f64 * CONTAINER.width,
                y as f64 / (n - 1) as f64 * CONTAINER.height,
            ));
        }
    }
    out
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let config = DockConfig::default();
    let points = gen_release_points(64);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("sweep_64x64", |b| {
        b.iter(|| {
            let mut docked = 0_u32;
            for &p in &points {
                let placement = classify(black_box(p), ITEM_HEIGHT, CONTAINER, &config);
                docked += u32::from(placement.state.is_docked());
            }
            black_box(docked)
        });
    });
    group.finish();
}

fn bench_transition_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition");
    for (name, easing) in [("linear", Easing::Linear), ("smoothstep", Easing::SmoothStep)] {
        group.bench_function(format!("tick_to_commit_{name}"), |b| {
            b.iter_batched_ref(
                || {
                    let mut t = DockTransition::new(500.0);
                    t.set_easing(easing);
                    t.start(
                        Pose::new(Point::new(1880.0, 540.0), 15.0),
                        270.0,
                        Point::new(1976.0, 540.0),
                    );
                    t
                },
                |t| {
                    // ~31 frames at 16 ms to cross a 500 ms session.
                    loop {
                        match t.tick(16.0) {
                            quayside_transition::Tick::InFlight(p) => {
                                black_box(p);
                            }
                            done => break black_box(done),
                        }
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_full_protocol(c: &mut Criterion) {
    let mut group = c.benchmark_group("protocol");
    group.bench_function("release_resolve_commit", |b| {
        b.iter_batched_ref(
            || {
                let mut item = Dockable::new();
                item.set_duration_ms(100.0);
                item
            },
            |item| {
                assert!(item.manipulation_completed());
                let released = Pose::new(Point::new(1880.0, 540.0), 15.0);
                black_box(item.resolve(released, ITEM_HEIGHT, CONTAINER));
                while let Some(frame) = item.tick(16.0) {
                    black_box(frame);
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_transition_ticks,
    bench_full_protocol
);
criterion_main!(benches);
