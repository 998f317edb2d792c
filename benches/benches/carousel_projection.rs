// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_carousel::{
    Animator, Carousel, CarouselConfig, ProjectedTransform, RotateEndTiming, Surface, Timer,
    TimerId, Transition,
};
use understory_ellipse::{EllipseGeometry, ProjectionParams, angle_for, delta_index, project};

struct Stage(Size);

impl Surface<u32> for Stage {
    fn size(&self) -> Size {
        self.0
    }
    fn set_size(&mut self, size: Size) {
        self.0 = size;
    }
    fn measure(&self, item: &u32) -> Option<Size> {
        Some(Size::new(80.0 + f64::from(item % 7) * 10.0, 60.0))
    }
}

struct Sink;

impl Animator<u32> for Sink {
    fn apply_immediate(&mut self, item: &u32, target: ProjectedTransform) {
        black_box((item, target));
    }
    fn animate_to(&mut self, item: &u32, target: ProjectedTransform, transition: Transition) {
        black_box((item, target, transition));
    }
}

#[derive(Default)]
struct Counter(u64);

impl Timer for Counter {
    fn schedule_repeating(&mut self, _: Duration) -> TimerId {
        self.0 += 1;
        TimerId(self.0)
    }
    fn schedule_once(&mut self, _: Duration) -> TimerId {
        self.0 += 1;
        TimerId(self.0)
    }
    fn cancel(&mut self, _: TimerId) {}
}

fn build(n: u32) -> Carousel<u32, Stage, Sink, Counter> {
    let config = CarouselConfig {
        rotate_end: RotateEndTiming::Immediate,
        ..Default::default()
    };
    let mut c = Carousel::new(config, Stage(Size::new(1280.0, 0.0)), Sink, Counter::default())
        .expect("default config is valid");
    c.add_items(0..n).expect("every item is measurable");
    c.drain_events().for_each(drop);
    c
}

fn bench_angles(c: &mut Criterion) {
    let mut group = c.benchmark_group("angle_for");
    for &n in &[8usize, 64, 512] {
        group.throughput(Throughput::Elements(n as u64));
        for &p in &[1.0, 0.85] {
            group.bench_function(format!("ring_n{n}_p{p}"), |b| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for position in 0..n {
                        let d = delta_index(position, black_box(3) % n, n);
                        acc += angle_for(d as isize, n, black_box(p));
                    }
                    black_box(acc)
                });
            });
        }
    }
    group.finish();
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    let geometry = EllipseGeometry::new(Point::new(640.0, 60.0), 300.0, 50.0);
    let params = ProjectionParams::default();
    for &n in &[8usize, 64, 512] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("ring_n{n}"), |b| {
            b.iter(|| {
                let mut top = i32::MIN;
                for position in 0..n {
                    let d = delta_index(position, 0, n);
                    let theta = angle_for(d as isize, n, params.power_exponent);
                    let t = project(Size::new(120.0, 80.0), theta, n, &geometry, &params);
                    top = top.max(t.depth);
                }
                black_box(top)
            });
        });
    }
    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel");
    for &n in &[8u32, 64, 512] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("next_n{n}"), |b| {
            b.iter_batched(
                || build(n),
                |mut c| {
                    c.next();
                    black_box(c.drain_events().count())
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("resize_n{n}"), |b| {
            b.iter_batched(
                || build(n),
                |mut c| {
                    c.surface_mut().0.width = 960.0;
                    c.resize();
                    black_box(c.current_index())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_angles, bench_project, bench_navigation);
criterion_main!(benches);
