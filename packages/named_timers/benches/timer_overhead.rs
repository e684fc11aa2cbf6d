//! Measures the overhead of starting and stopping registered timers.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use named_timers::{NameCollision, Timers};

fn timer_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer_overhead");

    // Reusing one name keeps the registry from growing across iterations.
    let timers = Timers::builder().log_stops(false).build();
    group.bench_function("start_stop_replace", |b| {
        b.iter(|| {
            let timer = timers.start_timer(black_box("bench"));
            timer.stop();
            black_box(timer.elapsed());
        });
    });

    group.bench_function("elapsed_running", |b| {
        let timer = timers.start_timer("running");
        b.iter(|| black_box(timer.elapsed()));
    });

    group.bench_function("start_stop_retain_fresh_registry", |b| {
        b.iter(|| {
            let timers = Timers::builder()
                .name_collision(NameCollision::Retain)
                .log_stops(false)
                .build();
            for _ in 0..100 {
                timers.start_timer(black_box("bench")).stop();
            }
            black_box(timers.len());
        });
    });

    group.finish();
}

criterion_group!(benches, timer_overhead);
criterion_main!(benches);
