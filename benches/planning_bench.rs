use criterion::{criterion_group, criterion_main, Criterion};
use cueforge::layout::{Layout, TurnOrder};
use cueforge::planner::{PlanContext, Planner};
use cueforge::simulate::random_layout;
use std::hint::black_box;

fn open_table() -> Layout {
    Layout::from_coordinates(&[
        (127.0, 63.5),
        (60.0, 40.0),
        (190.0, 40.0),
        (60.0, 90.0),
        (190.0, 90.0),
        (127.0, 100.0),
    ])
    .expect("Failed to build layout")
}

fn criterion_benchmark(c: &mut Criterion) {
    let planner = Planner::default();
    let ctx = PlanContext::new(TurnOrder::First);

    let six = open_table();
    c.bench_function("decide (6 balls)", |b| {
        b.iter(|| planner.decide(black_box(&six), black_box(&ctx)))
    });

    let mut rng = fastrand::Rng::with_seed(1447);
    let full = random_layout(&mut rng, 16, 0.0).expect("Failed to build layout");
    c.bench_function("decide (16 balls)", |b| {
        b.iter(|| planner.decide(black_box(&full), black_box(&ctx)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
