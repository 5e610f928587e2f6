//! Criterion benchmarks for u-regatta.
//!
//! Measures model construction (the combinatorial part that scales with
//! T·F·H·B + T²·F·H) separately from a small end-to-end solve.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use u_regatta::schedule::{
    CostWeights, Dimensions, HeatScheduler, IndexSpace, ScheduleConfig, ScheduleModel,
};

fn bench_model_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_build");
    for teams in [6usize, 12, 20] {
        let dims = Dimensions::new(5, 6, teams, 2);
        group.bench_with_input(BenchmarkId::from_parameter(teams), &dims, |b, &dims| {
            b.iter(|| {
                let space = IndexSpace::new(dims);
                let mut model = ScheduleModel::build(&space);
                let mut rng = StdRng::seed_from_u64(7);
                let weights = CostWeights::random(&space, &mut rng);
                model.apply_weights(&space, &weights);
                black_box(model.milp.constraint_count())
            })
        });
    }
    group.finish();
}

fn bench_small_solve(c: &mut Criterion) {
    let scheduler = HeatScheduler::new();
    let dims = Dimensions::new(2, 2, 4, 2);
    let config = ScheduleConfig::default()
        .with_seed(42)
        .with_time_limit(Duration::from_secs(30));

    c.bench_function("solve_2f_2b_4t_2h", |b| {
        b.iter(|| {
            let schedule = scheduler.generate(black_box(dims), &config).unwrap();
            black_box(schedule.flights.len())
        })
    });
}

criterion_group!(benches, bench_model_build, bench_small_solve);
criterion_main!(benches);
