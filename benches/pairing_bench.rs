//! Criterion benchmarks for round scheduling.
//!
//! Uses synthetic tournaments with a handful of schools and uneven win
//! records.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_pairing::sa::{AnnealConfig, Annealer, SaState};
use u_pairing::schedule::{plan_round, Judge, Penalties, ScheduleState, Team};

// ===========================================================================
// Synthetic tournament
// ===========================================================================

fn tournament(teams: usize, judges: usize) -> (Vec<Team>, Vec<Judge>) {
    let t = (0..teams)
        .map(|i| Team::new(format!("T{i}"), format!("S{}", i % 6)).with_wins((i % 4) as u32))
        .collect();
    let j = (0..judges)
        .map(|i| Judge::new(format!("J{i}"), format!("S{}", i % 6)))
        .collect();
    (t, j)
}

fn penalties() -> Penalties {
    Penalties::new(10.0, 5.0, 1.0)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_neighbor(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_neighbor");

    for &n in &[8usize, 32, 128] {
        let (teams, judges) = tournament(n, n / 2);
        let mut rng = StdRng::seed_from_u64(42);
        let state = ScheduleState::random_schedule(teams, judges, penalties(), &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &state, |b, s| {
            let mut working = s.clone();
            b.iter(|| {
                working.neighbor(&mut rng).unwrap();
                black_box(working.energy())
            })
        });
    }
    group.finish();
}

fn bench_anneal_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_round");
    group.sample_size(10);

    for &n in &[8usize, 32, 64] {
        let (teams, judges) = tournament(n, n / 2);
        let config = AnnealConfig::default().with_max_time(1000).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(teams, judges, config),
            |b, (t, j, c)| {
                b.iter(|| {
                    let result = plan_round(t.clone(), j.clone(), penalties(), black_box(c)).unwrap();
                    black_box(result.best_energy)
                })
            },
        );
    }
    group.finish();
}

fn bench_anneal_with_restarts(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_restarts");
    group.sample_size(10);

    let (teams, judges) = tournament(32, 16);
    let mut rng = StdRng::seed_from_u64(7);
    let initial = ScheduleState::random_schedule(teams, judges, penalties(), &mut rng).unwrap();
    let config = AnnealConfig::default()
        .with_max_time(1000)
        .with_restart_probability(0.01)
        .with_seed(7);
    group.bench_function("t32", |b| {
        b.iter(|| {
            let result = Annealer::run(initial.clone(), black_box(&config)).unwrap();
            black_box(result.best_energy)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_neighbor, bench_anneal_round, bench_anneal_with_restarts);
criterion_main!(benches);
