//! Benchmarks for the f-wave edge solver.
//!
//! Run with: `cargo bench --bench fwave_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use swe_tsunami::flux::{EdgeState, FWaveSolver, GRAVITY, RiemannSolver, fwave_net_updates};

/// Wet edge states with varying heights, momenta and bathymetry.
fn generate_wet_states(n: usize) -> Vec<(EdgeState, EdgeState)> {
    (0..n)
        .map(|i| {
            let phase = i as f64 * 0.1;
            let b_l = -100.0 + 5.0 * phase.sin();
            let b_r = -100.0 + 5.0 * (phase + 0.4).sin();
            let h_l = -b_l + 2.0 * phase.cos();
            let h_r = -b_r + 1.5 * (phase + 0.5).cos();
            let left = EdgeState::new(h_l, h_l * 0.3 * phase.sin(), b_l);
            let right = EdgeState::new(h_r, h_r * 0.2 * phase.cos(), b_r);
            (left, right)
        })
        .collect()
}

/// Every third edge borders a dry cell on land.
fn generate_shoreline_states(n: usize) -> Vec<(EdgeState, EdgeState)> {
    generate_wet_states(n)
        .into_iter()
        .enumerate()
        .map(|(i, (left, right))| {
            if i % 3 == 0 {
                (left, EdgeState::new(0.0, 0.0, 20.0))
            } else {
                (left, right)
            }
        })
        .collect()
}

fn bench_net_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("fwave");

    for (name, states) in [
        ("wet", generate_wet_states(1000)),
        ("shoreline", generate_shoreline_states(1000)),
    ] {
        group.bench_with_input(BenchmarkId::new("free_fn", name), &states, |b, states| {
            b.iter(|| {
                let mut max_speed: f64 = 0.0;
                for &(left, right) in states {
                    let u = fwave_net_updates(black_box(left), black_box(right), GRAVITY);
                    max_speed = max_speed.max(u.max_wave_speed);
                }
                max_speed
            })
        });

        let solver = FWaveSolver::default();
        group.bench_with_input(BenchmarkId::new("trait", name), &states, |b, states| {
            b.iter(|| {
                let mut max_speed: f64 = 0.0;
                for &(left, right) in states {
                    let u = solver.net_updates(black_box(left), black_box(right));
                    max_speed = max_speed.max(u.max_wave_speed);
                }
                max_speed
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_net_updates);
criterion_main!(benches);
