//! Benchmarks for one full iteration of the wave propagation blocks.
//!
//! Run with: `cargo bench --bench sweep_bench`
//!
//! Compares the full-grid block with a reduced domain covering a small
//! window of the same grid.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use swe_tsunami::scenario::ArtificialTsunamiScenario;
use swe_tsunami::solver::{DimensionalSplitting, ReducedDomain, WaveBlock};
use swe_tsunami::types::{CellIndex, Resolution2D};

fn bench_dimensional_splitting(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimensional_splitting");
    let scenario = ArtificialTsunamiScenario::default();

    for n in [100, 200, 400] {
        let mut block = DimensionalSplitting::from_scenario(Resolution2D::square(n), &scenario);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::new("step", n), &n, |b, _| {
            b.iter(|| block.step(None))
        });

        group.bench_with_input(BenchmarkId::new("fluxes", n), &n, |b, _| {
            b.iter(|| {
                block.compute_numerical_fluxes();
                block.max_time_step()
            })
        });
    }

    group.finish();
}

fn bench_reduced_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduced_domain");
    let scenario = ArtificialTsunamiScenario::default();

    for n in [200, 400] {
        let start = CellIndex::new(n / 2, n / 2);
        let end = CellIndex::new(n / 2 + n / 8, n / 2 + n / 16);
        let mut block = ReducedDomain::from_scenario(Resolution2D::square(n), &scenario, start, end);
        group.throughput(Throughput::Elements(block.window().cell_count() as u64));
        group.bench_with_input(BenchmarkId::new("step", n), &n, |b, _| {
            b.iter(|| block.step(None))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dimensional_splitting, bench_reduced_domain);
criterion_main!(benches);
