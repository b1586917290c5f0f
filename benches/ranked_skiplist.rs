//! Benchmarks for this crate's [`RankedSkipList`].

use criterion::{AxisScale, BenchmarkId, Criterion, PlotConfiguration, black_box};
use rand::{Rng, SeedableRng, rngs::StdRng};
use ranked_skiplist::RankedSkipList;

/// Benchmarking sizes.
const SIZES: [usize; 6] = [1, 10, 100, 1000, 10_000, 100_000];

/// A list of `size` random values, along with the generator used to fill it.
fn filled(size: usize) -> (RankedSkipList<u64>, StdRng) {
    let mut rng = StdRng::seed_from_u64(0x1234_abcd);
    let sl = std::iter::repeat_with(|| rng.random()).take(size).collect();
    (sl, rng)
}

/// Benchmarking insertion.
#[inline]
pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("RankedSkipList Insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let (mut sl, mut rng) = filled(size);

            b.iter(|| {
                sl.insert(rng.random());
            });
        });
    }
}

/// Benchmarking removal followed by re-insertion of the same value, so that
/// the size stays constant.
#[inline]
pub fn remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("RankedSkipList Remove");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let (mut sl, mut rng) = filled(size);
            let values: Vec<u64> = std::iter::repeat_with(|| rng.random_range(1..=sl.len()))
                .filter_map(|rank| sl.get_by_rank(rank).copied())
                .take(10)
                .collect();

            b.iter(|| {
                for v in &values {
                    if let Some(v) = sl.remove(v) {
                        sl.insert(black_box(v));
                    }
                }
            });
        });
    }
}

/// Benchmarking value to rank lookups.
#[inline]
pub fn rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("RankedSkipList Rank");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let (sl, mut rng) = filled(size);
            let values: Vec<u64> = std::iter::repeat_with(|| rng.random_range(1..=sl.len()))
                .filter_map(|rank| sl.get_by_rank(rank).copied())
                .take(10)
                .collect();

            b.iter(|| {
                for v in &values {
                    black_box(sl.rank(v));
                }
            });
        });
    }
}

/// Benchmarking rank to value lookups.
#[inline]
pub fn get_by_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("RankedSkipList Get By Rank");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let (sl, mut rng) = filled(size);
            let ranks: Vec<_> = std::iter::repeat_with(|| rng.random_range(1..=sl.len()))
                .take(10)
                .collect();

            b.iter(|| {
                for &r in &ranks {
                    black_box(sl.get_by_rank(r));
                }
            });
        });
    }
}

/// Benchmarking lower bound searches.
#[inline]
pub fn lower_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("RankedSkipList Lower Bound");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let (sl, mut rng) = filled(size);
            let queries: Vec<u64> = std::iter::repeat_with(|| rng.random()).take(10).collect();

            b.iter(|| {
                for q in &queries {
                    black_box(sl.lower_bound(q));
                }
            });
        });
    }
}

/// Benchmarking iteration.
#[inline]
pub fn iter(c: &mut Criterion) {
    c.bench_function("RankedSkipList Iter", |b| {
        let (sl, _) = filled(100_000);

        b.iter(|| {
            for el in &sl {
                black_box(el);
            }
        });
    });
}
