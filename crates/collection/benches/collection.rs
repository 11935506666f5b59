use std::hint::black_box;

use bench::{apply_runtime_for_len, random_values, seed_for, sorted_values};
use collection::{Collection, Delegate};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

const BENCH_SIZES: [usize; 3] = [1024, 16384, 131072];
const DISTINCT: u64 = 1 << 10;
const CHUNK_SIZE: usize = 16;

fn std_difference(left: &[u64], right: &[u64]) -> Vec<u64> {
    let excluded: std::collections::HashSet<u64> = right.iter().copied().collect();
    left.iter().copied().filter(|x| !excluded.contains(x)).collect()
}

fn std_uniq(values: &[u64]) -> Vec<u64> {
    let mut seen = std::collections::HashSet::new();
    values.iter().copied().filter(|x| seen.insert(*x)).collect()
}

fn bench_set_ops(c: &mut Criterion) {
    for op in [Delegate::Difference, Delegate::Uniq, Delegate::Xor] {
        let mut group = c.benchmark_group(format!("collection/{op}"));
        for &len in &BENCH_SIZES {
            apply_runtime_for_len(&mut group, len);
            let mut rng = StdRng::seed_from_u64(seed_for(op.name(), len));
            let left = Collection::from(random_values(&mut rng, len, DISTINCT));
            let right = random_values(&mut rng, len / 2, DISTINCT);

            group.bench_function(BenchmarkId::new("collection", len), |bencher| {
                bencher.iter(|| match op {
                    Delegate::Difference => black_box(left.difference(black_box(&right))),
                    Delegate::Uniq => black_box(left.uniq()),
                    _ => black_box(left.xor(black_box(&right))),
                })
            });
            if op != Delegate::Xor {
                group.bench_function(BenchmarkId::new("std", len), |bencher| {
                    bencher.iter(|| match op {
                        Delegate::Difference => black_box(std_difference(&left, black_box(&right))),
                        _ => black_box(std_uniq(&left)),
                    })
                });
            }
        }
        group.finish();
    }
}

fn bench_sequence_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection/sequence");
    for &len in &BENCH_SIZES {
        apply_runtime_for_len(&mut group, len);
        let mut rng = StdRng::seed_from_u64(seed_for("sequence", len));
        let values = Collection::from(random_values(&mut rng, len, DISTINCT));

        group.bench_function(BenchmarkId::new(Delegate::Chunk.name(), len), |bencher| {
            bencher.iter(|| black_box(values.chunk(black_box(CHUNK_SIZE))))
        });
        group.bench_function(BenchmarkId::new("std_chunks", len), |bencher| {
            bencher.iter(|| {
                black_box(
                    values
                        .chunks(black_box(CHUNK_SIZE))
                        .map(<[u64]>::to_vec)
                        .collect::<Vec<_>>(),
                )
            })
        });
        group.bench_function(BenchmarkId::new(Delegate::SortBy.name(), len), |bencher| {
            bencher.iter(|| black_box(values.sorted_by(|x| *x)))
        });
        group.bench_function(BenchmarkId::new(Delegate::GroupBy.name(), len), |bencher| {
            bencher.iter(|| black_box(values.group_by(|x| x % 64)))
        });
    }
    group.finish();
}

fn bench_sorted_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection/sorted");
    for &len in &BENCH_SIZES {
        apply_runtime_for_len(&mut group, len);
        let mut rng = StdRng::seed_from_u64(seed_for("sorted", len));
        let values = Collection::from(sorted_values(&mut rng, len, DISTINCT));
        let probes = random_values(&mut rng, 256, DISTINCT);

        group.bench_function(BenchmarkId::new(Delegate::SortedIndex.name(), len), |bencher| {
            bencher.iter(|| {
                for probe in &probes {
                    black_box(values.sorted_index(black_box(probe)));
                }
            })
        });
        group.bench_function(BenchmarkId::new(Delegate::SortedUniq.name(), len), |bencher| {
            bencher.iter(|| black_box(values.sorted_uniq()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_set_ops, bench_sequence_ops, bench_sorted_search);
criterion_main!(benches);
