use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 600;
const LARGE_INPUT_THRESHOLD: usize = 16_384;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Small or large runtime settings depending on the input length.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len <= LARGE_INPUT_THRESHOLD {
        apply_small_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Seed derived from the benchmark's own parameters so that every
/// `(label, len)` pair sees the same data across runs.
pub fn seed_for(label: &str, len: usize) -> u64 {
    label
        .bytes()
        .fold(RNG_SEED ^ len as u64, |acc, b| {
            acc.rotate_left(5) ^ u64::from(b)
        })
}

/// `len` values drawn uniformly from `0..distinct`. Small `distinct`
/// produces many duplicates.
pub fn random_values<R: Rng + ?Sized>(rng: &mut R, len: usize, distinct: u64) -> Vec<u64> {
    (0..len).map(|_| rng.random_range(0..distinct.max(1))).collect()
}

pub fn sorted_values<R: Rng + ?Sized>(rng: &mut R, len: usize, distinct: u64) -> Vec<u64> {
    let mut values = random_values(rng, len, distinct);
    values.sort_unstable();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = default_rng();
        let values = random_values(&mut rng, 256, 8);
        assert_eq!(values.len(), 256);
        assert!(values.iter().all(|&x| x < 8));
        assert!(random_values(&mut rng, 4, 0).iter().all(|&x| x == 0));
    }

    #[test]
    fn sorted_values_are_sorted() {
        let mut rng = default_rng();
        let values = sorted_values(&mut rng, 100, 1000);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn seeds_are_stable_and_distinct() {
        assert_eq!(seed_for("uniq", 64), seed_for("uniq", 64));
        assert_ne!(seed_for("uniq", 64), seed_for("uniq", 65));
        assert_ne!(seed_for("uniq", 64), seed_for("xor", 64));
    }
}
