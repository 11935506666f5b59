use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

pub fn sample<'a, T, R>(array: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    array.choose(rng)
}

/// `n` distinct positions in random order, capped at the array length.
pub fn sample_size<T, R>(array: &[T], n: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut pool = array.to_vec();
    let amount = n.min(pool.len());
    let (picked, _) = pool.partial_shuffle(rng, amount);
    picked.to_vec()
}

pub fn shuffle<T, R>(array: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut out = array.to_vec();
    out.shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn sorted(mut values: Vec<u32>) -> Vec<u32> {
        values.sort_unstable();
        values
    }

    #[test]
    fn sample_picks_a_member() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let data = [3, 5, 7];
        for _ in 0..32 {
            let x = sample(&data, &mut rng).copied();
            assert!(matches!(x, Some(3 | 5 | 7)));
        }
        assert_eq!(sample::<u32, _>(&[], &mut rng), None);
    }

    #[test]
    fn sample_size_is_distinct_and_capped() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        let data: Vec<u32> = (0..20).collect();
        let picked = sample_size(&data, 5, &mut rng);
        assert_eq!(picked.len(), 5);
        let mut unique = sorted(picked.clone());
        unique.dedup();
        assert_eq!(unique.len(), 5);
        assert!(picked.iter().all(|x| data.contains(x)));

        assert_eq!(sorted(sample_size(&data, 50, &mut rng)), data);
        assert!(sample_size(&data, 0, &mut rng).is_empty());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(0x5A_FF1E);
        let data: Vec<u32> = (0..64).collect();
        let shuffled = shuffle(&data, &mut rng);
        assert_eq!(shuffled.len(), data.len());
        assert_eq!(sorted(shuffled), data);
    }
}
