use rand::Rng;

use crate::{Collection, Delegate, utils};

impl<T> Collection<T> {
    pub fn sample<R>(&self, rng: &mut R) -> Option<&T>
    where
        R: Rng + ?Sized,
    {
        self.delegate(Delegate::Sample, |a| utils::sample(a, rng))
    }

    pub fn sample_size<R>(&self, n: usize, rng: &mut R) -> Collection<T>
    where
        T: Clone,
        R: Rng + ?Sized,
    {
        self.delegate(Delegate::SampleSize, |a| utils::sample_size(a, n, rng))
    }

    /// A shuffled copy. Named apart from the slice's in-place `shuffle`.
    pub fn shuffled<R>(&self, rng: &mut R) -> Collection<T>
    where
        T: Clone,
        R: Rng + ?Sized,
    {
        self.delegate(Delegate::Shuffle, |a| utils::shuffle(a, rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::{Collection, utils};

    #[test]
    fn same_seed_same_result_as_library() {
        let c: Collection<u32> = (0..32).collect();

        let mut a = StdRng::seed_from_u64(0x5EED_2026);
        let mut b = StdRng::seed_from_u64(0x5EED_2026);
        assert_eq!(c.shuffled(&mut a), utils::shuffle(&c, &mut b));
        assert_eq!(c.sample_size(4, &mut a), utils::sample_size(&c, 4, &mut b));
        assert_eq!(c.sample(&mut a), utils::sample(&c, &mut b));
    }

    #[test]
    fn shuffled_keeps_receiver() {
        let c: Collection<u32> = (0..8).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut shuffled = c.shuffled(&mut rng);
        shuffled.sort_unstable();
        assert_eq!(shuffled, c);
        assert_eq!(c, [0, 1, 2, 3, 4, 5, 6, 7]);
        let empty: Collection<u32> = Collection::new();
        assert_eq!(empty.sample(&mut rng), None);
    }
}
