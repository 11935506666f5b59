use std::hash::Hash;

use crate::{Collection, Delegate, utils};

impl<T> Collection<T> {
    /// Removes every element equal to one of `values`, in place.
    pub fn pull(&mut self, values: &[T]) -> &mut Self
    where
        T: PartialEq,
    {
        self.delegate_mut(Delegate::Pull, |v| utils::pull(v, values));
        self
    }

    /// Same as [`Collection::pull`].
    pub fn pull_all(&mut self, values: &[T]) -> &mut Self
    where
        T: PartialEq,
    {
        self.delegate_mut(Delegate::PullAll, |v| utils::pull(v, values));
        self
    }

    pub fn pull_all_by<K, F>(&mut self, values: &[T], key: F) -> &mut Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.delegate_mut(Delegate::PullAllBy, |v| {
            utils::pull_all_by(v, values, key)
        });
        self
    }

    pub fn pull_all_with<F>(&mut self, values: &[T], eq: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.delegate_mut(Delegate::PullAllWith, |v| {
            utils::pull_all_with(v, values, eq)
        });
        self
    }

    /// Removes the elements at `indexes` and returns them in request order.
    pub fn pull_at(&mut self, indexes: &[usize]) -> Collection<T>
    where
        T: Clone,
    {
        self.delegate_mut(Delegate::PullAt, |v| utils::pull_at(v, indexes))
    }

    /// Removes the elements matching `predicate(value, index, slice)` and
    /// returns them.
    pub fn remove<P>(&mut self, predicate: P) -> Collection<T>
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        self.delegate_mut(Delegate::Remove, |v| utils::remove(v, predicate))
    }
}

#[cfg(test)]
mod tests {
    use crate::collection;

    #[test]
    fn pull_mutates_receiver() {
        let mut c = collection!['a', 'b', 'c', 'a', 'b', 'c'];
        c.pull(&['a', 'c']);
        assert_eq!(c, ['b', 'b']);

        let mut c = collection![1, 2, 3, 1];
        c.pull_all(&[1]).pull_all(&[3]);
        assert_eq!(c, [2]);
    }

    #[test]
    fn pull_by_and_with_chain() {
        let mut c = collection![(1, 'x'), (2, 'y'), (3, 'z')];
        c.pull_all_by(&[(1, '?')], |p| p.0)
            .pull_all_with(&[(0, 'z')], |a, b| a.1 == b.1);
        assert_eq!(c, [(2, 'y')]);
    }

    #[test]
    fn pull_at_returns_collection() {
        let mut c = collection!['a', 'b', 'c', 'd'];
        let picked = c.pull_at(&[1, 3]);
        assert_eq!(picked, ['b', 'd']);
        assert_eq!(c, ['a', 'c']);
    }

    #[test]
    fn remove_returns_removed() {
        let mut c = collection![1, 2, 3, 4];
        let evens = c.remove(|x, _, _| x % 2 == 0);
        assert_eq!(evens, [2, 4]);
        assert_eq!(c, [1, 3]);
    }
}
