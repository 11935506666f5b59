use std::hash::Hash;

use indexmap::IndexMap;

use crate::{Collection, Delegate, Nested, SortKey, utils};

impl<T> Collection<T> {
    pub fn count_by<K, F>(&self, key: F) -> IndexMap<K, usize>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::CountBy, |a| utils::count_by(a, key))
    }

    /// Groups stay plain `Vec`s; only sequence results are re-wrapped.
    pub fn group_by<K, F>(&self, key: F) -> IndexMap<K, Vec<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::GroupBy, |a| utils::group_by(a, key))
    }

    pub fn key_by<K, F>(&self, key: F) -> IndexMap<K, T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::KeyBy, |a| utils::key_by(a, key))
    }

    /// `[matching, rest]`.
    pub fn partition<P>(&self, predicate: P) -> Collection<Vec<T>>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.delegate(Delegate::Partition, |a| utils::partition(a, predicate))
    }

    /// Stable sort by `key` into a new collection. Named apart from the
    /// slice's in-place `sort_by`.
    pub fn sorted_by<K, F>(&self, key: F) -> Collection<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::SortBy, |a| utils::sort_by(a, key))
    }

    pub fn order_by(&self, criteria: &[SortKey<'_, T>]) -> Collection<T>
    where
        T: Clone,
    {
        self.delegate(Delegate::OrderBy, |a| utils::order_by(a, criteria))
    }

    pub fn reject<P>(&self, predicate: P) -> Collection<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.delegate(Delegate::Reject, |a| utils::reject(a, predicate))
    }

    pub fn find_last<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        self.delegate(Delegate::FindLast, |a| utils::find_last(a, predicate))
    }

    pub fn flat_map<U, I, F>(&self, f: F) -> Collection<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        self.delegate(Delegate::FlatMap, |a| utils::flat_map(a, f))
    }

    pub fn flat_map_deep<U, F>(&self, f: F) -> Collection<U>
    where
        F: FnMut(&T) -> Nested<U>,
    {
        self.delegate(Delegate::FlatMapDeep, |a| utils::flat_map_deep(a, f))
    }

    pub fn invoke_map<R, F>(&self, f: F) -> Collection<R>
    where
        F: FnMut(&T) -> R,
    {
        self.delegate(Delegate::InvokeMap, |a| utils::invoke_map(a, f))
    }

    pub fn reduce_right<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.delegate(Delegate::ReduceRight, |a| {
            Passthrough(utils::reduce_right(a, init, f))
        })
        .0
    }

    /// Visits elements from the end until `f` returns `false`.
    pub fn for_each_right<F>(&self, f: F) -> &Self
    where
        F: FnMut(&T) -> bool,
    {
        self.delegate(Delegate::ForEachRight, |a| utils::for_each_right(a, f));
        self
    }
}

/// Carries a fold result of arbitrary type through the dispatcher untouched.
struct Passthrough<A>(A);

impl<A> crate::Rewrap for Passthrough<A> {
    type Output = Self;

    fn rewrap(self) -> Self {
        self
    }
}
