use std::hash::Hash;

use crate::{Collection, Delegate, utils};

impl<T: Clone> Collection<T> {
    /// Elements of `self` that are absent from `other`. Order and identity
    /// come from `self`.
    pub fn difference(&self, other: &[T]) -> Collection<T>
    where
        T: Eq + Hash,
    {
        self.delegate(Delegate::Difference, |a| utils::difference(a, other))
    }

    pub fn difference_by<K, F>(&self, other: &[T], key: F) -> Collection<T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::DifferenceBy, |a| {
            utils::difference_by(a, other, key)
        })
    }

    pub fn difference_with<F>(&self, other: &[T], eq: F) -> Collection<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.delegate(Delegate::DifferenceWith, |a| {
            utils::difference_with(a, other, eq)
        })
    }

    pub fn without(&self, values: &[T]) -> Collection<T>
    where
        T: Eq + Hash,
    {
        self.delegate(Delegate::Without, |a| utils::without(a, values))
    }

    pub fn intersection(&self, other: &[T]) -> Collection<T>
    where
        T: Eq + Hash,
    {
        self.delegate(Delegate::Intersection, |a| utils::intersection(a, other))
    }

    pub fn intersection_by<K, F>(&self, other: &[T], key: F) -> Collection<T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::IntersectionBy, |a| {
            utils::intersection_by(a, other, key)
        })
    }

    pub fn intersection_with<F>(&self, other: &[T], eq: F) -> Collection<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.delegate(Delegate::IntersectionWith, |a| {
            utils::intersection_with(a, other, eq)
        })
    }

    pub fn union(&self, other: &[T]) -> Collection<T>
    where
        T: Eq + Hash,
    {
        self.delegate(Delegate::Union, |a| utils::union(a, other))
    }

    pub fn union_by<K, F>(&self, other: &[T], key: F) -> Collection<T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::UnionBy, |a| utils::union_by(a, other, key))
    }

    pub fn union_with<F>(&self, other: &[T], eq: F) -> Collection<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.delegate(Delegate::UnionWith, |a| utils::union_with(a, other, eq))
    }

    pub fn uniq(&self) -> Collection<T>
    where
        T: Eq + Hash,
    {
        self.delegate(Delegate::Uniq, utils::uniq)
    }

    pub fn uniq_by<K, F>(&self, key: F) -> Collection<T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::UniqBy, |a| utils::uniq_by(a, key))
    }

    pub fn uniq_with<F>(&self, eq: F) -> Collection<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.delegate(Delegate::UniqWith, |a| utils::uniq_with(a, eq))
    }

    pub fn xor(&self, other: &[T]) -> Collection<T>
    where
        T: Eq + Hash,
    {
        self.delegate(Delegate::Xor, |a| utils::xor(a, other))
    }

    pub fn xor_by<K, F>(&self, other: &[T], key: F) -> Collection<T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::XorBy, |a| utils::xor_by(a, other, key))
    }

    pub fn xor_with<F>(&self, other: &[T], eq: F) -> Collection<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.delegate(Delegate::XorWith, |a| utils::xor_with(a, other, eq))
    }
}
