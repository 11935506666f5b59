use crate::{Collection, Delegate, utils};

impl<T> Collection<T> {
    pub fn sorted_index(&self, value: &T) -> usize
    where
        T: Ord,
    {
        self.delegate(Delegate::SortedIndex, |a| utils::sorted_index(a, value))
    }

    pub fn sorted_index_by<K, F>(&self, value: &T, key: F) -> usize
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::SortedIndexBy, |a| {
            utils::sorted_index_by(a, value, key)
        })
    }

    pub fn sorted_index_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.delegate(Delegate::SortedIndexOf, |a| {
            utils::sorted_index_of(a, value)
        })
    }

    pub fn sorted_last_index(&self, value: &T) -> usize
    where
        T: Ord,
    {
        self.delegate(Delegate::SortedLastIndex, |a| {
            utils::sorted_last_index(a, value)
        })
    }

    pub fn sorted_last_index_by<K, F>(&self, value: &T, key: F) -> usize
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::SortedLastIndexBy, |a| {
            utils::sorted_last_index_by(a, value, key)
        })
    }

    pub fn sorted_last_index_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.delegate(Delegate::SortedLastIndexOf, |a| {
            utils::sorted_last_index_of(a, value)
        })
    }

    pub fn sorted_uniq(&self) -> Collection<T>
    where
        T: Clone + PartialEq,
    {
        self.delegate(Delegate::SortedUniq, utils::sorted_uniq)
    }

    pub fn sorted_uniq_by<K, F>(&self, key: F) -> Collection<T>
    where
        T: Clone,
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        self.delegate(Delegate::SortedUniqBy, |a| utils::sorted_uniq_by(a, key))
    }
}
