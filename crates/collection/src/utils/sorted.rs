//! Binary searches and dedup over arrays already sorted ascending.

use itertools::Itertools;

/// Lowest index at which `value` can be inserted keeping `array` sorted.
pub fn sorted_index<T: Ord>(array: &[T], value: &T) -> usize {
    array.partition_point(|x| x < value)
}

pub fn sorted_index_by<T, K, F>(array: &[T], value: &T, mut key: F) -> usize
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let target = key(value);
    array.partition_point(|x| key(x) < target)
}

/// Highest index at which `value` can be inserted keeping `array` sorted.
pub fn sorted_last_index<T: Ord>(array: &[T], value: &T) -> usize {
    array.partition_point(|x| x <= value)
}

pub fn sorted_last_index_by<T, K, F>(array: &[T], value: &T, mut key: F) -> usize
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let target = key(value);
    array.partition_point(|x| key(x) <= target)
}

pub fn sorted_index_of<T: Ord>(array: &[T], value: &T) -> Option<usize> {
    let index = sorted_index(array, value);
    (array.get(index) == Some(value)).then_some(index)
}

pub fn sorted_last_index_of<T: Ord>(array: &[T], value: &T) -> Option<usize> {
    let index = sorted_last_index(array, value).checked_sub(1)?;
    (array[index] == *value).then_some(index)
}

pub fn sorted_uniq<T: Clone + PartialEq>(array: &[T]) -> Vec<T> {
    array.iter().dedup().cloned().collect()
}

pub fn sorted_uniq_by<T, K, F>(array: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    array
        .iter()
        .dedup_by(|a, b| key(*a) == key(*b))
        .cloned()
        .collect()
}
