//! Operations that edit the array in place.

use std::hash::Hash;

use rustc_hash::FxHashSet;

pub fn pull<T: PartialEq>(array: &mut Vec<T>, values: &[T]) {
    array.retain(|x| !values.contains(x));
}

pub fn pull_all_by<T, K, F>(array: &mut Vec<T>, values: &[T], mut key: F)
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let exclude: FxHashSet<K> = values.iter().map(&mut key).collect();
    array.retain(|x| !exclude.contains(&key(x)));
}

/// `eq` is called as `eq(array_value, value)`.
pub fn pull_all_with<T, F>(array: &mut Vec<T>, values: &[T], mut eq: F)
where
    F: FnMut(&T, &T) -> bool,
{
    array.retain(|x| !values.iter().any(|y| eq(x, y)));
}

/// Removes the elements at `indexes` and returns them in the order the
/// indexes were given. Out-of-range indexes are ignored.
pub fn pull_at<T: Clone>(array: &mut Vec<T>, indexes: &[usize]) -> Vec<T> {
    let len = array.len();
    let picked: Vec<T> = indexes
        .iter()
        .filter(|&&i| i < len)
        .map(|&i| array[i].clone())
        .collect();

    let mut mask = vec![false; len];
    for &i in indexes.iter().filter(|&&i| i < len) {
        mask[i] = true;
    }
    retain_unmasked(array, &mask);
    picked
}

/// Removes every element matching `predicate` and returns them in order.
/// The predicate always sees the array as it was before any removal.
pub fn remove<T, P>(array: &mut Vec<T>, mut predicate: P) -> Vec<T>
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let view: &[T] = array;
    let mask: Vec<bool> = view
        .iter()
        .enumerate()
        .map(|(i, x)| predicate(x, i, view))
        .collect();

    let mut removed = Vec::new();
    let mut kept = Vec::with_capacity(array.len());
    for (x, hit) in array.drain(..).zip(mask) {
        if hit {
            removed.push(x);
        } else {
            kept.push(x);
        }
    }
    *array = kept;
    removed
}

fn retain_unmasked<T>(array: &mut Vec<T>, mask: &[bool]) {
    let mut i = 0;
    array.retain(|_| {
        let keep = !mask[i];
        i += 1;
        keep
    });
}
