use std::hash::Hash;

use indexmap::IndexMap;
use itertools::{EitherOrBoth, Itertools};

/// Pairs elements by position up to the longer length; the shorter side is
/// padded with `None`.
pub fn zip<T, U>(array: &[T], other: &[U]) -> Vec<(Option<T>, Option<U>)>
where
    T: Clone,
    U: Clone,
{
    zip_with(array, other, |a, b| (a.cloned(), b.cloned()))
}

pub fn zip_with<T, U, R, F>(array: &[T], other: &[U], mut f: F) -> Vec<R>
where
    F: FnMut(Option<&T>, Option<&U>) -> R,
{
    array
        .iter()
        .zip_longest(other)
        .map(|pair| match pair {
            EitherOrBoth::Both(a, b) => f(Some(a), Some(b)),
            EitherOrBoth::Left(a) => f(Some(a), None),
            EitherOrBoth::Right(b) => f(None, Some(b)),
        })
        .collect()
}

/// Maps each key to the value at the same position, or `None` when `values`
/// is shorter. A repeated key takes the later value.
pub fn zip_object<K, V>(keys: &[K], values: &[V]) -> IndexMap<K, Option<V>>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    keys.iter()
        .enumerate()
        .map(|(i, k)| (k.clone(), values.get(i).cloned()))
        .collect()
}

/// Regroups the i-th elements of every group together. Groups shorter than
/// the longest are padded with `None`.
pub fn unzip<T: Clone>(groups: &[Vec<T>]) -> Vec<Vec<Option<T>>> {
    unzip_with(groups, <[Option<T>]>::to_vec)
}

pub fn unzip_with<T, R, F>(groups: &[Vec<T>], mut f: F) -> Vec<R>
where
    T: Clone,
    F: FnMut(&[Option<T>]) -> R,
{
    let width = groups.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|i| {
            let column: Vec<Option<T>> = groups.iter().map(|g| g.get(i).cloned()).collect();
            f(&column)
        })
        .collect()
}
