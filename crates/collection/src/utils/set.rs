//! Set-style operations. Survivors always keep the order and identity they
//! have in `array`; `other` is only consulted for membership.

use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::FxHashSet;

pub fn difference<T>(array: &[T], other: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let exclude: FxHashSet<&T> = other.iter().collect();
    array.iter().filter(|x| !exclude.contains(x)).cloned().collect()
}

pub fn difference_by<T, K, F>(array: &[T], other: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let exclude: FxHashSet<K> = other.iter().map(&mut key).collect();
    array
        .iter()
        .filter(|x| !exclude.contains(&key(*x)))
        .cloned()
        .collect()
}

/// `eq` is called as `eq(array_value, other_value)`.
pub fn difference_with<T, F>(array: &[T], other: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    array
        .iter()
        .filter(|&x| !other.iter().any(|y| eq(x, y)))
        .cloned()
        .collect()
}

/// Like [`difference`], but takes the excluded values as a separate list
/// rather than an array to compare against.
pub fn without<T>(array: &[T], values: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    difference(array, values)
}

pub fn intersection<T>(array: &[T], other: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let keep: FxHashSet<&T> = other.iter().collect();
    array
        .iter()
        .filter(|x| keep.contains(x))
        .unique()
        .cloned()
        .collect()
}

pub fn intersection_by<T, K, F>(array: &[T], other: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let keep: FxHashSet<K> = other.iter().map(&mut key).collect();
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for x in array {
        let k = key(x);
        if keep.contains(&k) && seen.insert(k) {
            out.push(x.clone());
        }
    }
    out
}

/// `eq` is called with the candidate from `array` first, both against
/// `other` and against the values already kept.
pub fn intersection_with<T, F>(array: &[T], other: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut out: Vec<T> = Vec::new();
    for x in array {
        if other.iter().any(|y| eq(x, y)) && !out.iter().any(|kept| eq(x, kept)) {
            out.push(x.clone());
        }
    }
    out
}

pub fn uniq<T>(array: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    array.iter().unique().cloned().collect()
}

pub fn uniq_by<T, K, F>(array: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = FxHashSet::default();
    array.iter().filter(|x| seen.insert(key(*x))).cloned().collect()
}

/// `eq` is called as `eq(candidate, already_kept)`.
pub fn uniq_with<T, F>(array: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut out: Vec<T> = Vec::new();
    for x in array {
        if !out.iter().any(|kept| eq(x, kept)) {
            out.push(x.clone());
        }
    }
    out
}

pub fn union<T>(array: &[T], other: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    array.iter().chain(other).unique().cloned().collect()
}

pub fn union_by<T, K, F>(array: &[T], other: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = FxHashSet::default();
    array
        .iter()
        .chain(other)
        .filter(|x| seen.insert(key(*x)))
        .cloned()
        .collect()
}

pub fn union_with<T, F>(array: &[T], other: &[T], eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let joined: Vec<T> = array.iter().chain(other).cloned().collect();
    uniq_with(&joined, eq)
}

/// Unique values that appear in exactly one side: `array`'s survivors
/// first, then `other`'s.
pub fn xor<T>(array: &[T], other: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let left: FxHashSet<&T> = array.iter().collect();
    let right: FxHashSet<&T> = other.iter().collect();
    array
        .iter()
        .filter(|x| !right.contains(x))
        .chain(other.iter().filter(|x| !left.contains(x)))
        .unique()
        .cloned()
        .collect()
}

pub fn xor_by<T, K, F>(array: &[T], other: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let left_keys: Vec<K> = array.iter().map(&mut key).collect();
    let right_keys: Vec<K> = other.iter().map(&mut key).collect();
    let left: FxHashSet<&K> = left_keys.iter().collect();
    let right: FxHashSet<&K> = right_keys.iter().collect();

    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for (x, k) in array.iter().zip(&left_keys) {
        if !right.contains(k) && seen.insert(k) {
            out.push(x.clone());
        }
    }
    for (x, k) in other.iter().zip(&right_keys) {
        if !left.contains(k) && seen.insert(k) {
            out.push(x.clone());
        }
    }
    out
}

pub fn xor_with<T, F>(array: &[T], other: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut out: Vec<T> = Vec::new();
    for x in array {
        if !other.iter().any(|y| eq(x, y)) && !out.iter().any(|kept| eq(x, kept)) {
            out.push(x.clone());
        }
    }
    for y in other {
        if !array.iter().any(|x| eq(y, x)) && !out.iter().any(|kept| eq(y, kept)) {
            out.push(y.clone());
        }
    }
    out
}
