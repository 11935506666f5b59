use std::hash::Hash;

use indexmap::IndexMap;

use crate::{Nested, Truthy};

/// Splits `array` into groups of `size`; the last group holds the remainder.
/// A zero `size` yields no groups.
pub fn chunk<T: Clone>(array: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    array.chunks(size).map(<[T]>::to_vec).collect()
}

pub fn compact<T: Truthy + Clone>(array: &[T]) -> Vec<T> {
    array.iter().filter(|x| x.is_truthy()).cloned().collect()
}

pub fn drop<T: Clone>(array: &[T], n: usize) -> Vec<T> {
    array[n.min(array.len())..].to_vec()
}

pub fn drop_right<T: Clone>(array: &[T], n: usize) -> Vec<T> {
    array[..array.len().saturating_sub(n)].to_vec()
}

pub fn drop_while<T, P>(array: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let start = leading_run(array, predicate);
    array[start..].to_vec()
}

pub fn drop_right_while<T, P>(array: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let end = trailing_run_start(array, predicate);
    array[..end].to_vec()
}

pub fn take<T: Clone>(array: &[T], n: usize) -> Vec<T> {
    array[..n.min(array.len())].to_vec()
}

pub fn take_right<T: Clone>(array: &[T], n: usize) -> Vec<T> {
    array[array.len().saturating_sub(n)..].to_vec()
}

pub fn take_while<T, P>(array: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let end = leading_run(array, predicate);
    array[..end].to_vec()
}

pub fn take_right_while<T, P>(array: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let start = trailing_run_start(array, predicate);
    array[start..].to_vec()
}

/// Length of the prefix on which `predicate` holds.
fn leading_run<T, P>(array: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    array
        .iter()
        .enumerate()
        .position(|(i, x)| !predicate(x, i, array))
        .unwrap_or(array.len())
}

/// Start of the suffix on which `predicate` holds, scanning from the end.
fn trailing_run_start<T, P>(array: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let mut start = array.len();
    while start > 0 && predicate(&array[start - 1], start - 1, array) {
        start -= 1;
    }
    start
}

#[inline]
pub fn head<T>(array: &[T]) -> Option<&T> {
    array.first()
}

#[inline]
pub fn last<T>(array: &[T]) -> Option<&T> {
    array.last()
}

pub fn initial<T: Clone>(array: &[T]) -> Vec<T> {
    drop_right(array, 1)
}

pub fn tail<T: Clone>(array: &[T]) -> Vec<T> {
    drop(array, 1)
}

/// Element at `n`; negative `n` counts back from the end.
pub fn nth<T>(array: &[T], n: isize) -> Option<&T> {
    let index = if n < 0 {
        array.len().checked_sub(n.unsigned_abs())?
    } else {
        n.unsigned_abs()
    };
    array.get(index)
}

pub fn find_last_index<T, P>(array: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    (0..array.len()).rev().find(|&i| predicate(&array[i], i, array))
}

/// Last index `<= from` (or anywhere, if `from` is `None`) holding `value`.
/// A negative `from` counts back from the end and clamps at index 0.
pub fn last_index_of<T: PartialEq>(array: &[T], value: &T, from: Option<isize>) -> Option<usize> {
    let end = match from {
        None => array.len(),
        Some(from) if from < 0 => array.len().saturating_sub(from.unsigned_abs()),
        Some(from) => from.unsigned_abs(),
    }
    .saturating_add(1)
    .min(array.len());
    array[..end].iter().rposition(|x| x == value)
}

pub fn flatten<C>(array: &[C]) -> Vec<C::Item>
where
    C: Clone + IntoIterator,
{
    array.iter().cloned().flatten().collect()
}

pub fn flatten_deep<T: Clone>(array: &[Nested<T>]) -> Vec<T> {
    let mut out = Vec::new();
    for item in array {
        push_leaves(item, &mut out);
    }
    out
}

fn push_leaves<T: Clone>(item: &Nested<T>, out: &mut Vec<T>) {
    match item {
        Nested::Leaf(value) => out.push(value.clone()),
        Nested::List(items) => {
            for inner in items {
                push_leaves(inner, out);
            }
        }
    }
}

/// Removes up to `depth` levels of nesting. Depth zero is a plain copy.
pub fn flatten_depth<T: Clone>(array: &[Nested<T>], depth: usize) -> Vec<Nested<T>> {
    let mut out = Vec::new();
    for item in array {
        push_depth(item, depth, &mut out);
    }
    out
}

fn push_depth<T: Clone>(item: &Nested<T>, depth: usize, out: &mut Vec<Nested<T>>) {
    match item {
        Nested::List(items) if depth > 0 => {
            for inner in items {
                push_depth(inner, depth - 1, out);
            }
        }
        _ => out.push(item.clone()),
    }
}

/// Builds a map from `(key, value)` pairs; a repeated key keeps its first
/// position and takes the later value.
pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> IndexMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    pairs.iter().cloned().collect()
}
