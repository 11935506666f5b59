use std::cmp::Ordering;
use std::hash::Hash;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::Nested;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

/// One criterion of [`order_by`]: a comparator and the direction to apply it.
pub struct SortKey<'a, T> {
    compare: Box<dyn Fn(&T, &T) -> Ordering + 'a>,
    order: Order,
}

impl<'a, T> SortKey<'a, T> {
    pub fn new<F>(compare: F, order: Order) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Self {
            compare: Box::new(compare),
            order,
        }
    }

    pub fn asc<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        Self::new(move |a, b| key(a).cmp(&key(b)), Order::Asc)
    }

    pub fn desc<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        Self::new(move |a, b| key(a).cmp(&key(b)), Order::Desc)
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        let ord = (self.compare)(a, b);
        match self.order {
            Order::Asc => ord,
            Order::Desc => ord.reverse(),
        }
    }
}

pub fn count_by<T, K, F>(array: &[T], mut key: F) -> IndexMap<K, usize>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut counts = IndexMap::new();
    for x in array {
        *counts.entry(key(x)).or_insert(0) += 1;
    }
    counts
}

pub fn group_by<T, K, F>(array: &[T], mut key: F) -> IndexMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for x in array {
        groups.entry(key(x)).or_default().push(x.clone());
    }
    groups
}

/// The last element producing a key wins; keys keep first-seen order.
pub fn key_by<T, K, F>(array: &[T], mut key: F) -> IndexMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    array.iter().map(|x| (key(x), x.clone())).collect()
}

/// Exactly two groups: elements matching `predicate`, then the rest.
pub fn partition<T, P>(array: &[T], mut predicate: P) -> Vec<Vec<T>>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let (hit, miss): (Vec<T>, Vec<T>) = array.iter().cloned().partition(|x| predicate(x));
    vec![hit, miss]
}

/// Stable sort by `key`.
pub fn sort_by<T, K, F>(array: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    array.iter().sorted_by_key(|x| key(*x)).cloned().collect()
}

/// Stable sort by each criterion in turn; later criteria break ties.
pub fn order_by<T: Clone>(array: &[T], criteria: &[SortKey<'_, T>]) -> Vec<T> {
    array
        .iter()
        .sorted_by(|a, b| {
            criteria
                .iter()
                .map(|c| c.compare(a, b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .cloned()
        .collect()
}

pub fn reject<T, P>(array: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    array.iter().filter(|&x| !predicate(x)).cloned().collect()
}

pub fn find_last<T, P>(array: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    array
        .iter()
        .enumerate()
        .rev()
        .find(|&(i, x)| predicate(x, i, array))
        .map(|(_, x)| x)
}

pub fn flat_map<T, U, I, F>(array: &[T], f: F) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(&T) -> I,
{
    array.iter().flat_map(f).collect()
}

pub fn flat_map_deep<T, U, F>(array: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> Nested<U>,
{
    array.iter().map(f).flat_map(Nested::into_leaves).collect()
}

pub fn invoke_map<T, R, F>(array: &[T], f: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    array.iter().map(f).collect()
}

pub fn reduce_right<T, A, F>(array: &[T], init: A, f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    array.iter().rev().fold(init, f)
}

/// Visits elements from the end; returning `false` from `f` stops early.
pub fn for_each_right<T, F>(array: &[T], mut f: F)
where
    F: FnMut(&T) -> bool,
{
    for x in array.iter().rev() {
        if !f(x) {
            break;
        }
    }
}
