use std::borrow::{Borrow, BorrowMut};
use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;

use crate::Delegate;

/// Ordered sequence that owns a `Vec<T>` and exposes the delegate catalog.
///
/// Everything a slice can do is available through `Deref<Target = [T]>`.
/// Every delegate that produces a new sequence hands back a `Collection`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Copies `items` into a new collection, preserving order.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            items: items.to_vec(),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn insert(&mut self, index: usize, value: T) {
        self.items.insert(index, value);
    }

    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Runs a library function over the elements and normalizes its result.
    pub(crate) fn delegate<'a, R, F>(&'a self, op: Delegate, f: F) -> R::Output
    where
        R: Rewrap,
        F: FnOnce(&'a [T]) -> R,
    {
        log::trace!("delegate {} len={}", op.name(), self.items.len());
        f(&self.items).rewrap()
    }

    /// Same as [`Collection::delegate`] for library functions that edit the
    /// backing storage in place.
    pub(crate) fn delegate_mut<R, F>(&mut self, op: Delegate, f: F) -> R::Output
    where
        R: Rewrap,
        F: FnOnce(&mut Vec<T>) -> R,
    {
        log::trace!("delegate_mut {} len={}", op.name(), self.items.len());
        f(&mut self.items).rewrap()
    }
}

/// Result normalization applied to every delegate.
///
/// Sequences come back as [`Collection`] (outer level only); anything else is
/// returned as-is.
pub trait Rewrap {
    type Output;

    fn rewrap(self) -> Self::Output;
}

impl<T> Rewrap for Vec<T> {
    type Output = Collection<T>;

    #[inline]
    fn rewrap(self) -> Collection<T> {
        Collection::from(self)
    }
}

impl<T> Rewrap for Option<T> {
    type Output = Option<T>;

    #[inline]
    fn rewrap(self) -> Option<T> {
        self
    }
}

impl<K, V, S> Rewrap for IndexMap<K, V, S> {
    type Output = IndexMap<K, V, S>;

    #[inline]
    fn rewrap(self) -> Self {
        self
    }
}

impl<T: ?Sized> Rewrap for &T {
    type Output = Self;

    #[inline]
    fn rewrap(self) -> Self {
        self
    }
}

macro_rules! passthrough {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Rewrap for $ty {
                type Output = $ty;

                #[inline]
                fn rewrap(self) -> $ty {
                    self
                }
            }
        )*
    };
}

passthrough!(
    (),
    bool,
    char,
    usize,
    isize,
    u8,
    u16,
    u32,
    u64,
    i8,
    i16,
    i32,
    i64,
    f32,
    f64,
    String
);

impl<T> Deref for Collection<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for Collection<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsMut<[T]> for Collection<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> Borrow<[T]> for Collection<T> {
    fn borrow(&self) -> &[T] {
        &self.items
    }
}

impl<T> BorrowMut<[T]> for Collection<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: Vec::from(items),
        }
    }
}

impl<T: Clone> From<&[T]> for Collection<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    fn from(collection: Collection<T>) -> Self {
        collection.items
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Collection<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T, U> PartialEq<Vec<U>> for Collection<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.items[..] == other[..]
    }
}

impl<T, U> PartialEq<[U]> for Collection<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.items[..] == *other
    }
}

impl<T, U> PartialEq<&[U]> for Collection<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.items[..] == **other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Collection<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.items[..] == other[..]
    }
}

impl<T, U> PartialEq<Collection<U>> for Vec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Collection<U>) -> bool {
        self[..] == other.items[..]
    }
}
