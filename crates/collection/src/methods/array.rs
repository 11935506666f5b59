use std::hash::Hash;

use indexmap::IndexMap;

use crate::{Collection, Delegate, Nested, Truthy, utils};

impl<T> Collection<T> {
    /// Groups of `size` elements; the last group holds the remainder.
    pub fn chunk(&self, size: usize) -> Collection<Vec<T>>
    where
        T: Clone,
    {
        self.delegate(Delegate::Chunk, |a| utils::chunk(a, size))
    }

    pub fn compact(&self) -> Collection<T>
    where
        T: Truthy + Clone,
    {
        self.delegate(Delegate::Compact, utils::compact)
    }

    pub fn drop(&self, n: usize) -> Collection<T>
    where
        T: Clone,
    {
        self.delegate(Delegate::Drop, |a| utils::drop(a, n))
    }

    pub fn drop_right(&self, n: usize) -> Collection<T>
    where
        T: Clone,
    {
        self.delegate(Delegate::DropRight, |a| utils::drop_right(a, n))
    }

    /// Drops the leading run on which `predicate(value, index, slice)` holds.
    pub fn drop_while<P>(&self, predicate: P) -> Collection<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        self.delegate(Delegate::DropWhile, |a| utils::drop_while(a, predicate))
    }

    pub fn drop_right_while<P>(&self, predicate: P) -> Collection<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        self.delegate(Delegate::DropRightWhile, |a| {
            utils::drop_right_while(a, predicate)
        })
    }

    pub fn take(&self, n: usize) -> Collection<T>
    where
        T: Clone,
    {
        self.delegate(Delegate::Take, |a| utils::take(a, n))
    }

    pub fn take_right(&self, n: usize) -> Collection<T>
    where
        T: Clone,
    {
        self.delegate(Delegate::TakeRight, |a| utils::take_right(a, n))
    }

    pub fn take_while<P>(&self, predicate: P) -> Collection<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        self.delegate(Delegate::TakeWhile, |a| utils::take_while(a, predicate))
    }

    pub fn take_right_while<P>(&self, predicate: P) -> Collection<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        self.delegate(Delegate::TakeRightWhile, |a| {
            utils::take_right_while(a, predicate)
        })
    }

    pub fn head(&self) -> Option<&T> {
        self.delegate(Delegate::Head, utils::head)
    }

    /// Alias of [`Collection::head`].
    pub fn first(&self) -> Option<&T> {
        self.head()
    }

    pub fn last(&self) -> Option<&T> {
        self.delegate(Delegate::Last, utils::last)
    }

    pub fn initial(&self) -> Collection<T>
    where
        T: Clone,
    {
        self.delegate(Delegate::Initial, utils::initial)
    }

    pub fn tail(&self) -> Collection<T>
    where
        T: Clone,
    {
        self.delegate(Delegate::Tail, utils::tail)
    }

    /// Element at `n`, counting from the end when `n` is negative.
    pub fn nth(&self, n: isize) -> Option<&T> {
        self.delegate(Delegate::Nth, |a| utils::nth(a, n))
    }

    pub fn find_last_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        self.delegate(Delegate::FindLastIndex, |a| {
            utils::find_last_index(a, predicate)
        })
    }

    /// Negative `from` counts back from the end.
    pub fn last_index_of(&self, value: &T, from: Option<isize>) -> Option<usize>
    where
        T: PartialEq,
    {
        self.delegate(Delegate::LastIndexOf, |a| {
            utils::last_index_of(a, value, from)
        })
    }

    /// Treats `self` as keys and pairs them with `values` by position.
    pub fn zip_object<V>(&self, values: &[V]) -> IndexMap<T, Option<V>>
    where
        T: Clone + Eq + Hash,
        V: Clone,
    {
        self.delegate(Delegate::ZipObject, |a| utils::zip_object(a, values))
    }
}

impl<C> Collection<C>
where
    C: Clone + IntoIterator,
{
    /// Removes one level of nesting.
    pub fn flatten(&self) -> Collection<C::Item> {
        self.delegate(Delegate::Flatten, utils::flatten)
    }
}

impl<T: Clone> Collection<Nested<T>> {
    pub fn flatten_deep(&self) -> Collection<T> {
        self.delegate(Delegate::FlattenDeep, utils::flatten_deep)
    }

    pub fn flatten_depth(&self, depth: usize) -> Collection<Nested<T>> {
        self.delegate(Delegate::FlattenDepth, |a| utils::flatten_depth(a, depth))
    }
}

impl<K, V> Collection<(K, V)>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    pub fn from_pairs(&self) -> IndexMap<K, V> {
        self.delegate(Delegate::FromPairs, utils::from_pairs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Collection, Nested, collection, utils};

    #[test]
    fn chunk_scenario() {
        let groups = Collection::from(vec![1, 2, 3, 4, 5]).chunk(2);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups, [vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn compact_scenario_and_idempotence() {
        let c = collection![Some(0), Some(1), None, Some(2), Some(0), Some(3)];
        let once = c.compact();
        assert_eq!(once, [Some(1), Some(2), Some(3)]);
        assert_eq!(once.compact(), once);

        let words = collection!["", "a", "", "b"];
        assert_eq!(words.compact(), ["a", "b"]);
    }

    #[test]
    fn first_scenario() {
        let c = Collection::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(c.first(), Some(&1));
        assert_eq!(c.first(), utils::head(&[1, 2, 3, 4, 5]));
        let empty: Collection<i32> = Collection::from(vec![]);
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn sequence_delegates_match_library() {
        let data = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let c = Collection::from(data.clone());
        assert_eq!(c.drop(2), utils::drop(&data, 2));
        assert_eq!(c.drop_right(3), utils::drop_right(&data, 3));
        assert_eq!(c.take(3), utils::take(&data, 3));
        assert_eq!(c.take_right(2), utils::take_right(&data, 2));
        assert_eq!(c.initial(), utils::initial(&data));
        assert_eq!(c.tail(), utils::tail(&data));
        assert_eq!(
            c.drop_while(|&x, _, _| x < 4),
            utils::drop_while(&data, |&x, _, _| x < 4)
        );
        assert_eq!(c.take_while(|&x, _, _| x != 5), [3, 1, 4, 1]);
        assert_eq!(c.drop_right_while(|&x, _, _| x > 1), [3, 1, 4, 1]);
        assert_eq!(c.take_right_while(|&x, _, _| x > 1), [5, 9, 2, 6]);
    }

    #[test]
    fn scalar_delegates_pass_through() {
        let c = collection!['a', 'b', 'a', 'c'];
        assert_eq!(c.nth(-1), Some(&'c'));
        assert_eq!(c.nth(1), Some(&'b'));
        assert_eq!(c.find_last_index(|&x, _, _| x == 'a'), Some(2));
        assert_eq!(c.last_index_of(&'a', None), Some(2));
        assert_eq!(c.last_index_of(&'a', Some(1)), Some(0));
        assert_eq!(c.last_index_of(&'a', Some(-3)), Some(0));
        assert_eq!(c.head(), c.first());
    }

    #[test]
    fn flatten_family() {
        let c = collection![vec![1, 2], vec![3], vec![]];
        let flat: Collection<i32> = c.flatten();
        assert_eq!(flat, [1, 2, 3]);

        let deep = collection![
            Nested::Leaf(1),
            Nested::list([Nested::Leaf(2), Nested::list([Nested::Leaf(3)])]),
        ];
        assert_eq!(deep.flatten_deep(), [1, 2, 3]);
        assert_eq!(deep.flatten_depth(1).len(), 3);
        assert_eq!(deep.flatten_depth(2).flatten_deep(), deep.flatten_deep());
    }

    #[test]
    fn pairs_and_objects() {
        let pairs = collection![("a", 1), ("b", 2)];
        let map = pairs.from_pairs();
        assert_eq!(map["a"], 1);
        assert_eq!(map["b"], 2);

        let keys = collection!["x", "y"];
        let obj = keys.zip_object(&[10]);
        assert_eq!(obj["x"], Some(10));
        assert_eq!(obj["y"], None);
    }
}
