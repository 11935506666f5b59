/// Arbitrarily nested sequence, the input of `flatten_deep` and
/// `flatten_depth`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn list<I: IntoIterator<Item = Nested<T>>>(items: I) -> Self {
        Self::List(items.into_iter().collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// All leaves in depth-first order.
    pub fn into_leaves(self) -> Vec<T> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(self, out: &mut Vec<T>) {
        match self {
            Self::Leaf(value) => out.push(value),
            Self::List(items) => {
                for item in items {
                    item.collect_leaves(out);
                }
            }
        }
    }

    /// Number of list levels above the deepest leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::List(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}
