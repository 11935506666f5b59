use crate::{Collection, Delegate, utils};

impl<T> Collection<T> {
    pub fn zip<U>(&self, other: &[U]) -> Collection<(Option<T>, Option<U>)>
    where
        T: Clone,
        U: Clone,
    {
        self.delegate(Delegate::Zip, |a| utils::zip(a, other))
    }

    pub fn zip_with<U, R, F>(&self, other: &[U], f: F) -> Collection<R>
    where
        F: FnMut(Option<&T>, Option<&U>) -> R,
    {
        self.delegate(Delegate::ZipWith, |a| utils::zip_with(a, other, f))
    }
}

impl<T: Clone> Collection<Vec<T>> {
    /// Transposes the groups. Missing positions in shorter groups are `None`.
    pub fn unzip(&self) -> Collection<Vec<Option<T>>> {
        self.delegate(Delegate::Unzip, utils::unzip)
    }

    pub fn unzip_with<R, F>(&self, f: F) -> Collection<R>
    where
        F: FnMut(&[Option<T>]) -> R,
    {
        self.delegate(Delegate::UnzipWith, |a| utils::unzip_with(a, f))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Collection, collection};

    #[test]
    fn zip_and_unzip() {
        let names = collection!["a", "b"];
        let zipped = names.zip(&[1, 2]);
        assert_eq!(zipped, [(Some("a"), Some(1)), (Some("b"), Some(2))]);

        let groups = collection![vec![1, 2], vec![10, 20]];
        let columns: Collection<Vec<Option<i32>>> = groups.unzip();
        assert_eq!(columns, [vec![Some(1), Some(10)], vec![Some(2), Some(20)]]);
    }

    #[test]
    fn zip_with_and_unzip_with() {
        let c = collection![1, 2, 3];
        let sums = c.zip_with(&[10, 20, 30], |a, b| a.copied().unwrap_or(0) + b.copied().unwrap_or(0));
        assert_eq!(sums, [11, 22, 33]);

        let groups = collection![vec![1, 2], vec![3, 4], vec![5]];
        let totals = groups.unzip_with(|column| column.iter().flatten().sum::<i32>());
        assert_eq!(totals, [9, 6]);
    }
}
