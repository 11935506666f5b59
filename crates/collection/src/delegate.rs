use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Every operation [`Collection`](crate::Collection) forwards to the utility
/// library.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Delegate {
    Chunk,
    Compact,
    Difference,
    DifferenceBy,
    DifferenceWith,
    Drop,
    DropRight,
    DropRightWhile,
    DropWhile,
    FindLastIndex,
    Flatten,
    FlattenDeep,
    FlattenDepth,
    FromPairs,
    Head,
    Initial,
    Intersection,
    IntersectionBy,
    IntersectionWith,
    Last,
    LastIndexOf,
    Nth,
    Pull,
    PullAll,
    PullAllBy,
    PullAllWith,
    PullAt,
    Remove,
    SortedIndex,
    SortedIndexBy,
    SortedIndexOf,
    SortedLastIndex,
    SortedLastIndexBy,
    SortedLastIndexOf,
    SortedUniq,
    SortedUniqBy,
    Tail,
    Take,
    TakeRight,
    TakeRightWhile,
    TakeWhile,
    Union,
    UnionBy,
    UnionWith,
    Uniq,
    UniqBy,
    UniqWith,
    Unzip,
    UnzipWith,
    Without,
    Xor,
    XorBy,
    XorWith,
    Zip,
    ZipObject,
    ZipWith,
    CountBy,
    ForEachRight,
    FindLast,
    FlatMap,
    FlatMapDeep,
    GroupBy,
    InvokeMap,
    KeyBy,
    OrderBy,
    Partition,
    ReduceRight,
    Reject,
    Sample,
    SampleSize,
    Shuffle,
    SortBy,
}

/// What a delegate hands back once its result has been normalized.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ResultShape {
    /// A new `Collection<T>` or `Collection<U>`.
    Sequence,
    /// A `Collection<Vec<T>>`: the outer level is re-wrapped, the groups are not.
    Groups,
    /// `Option<&T>` or `Option<T>`.
    Element,
    /// A position, `usize` or `Option<usize>`.
    Index,
    /// An `IndexMap` keyed in first-seen order.
    Map,
    /// Any other passthrough value, e.g. a fold result.
    Scalar,
    /// Edits the receiver's storage and returns the receiver.
    InPlace,
    /// Edits the receiver's storage and returns the removed elements as a
    /// new `Collection<T>`.
    Extracted,
}

pub const ALL_DELEGATES: [Delegate; 72] = [
    Delegate::Chunk,
    Delegate::Compact,
    Delegate::Difference,
    Delegate::DifferenceBy,
    Delegate::DifferenceWith,
    Delegate::Drop,
    Delegate::DropRight,
    Delegate::DropRightWhile,
    Delegate::DropWhile,
    Delegate::FindLastIndex,
    Delegate::Flatten,
    Delegate::FlattenDeep,
    Delegate::FlattenDepth,
    Delegate::FromPairs,
    Delegate::Head,
    Delegate::Initial,
    Delegate::Intersection,
    Delegate::IntersectionBy,
    Delegate::IntersectionWith,
    Delegate::Last,
    Delegate::LastIndexOf,
    Delegate::Nth,
    Delegate::Pull,
    Delegate::PullAll,
    Delegate::PullAllBy,
    Delegate::PullAllWith,
    Delegate::PullAt,
    Delegate::Remove,
    Delegate::SortedIndex,
    Delegate::SortedIndexBy,
    Delegate::SortedIndexOf,
    Delegate::SortedLastIndex,
    Delegate::SortedLastIndexBy,
    Delegate::SortedLastIndexOf,
    Delegate::SortedUniq,
    Delegate::SortedUniqBy,
    Delegate::Tail,
    Delegate::Take,
    Delegate::TakeRight,
    Delegate::TakeRightWhile,
    Delegate::TakeWhile,
    Delegate::Union,
    Delegate::UnionBy,
    Delegate::UnionWith,
    Delegate::Uniq,
    Delegate::UniqBy,
    Delegate::UniqWith,
    Delegate::Unzip,
    Delegate::UnzipWith,
    Delegate::Without,
    Delegate::Xor,
    Delegate::XorBy,
    Delegate::XorWith,
    Delegate::Zip,
    Delegate::ZipObject,
    Delegate::ZipWith,
    Delegate::CountBy,
    Delegate::ForEachRight,
    Delegate::FindLast,
    Delegate::FlatMap,
    Delegate::FlatMapDeep,
    Delegate::GroupBy,
    Delegate::InvokeMap,
    Delegate::KeyBy,
    Delegate::OrderBy,
    Delegate::Partition,
    Delegate::ReduceRight,
    Delegate::Reject,
    Delegate::Sample,
    Delegate::SampleSize,
    Delegate::Shuffle,
    Delegate::SortBy,
];

pub fn all_delegates() -> &'static [Delegate] {
    &ALL_DELEGATES
}

impl Delegate {
    /// Name of the function in the utility library.
    pub fn name(self) -> &'static str {
        match self {
            Self::Chunk => "chunk",
            Self::Compact => "compact",
            Self::Difference => "difference",
            Self::DifferenceBy => "differenceBy",
            Self::DifferenceWith => "differenceWith",
            Self::Drop => "drop",
            Self::DropRight => "dropRight",
            Self::DropRightWhile => "dropRightWhile",
            Self::DropWhile => "dropWhile",
            Self::FindLastIndex => "findLastIndex",
            Self::Flatten => "flatten",
            Self::FlattenDeep => "flattenDeep",
            Self::FlattenDepth => "flattenDepth",
            Self::FromPairs => "fromPairs",
            Self::Head => "head",
            Self::Initial => "initial",
            Self::Intersection => "intersection",
            Self::IntersectionBy => "intersectionBy",
            Self::IntersectionWith => "intersectionWith",
            Self::Last => "last",
            Self::LastIndexOf => "lastIndexOf",
            Self::Nth => "nth",
            Self::Pull => "pull",
            Self::PullAll => "pullAll",
            Self::PullAllBy => "pullAllBy",
            Self::PullAllWith => "pullAllWith",
            Self::PullAt => "pullAt",
            Self::Remove => "remove",
            Self::SortedIndex => "sortedIndex",
            Self::SortedIndexBy => "sortedIndexBy",
            Self::SortedIndexOf => "sortedIndexOf",
            Self::SortedLastIndex => "sortedLastIndex",
            Self::SortedLastIndexBy => "sortedLastIndexBy",
            Self::SortedLastIndexOf => "sortedLastIndexOf",
            Self::SortedUniq => "sortedUniq",
            Self::SortedUniqBy => "sortedUniqBy",
            Self::Tail => "tail",
            Self::Take => "take",
            Self::TakeRight => "takeRight",
            Self::TakeRightWhile => "takeRightWhile",
            Self::TakeWhile => "takeWhile",
            Self::Union => "union",
            Self::UnionBy => "unionBy",
            Self::UnionWith => "unionWith",
            Self::Uniq => "uniq",
            Self::UniqBy => "uniqBy",
            Self::UniqWith => "uniqWith",
            Self::Unzip => "unzip",
            Self::UnzipWith => "unzipWith",
            Self::Without => "without",
            Self::Xor => "xor",
            Self::XorBy => "xorBy",
            Self::XorWith => "xorWith",
            Self::Zip => "zip",
            Self::ZipObject => "zipObject",
            Self::ZipWith => "zipWith",
            Self::CountBy => "countBy",
            Self::ForEachRight => "forEachRight",
            Self::FindLast => "findLast",
            Self::FlatMap => "flatMap",
            Self::FlatMapDeep => "flatMapDeep",
            Self::GroupBy => "groupBy",
            Self::InvokeMap => "invokeMap",
            Self::KeyBy => "keyBy",
            Self::OrderBy => "orderBy",
            Self::Partition => "partition",
            Self::ReduceRight => "reduceRight",
            Self::Reject => "reject",
            Self::Sample => "sample",
            Self::SampleSize => "sampleSize",
            Self::Shuffle => "shuffle",
            Self::SortBy => "sortBy",
        }
    }

    /// Looks a delegate up by library name. `first` and `eachRight` are
    /// accepted as aliases of `head` and `forEachRight`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "first" => Some(Self::Head),
            "eachRight" => Some(Self::ForEachRight),
            _ => all_delegates().iter().copied().find(|op| op.name() == name),
        }
    }

    pub fn shape(self) -> ResultShape {
        match self {
            Self::Chunk | Self::Partition | Self::Unzip => ResultShape::Groups,
            Self::Head
            | Self::Last
            | Self::Nth
            | Self::FindLast
            | Self::Sample => ResultShape::Element,
            Self::FindLastIndex
            | Self::LastIndexOf
            | Self::SortedIndex
            | Self::SortedIndexBy
            | Self::SortedIndexOf
            | Self::SortedLastIndex
            | Self::SortedLastIndexBy
            | Self::SortedLastIndexOf => ResultShape::Index,
            Self::FromPairs | Self::ZipObject | Self::CountBy | Self::GroupBy | Self::KeyBy => {
                ResultShape::Map
            }
            Self::ReduceRight | Self::ForEachRight => ResultShape::Scalar,
            Self::Pull | Self::PullAll | Self::PullAllBy | Self::PullAllWith => {
                ResultShape::InPlace
            }
            Self::PullAt | Self::Remove => ResultShape::Extracted,
            _ => ResultShape::Sequence,
        }
    }

    /// Whether the library result is re-wrapped into a `Collection`.
    pub fn rewraps(self) -> bool {
        matches!(
            self.shape(),
            ResultShape::Sequence | ResultShape::Groups | ResultShape::Extracted
        )
    }
}

impl fmt::Display for Delegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name is not in the delegate catalog.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown delegate `{0}`")]
pub struct UnknownDelegate(pub String);

impl FromStr for Delegate {
    type Err = UnknownDelegate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownDelegate(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn delegate_names_are_unique() {
        let mut seen = HashSet::new();
        for &op in all_delegates() {
            assert!(seen.insert(op.name()), "duplicate name {}", op.name());
        }
    }

    #[test]
    fn names_round_trip() {
        for &op in all_delegates() {
            assert_eq!(Delegate::from_name(op.name()), Some(op));
            assert_eq!(op.to_string().parse::<Delegate>(), Ok(op));
        }
    }

    #[test]
    fn aliases() {
        assert_eq!(Delegate::from_name("first"), Some(Delegate::Head));
        assert_eq!(Delegate::from_name("eachRight"), Some(Delegate::ForEachRight));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "zipObjectDeep".parse::<Delegate>().unwrap_err();
        assert_eq!(err, UnknownDelegate("zipObjectDeep".to_owned()));
        assert_eq!(err.to_string(), "unknown delegate `zipObjectDeep`");
        assert_eq!(Delegate::from_name("Chunk"), None);

        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert_eq!(boxed.to_string(), "unknown delegate `zipObjectDeep`");
    }

    #[test]
    fn shape_contract() {
        assert_eq!(Delegate::Chunk.shape(), ResultShape::Groups);
        assert_eq!(Delegate::Compact.shape(), ResultShape::Sequence);
        assert_eq!(Delegate::Head.shape(), ResultShape::Element);
        assert_eq!(Delegate::SortedIndexOf.shape(), ResultShape::Index);
        assert_eq!(Delegate::GroupBy.shape(), ResultShape::Map);
        assert_eq!(Delegate::Pull.shape(), ResultShape::InPlace);
        assert_eq!(Delegate::PullAt.shape(), ResultShape::Extracted);
        assert_eq!(Delegate::Remove.shape(), ResultShape::Extracted);
        assert!(!Delegate::PullAll.rewraps());
        assert!(Delegate::PullAt.rewraps());
        assert!(Delegate::Remove.rewraps());
        assert!(!Delegate::ReduceRight.rewraps());
    }
}
