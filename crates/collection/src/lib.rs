//! `Collection<T>`: an owned sequence that forwards a catalog of named
//! operations to the [`utils`] library and hands sequence results back as
//! `Collection`s.
//!
//! ```
//! use collection::{Collection, collection};
//!
//! let groups = collection![1, 2, 3, 4, 5].chunk(2);
//! assert_eq!(groups, [vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let kept = Collection::from(vec![2, 1]).difference(&[2, 3]);
//! assert_eq!(kept, [1]);
//! ```

mod collection;
mod delegate;
mod methods;
mod nested;
mod truthy;
pub mod utils;

pub use collection::{Collection, Rewrap};
pub use delegate::{ALL_DELEGATES, Delegate, ResultShape, UnknownDelegate, all_delegates};
pub use nested::Nested;
pub use truthy::Truthy;
pub use utils::{Order, SortKey};

/// Builds a [`Collection`] the way `vec!` builds a `Vec`.
///
/// `collection![5]` is a one-element collection holding `5`; use
/// `collection![x; n]` for `n` copies of `x`.
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Collection::from(::std::vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Collection::from(::std::vec![$($x),+])
    };
}
