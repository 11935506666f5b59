//! The utility function library behind [`Collection`](crate::Collection).
//!
//! Every function is pure over its input slice, except the ones in [`pull`]
//! that edit a `Vec` in place. Sequence results are plain `Vec`s; the facade
//! re-wraps them.

pub mod array;
pub mod grouping;
pub mod pull;
pub mod random;
pub mod set;
pub mod sorted;
pub mod zip;

pub use array::*;
pub use grouping::*;
pub use pull::*;
pub use random::*;
pub use set::*;
pub use sorted::*;
pub use zip::*;
