//! The delegate catalog as methods on [`Collection`](crate::Collection).
//! Each method forwards to the like-named function in [`crate::utils`]
//! through the dispatcher, which re-wraps sequence results.

mod array;
mod grouping;
mod pull;
mod random;
mod set;
mod sorted;
mod zip;
