//! Core data structures used across the crate.
//!
//! Sparse term vectors are the currency of the text pipeline: the
//! vectorizer produces them and the similarity functions consume them.

mod sparse;

pub use sparse::SparseVector;
