//! Text vectorization and similarity.
//!
//! The content pipeline runs in two stages:
//! - [`TfidfVectorizer`] turns pre-tokenized documents into weighted
//!   [`SparseVector`](crate::primitives::SparseVector)s;
//! - [`similarity`] scores those vectors against each other.

pub mod similarity;
pub mod tfidf;

pub use tfidf::TfidfVectorizer;
