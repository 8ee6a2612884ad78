//! Cosine similarity over sparse term vectors.
//!
//! Vectors produced by [`TfidfVectorizer`](crate::text::TfidfVectorizer) are
//! already unit-normalized, so similarity reduces to a sparse dot product
//! over the terms two vectors share. No renormalization happens here.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::{similarity::cosine_similarity, TfidfVectorizer};
//!
//! let docs = vec![
//!     vec!["action".to_string(), "thriller".to_string()],
//!     vec!["action".to_string(), "comedy".to_string()],
//! ];
//! let mut vectorizer = TfidfVectorizer::new();
//! vectorizer.fit(&docs);
//! let vectors = vectorizer.transform(&docs).expect("transform after fit");
//!
//! let sim = cosine_similarity(&vectors[0], &vectors[1]);
//! assert!(sim > 0.0 && sim < 1.0);
//! ```

use crate::primitives::SparseVector;

/// Computes the cosine similarity between two normalized sparse vectors.
///
/// Only the intersection of term keys contributes; the smaller map is
/// iterated and probed against the larger. Because inputs are unit-length,
/// the dot product already is the cosine. Symmetric. If either side is the
/// zero vector the result is 0.0, never NaN.
#[must_use]
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    a.dot(b)
}

/// Scores `query` against every vector in `corpus`.
///
/// Output order matches `corpus` order; entry `i` is
/// `cosine_similarity(query, &corpus[i])`.
#[must_use]
pub fn batch_similarities(query: &SparseVector, corpus: &[SparseVector]) -> Vec<f64> {
    corpus.iter().map(|v| cosine_similarity(query, v)).collect()
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
