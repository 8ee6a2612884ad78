//! Sparse vector type for term-weight maps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A sparse vector mapping terms to non-negative weights.
///
/// Construction normalizes the weights to unit L2 length and remembers the
/// raw (pre-normalization) norm, so dot products between two vectors are
/// cosine similarities with no further division.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use recomendar::primitives::SparseVector;
///
/// let mut raw = HashMap::new();
/// raw.insert("action".to_string(), 3.0);
/// raw.insert("thriller".to_string(), 4.0);
/// let v = SparseVector::from_raw_weights(raw);
///
/// assert!((v.norm() - 5.0).abs() < 1e-9);
/// assert!((v.get("action") - 0.6).abs() < 1e-9);
/// assert_eq!(v.nnz(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    weights: HashMap<String, f64>,
    norm: f64,
}

impl SparseVector {
    /// Builds a vector from raw term weights, dropping zero entries and
    /// dividing the rest by their L2 norm.
    ///
    /// An empty or all-zero input yields the zero vector with `norm() == 0`.
    #[must_use]
    pub fn from_raw_weights(raw: HashMap<String, f64>) -> Self {
        let mut weights: HashMap<String, f64> =
            raw.into_iter().filter(|&(_, w)| w != 0.0).collect();
        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for w in weights.values_mut() {
                *w /= norm;
            }
        }
        Self { weights, norm }
    }

    /// Returns the zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            weights: HashMap::new(),
            norm: 0.0,
        }
    }

    /// Returns the normalized weight for `term`, or 0.0 if absent.
    #[must_use]
    pub fn get(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Returns the number of non-zero entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the vector has no non-zero entries.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the L2 norm of the raw weights this vector was built from.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Computes the dot product over the terms the two vectors share.
    ///
    /// Since stored weights are unit-normalized this is the cosine
    /// similarity. Either side being the zero vector gives 0.0.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        // Iterate the smaller map, probe the larger.
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (&self.weights, &other.weights)
        } else {
            (&other.weights, &self.weights)
        };
        small
            .iter()
            .filter_map(|(term, w)| large.get(term).map(|v| w * v))
            .sum()
    }

    /// Iterates over (term, normalized weight) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(term, &w)| (term.as_str(), w))
    }
}

#[cfg(test)]
#[path = "sparse_tests.rs"]
mod tests;
