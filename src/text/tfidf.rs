//! TF-IDF vectorization over pre-tokenized documents.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{RecomendarError, Result};
use crate::primitives::SparseVector;

/// TF-IDF vectorizer for documents that arrive already tokenized.
///
/// Callers hand over token lists (for the content engine, an item's tags),
/// so there is no tokenizer to configure. `fit` learns one idf weight per
/// distinct term:
///
/// ```text
/// idf(t) = ln((1 + n_docs) / (1 + df(t))) + 1
/// ```
///
/// where `df(t)` counts the documents containing `t` at least once,
/// multiplicity ignored. The smoothing keeps every fitted weight strictly
/// positive, so a term present in every document still contributes to
/// similarity instead of vanishing.
///
/// `transform` multiplies raw in-document counts by idf, drops terms the
/// vocabulary has never seen, and L2-normalizes the result. Normalized
/// vectors make downstream cosine similarity a plain dot product.
///
/// # Examples
///
/// ```
/// use recomendar::text::TfidfVectorizer;
///
/// let docs = vec![
///     vec!["action".to_string(), "thriller".to_string()],
///     vec!["action".to_string(), "comedy".to_string()],
/// ];
///
/// let mut vectorizer = TfidfVectorizer::new();
/// vectorizer.fit(&docs);
///
/// let vectors = vectorizer.transform(&docs).expect("transform after fit");
/// assert_eq!(vectors.len(), 2);
/// // "action" appears everywhere, so it carries the minimum idf of 1.0.
/// assert!((vectorizer.idf("action").expect("fitted term") - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, f64>,
    n_documents: usize,
    fitted: bool,
}

impl TfidfVectorizer {
    /// Creates an unfitted vectorizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Learns the vocabulary and idf weights from `documents`.
    ///
    /// Refitting replaces all prior state. An empty corpus is valid and
    /// yields an empty vocabulary; subsequent transforms then produce zero
    /// vectors.
    pub fn fit(&mut self, documents: &[Vec<String>]) {
        let n_docs = documents.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term.to_string()).or_insert(0) += 1;
            }
        }
        self.vocabulary = doc_freq
            .into_iter()
            .map(|(term, df)| {
                let idf = ((1 + n_docs) as f64 / (1 + df) as f64).ln() + 1.0;
                (term, idf)
            })
            .collect();
        self.n_documents = n_docs;
        self.fitted = true;
    }

    /// Transforms `documents` into normalized TF-IDF vectors, one per input
    /// document, input order preserved.
    ///
    /// Terms absent from the vocabulary are dropped, not stored as zeros. A
    /// document with no known terms becomes the zero vector.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has never been called.
    pub fn transform(&self, documents: &[Vec<String>]) -> Result<Vec<SparseVector>> {
        if !self.fitted {
            return Err(RecomendarError::not_fitted("TfidfVectorizer"));
        }
        Ok(documents.iter().map(|doc| self.vectorize(doc)).collect())
    }

    /// Transforms a single document.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has never been called.
    pub fn transform_document(&self, document: &[String]) -> Result<SparseVector> {
        if !self.fitted {
            return Err(RecomendarError::not_fitted("TfidfVectorizer"));
        }
        Ok(self.vectorize(document))
    }

    fn vectorize(&self, document: &[String]) -> SparseVector {
        let mut counts: HashMap<&str, f64> = HashMap::new();
        for token in document {
            *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
        }
        let raw: HashMap<String, f64> = counts
            .into_iter()
            .filter_map(|(term, count)| {
                self.vocabulary
                    .get(term)
                    .map(|idf| (term.to_string(), count * idf))
            })
            .collect();
        SparseVector::from_raw_weights(raw)
    }

    /// Returns true once `fit` has run.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Returns the number of distinct terms in the fitted vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Returns the idf weight for `term`, or `None` if the term was not in
    /// the fitted corpus.
    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).copied()
    }

    /// Returns the number of documents the vectorizer was fitted on.
    #[must_use]
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}

#[cfg(test)]
#[path = "tfidf_tests.rs"]
mod tests;

// Contract falsification suite (FALSIFY-TFIDF-001..006).
#[cfg(test)]
#[path = "tfidf_contract_falsify.rs"]
mod tfidf_contract_falsify;
