//! Content-based recommendations from item tags.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::{Item, ItemId};
use crate::error::{RecomendarError, Result};
use crate::primitives::SparseVector;
use crate::text::similarity::batch_similarities;
use crate::text::TfidfVectorizer;

use super::ScoredItem;

/// Item-to-item recommender over TF-IDF weighted tags.
///
/// # Algorithm
///
/// 1. `fit` lower-cases each item's tags into one document per item
/// 2. A [`TfidfVectorizer`] learns idf weights and produces one normalized
///    sparse vector per item
/// 3. `recommend_similar` scores the query item's vector against the whole
///    catalog by cosine similarity and returns the best matches
///
/// The catalog also backs plain lookups: title search, tag filtering, the
/// tag universe, and random sampling.
///
/// # Examples
///
/// ```
/// use recomendar::data::Item;
/// use recomendar::recommend::ContentRecommender;
///
/// let items = vec![
///     Item { id: 1, title: "Heat (1995)".into(), tags: vec!["Action".into(), "Crime".into()], year: Some(1995) },
///     Item { id: 2, title: "Casino (1995)".into(), tags: vec!["Crime".into(), "Drama".into()], year: Some(1995) },
/// ];
///
/// let mut recommender = ContentRecommender::new();
/// recommender.fit(&items);
///
/// let similar = recommender.recommend_similar(1, 5).expect("fitted");
/// assert_eq!(similar[0].item.id, 2);
/// assert!(similar[0].score > 0.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentRecommender {
    /// Vectorizer fitted on the catalog's tag documents.
    vectorizer: TfidfVectorizer,
    /// Fitted catalog, in input order.
    items: Vec<Item>,
    /// One vector per item, index-aligned with `items`.
    vectors: Vec<SparseVector>,
    /// Item id to catalog position.
    index: HashMap<ItemId, usize>,
    fitted: bool,
}

impl ContentRecommender {
    /// Creates an unfitted recommender.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fits the recommender on a catalog snapshot.
    ///
    /// Each item's tags become one document, lower-cased so tag casing never
    /// splits the vocabulary. Refitting replaces all prior state; an empty
    /// catalog is valid and leaves every query returning empty results.
    pub fn fit(&mut self, items: &[Item]) {
        let documents: Vec<Vec<String>> = items
            .iter()
            .map(|item| item.tags.iter().map(|t| t.to_lowercase()).collect())
            .collect();
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit(&documents);
        self.vectors = vectorizer
            .transform(&documents)
            .expect("vectorizer fitted on the previous line");
        self.vectorizer = vectorizer;
        self.items = items.to_vec();
        self.index = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id, idx))
            .collect();
        self.fitted = true;
    }

    /// Recommends up to `top_n` items most similar to `item_id`.
    ///
    /// The query item itself and items with no tag overlap (score <= 0) are
    /// excluded. Results are sorted by descending similarity; ties keep
    /// catalog order. An id absent from the catalog yields an empty list,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has never been called.
    pub fn recommend_similar(&self, item_id: ItemId, top_n: usize) -> Result<Vec<ScoredItem>> {
        self.ensure_fitted()?;
        let query_idx = match self.index.get(&item_id) {
            Some(&idx) => idx,
            None => return Ok(Vec::new()),
        };
        let scores = batch_similarities(&self.vectors[query_idx], &self.vectors);
        let mut scored: Vec<(usize, f64)> = scores
            .into_iter()
            .enumerate()
            .filter(|&(idx, score)| idx != query_idx && score > 0.0)
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_n);
        Ok(scored
            .into_iter()
            .map(|(idx, score)| ScoredItem {
                item: self.items[idx].clone(),
                score,
            })
            .collect())
    }

    /// Finds items whose title contains `query`, case-insensitively.
    ///
    /// Results keep catalog order and are truncated to `limit`; this is a
    /// filter, not a ranking.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has never been called.
    pub fn search_title(&self, query: &str, limit: usize) -> Result<Vec<Item>> {
        self.ensure_fitted()?;
        let needle = query.to_lowercase();
        Ok(self
            .items
            .iter()
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect())
    }

    /// Finds items carrying `tag` as an exact, case-insensitive tag.
    ///
    /// Results keep catalog order and are truncated to `limit`.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has never been called.
    pub fn items_with_tag(&self, tag: &str, limit: usize) -> Result<Vec<Item>> {
        self.ensure_fitted()?;
        let needle = tag.to_lowercase();
        Ok(self
            .items
            .iter()
            .filter(|item| item.tags.iter().any(|t| t.to_lowercase() == needle))
            .take(limit)
            .cloned()
            .collect())
    }

    /// Returns the sorted union of all catalog tags, cased as in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has never been called.
    pub fn tags(&self) -> Result<Vec<String>> {
        self.ensure_fitted()?;
        Ok(self
            .items
            .iter()
            .flat_map(|item| item.tags.iter())
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect())
    }

    /// Looks up an item by id in the fitted catalog.
    #[must_use]
    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        self.index.get(&item_id).map(|&idx| &self.items[idx])
    }

    /// Draws up to `count` random items from the catalog.
    ///
    /// The caller supplies the RNG, so tests can seed a
    /// [`StdRng`](rand::rngs::StdRng) for reproducible draws.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Item> {
        let mut items = self.items.clone();
        items.shuffle(rng);
        items.truncate(count);
        items
    }

    /// Returns the fitted catalog size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the fitted catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true once `fit` has run.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Saves the fitted recommender as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails or `Io` if the file cannot
    /// be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string(self).map_err(|e| {
            RecomendarError::Serialization(format!("ContentRecommender encode failed: {e}"))
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads a recommender previously written by [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read or `Serialization` if the
    /// contents do not decode.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| {
            RecomendarError::Serialization(format!("ContentRecommender decode failed: {e}"))
        })
    }

    fn ensure_fitted(&self) -> Result<()> {
        if self.fitted {
            Ok(())
        } else {
            Err(RecomendarError::not_fitted("ContentRecommender"))
        }
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
