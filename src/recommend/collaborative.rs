//! Collaborative filtering from user rating history.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::{Item, ItemId, RatingEvent, RatingProfile, UserId};
use crate::error::{RecomendarError, Result};

use super::ScoredItem;

/// Default number of nearest neighbors consulted per prediction.
pub const DEFAULT_NEIGHBORHOOD_SIZE: usize = 20;

/// Default minimum number of ratings before an item counts as popular.
pub const DEFAULT_MIN_RATING_COUNT: usize = 10;

/// Running sum and count of ratings for one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct RatingAggregate {
    sum: f64,
    count: usize,
}

impl RatingAggregate {
    fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// User-user collaborative recommender with a popularity fallback.
///
/// # Algorithm
///
/// 1. `fit` replays rating events into per-user profiles (last event per
///    user-item pair wins) and per-item aggregates
/// 2. `recommend_for` ranks fitted users by cosine similarity to the query
///    profile, computed over the items both sides rated
/// 3. The top neighbors vote on their items the query has not rated, each
///    vote weighted by the neighbor's similarity
/// 4. A query with no ratings at all falls back to [`popular_items`](Self::popular_items)
///
/// The query profile is an explicit argument; the recommender holds no
/// per-caller state beyond the fitted snapshot.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use recomendar::data::{Item, RatingEvent};
/// use recomendar::recommend::CollaborativeRecommender;
///
/// let items = vec![
///     Item { id: 1, title: "Heat (1995)".into(), tags: vec!["Crime".into()], year: Some(1995) },
///     Item { id: 2, title: "Casino (1995)".into(), tags: vec!["Crime".into()], year: Some(1995) },
/// ];
/// let ratings = vec![
///     RatingEvent { user_id: 10, item_id: 1, value: 5.0 },
///     RatingEvent { user_id: 10, item_id: 2, value: 4.0 },
/// ];
///
/// let mut recommender = CollaborativeRecommender::new();
/// recommender.fit(&items, &ratings);
///
/// // The query rated Heat like user 10 did, so Casino is predicted at 4.0.
/// let profile = HashMap::from([(1, 5.0)]);
/// let recs = recommender.recommend_for(&profile, 5).expect("fitted");
/// assert_eq!(recs[0].item.id, 2);
/// assert!((recs[0].score - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborativeRecommender {
    /// Neighbors consulted per prediction.
    neighborhood_size: usize,
    /// Rating-count floor for popularity results.
    min_rating_count: usize,
    /// Catalog snapshot keyed by item id.
    items: HashMap<ItemId, Item>,
    /// Per-user rating profiles replayed from events.
    profiles: HashMap<UserId, RatingProfile>,
    /// Per-item rating aggregates; counts every event, not unique raters.
    aggregates: HashMap<ItemId, RatingAggregate>,
    fitted: bool,
}

impl Default for CollaborativeRecommender {
    fn default() -> Self {
        Self {
            neighborhood_size: DEFAULT_NEIGHBORHOOD_SIZE,
            min_rating_count: DEFAULT_MIN_RATING_COUNT,
            items: HashMap::new(),
            profiles: HashMap::new(),
            aggregates: HashMap::new(),
            fitted: false,
        }
    }
}

impl CollaborativeRecommender {
    /// Creates an unfitted recommender with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many nearest neighbors vote on each prediction.
    #[must_use]
    pub fn with_neighborhood_size(mut self, neighborhood_size: usize) -> Self {
        self.neighborhood_size = neighborhood_size;
        self
    }

    /// Sets the minimum rating count for an item to appear in popularity
    /// results.
    #[must_use]
    pub fn with_min_rating_count(mut self, min_rating_count: usize) -> Self {
        self.min_rating_count = min_rating_count;
        self
    }

    /// Fits the recommender on a catalog snapshot and its rating history.
    ///
    /// Events replay in order: the last event for a (user, item) pair wins
    /// in that user's profile, while aggregates accumulate every event. A
    /// duplicated item id keeps the last occurrence. Refitting replaces all
    /// prior state; empty inputs are valid.
    pub fn fit(&mut self, items: &[Item], ratings: &[RatingEvent]) {
        self.items = items.iter().map(|item| (item.id, item.clone())).collect();
        let mut profiles: HashMap<UserId, RatingProfile> = HashMap::new();
        let mut aggregates: HashMap<ItemId, RatingAggregate> = HashMap::new();
        for event in ratings {
            profiles
                .entry(event.user_id)
                .or_default()
                .insert(event.item_id, event.value);
            let aggregate = aggregates.entry(event.item_id).or_default();
            aggregate.sum += event.value;
            aggregate.count += 1;
        }
        self.profiles = profiles;
        self.aggregates = aggregates;
        self.fitted = true;
    }

    /// Recommends up to `top_n` items for the given rating profile.
    ///
    /// An empty profile returns exactly [`popular_items`](Self::popular_items).
    /// Otherwise the top `neighborhood_size` users with similarity > 0 vote
    /// on items the profile has not rated; each candidate's score is the
    /// similarity-weighted mean of the neighbors' ratings. Candidates
    /// missing from the catalog snapshot are dropped. Results are sorted by
    /// descending score, ties by ascending item id.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has never been called.
    pub fn recommend_for(&self, profile: &RatingProfile, top_n: usize) -> Result<Vec<ScoredItem>> {
        self.ensure_fitted()?;
        if profile.is_empty() {
            return self.popular_items(top_n);
        }

        let mut neighbors: Vec<(f64, UserId, &RatingProfile)> = self
            .profiles
            .iter()
            .map(|(&user_id, candidate)| {
                (profile_similarity(profile, candidate), user_id, candidate)
            })
            .filter(|&(similarity, _, _)| similarity > 0.0)
            .collect();
        // Ties break on user id so equal similarities rank the same way
        // every run.
        neighbors.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });
        neighbors.truncate(self.neighborhood_size);

        let mut weighted_sums: HashMap<ItemId, f64> = HashMap::new();
        let mut similarity_sums: HashMap<ItemId, f64> = HashMap::new();
        for (similarity, _, candidate) in neighbors {
            for (&item_id, &rating) in candidate {
                if profile.contains_key(&item_id) {
                    continue;
                }
                *weighted_sums.entry(item_id).or_insert(0.0) += similarity * rating;
                *similarity_sums.entry(item_id).or_insert(0.0) += similarity;
            }
        }

        let mut scored: Vec<ScoredItem> = weighted_sums
            .into_iter()
            .filter_map(|(item_id, weighted)| {
                let similarity_sum = similarity_sums.get(&item_id).copied().unwrap_or(0.0);
                if similarity_sum <= 0.0 {
                    return None;
                }
                self.items.get(&item_id).map(|item| ScoredItem {
                    item: item.clone(),
                    score: weighted / similarity_sum,
                })
            })
            .collect();
        sort_scored(&mut scored);
        scored.truncate(top_n);
        Ok(scored)
    }

    /// Returns up to `top_n` broadly-liked items.
    ///
    /// Only items with at least `min_rating_count` ratings qualify. Ranking
    /// uses `mean * ln(count + 1)` so a good item rated often beats a
    /// perfect item rated rarely, but the reported score stays the plain
    /// mean. Ties rank by ascending item id.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has never been called.
    pub fn popular_items(&self, top_n: usize) -> Result<Vec<ScoredItem>> {
        self.ensure_fitted()?;
        let mut ranked: Vec<(f64, ScoredItem)> = self
            .aggregates
            .iter()
            .filter(|(_, aggregate)| aggregate.count >= self.min_rating_count)
            .filter_map(|(item_id, aggregate)| {
                self.items.get(item_id).map(|item| {
                    let mean = aggregate.mean();
                    let rank = mean * ((aggregate.count + 1) as f64).ln();
                    (
                        rank,
                        ScoredItem {
                            item: item.clone(),
                            score: mean,
                        },
                    )
                })
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.item.id.cmp(&b.1.item.id))
        });
        ranked.truncate(top_n);
        Ok(ranked.into_iter().map(|(_, scored)| scored).collect())
    }

    /// Returns the number of users seen at fit time.
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.profiles.len()
    }

    /// Returns the number of distinct items with at least one rating.
    #[must_use]
    pub fn n_rated_items(&self) -> usize {
        self.aggregates.len()
    }

    /// Looks up an item by id in the fitted catalog.
    #[must_use]
    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        self.items.get(&item_id)
    }

    /// Returns the configured neighborhood size.
    #[must_use]
    pub fn neighborhood_size(&self) -> usize {
        self.neighborhood_size
    }

    /// Returns the configured popularity floor.
    #[must_use]
    pub fn min_rating_count(&self) -> usize {
        self.min_rating_count
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
            RecomendarError::Serialization(format!("CollaborativeRecommender encode failed: {e}"))
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
            RecomendarError::Serialization(format!("CollaborativeRecommender decode failed: {e}"))
        })
    }

    fn ensure_fitted(&self) -> Result<()> {
        if self.fitted {
            Ok(())
        } else {
            Err(RecomendarError::not_fitted("CollaborativeRecommender"))
        }
    }
}

/// Cosine similarity between two rating profiles over the items both rated.
///
/// Norms are computed over the common subset only, so two users who agree
/// perfectly on their shared items score 1.0 no matter how much else either
/// has rated. No common items, or all-zero common ratings, scores 0.0.
fn profile_similarity(a: &RatingProfile, b: &RatingProfile) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut dot = 0.0;
    let mut norm_small = 0.0;
    let mut norm_large = 0.0;
    for (item_id, &rating_small) in small {
        if let Some(&rating_large) = large.get(item_id) {
            dot += rating_small * rating_large;
            norm_small += rating_small * rating_small;
            norm_large += rating_large * rating_large;
        }
    }
    if norm_small == 0.0 || norm_large == 0.0 {
        return 0.0;
    }
    dot / (norm_small.sqrt() * norm_large.sqrt())
}

fn sort_scored(scored: &mut [ScoredItem]) {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.item.id.cmp(&b.item.id))
    });
}

#[cfg(test)]
#[path = "collaborative_tests.rs"]
mod tests;

// Contract falsification suite (FALSIFY-COLLAB-001..006).
#[cfg(test)]
#[path = "collaborative_contract_falsify.rs"]
mod collaborative_contract_falsify;
