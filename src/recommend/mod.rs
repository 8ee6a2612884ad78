//! Recommendation engines.
//!
//! Two complementary strategies over the same catalog:
//!
//! - **Content-based** ([`ContentRecommender`]): item-to-item similarity from
//!   TF-IDF weighted tags. Works from day one, no rating history needed.
//! - **Collaborative** ([`CollaborativeRecommender`]): user-user filtering
//!   over rating history, with a popularity fallback for cold-start users.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::data::Item;
//! use recomendar::recommend::ContentRecommender;
//!
//! let items = vec![
//!     Item { id: 1, title: "Heat (1995)".into(), tags: vec!["Action".into(), "Crime".into()], year: Some(1995) },
//!     Item { id: 2, title: "Casino (1995)".into(), tags: vec!["Crime".into(), "Drama".into()], year: Some(1995) },
//!     Item { id: 3, title: "Toy Story (1995)".into(), tags: vec!["Animation".into(), "Comedy".into()], year: Some(1995) },
//! ];
//!
//! let mut recommender = ContentRecommender::new();
//! recommender.fit(&items);
//!
//! // Casino shares the Crime tag; Toy Story shares nothing and is excluded.
//! let similar = recommender.recommend_similar(1, 2).expect("fitted");
//! assert_eq!(similar.len(), 1);
//! assert_eq!(similar[0].item.id, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::data::Item;

pub mod collaborative;
pub mod content;

pub use collaborative::{
    CollaborativeRecommender, DEFAULT_MIN_RATING_COUNT, DEFAULT_NEIGHBORHOOD_SIZE,
};
pub use content::ContentRecommender;

/// An item paired with the score that ranked it.
///
/// The score's meaning depends on the producing operation: cosine similarity
/// for content recommendations, a predicted rating for collaborative ones,
/// and the mean rating for popularity results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    /// The recommended catalog item.
    pub item: Item,
    /// Relevance score, higher is better.
    pub score: f64,
}
