//! Recomendar: content-based and collaborative recommendation engines in pure Rust.
//!
//! Recomendar turns a tagged item catalog and a rating history into two
//! fitted recommenders: a content engine built on TF-IDF tag vectors and
//! cosine similarity, and a collaborative engine built on user-user
//! filtering with a popularity fallback. Both follow the same lifecycle:
//! construct, `fit` on a snapshot, query; refitting replaces the snapshot
//! wholesale.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
//!
//! let items = vec![
//!     Item { id: 1, title: "Heat (1995)".into(), tags: vec!["Action".into(), "Crime".into()], year: Some(1995) },
//!     Item { id: 2, title: "Casino (1995)".into(), tags: vec!["Crime".into(), "Drama".into()], year: Some(1995) },
//!     Item { id: 3, title: "Toy Story (1995)".into(), tags: vec!["Animation".into(), "Comedy".into()], year: Some(1995) },
//! ];
//!
//! // Item-to-item similarity from tags alone.
//! let mut content = ContentRecommender::new();
//! content.fit(&items);
//! let similar = content.recommend_similar(1, 5).expect("fitted");
//! assert_eq!(similar[0].item.id, 2);
//!
//! // User-user filtering over rating history.
//! let ratings = vec![
//!     RatingEvent { user_id: 10, item_id: 1, value: 5.0 },
//!     RatingEvent { user_id: 10, item_id: 2, value: 4.0 },
//! ];
//! let mut collaborative = CollaborativeRecommender::new();
//! collaborative.fit(&items, &ratings);
//!
//! let profile: RatingProfile = [(1, 5.0)].into_iter().collect();
//! let recs = collaborative.recommend_for(&profile, 5).expect("fitted");
//! assert_eq!(recs[0].item.id, 2);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Sparse term vector type
//! - [`data`]: Item and rating value types plus strict text ingestion
//! - [`text`]: TF-IDF vectorization and cosine similarity
//! - [`recommend`]: The two recommendation engines
//! - [`error`]: Crate-wide error type and `Result` alias

pub mod data;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod text;

pub use error::{RecomendarError, Result};
