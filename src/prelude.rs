//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::data::{Item, ItemId, RatingEvent, RatingProfile, UserId};
pub use crate::error::{RecomendarError, Result};
pub use crate::primitives::SparseVector;
pub use crate::recommend::{CollaborativeRecommender, ContentRecommender, ScoredItem};
pub use crate::text::similarity::{batch_similarities, cosine_similarity};
pub use crate::text::TfidfVectorizer;
