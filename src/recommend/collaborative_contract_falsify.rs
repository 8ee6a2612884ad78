//! Collaborative Filtering Contract Falsification Tests
//!
//! Popperian falsification of the engine's contract claims:
//!   - Predictions are similarity-weighted means, so they stay inside the
//!     range of the ratings that produced them
//!   - An empty profile returns exactly the popularity fallback
//!   - Items already in the query profile are never recommended
//!   - Popularity enforces the min-rating-count floor, boundary included
//!   - Popularity ranks by damped mean but reports the plain mean
//!   - Recommendation output is deterministic, ties included

pub(crate) use super::*;

fn item(id: ItemId) -> Item {
    Item {
        id,
        title: format!("Item {id}"),
        tags: vec!["Tag".to_string()],
        year: None,
    }
}

fn event(user_id: UserId, item_id: ItemId, value: f64) -> RatingEvent {
    RatingEvent {
        user_id,
        item_id,
        value,
    }
}

fn dense_fixture() -> CollaborativeRecommender {
    let items: Vec<Item> = (1..=8).map(item).collect();
    let mut ratings = Vec::new();
    for user in 0..6_u32 {
        for item_id in 1..=8_u32 {
            // Deterministic spread of values in [0.5, 5.0].
            let value = 0.5 + f64::from((user + item_id) % 10) * 0.5;
            ratings.push(event(user, item_id, value));
        }
    }
    let mut recommender = CollaborativeRecommender::new().with_min_rating_count(1);
    recommender.fit(&items, &ratings);
    recommender
}

// ============================================================================
// FALSIFY-COLLAB-001: predictions bounded by contributing ratings
// Contract: weighted mean of values in [lo, hi] lies in [lo, hi]
// ============================================================================

#[test]
fn falsify_collab_001_predictions_within_rating_range() {
    let recommender = dense_fixture();
    let query: RatingProfile = [(1, 4.0), (2, 3.5)].into_iter().collect();

    let recs = recommender.recommend_for(&query, 10).expect("fitted");
    assert!(!recs.is_empty());
    for rec in &recs {
        assert!(
            (0.5..=5.0).contains(&rec.score),
            "FALSIFIED COLLAB-001: prediction {} for item {} escapes the rating range",
            rec.score,
            rec.item.id
        );
        assert!(
            rec.score.is_finite(),
            "FALSIFIED COLLAB-001: non-finite prediction for item {}",
            rec.item.id
        );
    }
}

// ============================================================================
// FALSIFY-COLLAB-002: empty profile = popularity fallback
// Contract: recommend_for(&{}, n) == popular_items(n), element for element
// ============================================================================

#[test]
fn falsify_collab_002_empty_profile_is_popular_fallback() {
    let recommender = dense_fixture();
    let empty = RatingProfile::new();

    for top_n in [0, 1, 3, 50] {
        let fallback = recommender.recommend_for(&empty, top_n).expect("fitted");
        let popular = recommender.popular_items(top_n).expect("fitted");
        assert_eq!(
            fallback, popular,
            "FALSIFIED COLLAB-002: fallback diverges from popular_items at top_n={top_n}"
        );
    }
}

// ============================================================================
// FALSIFY-COLLAB-003: profile items excluded
// Contract: recommend_for never returns an item the profile already rated
// ============================================================================

#[test]
fn falsify_collab_003_profile_items_excluded() {
    let recommender = dense_fixture();
    let query: RatingProfile = [(1, 5.0), (2, 1.0), (3, 3.0)].into_iter().collect();

    let recs = recommender.recommend_for(&query, 50).expect("fitted");
    for rec in &recs {
        assert!(
            !query.contains_key(&rec.item.id),
            "FALSIFIED COLLAB-003: item {} from the query profile was recommended",
            rec.item.id
        );
    }
}

// ============================================================================
// FALSIFY-COLLAB-004: popularity floor, boundary included
// Contract: count < min_rating_count excludes; count == min_rating_count admits
// ============================================================================

#[test]
fn falsify_collab_004_popularity_floor_boundary() {
    let mut ratings = Vec::new();
    for user in 0..DEFAULT_MIN_RATING_COUNT as u32 {
        ratings.push(event(user, 1, 3.0));
    }
    for user in 0..(DEFAULT_MIN_RATING_COUNT - 1) as u32 {
        ratings.push(event(100 + user, 2, 5.0));
    }
    let mut recommender = CollaborativeRecommender::new();
    recommender.fit(&[item(1), item(2)], &ratings);

    let popular = recommender.popular_items(10).expect("fitted");
    let ids: Vec<ItemId> = popular.iter().map(|r| r.item.id).collect();
    assert!(
        ids.contains(&1),
        "FALSIFIED COLLAB-004: item at exactly the floor was excluded"
    );
    assert!(
        !ids.contains(&2),
        "FALSIFIED COLLAB-004: item below the floor leaked through on a perfect mean"
    );
}

// ============================================================================
// FALSIFY-COLLAB-005: damped ranking, undamped score
// Contract: rank key is mean * ln(count + 1); reported score is the mean
// ============================================================================

#[test]
fn falsify_collab_005_damped_rank_plain_score() {
    let mut ratings = Vec::new();
    for user in 0..100 {
        ratings.push(event(user, 1, 4.0));
    }
    for user in 0..10 {
        ratings.push(event(1000 + user, 2, 5.0));
    }
    let mut recommender = CollaborativeRecommender::new();
    recommender.fit(&[item(1), item(2)], &ratings);

    let popular = recommender.popular_items(10).expect("fitted");
    assert_eq!(
        popular[0].item.id, 1,
        "FALSIFIED COLLAB-005: ranking ignored the ln(count + 1) damping"
    );
    assert!(
        (popular[0].score - 4.0).abs() < 1e-9 && (popular[1].score - 5.0).abs() < 1e-9,
        "FALSIFIED COLLAB-005: reported scores are not plain means: {} and {}",
        popular[0].score,
        popular[1].score
    );
}

// ============================================================================
// FALSIFY-COLLAB-006: determinism with ties
// Contract: identical fits and queries yield identical output, even when
// similarities and scores tie
// ============================================================================

#[test]
fn falsify_collab_006_determinism_with_ties() {
    // Users 1 and 2 are identical (similarity ties); items 10 and 20 end up
    // with equal predictions (score ties).
    let items: Vec<Item> = vec![item(1), item(10), item(20)];
    let ratings = vec![
        event(1, 1, 5.0),
        event(1, 10, 4.0),
        event(2, 1, 5.0),
        event(2, 20, 4.0),
    ];
    let query: RatingProfile = [(1, 5.0)].into_iter().collect();

    let mut first = CollaborativeRecommender::new();
    first.fit(&items, &ratings);
    let mut second = CollaborativeRecommender::new();
    second.fit(&items, &ratings);

    let out_first = first.recommend_for(&query, 10).expect("fitted");
    let out_second = second.recommend_for(&query, 10).expect("fitted");
    assert_eq!(
        out_first, out_second,
        "FALSIFIED COLLAB-006: identical fits produced different recommendations"
    );
    assert_eq!(
        out_first,
        first.recommend_for(&query, 10).expect("fitted"),
        "FALSIFIED COLLAB-006: repeated query on one instance diverged"
    );
    // Tied scores fall back to ascending item id.
    let ids: Vec<ItemId> = out_first.iter().map(|r| r.item.id).collect();
    assert_eq!(
        ids,
        vec![10, 20],
        "FALSIFIED COLLAB-006: tie order is not the documented id order"
    );
}
