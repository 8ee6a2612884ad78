pub(crate) use super::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn item(id: ItemId, title: &str, tags: &[&str]) -> Item {
    Item {
        id,
        title: title.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        year: None,
    }
}

fn fitted(items: &[Item]) -> ContentRecommender {
    let mut recommender = ContentRecommender::new();
    recommender.fit(items);
    recommender
}

#[test]
fn test_recommend_shared_tags_beat_disjoint() {
    // A shares Action with B, nothing with C.
    let catalog = vec![
        item(1, "A", &["Action", "Comedy"]),
        item(2, "B", &["Action"]),
        item(3, "C", &["Drama"]),
    ];
    let recommender = fitted(&catalog);

    let similar = recommender.recommend_similar(1, 2).expect("fitted");
    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0].item.id, 2);
    assert!(similar[0].score > 0.0);
}

#[test]
fn test_recommend_excludes_query_item() {
    let catalog = vec![
        item(1, "A", &["Action"]),
        item(2, "B", &["Action"]),
        item(3, "C", &["Action"]),
    ];
    let recommender = fitted(&catalog);

    let similar = recommender.recommend_similar(2, 10).expect("fitted");
    assert!(similar.iter().all(|s| s.item.id != 2));
    assert_eq!(similar.len(), 2);
}

#[test]
fn test_recommend_scores_positive_and_sorted() {
    let catalog = vec![
        item(1, "A", &["Action", "Crime", "Drama"]),
        item(2, "B", &["Action", "Crime", "Drama"]),
        item(3, "C", &["Action", "Western"]),
        item(4, "D", &["Romance"]),
    ];
    let recommender = fitted(&catalog);

    let similar = recommender.recommend_similar(1, 10).expect("fitted");
    assert!(similar.iter().all(|s| s.score > 0.0));
    for pair in similar.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // Identical tag set first, partial overlap second, no overlap gone.
    assert_eq!(similar[0].item.id, 2);
    assert_eq!(similar[1].item.id, 3);
    assert!(similar.iter().all(|s| s.item.id != 4));
}

#[test]
fn test_recommend_ties_keep_catalog_order() {
    let catalog = vec![
        item(1, "A", &["Action"]),
        item(2, "B", &["Action"]),
        item(3, "C", &["Action"]),
        item(4, "D", &["Action"]),
    ];
    let recommender = fitted(&catalog);

    let similar = recommender.recommend_similar(1, 10).expect("fitted");
    let ids: Vec<ItemId> = similar.iter().map(|s| s.item.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn test_recommend_truncates_to_top_n() {
    let catalog = vec![
        item(1, "A", &["Action"]),
        item(2, "B", &["Action"]),
        item(3, "C", &["Action"]),
        item(4, "D", &["Action"]),
    ];
    let recommender = fitted(&catalog);

    assert_eq!(recommender.recommend_similar(1, 2).expect("fitted").len(), 2);
    assert_eq!(recommender.recommend_similar(1, 0).expect("fitted").len(), 0);
}

#[test]
fn test_recommend_unknown_id_is_empty() {
    let recommender = fitted(&[item(1, "A", &["Action"])]);
    let similar = recommender.recommend_similar(999, 5).expect("fitted");
    assert!(similar.is_empty());
}

#[test]
fn test_recommend_before_fit_errors() {
    let recommender = ContentRecommender::new();
    let err = recommender.recommend_similar(1, 5).unwrap_err();
    assert!(matches!(err, RecomendarError::NotFitted { .. }));
}

#[test]
fn test_tag_casing_unified_at_fit() {
    let catalog = vec![
        item(1, "A", &["ACTION"]),
        item(2, "B", &["action"]),
    ];
    let recommender = fitted(&catalog);

    let similar = recommender.recommend_similar(1, 5).expect("fitted");
    assert_eq!(similar.len(), 1);
    assert!((similar[0].score - 1.0).abs() < 1e-9);
}

#[test]
fn test_untagged_item_recommends_nothing() {
    let catalog = vec![
        item(1, "A", &[]),
        item(2, "B", &["Action"]),
    ];
    let recommender = fitted(&catalog);

    assert!(recommender.recommend_similar(1, 5).expect("fitted").is_empty());
}

#[test]
fn test_search_title_case_insensitive_catalog_order() {
    let catalog = vec![
        item(1, "The Matrix (1999)", &["Sci-Fi"]),
        item(2, "Heat (1995)", &["Crime"]),
        item(3, "Matrix Reloaded, The (2003)", &["Sci-Fi"]),
    ];
    let recommender = fitted(&catalog);

    let hits = recommender.search_title("matrix", 10).expect("fitted");
    let ids: Vec<ItemId> = hits.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let limited = recommender.search_title("MATRIX", 1).expect("fitted");
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].id, 1);
}

#[test]
fn test_search_title_no_match_is_empty() {
    let recommender = fitted(&[item(1, "Heat (1995)", &["Crime"])]);
    assert!(recommender
        .search_title("zzz", 10)
        .expect("fitted")
        .is_empty());
}

#[test]
fn test_items_with_tag_exact_match_only() {
    let catalog = vec![
        item(1, "A", &["Sci-Fi"]),
        item(2, "B", &["Sci"]),
        item(3, "C", &["sci-fi"]),
    ];
    let recommender = fitted(&catalog);

    let hits = recommender.items_with_tag("Sci-Fi", 10).expect("fitted");
    let ids: Vec<ItemId> = hits.iter().map(|i| i.id).collect();
    // Case-insensitive equality, never substring containment.
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_items_with_tag_respects_limit() {
    let catalog = vec![
        item(1, "A", &["Action"]),
        item(2, "B", &["Action"]),
        item(3, "C", &["Action"]),
    ];
    let recommender = fitted(&catalog);
    assert_eq!(
        recommender.items_with_tag("action", 2).expect("fitted").len(),
        2
    );
}

#[test]
fn test_tags_sorted_union() {
    let catalog = vec![
        item(1, "A", &["Drama", "Action"]),
        item(2, "B", &["Action", "Comedy"]),
    ];
    let recommender = fitted(&catalog);

    let tags = recommender.tags().expect("fitted");
    assert_eq!(tags, vec!["Action", "Comedy", "Drama"]);
}

#[test]
fn test_item_lookup() {
    let recommender = fitted(&[item(7, "Heat (1995)", &["Crime"])]);
    assert_eq!(recommender.item(7).expect("present").title, "Heat (1995)");
    assert!(recommender.item(8).is_none());
}

#[test]
fn test_duplicate_catalog_ids_resolve_to_last() {
    let catalog = vec![item(1, "First", &["Action"]), item(1, "Second", &["Drama"])];
    let recommender = fitted(&catalog);

    assert_eq!(recommender.item(1).expect("present").title, "Second");
    assert_eq!(recommender.len(), 2);
}

#[test]
fn test_sample_is_seeded_and_bounded() {
    let catalog = vec![
        item(1, "A", &["Action"]),
        item(2, "B", &["Drama"]),
        item(3, "C", &["Comedy"]),
        item(4, "D", &["Horror"]),
    ];
    let recommender = fitted(&catalog);

    let mut rng = StdRng::seed_from_u64(42);
    let first = recommender.sample(2, &mut rng);
    assert_eq!(first.len(), 2);
    assert_ne!(first[0].id, first[1].id);

    // Same seed, same draw.
    let mut rng = StdRng::seed_from_u64(42);
    let second = recommender.sample(2, &mut rng);
    assert_eq!(first, second);

    // Requesting more than the catalog holds returns everything.
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(recommender.sample(10, &mut rng).len(), 4);
}

#[test]
fn test_len_and_is_empty() {
    let recommender = fitted(&[item(1, "A", &["Action"])]);
    assert_eq!(recommender.len(), 1);
    assert!(!recommender.is_empty());

    let empty = fitted(&[]);
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
}

#[test]
fn test_refit_replaces_catalog() {
    let mut recommender = fitted(&[item(1, "Old", &["Action"])]);
    recommender.fit(&[item(2, "New", &["Drama"])]);

    assert!(recommender.item(1).is_none());
    assert!(recommender.item(2).is_some());
    assert!(recommender.recommend_similar(1, 5).expect("fitted").is_empty());
}

#[test]
fn test_refit_empty_catalog_queries_return_empty() {
    let mut recommender = fitted(&[item(1, "A", &["Action"])]);
    recommender.fit(&[]);

    assert!(recommender.recommend_similar(1, 5).expect("fitted").is_empty());
    assert!(recommender.search_title("a", 5).expect("fitted").is_empty());
    assert!(recommender.items_with_tag("action", 5).expect("fitted").is_empty());
    assert!(recommender.tags().expect("fitted").is_empty());
}

#[test]
fn test_every_query_op_requires_fit() {
    let recommender = ContentRecommender::new();
    assert!(recommender.recommend_similar(1, 5).is_err());
    assert!(recommender.search_title("a", 5).is_err());
    assert!(recommender.items_with_tag("a", 5).is_err());
    assert!(recommender.tags().is_err());
}

#[test]
fn test_save_load_round_trip() {
    let catalog = vec![
        item(1, "Heat (1995)", &["Action", "Crime"]),
        item(2, "Casino (1995)", &["Crime", "Drama"]),
    ];
    let recommender = fitted(&catalog);

    let file = tempfile::NamedTempFile::new().expect("temp file");
    recommender.save(file.path()).expect("save");
    let restored = ContentRecommender::load(file.path()).expect("load");

    assert!(restored.is_fitted());
    assert_eq!(restored.len(), 2);
    assert_eq!(
        restored.recommend_similar(1, 5).expect("fitted"),
        recommender.recommend_similar(1, 5).expect("fitted")
    );
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = ContentRecommender::load("/nonexistent/model.json").unwrap_err();
    assert!(matches!(err, RecomendarError::Io(_)));
}
