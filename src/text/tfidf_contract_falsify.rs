//! TF-IDF Contract Falsification Tests
//!
//! Popperian falsification of the vectorizer's contract claims:
//!   - Every fitted idf weight is strictly positive (smoothing floor)
//!   - Rarer terms carry strictly higher idf than more common terms
//!   - Transformed vectors are unit-norm or exactly zero
//!   - Out-of-vocabulary terms never appear in transformed vectors
//!   - Vectorization is deterministic across identical fits
//!   - Fitting an empty corpus succeeds and transforms to empty output

pub(crate) use super::*;

// ============================================================================
// FALSIFY-TFIDF-001: idf positivity
// Contract: idf(t) = ln((1+N)/(1+df)) + 1 >= 1 for every fitted term
// ============================================================================

#[test]
fn falsify_tfidf_001_idf_strictly_positive() {
    let corpus: Vec<Vec<String>> = vec![
        vec!["a".into(), "b".into()],
        vec!["a".into(), "c".into()],
        vec!["a".into()],
    ];
    let mut v = TfidfVectorizer::new();
    v.fit(&corpus);

    for term in ["a", "b", "c"] {
        let idf = v.idf(term).expect("fitted term");
        assert!(
            idf >= 1.0,
            "FALSIFIED TFIDF-001: idf({term}) = {idf} below smoothing floor"
        );
    }
}

// ============================================================================
// FALSIFY-TFIDF-002: rare terms > common terms
// Contract: df(t1) < df(t2) implies idf(t1) > idf(t2)
// ============================================================================

#[test]
fn falsify_tfidf_002_rare_terms_higher_idf() {
    // "common" in all 3 docs, "rare" in exactly 1.
    let corpus: Vec<Vec<String>> = vec![
        vec!["common".into(), "rare".into()],
        vec!["common".into()],
        vec!["common".into()],
    ];
    let mut v = TfidfVectorizer::new();
    v.fit(&corpus);

    let rare = v.idf("rare").expect("fitted term");
    let common = v.idf("common").expect("fitted term");
    assert!(
        rare > common,
        "FALSIFIED TFIDF-002: rare idf ({rare}) should exceed common idf ({common})"
    );
}

// ============================================================================
// FALSIFY-TFIDF-003: unit norm or zero
// Contract: every transformed vector has sum of squares == 1 or is zero
// ============================================================================

#[test]
fn falsify_tfidf_003_unit_norm_or_zero() {
    let corpus: Vec<Vec<String>> = vec![
        vec!["a".into(), "b".into(), "b".into()],
        vec!["c".into()],
        vec![],
    ];
    let mut v = TfidfVectorizer::new();
    v.fit(&corpus);

    for (i, vec) in v.transform(&corpus).expect("transform").iter().enumerate() {
        let sum_sq: f64 = vec.iter().map(|(_, w)| w * w).sum();
        assert!(
            vec.is_zero() || (sum_sq - 1.0).abs() < 1e-9,
            "FALSIFIED TFIDF-003: doc {i} has sum of squares {sum_sq}, neither unit nor zero"
        );
    }
}

// ============================================================================
// FALSIFY-TFIDF-004: out-of-vocabulary terms dropped
// Contract: transform never emits a term fit() has not seen
// ============================================================================

#[test]
fn falsify_tfidf_004_oov_terms_dropped() {
    let corpus: Vec<Vec<String>> = vec![vec!["known".into()]];
    let mut v = TfidfVectorizer::new();
    v.fit(&corpus);

    let doc: Vec<String> = vec!["known".into(), "unknown".into(), "unknown".into()];
    let vec = v.transform_document(&doc).expect("transform");

    for (term, _) in vec.iter() {
        assert!(
            v.idf(term).is_some(),
            "FALSIFIED TFIDF-004: transformed vector contains unfitted term {term:?}"
        );
    }
    assert_eq!(
        vec.nnz(),
        1,
        "FALSIFIED TFIDF-004: expected only the fitted term to survive"
    );
}

// ============================================================================
// FALSIFY-TFIDF-005: determinism
// Contract: identical corpora produce identical vectorizers and vectors
// ============================================================================

#[test]
fn falsify_tfidf_005_determinism() {
    let corpus: Vec<Vec<String>> = vec![
        vec!["x".into(), "y".into()],
        vec!["y".into(), "z".into()],
    ];

    let mut v1 = TfidfVectorizer::new();
    v1.fit(&corpus);
    let out1 = v1.transform(&corpus).expect("first transform");

    let mut v2 = TfidfVectorizer::new();
    v2.fit(&corpus);
    let out2 = v2.transform(&corpus).expect("second transform");

    assert_eq!(
        out1, out2,
        "FALSIFIED TFIDF-005: identical corpora produced different vectors"
    );
}

// ============================================================================
// FALSIFY-TFIDF-006: empty corpus
// Contract: fit(&[]) succeeds; transforms then yield zero vectors
// ============================================================================

#[test]
fn falsify_tfidf_006_empty_corpus_fit() {
    let mut v = TfidfVectorizer::new();
    v.fit(&[]);

    assert!(
        v.is_fitted(),
        "FALSIFIED TFIDF-006: empty fit left vectorizer unfitted"
    );
    let doc: Vec<String> = vec!["anything".into()];
    let vec = v.transform_document(&doc).expect("transform after empty fit");
    assert!(
        vec.is_zero(),
        "FALSIFIED TFIDF-006: empty vocabulary produced a non-zero vector"
    );
}
