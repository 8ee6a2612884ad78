use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recomendar::data::{Item, RatingEvent, RatingProfile};
use recomendar::recommend::{CollaborativeRecommender, ContentRecommender};

fn generate_catalog(n: usize) -> Vec<Item> {
    let genres = [
        "action",
        "comedy",
        "drama",
        "thriller",
        "horror",
        "romance",
        "scifi",
        "fantasy",
        "mystery",
        "adventure",
    ];
    let moods = [
        "epic",
        "thrilling",
        "emotional",
        "intense",
        "hilarious",
        "dark",
        "heartwarming",
        "suspenseful",
        "mysterious",
        "explosive",
    ];
    let themes = [
        "heist",
        "journey",
        "revenge",
        "survival",
        "romance",
        "conspiracy",
        "war",
        "coming-of-age",
        "expedition",
        "courtroom",
    ];

    (0..n)
        .map(|i| {
            let genre = genres[i % genres.len()];
            let mood = moods[(i / 10) % moods.len()];
            let theme = themes[(i / 100) % themes.len()];
            Item {
                id: i as u32 + 1,
                title: format!("Movie {}", i + 1),
                tags: vec![genre.to_string(), mood.to_string(), theme.to_string()],
                year: Some(1990 + (i % 35) as u16),
            }
        })
        .collect()
}

fn generate_ratings(n_users: u32, n_items: u32, per_user: u32) -> Vec<RatingEvent> {
    let mut ratings = Vec::with_capacity((n_users * per_user) as usize);
    for user_id in 1..=n_users {
        for k in 0..per_user {
            let item_id = (user_id * 7 + k * 13) % n_items + 1;
            let value = 0.5 + f64::from((user_id + item_id) % 10) * 0.5;
            ratings.push(RatingEvent {
                user_id,
                item_id,
                value,
            });
        }
    }
    ratings
}

fn bench_content_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_fit");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut rec = ContentRecommender::new();
                rec.fit(black_box(&generate_catalog(size)));
                rec
            });
        });
    }

    group.finish();
}

fn bench_content_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_recommend");
    group.sample_size(50); // Reduce samples for large datasets

    for size in [100, 1_000, 10_000].iter() {
        // Pre-fit recommender
        let mut rec = ContentRecommender::new();
        rec.fit(&generate_catalog(*size));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                rec.recommend_similar(black_box(1), black_box(10))
                    .expect("should succeed")
            });
        });
    }

    group.finish();
}

fn bench_collaborative_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("collaborative_recommend");
    group.sample_size(50);

    for size in [100, 1_000].iter() {
        // size = number of users, each rating 20 of 500 items
        let catalog = generate_catalog(500);
        let ratings = generate_ratings(*size as u32, 500, 20);
        let mut rec = CollaborativeRecommender::new();
        rec.fit(&catalog, &ratings);

        let mut profile = RatingProfile::new();
        for item_id in [1, 8, 15, 22, 29] {
            profile.insert(item_id, 4.0);
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                rec.recommend_for(black_box(&profile), black_box(10))
                    .expect("should succeed")
            });
        });
    }

    group.finish();
}

fn bench_recommend_latency_target(c: &mut Criterion) {
    // Specific benchmark to verify <100ms latency for large dataset
    let mut rec = ContentRecommender::new();
    rec.fit(&generate_catalog(10_000));

    c.bench_function("recommend_10k_latency", |b| {
        b.iter(|| {
            rec.recommend_similar(black_box(5_000), black_box(10))
                .expect("should succeed")
        });
    });
}

criterion_group!(
    benches,
    bench_content_fit,
    bench_content_recommend,
    bench_collaborative_recommend,
    bench_recommend_latency_target
);
criterion_main!(benches);
