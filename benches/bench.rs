// Criterion benchmarks for the LaunchCircle matching core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use launchcircle_api::core::{tags::token_set, Matcher};
use launchcircle_api::models::UserRecord;

const SKILL_POOL: &[&str] = &[
    "rust", "python", "typescript", "react", "postgres", "gtm", "fundraising", "design",
    "payments", "streaming",
];

fn create_candidate(id: usize) -> UserRecord {
    let skills: Vec<&str> = SKILL_POOL
        .iter()
        .enumerate()
        .filter(|(i, _)| (id + i) % 3 == 0)
        .map(|(_, s)| *s)
        .collect();
    let looking_for: Vec<&str> = SKILL_POOL
        .iter()
        .enumerate()
        .filter(|(i, _)| (id + i) % 4 == 0)
        .map(|(_, s)| *s)
        .collect();

    UserRecord {
        id: id as i32,
        name: format!("User {}", id),
        skills: Some(skills.join(",")),
        looking_for: Some(looking_for.join(",")),
        ..UserRecord::default()
    }
}

fn bench_token_normalization(c: &mut Criterion) {
    c.bench_function("token_set", |b| {
        b.iter(|| token_set(black_box("Rust, Postgres , GTM,design systems,rust")));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_defaults();
    let subject = create_candidate(0);

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 100, 1000].iter() {
        let candidates: Vec<UserRecord> =
            (1..=*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_matches(
                        black_box(&subject),
                        black_box(candidates.clone()),
                        black_box(10),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_token_normalization, bench_matching);
criterion_main!(benches);
