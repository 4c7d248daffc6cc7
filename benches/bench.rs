// Criterion benchmarks for SponsorDB Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sponsordb_match::core::{get_matched_sponsors, normalize_tag, tags_match};
use sponsordb_match::models::{MatchOptions, Sponsor, UserMatchProfile};

const TAG_POOL: &[&str] = &[
    "Technology", "AI/ML", "SaaS", "Fintech", "Health", "Wellness", "Marketing",
    "E-commerce", "Gaming", "Travel", "Food", "Design", "Developer Tools", "Crypto",
    "Education", "Fashion", "Productivity", "Media", "B2B", "Lifestyle",
];

fn create_sponsor(id: usize) -> Sponsor {
    let tags = (0..3).map(|offset| TAG_POOL[(id * 7 + offset * 3) % TAG_POOL.len()]);
    Sponsor::new(id.to_string(), tags)
}

fn create_profile() -> UserMatchProfile {
    UserMatchProfile::new("Technology", ["AI", "Finance", "Productivity"], ["SaaS", "Marketing"])
}

fn bench_normalize_tag(c: &mut Criterion) {
    c.bench_function("normalize_tag", |b| {
        b.iter(|| normalize_tag(black_box("AI/ML & Machine-Learning")));
    });
}

fn bench_tags_match(c: &mut Criterion) {
    c.bench_function("tags_match_synonym_miss", |b| {
        b.iter(|| tags_match(black_box("Fashion"), black_box("Cryptocurrency")));
    });
}

fn bench_matching(c: &mut Criterion) {
    let profile = create_profile();

    let mut group = c.benchmark_group("matching");

    for sponsor_count in [10, 50, 100, 500, 1000].iter() {
        let sponsors: Vec<Sponsor> = (0..*sponsor_count).map(create_sponsor).collect();

        group.bench_with_input(
            BenchmarkId::new("get_matched_sponsors", sponsor_count),
            sponsor_count,
            |b, _| {
                b.iter(|| {
                    get_matched_sponsors(
                        black_box(&sponsors),
                        black_box(Some(&profile)),
                        black_box(MatchOptions::default()),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalize_tag, bench_tags_match, bench_matching);

criterion_main!(benches);
