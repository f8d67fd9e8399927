// Criterion benchmarks for Spork

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spork::core::{distance::euclidean_distance, Ranker};
use spork::models::{AdLevel, Location, Profile, SearchCriteria};
use spork::services::{parse_line, render};

fn create_profile(id: usize) -> Profile {
    let ad_level = match id % 3 {
        0 => AdLevel::None,
        1 => AdLevel::Standard,
        _ => AdLevel::Premium,
    };

    Profile::new(
        format!("Business{}", id),
        Location::new((id as f64 * 0.37) % 20.0, (id as f64 * 0.53) % 20.0),
        1.0 + (id % 40) as f64 / 10.0,
        ad_level,
    )
}

fn create_criteria() -> SearchCriteria {
    SearchCriteria {
        origin: Location::new(10.0, 10.0),
        max_distance: 6.0,
        min_rating: 3.5,
    }
}

fn bench_euclidean_distance(c: &mut Criterion) {
    c.bench_function("euclidean_distance", |b| {
        b.iter(|| {
            euclidean_distance(
                black_box(Location::new(1.25, -3.5)),
                black_box(Location::new(7.75, 2.0)),
            )
        });
    });
}

fn bench_parse_line(c: &mut Criterion) {
    c.bench_function("parse_line", |b| {
        b.iter(|| parse_line(black_box(&b"CornerBistro 12.34 -5.67 4.25 2"[..])));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::new(create_criteria());

    let mut group = c.benchmark_group("ranking");

    for profile_count in [10, 100, 500, 1000, 10000].iter() {
        let profiles: Vec<Profile> = (0..*profile_count).map(create_profile).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", profile_count),
            profile_count,
            |b, _| {
                b.iter(|| ranker.rank(black_box(profiles.clone())));
            },
        );
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let profiles: Vec<Profile> = (0..500).map(create_profile).collect();
    let results = Ranker::new(create_criteria()).rank(profiles);

    c.bench_function("render_500_profiles", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(16 * 1024);
            render(black_box(&results), &mut buffer).ok();
            black_box(buffer)
        });
    });
}

criterion_group!(
    benches,
    bench_euclidean_distance,
    bench_parse_line,
    bench_ranking,
    bench_render
);

criterion_main!(benches);
