//! # RetailTunes Performance Benchmarks
//!
//! ## Benchmark Categories
//!
//! - **Scoring**: Mood score and per-track confidence
//! - **Ranking**: Ranking catalogs of increasing size
//! - **Playlists**: Greedy playlist assembly
//! - **Catalog Database**: Writing and loading catalog files
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench ranking
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use tempfile::TempDir;

use retailtunes::algorithm::{self, ScoringContext};
use retailtunes::catalog::Catalog;
use retailtunes::db;
use retailtunes::engine::RecommendationEngine;
use retailtunes::environment::{EnvironmentalFactors, SeasonalEvent, WeatherCondition};
use retailtunes::mappings::EnvironmentalMappings;
use retailtunes::track::MusicTrack;

/// Random tracks with realistic attribute ranges
fn create_test_tracks(count: usize) -> Vec<MusicTrack> {
    let mut rng = StdRng::seed_from_u64(17);

    (0..count)
        .map(|i| {
            let weather_count = rng.gen_range(1..=3);
            let season_count = rng.gen_range(0..=2);
            let weather: Vec<WeatherCondition> = WeatherCondition::ALL
                .choose_multiple(&mut rng, weather_count)
                .copied()
                .collect();
            let seasons: Vec<SeasonalEvent> = SeasonalEvent::ALL
                .choose_multiple(&mut rng, season_count)
                .copied()
                .collect();

            MusicTrack {
                title: format!("Track {i}"),
                artist: format!("Artist {}", i % 50),
                genre: "Pop".to_string(),
                tempo: rng.gen_range(60..=160),
                energy_level: rng.gen_range(1.0..=10.0),
                mood_tags: vec!["bench".to_string()],
                weather_suitability: weather,
                seasonal_relevance: seasons,
                duration: rng.gen_range(120..=360),
            }
        })
        .collect()
}

fn peak_factors() -> EnvironmentalFactors {
    EnvironmentalFactors::new(WeatherCondition::Sunny)
        .with_temperature(68.0)
        .at(14, 5)
        .with_event(Some(SeasonalEvent::Christmas))
}

/// Benchmark mood and confidence scoring
fn benchmark_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");

    let factors = peak_factors();
    let mappings = EnvironmentalMappings::default();
    let context = ScoringContext::default();
    let track = create_test_tracks(1)[0].clone();

    group.bench_function("mood_score", |b| {
        b.iter(|| algorithm::calculate_mood_score(black_box(&factors), black_box(&mappings), black_box(&context)))
    });

    group.bench_function("track_confidence", |b| {
        let weather = mappings.weather_parameters(factors.weather);
        b.iter(|| {
            algorithm::calculate_track_confidence(
                black_box(&track),
                black_box(&factors),
                10.0,
                weather,
                &mappings,
                &context,
            )
        })
    });

    group.finish();
}

/// Benchmark ranking catalogs of different sizes
fn benchmark_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");
    let factors = peak_factors();

    for size in [8, 100, 1000, 10_000].iter() {
        let engine = RecommendationEngine::new(Catalog::new(create_test_tracks(*size)));

        group.bench_with_input(BenchmarkId::new("top_5", size), &engine, |b, engine| {
            b.iter(|| engine.get_recommendations(black_box(&factors), 5).len())
        });
    }

    group.finish();
}

/// Benchmark playlist generation
fn benchmark_playlists(c: &mut Criterion) {
    let mut group = c.benchmark_group("playlists");
    let factors = peak_factors();
    let engine = RecommendationEngine::new(Catalog::new(create_test_tracks(1000)));

    for minutes in [15, 60, 240].iter() {
        group.bench_with_input(BenchmarkId::new("generate", minutes), minutes, |b, &minutes| {
            b.iter(|| black_box(engine.generate_playlist(black_box(&factors), minutes)))
        });
    }

    group.finish();
}

/// Benchmark catalog database writes and reads
fn benchmark_catalog_database(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_database");
    let tracks = create_test_tracks(1000);

    group.bench_function("write_1000_tracks", |b| {
        b.iter_batched(
            || TempDir::new().expect("Failed to create temp directory"),
            |temp_dir| {
                db::init_catalog_db(&temp_dir.path().join("bench.db"), black_box(&tracks), false)
                    .expect("Failed to write catalog");
                temp_dir
            },
            BatchSize::SmallInput,
        )
    });

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("bench.db");
    db::init_catalog_db(&db_path, &tracks, false).expect("Failed to write catalog");

    group.bench_function("load_1000_tracks", |b| {
        b.iter(|| db::load_catalog(black_box(&db_path)).expect("Failed to load catalog"))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_scoring,
    benchmark_ranking,
    benchmark_playlists,
    benchmark_catalog_database
);

criterion_main!(benches);
