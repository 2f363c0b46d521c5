//! # Scoring Simulation
//!
//! Draws random condition snapshots and records how the engine reacts to
//! them: the spread of mood scores and which tracks come out on top.
//! Draws come from a seeded [`StdRng`], so a seed always reproduces the same
//! report. The engine itself is never randomized.

use crate::algorithm::statistics::{self, ScoreStatistics};
use crate::engine::RecommendationEngine;
use crate::environment::{AgeGroup, EnvironmentalFactors, SeasonalEvent, WeatherCondition};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// How often one track ranked first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackTally {
    pub title: String,
    pub artist: String,
    pub first_places: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub samples: usize,
    pub seed: u64,
    /// `None` when no samples were drawn.
    pub mood: Option<ScoreStatistics>,
    /// Tracks that ranked first at least once, most frequent first.
    pub top_tracks: Vec<TrackTally>,
}

/// A random but plausible snapshot of store conditions.
pub fn random_factors<R: Rng + ?Sized>(rng: &mut R) -> EnvironmentalFactors {
    let weather = *WeatherCondition::ALL.choose(rng).unwrap_or(&WeatherCondition::Cloudy);
    // Half of all days have no seasonal event.
    let seasonal_event = match rng.gen_bool(0.5) {
        true => SeasonalEvent::ALL.choose(rng).copied(),
        false => None,
    };
    let age_group = *[AgeGroup::Young, AgeGroup::Middle, AgeGroup::Senior, AgeGroup::Mixed]
        .choose(rng)
        .unwrap_or(&AgeGroup::Mixed);

    EnvironmentalFactors::new(weather)
        .with_temperature(rng.gen_range(10.0..=100.0))
        .with_humidity(rng.gen_range(15.0..=95.0))
        .at(rng.gen_range(0..24), rng.gen_range(0..7))
        .with_event(seasonal_event)
        .with_customers(rng.gen_range(0..=200), age_group)
}

/// Scores `samples` random snapshots drawn from `seed`.
#[must_use]
pub fn simulate(engine: &RecommendationEngine, samples: usize, seed: u64) -> SimulationReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let tracks = engine.catalog().tracks();

    let mut moods = Vec::with_capacity(samples);
    let mut first_places = vec![0usize; tracks.len()];

    for _ in 0..samples {
        let factors = random_factors(&mut rng);
        moods.push(engine.calculate_mood_score(&factors));

        if let Some(best) = engine.get_recommendations(&factors, 1).first() {
            if let Some(index) = tracks.iter().position(|track| std::ptr::eq(track, best.track)) {
                first_places[index] += 1;
            }
        }
    }

    let mut top_tracks: Vec<TrackTally> = tracks
        .iter()
        .zip(first_places)
        .filter(|(_, count)| *count > 0)
        .map(|(track, first_places)| TrackTally {
            title: track.title.clone(),
            artist: track.artist.clone(),
            first_places,
        })
        .collect();
    top_tracks.sort_by(|a, b| b.first_places.cmp(&a.first_places));

    debug!("Simulated {samples} snapshots with seed {seed}");
    SimulationReport {
        samples,
        seed,
        mood: statistics::analyze_scores(&moods),
        top_tracks,
    }
}
