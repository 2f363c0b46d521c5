//! # Playlist Assembly
//!
//! Fills a time budget from a ranked candidate list and explains each pick.
//!
//! ## Fill policy
//!
//! A single greedy pass over the candidates, best first:
//! - a track that fits the remaining time is appended
//! - a track that does not fit is skipped for good, later tracks may still fit
//! - the pass stops once 90% of the budget is used
//!
//! This is not an optimal packing. Changing either rule changes which tracks
//! end up in a playlist.

use crate::algorithm::ScoredTrack;
use crate::environment::{EnvironmentalFactors, SeasonalEvent};
use crate::mappings::EnvironmentalMappings;
use crate::track::MusicTrack;
use log::debug;
use serde::{Deserialize, Serialize};

/// Type-safe playlist configuration
#[derive(Debug, Clone)]
pub struct PlaylistConfig {
    /// How many ranked tracks are considered, regardless of playlist length.
    pub candidate_pool: usize,
    /// Share of the time budget after which filling stops.
    pub fill_ratio: f64,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            candidate_pool: 20,
            fill_ratio: 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub track: MusicTrack,
    pub confidence: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub entries: Vec<PlaylistEntry>,
    /// Seconds.
    pub total_duration: u32,
    pub mood_score: f64,
    /// Spending multiplier of the current weather.
    pub weather_impact: f64,
    pub optimization_summary: String,
}

impl Playlist {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Greedily fills `target_seconds` from `candidates`.
///
/// Returns the chosen entries in candidate order and their total duration,
/// which never exceeds `target_seconds`.
#[must_use]
pub fn assemble(
    candidates: &[ScoredTrack<'_>],
    factors: &EnvironmentalFactors,
    target_seconds: u32,
    config: &PlaylistConfig,
) -> (Vec<PlaylistEntry>, u32) {
    let stop_at = f64::from(target_seconds) * config.fill_ratio;
    let mut entries = Vec::new();
    let mut current_duration: u32 = 0;

    for scored in candidates {
        let with_track = current_duration.saturating_add(scored.track.duration);
        if with_track <= target_seconds {
            entries.push(PlaylistEntry {
                track: scored.track.clone(),
                confidence: scored.confidence,
                reason: generate_reason(scored.track, factors),
            });
            current_duration = with_track;
        }

        if f64::from(current_duration) >= stop_at {
            break;
        }
    }

    debug!(
        "Filled {current_duration}s of {target_seconds}s with {} of {} candidates",
        entries.len(),
        candidates.len()
    );
    (entries, current_duration)
}

/// Why `track` suits `factors`, as a `"; "`-joined list of clauses.
#[must_use]
pub fn generate_reason(track: &MusicTrack, factors: &EnvironmentalFactors) -> String {
    let mut reasons = Vec::new();

    if track.suits_weather(factors.weather) {
        reasons.push(format!("Perfect for {} weather", factors.weather));
    }

    if let Some(event) = factors.seasonal_event {
        if track.seasonal_relevance.contains(&event) {
            reasons.push(format!("Ideal for {event} season"));
        }
    }

    if track.energy_level >= 7.0 {
        reasons.push("High energy to boost customer mood".to_string());
    } else if track.energy_level <= 4.0 {
        reasons.push("Calming effect to reduce stress".to_string());
    }

    match reasons.is_empty() {
        true => "Good general fit for current conditions".to_string(),
        false => reasons.join("; "),
    }
}

/// One-paragraph description of the strategy behind a playlist.
#[must_use]
pub fn generate_optimization_summary(
    factors: &EnvironmentalFactors,
    mood_score: f64,
    mappings: &EnvironmentalMappings,
) -> String {
    let mut summary = format!("Mood optimization score: {mood_score:.1}/10. ");

    let weather_impact = mappings.spending_impact(factors.weather);
    if weather_impact > 1.05 {
        summary.push_str("Weather conditions favor increased spending - using energetic, upbeat tracks. ");
    } else if weather_impact < 0.95 {
        summary.push_str("Weather may reduce spending - using comforting, mood-lifting tracks. ");
    }

    if factors.seasonal_event == Some(SeasonalEvent::Christmas) {
        summary.push_str(
            "Holiday season active - incorporating festive elements to enhance nostalgia and generosity. ",
        );
    }

    let time_energy = mappings.time_energy(factors.time_of_day);
    if time_energy >= 7.5 {
        summary.push_str("Peak shopping hours - maintaining high energy without overstimulation.");
    } else if time_energy <= 5.0 {
        summary.push_str("Low energy period - using gentle, ambient tracks to create comfortable atmosphere.");
    }

    summary
}
