//! Mood and track confidence scoring.
//!
//! Turns environmental conditions into a single mood score and rates every
//! catalog track against the same conditions. All functions here are pure.

use crate::environment::{EnvironmentalFactors, SeasonalEvent};
use crate::mappings::{self, EnvironmentalMappings, WeatherParameters};
use crate::track::MusicTrack;
use anyhow::{ensure, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Type-safe scoring context with immutable parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringContext {
    pub mood: MoodWeights,
    pub confidence: ConfidenceWeights,
}

/// Weights and multipliers of the mood score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodWeights {
    pub weather: f64,
    pub temperature: f64,
    pub time_energy: f64,
    pub base: f64,
    /// Constant term blended in with weight `base`.
    pub neutral_base: f64,
    pub weekend_multiplier: f64,
    pub christmas_multiplier: f64,
    /// Valentine's Day and New Year.
    pub celebration_multiplier: f64,
    pub min_score: f64,
    pub max_score: f64,
}

/// Additive bonuses of the track confidence score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceWeights {
    pub weather_match: f64,
    pub seasonal_match: f64,
    pub tempo_match: f64,
    pub energy_match: f64,
    pub time_close: f64,
    pub time_near: f64,
    pub close_distance: f64,
    pub near_distance: f64,
}

impl Default for MoodWeights {
    fn default() -> Self {
        Self {
            weather: 0.3,
            temperature: 0.2,
            time_energy: 0.25,
            base: 0.25,
            neutral_base: 5.0,
            weekend_multiplier: 1.2,
            christmas_multiplier: 1.3,
            celebration_multiplier: 1.15,
            min_score: 1.0,
            max_score: 10.0,
        }
    }
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            weather_match: 3.0,
            seasonal_match: 2.5,
            tempo_match: 2.0,
            energy_match: 2.0,
            time_close: 1.5,
            time_near: 1.0,
            close_distance: 1.0,
            near_distance: 2.0,
        }
    }
}

impl ScoringContext {
    /// Checks that the weights keep scores inside their documented ranges.
    ///
    /// Scoring assumes a context that passes this check: an inverted mood
    /// range makes [`calculate_mood_score`] panic.
    ///
    /// # Errors
    ///
    /// Fails on an inverted mood range, a negative confidence bonus or
    /// closeness distances that are negative or out of order.
    pub fn validate(&self) -> Result<()> {
        let mood = &self.mood;
        ensure!(
            mood.min_score <= mood.max_score,
            "Mood score range is inverted: min_score {} > max_score {}",
            mood.min_score,
            mood.max_score
        );

        let confidence = &self.confidence;
        for (name, bonus) in [
            ("weather_match", confidence.weather_match),
            ("seasonal_match", confidence.seasonal_match),
            ("tempo_match", confidence.tempo_match),
            ("energy_match", confidence.energy_match),
            ("time_close", confidence.time_close),
            ("time_near", confidence.time_near),
        ] {
            ensure!(bonus >= 0.0, "Confidence bonus {name} must not be negative, got {bonus}");
        }

        ensure!(
            confidence.close_distance >= 0.0 && confidence.close_distance <= confidence.near_distance,
            "Closeness distances must satisfy 0 <= close_distance <= near_distance, got {} and {}",
            confidence.close_distance,
            confidence.near_distance
        );
        Ok(())
    }
}

impl ConfidenceWeights {
    /// Highest confidence a single track can reach
    #[must_use]
    pub fn max_confidence(&self) -> f64 {
        self.weather_match
            + self.seasonal_match
            + self.tempo_match
            + self.energy_match
            + self.time_close.max(self.time_near)
    }
}

/// A catalog track paired with its confidence for one request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredTrack<'a> {
    pub track: &'a MusicTrack,
    pub confidence: f64,
}

/// Overall shopper mood for the given conditions, in `[min_score, max_score]`.
///
/// # Algorithm
///
/// ```text
/// base = weather_boost * 0.3 + temperature * 0.2 + time_energy * 0.25 + 5.0 * 0.25
/// mood = clamp(base * weekend * seasonal, 1.0, 10.0)
/// ```
///
/// # Examples
///
/// ```
/// use retailtunes::algorithm::{calculate_mood_score, ScoringContext};
/// use retailtunes::environment::{EnvironmentalFactors, WeatherCondition};
/// use retailtunes::mappings::EnvironmentalMappings;
///
/// let factors = EnvironmentalFactors::new(WeatherCondition::Cloudy);
/// let mood = calculate_mood_score(&factors, &EnvironmentalMappings::default(), &ScoringContext::default());
/// assert!((1.0..=10.0).contains(&mood));
/// ```
#[must_use]
pub fn calculate_mood_score(
    factors: &EnvironmentalFactors,
    mappings: &EnvironmentalMappings,
    context: &ScoringContext,
) -> f64 {
    let weights = &context.mood;

    let weather_boost = mappings.mood_boost(factors.weather);
    let temperature = temperature_score(factors.temperature);
    let time_energy = mappings.time_energy(factors.time_of_day);

    let weighted_base = weather_boost * weights.weather
        + temperature * weights.temperature
        + time_energy * weights.time_energy
        + weights.neutral_base * weights.base;

    let mood = (weighted_base
        * weekend_multiplier(factors, weights)
        * seasonal_multiplier(factors.seasonal_event, weights))
    .pipe(|score| score.clamp(weights.min_score, weights.max_score));

    debug!(
        "Mood score {mood:.3} (weather {weather_boost}, temperature {temperature}, time energy {time_energy}, base {weighted_base:.3})"
    );
    mood
}

/// Temperature sub-score in degrees Fahrenheit.
///
/// The gaps 50-60°F and 80-85°F sit on the 5.0 baseline, below both
/// neighbouring bands.
#[must_use]
pub fn temperature_score(temperature: f64) -> f64 {
    match temperature {
        t if (65.0..=75.0).contains(&t) => 8.0,
        t if (60.0..=80.0).contains(&t) => 7.0,
        t if t < 50.0 || t > 85.0 => 4.0,
        _ => 5.0,
    }
}

#[must_use]
pub fn weekend_multiplier(factors: &EnvironmentalFactors, weights: &MoodWeights) -> f64 {
    match factors.is_weekend() {
        true => weights.weekend_multiplier,
        false => 1.0,
    }
}

#[must_use]
pub fn seasonal_multiplier(event: Option<SeasonalEvent>, weights: &MoodWeights) -> f64 {
    match event {
        Some(SeasonalEvent::Christmas) => weights.christmas_multiplier,
        Some(SeasonalEvent::Valentines | SeasonalEvent::NewYear) => weights.celebration_multiplier,
        Some(
            SeasonalEvent::Spring
            | SeasonalEvent::Summer
            | SeasonalEvent::Fall
            | SeasonalEvent::Winter
            | SeasonalEvent::BackToSchool,
        )
        | None => 1.0,
    }
}

/// Confidence that `track` fits the conditions, between 0 and
/// [`ConfidenceWeights::max_confidence`].
///
/// Each rule adds its bonus independently:
///
/// - weather is in the track's suitable weather
/// - the active seasonal event is one the track is relevant for
/// - tempo lies in the weather's preferred tempo band
/// - energy lies in the weather's preferred energy band
/// - energy is within 1.0 (full bonus) or 2.0 (partial bonus) of the hour's energy
///
/// `weather` is `None` for unmapped conditions, in which case the neutral
/// bands apply. `mood_score` does not weigh into the result yet.
#[must_use]
pub fn calculate_track_confidence(
    track: &MusicTrack,
    factors: &EnvironmentalFactors,
    _mood_score: f64,
    weather: Option<&WeatherParameters>,
    mappings: &EnvironmentalMappings,
    context: &ScoringContext,
) -> f64 {
    let weights = &context.confidence;
    let mut confidence = 0.0;

    if track.suits_weather(factors.weather) {
        confidence += weights.weather_match;
    }

    if track.fits_event(factors.seasonal_event) {
        confidence += weights.seasonal_match;
    }

    if mappings::preferred_tempo(weather).contains(&track.tempo) {
        confidence += weights.tempo_match;
    }

    if mappings::preferred_energy(weather).contains(&track.energy_level) {
        confidence += weights.energy_match;
    }

    let energy_distance = (track.energy_level - mappings.time_energy(factors.time_of_day)).abs();
    confidence += match energy_distance {
        d if d <= weights.close_distance => weights.time_close,
        d if d <= weights.near_distance => weights.time_near,
        _ => 0.0,
    };

    trace!("Calculated `{confidence}' confidence for `{}'.", track.title);
    confidence
}

/// Scores every track against the same conditions, in catalog order.
///
/// The mood score is computed once for the whole batch.
///
/// # Examples
///
/// ```
/// use retailtunes::algorithm::{batch_calculate_scores, ScoringContext};
/// use retailtunes::catalog::Catalog;
/// use retailtunes::environment::{EnvironmentalFactors, WeatherCondition};
/// use retailtunes::mappings::EnvironmentalMappings;
///
/// let catalog = Catalog::sample();
/// let factors = EnvironmentalFactors::new(WeatherCondition::Rainy);
/// let mappings = EnvironmentalMappings::default();
/// let context = ScoringContext::default();
///
/// let scored: Vec<_> = batch_calculate_scores(catalog.tracks(), &factors, &mappings, &context).collect();
/// assert_eq!(scored.len(), catalog.len());
/// ```
#[must_use = "Iterator should be consumed to calculate scores"]
pub fn batch_calculate_scores<'a, 'b>(
    tracks: &'a [MusicTrack],
    factors: &'b EnvironmentalFactors,
    mappings: &'b EnvironmentalMappings,
    context: &'b ScoringContext,
) -> impl Iterator<Item = ScoredTrack<'a>> + 'b
where
    'a: 'b,
{
    let mood_score = calculate_mood_score(factors, mappings, context);
    let weather = mappings.weather_parameters(factors.weather);

    tracks.iter().map(move |track| ScoredTrack {
        track,
        confidence: calculate_track_confidence(track, factors, mood_score, weather, mappings, context),
    })
}

/// All tracks ordered by descending confidence.
///
/// The sort is stable, so equally scored tracks keep their catalog order.
#[must_use]
pub fn rank_tracks<'a>(
    tracks: &'a [MusicTrack],
    factors: &EnvironmentalFactors,
    mappings: &EnvironmentalMappings,
    context: &ScoringContext,
) -> Vec<ScoredTrack<'a>> {
    batch_calculate_scores(tracks, factors, mappings, context)
        .collect::<Vec<_>>()
        .tap_mut(|ranked| {
            ranked.sort_by(|a, b| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        })
}

/// Functional programming utility for pipeline operations
trait PipelineExt<T> {
    fn pipe<U>(self, f: impl FnOnce(T) -> U) -> U;
}

impl<T> PipelineExt<T> for T {
    #[inline]
    fn pipe<U>(self, f: impl FnOnce(T) -> U) -> U {
        f(self)
    }
}

trait TapMut<T> {
    fn tap_mut(self, f: impl FnOnce(&mut T)) -> T;
}

impl<T> TapMut<T> for T {
    fn tap_mut(mut self, f: impl FnOnce(&mut T)) -> T {
        f(&mut self);
        self
    }
}

/// Statistical analysis of score samples
pub mod statistics {
    use serde::Serialize;

    /// Distribution of a set of scores
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ScoreStatistics {
        pub mean: f64,
        pub variance: f64,
        pub std_deviation: f64,
        pub min: f64,
        pub max: f64,
        pub count: usize,
    }

    /// `None` for an empty sample.
    #[must_use]
    pub fn analyze_scores(scores: &[f64]) -> Option<ScoreStatistics> {
        if scores.is_empty() {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / count;
        let variance = scores
            .iter()
            .map(|&score| (score - mean).powi(2))
            .sum::<f64>()
            / count;

        Some(ScoreStatistics {
            mean,
            variance,
            std_deviation: variance.sqrt(),
            min: scores.iter().fold(f64::INFINITY, |a, &b| a.min(b)),
            max: scores.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
            count: scores.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{WeatherCondition, SeasonalEvent};

    const EPSILON: f64 = 1e-9;

    fn track(weather: &[WeatherCondition], seasons: &[SeasonalEvent], tempo: u32, energy: f64) -> MusicTrack {
        MusicTrack {
            title: "Test".to_string(),
            artist: "Test".to_string(),
            genre: "Test".to_string(),
            tempo,
            energy_level: energy,
            mood_tags: Vec::new(),
            weather_suitability: weather.to_vec(),
            seasonal_relevance: seasons.to_vec(),
            duration: 180,
        }
    }

    fn confidence(track: &MusicTrack, factors: &EnvironmentalFactors) -> f64 {
        let mappings = EnvironmentalMappings::default();
        let context = ScoringContext::default();
        let mood = calculate_mood_score(factors, &mappings, &context);
        let weather = mappings.weather_parameters(factors.weather);
        calculate_track_confidence(track, factors, mood, weather, &mappings, &context)
    }

    fn mood(factors: &EnvironmentalFactors) -> f64 {
        calculate_mood_score(factors, &EnvironmentalMappings::default(), &ScoringContext::default())
    }

    #[test]
    fn test_temperature_bands() {
        assert_eq!(temperature_score(65.0), 8.0);
        assert_eq!(temperature_score(68.0), 8.0);
        assert_eq!(temperature_score(75.0), 8.0);
        assert_eq!(temperature_score(60.0), 7.0);
        assert_eq!(temperature_score(64.9), 7.0);
        assert_eq!(temperature_score(80.0), 7.0);
        assert_eq!(temperature_score(49.9), 4.0);
        assert_eq!(temperature_score(85.1), 4.0);
    }

    #[test]
    fn test_temperature_gaps_stay_on_baseline() {
        assert_eq!(temperature_score(50.0), 5.0);
        assert_eq!(temperature_score(55.0), 5.0);
        assert_eq!(temperature_score(59.9), 5.0);
        assert_eq!(temperature_score(80.5), 5.0);
        assert_eq!(temperature_score(85.0), 5.0);
    }

    #[test]
    fn test_seasonal_multipliers() {
        let weights = MoodWeights::default();
        assert_eq!(seasonal_multiplier(Some(SeasonalEvent::Christmas), &weights), 1.3);
        assert_eq!(seasonal_multiplier(Some(SeasonalEvent::Valentines), &weights), 1.15);
        assert_eq!(seasonal_multiplier(Some(SeasonalEvent::NewYear), &weights), 1.15);
        assert_eq!(seasonal_multiplier(Some(SeasonalEvent::Summer), &weights), 1.0);
        assert_eq!(seasonal_multiplier(Some(SeasonalEvent::BackToSchool), &weights), 1.0);
        assert_eq!(seasonal_multiplier(None, &weights), 1.0);
    }

    #[test]
    fn test_sunny_christmas_saturday_clamps_to_ten() {
        let factors = EnvironmentalFactors::new(WeatherCondition::Sunny)
            .with_temperature(68.0)
            .at(14, 5)
            .with_event(Some(SeasonalEvent::Christmas));

        assert_eq!(mood(&factors), 10.0);
    }

    #[test]
    fn test_rainy_tuesday_evening() {
        let factors = EnvironmentalFactors::new(WeatherCondition::Rainy)
            .with_temperature(55.0)
            .with_humidity(75.0)
            .at(18, 1);

        assert!((mood(&factors) - 5.135).abs() < EPSILON);
    }

    #[test]
    fn test_stormy_weather_uses_neutral_boost() {
        // 5.0*0.3 + 8.0*0.2 + 5.0*0.25 + 5.0*0.25 with no mapped hour
        let factors = EnvironmentalFactors::new(WeatherCondition::Stormy)
            .with_temperature(70.0)
            .at(3, 2);

        assert!((mood(&factors) - 5.6).abs() < EPSILON);
    }

    #[test]
    fn test_mood_score_lower_bound_with_custom_weights() {
        let mut context = ScoringContext::default();
        context.mood.base = 0.0;
        context.mood.weather = 0.0;
        context.mood.temperature = 0.0;
        context.mood.time_energy = 0.0;

        let factors = EnvironmentalFactors::new(WeatherCondition::Rainy);
        let score = calculate_mood_score(&factors, &EnvironmentalMappings::default(), &context);
        assert_eq!(score, 1.0, "Scores below the floor are clamped");
    }

    #[test]
    fn test_mood_score_always_in_bounds() {
        let events = std::iter::once(None).chain(SeasonalEvent::ALL.into_iter().map(Some));
        for event in events {
            for weather in WeatherCondition::ALL {
                for hour in 0..24 {
                    for day in 0..7 {
                        for temperature in [-10.0, 45.0, 55.0, 62.0, 70.0, 82.0, 100.0] {
                            let factors = EnvironmentalFactors::new(weather)
                                .with_temperature(temperature)
                                .at(hour, day)
                                .with_event(event);
                            let score = mood(&factors);
                            assert!((1.0..=10.0).contains(&score), "Out of bounds: {score} for {factors:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_perfect_track_scores_maximum() {
        // Sunny at 14:00 expects energy 8.2, sunny prefers 110-140 BPM and 7.0-9.5 energy
        let perfect = track(&[WeatherCondition::Sunny], &[SeasonalEvent::Summer], 125, 8.0);
        let factors = EnvironmentalFactors::new(WeatherCondition::Sunny)
            .at(14, 2)
            .with_event(Some(SeasonalEvent::Summer));

        assert_eq!(confidence(&perfect, &factors), 11.0);
        assert_eq!(ConfidenceWeights::default().max_confidence(), 11.0);
    }

    #[test]
    fn test_unmatched_track_scores_zero() {
        let misfit = track(&[WeatherCondition::Snowy], &[SeasonalEvent::Winter], 200, 0.5);
        let factors = EnvironmentalFactors::new(WeatherCondition::Sunny)
            .at(14, 2)
            .with_event(Some(SeasonalEvent::Summer));

        assert_eq!(confidence(&misfit, &factors), 0.0);
    }

    #[test]
    fn test_seasonal_bonus_needs_an_active_event() {
        let festive = track(&[], &[SeasonalEvent::Christmas], 200, 0.5);
        let factors = EnvironmentalFactors::new(WeatherCondition::Sunny).at(14, 2);

        assert_eq!(confidence(&festive, &factors), 0.0);
        assert_eq!(
            confidence(&festive, &factors.with_event(Some(SeasonalEvent::Christmas))),
            2.5
        );
    }

    #[test]
    fn test_preferred_bands_are_inclusive() {
        // rainy: 70-100 BPM, 3.0-6.0 energy; hour 3 is unmapped (5.0)
        let factors = EnvironmentalFactors::new(WeatherCondition::Rainy).at(3, 2);

        let low_edges = track(&[], &[], 70, 3.0);
        assert_eq!(confidence(&low_edges, &factors), 2.0 + 2.0 + 1.0);

        let high_edges = track(&[], &[], 100, 6.0);
        assert_eq!(confidence(&high_edges, &factors), 2.0 + 2.0 + 1.5);
    }

    #[test]
    fn test_unmapped_weather_uses_neutral_bands() {
        let factors = EnvironmentalFactors::new(WeatherCondition::Stormy).at(3, 2);

        let inside = track(&[], &[], 80, 4.0);
        assert_eq!(confidence(&inside, &factors), 2.0 + 2.0 + 1.5);

        let outside = track(&[], &[], 121, 7.1);
        assert_eq!(confidence(&outside, &factors), 0.0);
    }

    #[test]
    fn test_time_closeness_tiers() {
        // hour 12 expects energy 7.5; cloudy bands are 90-120 BPM and 5.0-7.5
        let factors = EnvironmentalFactors::new(WeatherCondition::Cloudy).at(12, 2);

        assert_eq!(confidence(&track(&[], &[], 10, 8.5), &factors), 1.5);
        assert_eq!(confidence(&track(&[], &[], 10, 9.5), &factors), 1.0);
        assert_eq!(confidence(&track(&[], &[], 10, 9.6), &factors), 0.0);
    }

    #[test]
    fn test_mood_score_does_not_change_confidence() {
        let mappings = EnvironmentalMappings::default();
        let context = ScoringContext::default();
        let factors = EnvironmentalFactors::new(WeatherCondition::Cloudy).at(12, 2);
        let weather = mappings.weather_parameters(factors.weather);
        let subject = track(&[WeatherCondition::Cloudy], &[], 100, 6.0);

        let low = calculate_track_confidence(&subject, &factors, 1.0, weather, &mappings, &context);
        let high = calculate_track_confidence(&subject, &factors, 10.0, weather, &mappings, &context);
        assert_eq!(low, high);
    }

    #[test]
    fn test_rank_tracks_is_stable_for_ties() {
        let mappings = EnvironmentalMappings::default();
        let context = ScoringContext::default();
        let factors = EnvironmentalFactors::new(WeatherCondition::Sunny).at(3, 2);

        let mut tracks: Vec<MusicTrack> = (0..6)
            .map(|i| MusicTrack {
                title: format!("Tie {i}"),
                ..track(&[], &[], 10, 0.0)
            })
            .collect();
        tracks.insert(3, MusicTrack { title: "Winner".to_string(), ..track(&[WeatherCondition::Sunny], &[], 10, 0.0) });

        let ranked = rank_tracks(&tracks, &factors, &mappings, &context);
        let titles: Vec<&str> = ranked.iter().map(|scored| scored.track.title.as_str()).collect();

        assert_eq!(titles, ["Winner", "Tie 0", "Tie 1", "Tie 2", "Tie 3", "Tie 4", "Tie 5"]);
    }

    #[test]
    fn test_batch_processing_equivalence() {
        let mappings = EnvironmentalMappings::default();
        let context = ScoringContext::default();
        let factors = EnvironmentalFactors::new(WeatherCondition::Snowy)
            .at(10, 6)
            .with_event(Some(SeasonalEvent::Christmas));
        let tracks = crate::catalog::Catalog::sample();

        for scored in batch_calculate_scores(tracks.tracks(), &factors, &mappings, &context) {
            assert_eq!(scored.confidence, confidence(scored.track, &factors));
        }
    }

    #[test]
    fn test_sample_catalog_confidence_always_in_bounds() {
        let catalog = crate::catalog::Catalog::sample();
        let max = ConfidenceWeights::default().max_confidence();
        let events = std::iter::once(None).chain(SeasonalEvent::ALL.into_iter().map(Some));

        for event in events {
            for weather in WeatherCondition::ALL {
                for hour in 0..24 {
                    let factors = EnvironmentalFactors::new(weather).at(hour, 3).with_event(event);
                    for track in &catalog {
                        let c = confidence(track, &factors);
                        assert!((0.0..=max).contains(&c), "Confidence {c} out of range for '{}' in {factors:?}", track.title);
                    }
                }
            }
        }
        assert_eq!(max, 11.0);
    }

    #[test]
    fn test_default_context_is_valid() {
        assert!(ScoringContext::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_contexts_are_rejected() {
        let mut inverted = ScoringContext::default();
        inverted.mood.min_score = 10.0;
        inverted.mood.max_score = 1.0;
        assert!(inverted.validate().unwrap_err().to_string().contains("inverted"));

        let mut negative = ScoringContext::default();
        negative.confidence.tempo_match = -2.0;
        assert!(negative.validate().unwrap_err().to_string().contains("tempo_match"));

        let mut out_of_order = ScoringContext::default();
        out_of_order.confidence.close_distance = 3.0;
        assert!(out_of_order.validate().is_err());
    }

    #[test]
    fn test_statistics() {
        assert!(statistics::analyze_scores(&[]).is_none());

        let stats = statistics::analyze_scores(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.count, 8);
        assert!((stats.mean - 5.0).abs() < EPSILON);
        assert!((stats.variance - 4.0).abs() < EPSILON);
        assert!((stats.std_deviation - 2.0).abs() < EPSILON);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }
}
