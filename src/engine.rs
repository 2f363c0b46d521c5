//! # Recommendation Engine
//!
//! Owns the catalog, the environmental mappings and the scoring weights for
//! its whole lifetime and answers requests against them. Nothing is mutated
//! after construction, so a shared `&RecommendationEngine` can serve any
//! number of callers.
//!
//! ```
//! use retailtunes::catalog::Catalog;
//! use retailtunes::engine::RecommendationEngine;
//! use retailtunes::environment::{EnvironmentalFactors, SeasonalEvent, WeatherCondition};
//!
//! let engine = RecommendationEngine::new(Catalog::sample());
//! let factors = EnvironmentalFactors::new(WeatherCondition::Snowy)
//!     .at(15, 5)
//!     .with_event(Some(SeasonalEvent::Christmas));
//!
//! let top = engine.get_recommendations(&factors, 3);
//! assert_eq!(top[0].track.title, "Winter Wonderland");
//!
//! let playlist = engine.generate_playlist(&factors, 30);
//! assert!(playlist.total_duration <= 30 * 60);
//! ```

use crate::algorithm::{self, ScoredTrack, ScoringContext};
use crate::catalog::Catalog;
use crate::environment::EnvironmentalFactors;
use crate::mappings::EnvironmentalMappings;
use crate::playlist::{self, Playlist, PlaylistConfig};
use log::debug;

/// Default length of a recommendation list
pub const DEFAULT_RECOMMENDATIONS: usize = 5;
/// Default playlist length in minutes
pub const DEFAULT_PLAYLIST_MINUTES: u32 = 60;

#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Catalog,
    mappings: EnvironmentalMappings,
    context: ScoringContext,
    playlist_config: PlaylistConfig,
}

impl RecommendationEngine {
    /// Engine over `catalog` with the default tables and weights
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_context(catalog, ScoringContext::default())
    }

    #[must_use]
    pub fn with_context(catalog: Catalog, context: ScoringContext) -> Self {
        Self {
            catalog,
            mappings: EnvironmentalMappings::default(),
            context,
            playlist_config: PlaylistConfig::default(),
        }
    }

    #[must_use]
    pub fn with_mappings(self, mappings: EnvironmentalMappings) -> Self {
        Self { mappings, ..self }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn mappings(&self) -> &EnvironmentalMappings {
        &self.mappings
    }

    #[must_use]
    pub fn context(&self) -> &ScoringContext {
        &self.context
    }

    /// Shopper mood for `factors`, between 1.0 and 10.0.
    #[must_use]
    pub fn calculate_mood_score(&self, factors: &EnvironmentalFactors) -> f64 {
        algorithm::calculate_mood_score(factors, &self.mappings, &self.context)
    }

    /// The `num_tracks` best-fitting tracks, best first.
    ///
    /// Tracks with equal confidence keep their catalog order. The list is
    /// shorter than `num_tracks` when the catalog is.
    #[must_use]
    pub fn get_recommendations(&self, factors: &EnvironmentalFactors, num_tracks: usize) -> Vec<ScoredTrack<'_>> {
        let mut ranked = algorithm::rank_tracks(self.catalog.tracks(), factors, &self.mappings, &self.context);
        ranked.truncate(num_tracks);

        debug!(
            "Recommending {} of {} tracks for {} weather",
            ranked.len(),
            self.catalog.len(),
            factors.weather
        );
        ranked
    }

    /// A playlist of at most `duration_minutes` for `factors`.
    ///
    /// # Preconditions
    ///
    /// Same as [`EnvironmentalFactors`]. An empty catalog, or one where no
    /// candidate fits the time budget, yields an empty playlist.
    #[must_use]
    pub fn generate_playlist(&self, factors: &EnvironmentalFactors, duration_minutes: u32) -> Playlist {
        let target_seconds = duration_minutes.saturating_mul(60);
        let candidates = self.get_recommendations(factors, self.playlist_config.candidate_pool);
        let mood_score = self.calculate_mood_score(factors);

        let (entries, total_duration) =
            playlist::assemble(&candidates, factors, target_seconds, &self.playlist_config);

        Playlist {
            entries,
            total_duration,
            mood_score,
            weather_impact: self.mappings.spending_impact(factors.weather),
            optimization_summary: playlist::generate_optimization_summary(factors, mood_score, &self.mappings),
        }
    }
}
