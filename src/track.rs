use crate::environment::{SeasonalEvent, WeatherCondition};
use serde::{Deserialize, Serialize};

/// A catalog entry, as the scoring engine sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicTrack {
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Beats per minute.
    pub tempo: u32,
    /// 0 (ambient) to 10 (peak energy).
    pub energy_level: f64,
    /// Descriptive only, never scored.
    #[serde(default)]
    pub mood_tags: Vec<String>,
    /// Weather this track is a good match for.
    #[serde(default)]
    pub weather_suitability: Vec<WeatherCondition>,
    #[serde(default)]
    pub seasonal_relevance: Vec<SeasonalEvent>,
    /// Length in seconds.
    pub duration: u32,
}

impl MusicTrack {
    #[must_use]
    pub fn suits_weather(&self, weather: WeatherCondition) -> bool {
        self.weather_suitability.contains(&weather)
    }

    /// `false` when no event is active.
    #[must_use]
    pub fn fits_event(&self, event: Option<SeasonalEvent>) -> bool {
        event.is_some_and(|event| self.seasonal_relevance.contains(&event))
    }
}
