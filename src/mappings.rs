//! # Environmental Mappings
//!
//! Two read-only lookup tables the scorers consult:
//!
//! - weather → mood boost, spending impact and preferred tempo/energy bands
//! - hour of day → the energy level shoppers respond to at that hour
//!
//! Both tables are built once per engine and only ever read afterwards.
//! Lookups for keys that are not in a table resolve to the neutral defaults
//! below. `Stormy` weather is deliberately absent from the weather table and
//! the hour table only covers opening hours (9 through 21).

use crate::environment::WeatherCondition;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;

pub const DEFAULT_MOOD_BOOST: f64 = 5.0;
pub const DEFAULT_SPENDING_IMPACT: f64 = 1.0;
pub const DEFAULT_TEMPO_RANGE: RangeInclusive<u32> = 80..=120;
pub const DEFAULT_ENERGY_RANGE: RangeInclusive<f64> = 4.0..=7.0;
pub const DEFAULT_TIME_ENERGY: f64 = 5.0;

/// How one weather condition shifts mood and musical preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherParameters {
    pub mood_boost: f64,
    /// Not consumed by scoring.
    pub energy_increase: f64,
    /// Multiplier on expected spending, 1.0 is neutral.
    pub spending_impact: f64,
    pub preferred_tempo: RangeInclusive<u32>,
    pub preferred_energy: RangeInclusive<f64>,
}

/// Weather and hour-of-day tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalMappings {
    weather: HashMap<WeatherCondition, WeatherParameters>,
    time_energy: BTreeMap<u8, f64>,
}

impl Default for EnvironmentalMappings {
    fn default() -> Self {
        Self::new(default_weather_table(), default_time_energy_table())
    }
}

impl EnvironmentalMappings {
    #[must_use]
    pub fn new(
        weather: HashMap<WeatherCondition, WeatherParameters>,
        time_energy: BTreeMap<u8, f64>,
    ) -> Self {
        Self { weather, time_energy }
    }

    /// Parameters for `weather`, `None` when the condition is unmapped.
    #[must_use]
    pub fn weather_parameters(&self, weather: WeatherCondition) -> Option<&WeatherParameters> {
        self.weather.get(&weather)
    }

    #[must_use]
    pub fn mood_boost(&self, weather: WeatherCondition) -> f64 {
        match self.weather_parameters(weather) {
            Some(params) => params.mood_boost,
            None => DEFAULT_MOOD_BOOST,
        }
    }

    #[must_use]
    pub fn spending_impact(&self, weather: WeatherCondition) -> f64 {
        match self.weather_parameters(weather) {
            Some(params) => params.spending_impact,
            None => DEFAULT_SPENDING_IMPACT,
        }
    }

    /// Expected shopper energy for `hour`; hours outside the table are neutral.
    #[must_use]
    pub fn time_energy(&self, hour: u8) -> f64 {
        match self.time_energy.get(&hour) {
            Some(&energy) => energy,
            None => DEFAULT_TIME_ENERGY,
        }
    }
}

/// Tempo band a weather condition favors, or the neutral band when unmapped.
#[must_use]
pub fn preferred_tempo(params: Option<&WeatherParameters>) -> RangeInclusive<u32> {
    match params {
        Some(params) => params.preferred_tempo.clone(),
        None => DEFAULT_TEMPO_RANGE,
    }
}

/// Energy band a weather condition favors, or the neutral band when unmapped.
#[must_use]
pub fn preferred_energy(params: Option<&WeatherParameters>) -> RangeInclusive<f64> {
    match params {
        Some(params) => params.preferred_energy.clone(),
        None => DEFAULT_ENERGY_RANGE,
    }
}

fn default_weather_table() -> HashMap<WeatherCondition, WeatherParameters> {
    WeatherCondition::ALL
        .into_iter()
        .filter_map(|weather| {
            let params = match weather {
                // Sunny days lift spending by roughly 12%.
                WeatherCondition::Sunny => WeatherParameters {
                    mood_boost: 8.5,
                    energy_increase: 7.8,
                    spending_impact: 1.119,
                    preferred_tempo: 110..=140,
                    preferred_energy: 7.0..=9.5,
                },
                WeatherCondition::Cloudy => WeatherParameters {
                    mood_boost: 5.5,
                    energy_increase: 5.2,
                    spending_impact: 0.95,
                    preferred_tempo: 90..=120,
                    preferred_energy: 5.0..=7.5,
                },
                // Rain cuts spending by roughly 10%.
                WeatherCondition::Rainy => WeatherParameters {
                    mood_boost: 4.2,
                    energy_increase: 3.8,
                    spending_impact: 0.903,
                    preferred_tempo: 70..=100,
                    preferred_energy: 3.0..=6.0,
                },
                WeatherCondition::Snowy => WeatherParameters {
                    mood_boost: 6.0,
                    energy_increase: 4.5,
                    spending_impact: 0.92,
                    preferred_tempo: 80..=110,
                    preferred_energy: 4.0..=7.0,
                },
                WeatherCondition::Stormy => return None,
            };
            Some((weather, params))
        })
        .collect()
}

fn default_time_energy_table() -> BTreeMap<u8, f64> {
    [
        (9, 6.0),
        (10, 6.5),
        (11, 7.0),
        (12, 7.5),
        (13, 8.0),
        // 2-4 PM is the shopping peak
        (14, 8.2),
        (15, 8.0),
        (16, 7.5),
        (17, 7.0),
        (18, 6.5),
        (19, 6.0),
        (20, 5.5),
        (21, 5.0),
    ]
    .into_iter()
    .collect()
}
