//! # Environmental Conditions
//!
//! The snapshot of store surroundings a playlist is scored against: weather,
//! temperature, time of day, weekday and an optional seasonal event.
//!
//! All categorical values are closed enums with a stable snake_case text form
//! shared by serde, clap and `Display`/`FromStr`.

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current weather outside the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
}

impl WeatherCondition {
    /// Every condition, in declaration order
    pub const ALL: [Self; 5] = [Self::Sunny, Self::Cloudy, Self::Rainy, Self::Snowy, Self::Stormy];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Stormy => "stormy",
        }
    }
}

/// Shopper mood categories.
///
/// Not consumed by any scoring path yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum MoodState {
    HighEnergy,
    ModerateEnergy,
    LowEnergy,
    Relaxed,
    Stressed,
}

impl MoodState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighEnergy => "high_energy",
            Self::ModerateEnergy => "moderate_energy",
            Self::LowEnergy => "low_energy",
            Self::Relaxed => "relaxed",
            Self::Stressed => "stressed",
        }
    }
}

/// Holidays and seasons that shift the store atmosphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum SeasonalEvent {
    Christmas,
    NewYear,
    Valentines,
    Spring,
    Summer,
    Fall,
    Winter,
    BackToSchool,
}

impl SeasonalEvent {
    /// Every event, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Christmas,
        Self::NewYear,
        Self::Valentines,
        Self::Spring,
        Self::Summer,
        Self::Fall,
        Self::Winter,
        Self::BackToSchool,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Christmas => "christmas",
            Self::NewYear => "new_year",
            Self::Valentines => "valentines",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
            Self::BackToSchool => "back_to_school",
        }
    }
}

/// Dominant age group among current customers (informational)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum AgeGroup {
    Young,
    Middle,
    Senior,
    #[default]
    Mixed,
}

impl AgeGroup {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Young => "young",
            Self::Middle => "middle",
            Self::Senior => "senior",
            Self::Mixed => "mixed",
        }
    }
}

macro_rules! text_form {
    ($ty:ty, $what:literal, $all:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim().to_ascii_lowercase();
                $all.into_iter()
                    .find(|candidate| candidate.as_str() == wanted)
                    .ok_or_else(|| anyhow!("Unknown {}: '{s}'", $what))
            }
        }
    };
}

text_form!(WeatherCondition, "weather condition", WeatherCondition::ALL);
text_form!(SeasonalEvent, "seasonal event", SeasonalEvent::ALL);
text_form!(
    MoodState,
    "mood state",
    [
        MoodState::HighEnergy,
        MoodState::ModerateEnergy,
        MoodState::LowEnergy,
        MoodState::Relaxed,
        MoodState::Stressed,
    ]
);
text_form!(
    AgeGroup,
    "age group",
    [AgeGroup::Young, AgeGroup::Middle, AgeGroup::Senior, AgeGroup::Mixed]
);

/// One snapshot of the conditions a playlist is generated for.
///
/// # Preconditions
///
/// `time_of_day` is an hour in `0..=23` and `day_of_week` a weekday in
/// `0..=6` with Monday as `0`. Values outside these ranges are not
/// rejected: unknown hours fall back to the neutral time energy and
/// unknown weekdays count as weekdays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalFactors {
    pub weather: WeatherCondition,
    /// Degrees Fahrenheit
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    pub time_of_day: u8,
    pub day_of_week: u8,
    #[serde(default)]
    pub seasonal_event: Option<SeasonalEvent>,
    #[serde(default)]
    pub customer_count: u32,
    #[serde(default)]
    pub avg_age_group: AgeGroup,
}

impl EnvironmentalFactors {
    /// Factors with mild defaults for everything but the weather:
    /// 70°F, 50% humidity, noon on a Monday, no event, empty store.
    #[must_use]
    pub fn new(weather: WeatherCondition) -> Self {
        Self {
            weather,
            temperature: 70.0,
            humidity: 50.0,
            time_of_day: 12,
            day_of_week: 0,
            seasonal_event: None,
            customer_count: 0,
            avg_age_group: AgeGroup::Mixed,
        }
    }

    #[must_use]
    pub fn with_temperature(self, temperature: f64) -> Self {
        Self { temperature, ..self }
    }

    #[must_use]
    pub fn with_humidity(self, humidity: f64) -> Self {
        Self { humidity, ..self }
    }

    #[must_use]
    pub fn at(self, time_of_day: u8, day_of_week: u8) -> Self {
        Self { time_of_day, day_of_week, ..self }
    }

    #[must_use]
    pub fn with_event(self, seasonal_event: Option<SeasonalEvent>) -> Self {
        Self { seasonal_event, ..self }
    }

    #[must_use]
    pub fn with_customers(self, customer_count: u32, avg_age_group: AgeGroup) -> Self {
        Self { customer_count, avg_age_group, ..self }
    }

    /// Saturday or Sunday
    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        matches!(self.day_of_week, 5 | 6)
    }
}
