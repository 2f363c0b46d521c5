//! # Catalog Store
//!
//! The ordered, immutable list of tracks an engine ranks. Insertion order is
//! significant: it breaks ties between equally scored tracks.
//!
//! Catalogs come from three places:
//! - [`Catalog::sample`] - the built-in reference catalog
//! - [`Catalog::from_json_file`] - a JSON array of tracks
//! - [`crate::db::load_catalog`] - a SQLite catalog file

use crate::environment::{SeasonalEvent, WeatherCondition};
use crate::track::MusicTrack;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tracks: Vec<MusicTrack>,
}

lazy_static::lazy_static! {
    /// Reference catalog shared by every caller of [`Catalog::sample`]
    static ref SAMPLE_TRACKS: Vec<MusicTrack> = sample_tracks();
}

impl Catalog {
    #[must_use]
    pub fn new(tracks: Vec<MusicTrack>) -> Self {
        Self { tracks }
    }

    /// The built-in eight-track reference catalog
    #[must_use]
    pub fn sample() -> Self {
        Self::new(SAMPLE_TRACKS.clone())
    }

    /// Reads a JSON array of tracks, keeping file order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a track array.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let tracks: Vec<MusicTrack> = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file {} is not a JSON array of tracks", path.display()))?;

        info!("Loaded {} tracks from {}", tracks.len(), path.display());
        Ok(Self::new(tracks))
    }

    #[must_use]
    pub fn tracks(&self) -> &[MusicTrack] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MusicTrack> {
        self.tracks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MusicTrack;
    type IntoIter = std::slice::Iter<'a, MusicTrack>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<MusicTrack>> for Catalog {
    fn from(tracks: Vec<MusicTrack>) -> Self {
        Self::new(tracks)
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_track(
    title: &str,
    artist: &str,
    genre: &str,
    tempo: u32,
    energy_level: f64,
    mood_tags: &[&str],
    weather_suitability: &[WeatherCondition],
    seasonal_relevance: &[SeasonalEvent],
    duration: u32,
) -> MusicTrack {
    MusicTrack {
        title: title.to_string(),
        artist: artist.to_string(),
        genre: genre.to_string(),
        tempo,
        energy_level,
        mood_tags: mood_tags.iter().map(ToString::to_string).collect(),
        weather_suitability: weather_suitability.to_vec(),
        seasonal_relevance: seasonal_relevance.to_vec(),
        duration,
    }
}

fn sample_tracks() -> Vec<MusicTrack> {
    use SeasonalEvent::{Christmas, Fall, Spring, Summer, Winter};
    use WeatherCondition::{Cloudy, Rainy, Snowy, Sunny};

    vec![
        // sunny weather
        sample_track("Good Vibes", "Artist A", "Pop", 120, 8.5,
            &["upbeat", "energetic", "positive"], &[Sunny], &[Summer], 210),
        sample_track("Sunshine Melody", "Artist B", "Indie Pop", 115, 8.0,
            &["feel-good", "optimistic", "bright"], &[Sunny], &[Spring, Summer], 195),
        // rainy weather
        sample_track("Cozy Afternoon", "Artist C", "Ambient", 80, 5.5,
            &["relaxing", "soothing", "comfortable"], &[Rainy, Cloudy], &[Fall], 240),
        sample_track("Gentle Rain", "Artist D", "Acoustic", 75, 4.8,
            &["calm", "peaceful", "introspective"], &[Rainy], &[Fall, Winter], 225),
        // holidays
        sample_track("Jingle Bell Rock", "Traditional", "Holiday", 130, 7.5,
            &["festive", "nostalgic", "joyful"], &[Snowy, Cloudy], &[Christmas], 125),
        sample_track("Winter Wonderland", "Traditional", "Holiday", 110, 6.8,
            &["magical", "cozy", "traditional"], &[Snowy], &[Christmas], 150),
        // peak hours
        sample_track("Energy Boost", "Artist E", "Electronic Pop", 128, 9.0,
            &["energetic", "motivating", "dynamic"], &[Sunny, Cloudy], &[Summer], 200),
        // stress relief
        sample_track("Peaceful Moments", "Artist F", "New Age", 65, 3.5,
            &["calming", "meditative", "stress-relief"], &[Cloudy, Rainy], &[Winter], 300),
    ]
}
