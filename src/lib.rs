//! Weather and mood aware playlists for retail spaces.
//!
//! Core modules:
//! - [`environment`] - Environmental conditions of a request
//! - [`catalog`] - Immutable track catalog
//! - [`mappings`] - Weather and hour-of-day lookup tables
//! - [`algorithm`] - Mood and track confidence scoring
//! - [`engine`] - Ranking and the engine facade
//! - [`playlist`] - Playlist assembly, rationale and summary
//!
//! ### Supporting Modules
//!
//! - [`db`] - SQLite catalog files
//! - [`config`] - Configuration and data directory management
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//! - [`report`] - Text rendering of results
//! - [`simulation`] - Randomized scoring runs
//!
//! ## Quick Start Example
//!
//! ```
//! use retailtunes::catalog::Catalog;
//! use retailtunes::engine::RecommendationEngine;
//! use retailtunes::environment::{EnvironmentalFactors, SeasonalEvent, WeatherCondition};
//!
//! let engine = RecommendationEngine::new(Catalog::sample());
//!
//! // Sunny Saturday afternoon during the Christmas season
//! let factors = EnvironmentalFactors::new(WeatherCondition::Sunny)
//!     .with_temperature(68.0)
//!     .at(14, 5)
//!     .with_event(Some(SeasonalEvent::Christmas));
//!
//! assert_eq!(engine.calculate_mood_score(&factors), 10.0);
//!
//! let playlist = engine.generate_playlist(&factors, 90);
//! for entry in &playlist.entries {
//!     println!("{} ({:.1}): {}", entry.track.title, entry.confidence, entry.reason);
//! }
//! ```
//!
//! ## Scoring
//!
//! ### Mood score (1-10)
//! - Blends the weather's mood boost, a temperature tier, the hour's expected
//!   energy and a neutral base
//! - Multiplied up on weekends and during Christmas, Valentine's Day and New Year
//!
//! ### Track confidence (0-11)
//! - Additive bonuses for matching weather, matching seasonal event, tempo and
//!   energy inside the weather's preferred bands, and energy close to the hour's
//!
//! ### Playlists
//! - Single greedy pass over the 20 best tracks, skipping tracks that do not
//!   fit and stopping at 90% of the requested time
//!
//! ## Error Handling
//!
//! Scoring, ranking and playlist generation cannot fail: every lookup has a
//! neutral fallback. Loading catalogs and configuration returns
//! `anyhow::Result`.

pub mod algorithm;
pub mod catalog;
pub mod cli;
pub mod completion;
pub mod config;
pub mod db;
pub mod engine;
pub mod environment;
pub mod mappings;
pub mod playlist;
pub mod report;
pub mod simulation;
pub mod track;
