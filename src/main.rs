//! # RetailTunes
//!
//! Scores shopper mood from store conditions and builds playlists that fit
//! them.
//!
//! ## Usage
//!
//! ```bash
//! # Mood score for a sunny Saturday afternoon at Christmas
//! retailtunes mood --weather sunny --temperature 68 --hour 14 --day 5 --event christmas
//!
//! # Top tracks for a rainy evening
//! retailtunes recommend --weather rainy --temperature 55 --hour 18 --count 3
//!
//! # 90 minute playlist as JSON
//! retailtunes playlist --weather snowy --hour 15 --minutes 90 --json
//!
//! # Create a catalog database and use it
//! retailtunes catalog init-db store.db --from-json tracks.json
//! retailtunes --catalog store.db catalog list
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use retailtunes::catalog::Catalog;
use retailtunes::cli::{self, CatalogAction, Command};
use retailtunes::config::{self, RuntimeConfig};
use retailtunes::engine::RecommendationEngine;
use retailtunes::environment::EnvironmentalFactors;
use retailtunes::{completion, db, report, simulation};
use std::io;

/// Loads the configured catalog, or the sample catalog when none is set up.
fn build_engine(config: &RuntimeConfig) -> Result<RecommendationEngine> {
    let catalog = match config.resolve_catalog_path()? {
        Some(path) => db::open_catalog(&path)?,
        None => {
            debug!("No catalog configured, using the sample catalog");
            Catalog::sample()
        }
    };
    info!("Loaded {} tracks", catalog.len());

    Ok(RecommendationEngine::with_context(catalog, config.scoring.clone()))
}

/// Main entry point.
///
/// Logging is controlled through `RUST_LOG`:
/// - `RUST_LOG=debug retailtunes playlist -w rainy` - Enable debug logging
/// - `RUST_LOG=retailtunes::algorithm=trace retailtunes recommend -w sunny` - Per-track scoring
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let config = RuntimeConfig::load()?.with_catalog_path(args.catalog);

    match args.command {
        Command::Mood { conditions } => {
            let engine = build_engine(&config)?;
            let factors = EnvironmentalFactors::from(&conditions);
            print!("{}", report::render_mood(&factors, engine.calculate_mood_score(&factors)));
        }
        Command::Recommend { conditions, count } => {
            let engine = build_engine(&config)?;
            let factors = EnvironmentalFactors::from(&conditions);
            let count = count.unwrap_or(config.recommendation_count);

            info!("Ranking {} tracks for {} weather", engine.catalog().len(), factors.weather);
            let recommendations = engine.get_recommendations(&factors, count);
            print!("{}", report::render_recommendations(&recommendations));
        }
        Command::Playlist { conditions, minutes, json } => {
            let engine = build_engine(&config)?;
            let factors = EnvironmentalFactors::from(&conditions);
            let minutes = minutes.unwrap_or(config.playlist_minutes);

            info!("Generating {minutes} minute playlist for {} weather", factors.weather);
            let playlist = engine.generate_playlist(&factors, minutes);

            if json {
                let out = serde_json::to_string_pretty(&playlist).context("Failed to serialize playlist")?;
                println!("{out}");
            } else {
                print!("{}", report::render_playlist(&factors, &playlist));
            }
        }
        Command::Catalog { action } => match action {
            CatalogAction::List => {
                let engine = build_engine(&config)?;
                print!("{}", report::render_catalog(engine.catalog()));
            }
            CatalogAction::InitDb { path, from_json, force } => {
                let path = match path {
                    Some(path) => path,
                    None => config::get_catalog_db_path()?,
                };
                let catalog = match from_json {
                    Some(source) => Catalog::from_json_file(&source)?,
                    None => Catalog::sample(),
                };

                info!("Initializing catalog database at {}", path.display());
                db::init_catalog_db(&path, catalog.tracks(), force)?;
                println!("Wrote {} tracks to {}", catalog.len(), path.display());
            }
        },
        Command::Simulate { samples, seed } => {
            let engine = build_engine(&config)?;
            let outcome = simulation::simulate(&engine, samples, seed);
            print!("{}", report::render_simulation(&outcome));
        }
        Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            let completion_shell = completion::shell_to_completion_shell(shell);
            completion::generate_completions(completion_shell, &mut cmd, &mut io::stdout());
        }
    }

    Ok(())
}
