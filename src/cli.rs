//! # Command-Line Interface Module
//!
//! Clap definitions for the `retailtunes` binary.
//!
//! ## Examples
//!
//! ```bash
//! retailtunes mood --weather sunny --temperature 68 --hour 14 --day 5 --event christmas
//! retailtunes recommend --weather rainy --hour 18 --count 3
//! retailtunes playlist --weather snowy --minutes 90 --json
//! retailtunes --catalog store.db catalog list
//! ```

use crate::environment::{AgeGroup, EnvironmentalFactors, SeasonalEvent, WeatherCondition};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "retailtunes")]
#[command(about = "RetailTunes: weather and mood aware playlists for retail spaces")]
#[command(version)]
pub struct Args {
    /// Track catalog to use (SQLite database, or JSON when the extension is .json)
    ///
    /// Overrides the configuration file. Without either, the default catalog
    /// database is used if it exists, otherwise the built-in sample catalog.
    #[arg(long, global = true, env = "RETAILTUNES_CATALOG", value_hint = clap::ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Current store conditions, shared by every scoring command
#[derive(ClapArgs, Debug, Clone)]
pub struct ConditionArgs {
    /// Weather outside the store
    #[arg(short, long, value_enum)]
    pub weather: WeatherCondition,

    /// Outside temperature in °F
    #[arg(short, long, default_value_t = 70.0, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Relative humidity in percent
    #[arg(long, default_value_t = 50.0)]
    pub humidity: f64,

    /// Hour of day (0-23)
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u8).range(0..=23))]
    pub hour: u8,

    /// Day of week (0-6, Monday is 0)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=6))]
    pub day: u8,

    /// Active holiday or season
    #[arg(short, long, value_enum)]
    pub event: Option<SeasonalEvent>,

    /// Customers currently in the store
    #[arg(long, default_value_t = 0)]
    pub customers: u32,

    /// Dominant customer age group
    #[arg(long, value_enum, default_value_t = AgeGroup::Mixed)]
    pub age_group: AgeGroup,
}

impl From<&ConditionArgs> for EnvironmentalFactors {
    fn from(args: &ConditionArgs) -> Self {
        EnvironmentalFactors::new(args.weather)
            .with_temperature(args.temperature)
            .with_humidity(args.humidity)
            .at(args.hour, args.day)
            .with_event(args.event)
            .with_customers(args.customers, args.age_group)
    }
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the shopper mood score for the given conditions
    Mood {
        #[command(flatten)]
        conditions: ConditionArgs,
    },

    /// Rank catalog tracks for the given conditions
    ///
    /// Prints the best-fitting tracks with their confidence, best first.
    Recommend {
        #[command(flatten)]
        conditions: ConditionArgs,

        /// Number of tracks to show (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Build a playlist for the given conditions
    ///
    /// Greedily fills the requested time with the best-ranked tracks and
    /// explains every pick.
    Playlist {
        #[command(flatten)]
        conditions: ConditionArgs,

        /// Playlist length in minutes (defaults to the configured length)
        #[arg(short, long)]
        minutes: Option<u32>,

        /// Print the playlist as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or create catalog databases
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Score randomly drawn conditions and summarize the outcomes
    ///
    /// Useful to see how the scoring weights behave across many situations.
    /// The same seed always draws the same conditions.
    Simulate {
        /// Number of condition snapshots to draw
        #[arg(short, long, default_value_t = 1000)]
        samples: usize,

        /// Random seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Generate shell completions
    ///
    /// Usage: retailtunes completion bash > ~/.local/share/bash-completion/completions/retailtunes
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Catalog management actions
#[derive(Subcommand, Debug)]
pub enum CatalogAction {
    /// List every track in catalog order
    List,

    /// Write a catalog database
    ///
    /// Seeds the database with the built-in sample catalog, or with the
    /// tracks of a JSON file.
    InitDb {
        /// Where to write the database (defaults to the standard data directory)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: Option<PathBuf>,

        /// JSON array of tracks to import instead of the sample catalog
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        from_json: Option<PathBuf>,

        /// Overwrite an existing database
        #[arg(long)]
        force: bool,
    },
}
