//! # Catalog Database
//!
//! SQLite storage for track catalogs. A catalog file has a single `tracks`
//! table; the integer primary key preserves catalog order. Set-valued fields
//! are stored as JSON text.
//!
//! The engine never touches the database while answering requests. A
//! catalog is read once and handed to the engine as an immutable value.

use crate::catalog::Catalog;
use crate::track::MusicTrack;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tempfile::NamedTempFile;

const CREATE_TRACKS: &str = "CREATE TABLE IF NOT EXISTS tracks (
    id                  INTEGER PRIMARY KEY,
    title               TEXT    NOT NULL,
    artist              TEXT    NOT NULL,
    genre               TEXT    NOT NULL,
    tempo               INTEGER NOT NULL,
    energy_level        REAL    NOT NULL,
    mood_tags           TEXT    NOT NULL DEFAULT '[]',
    weather_suitability TEXT    NOT NULL DEFAULT '[]',
    seasonal_relevance  TEXT    NOT NULL DEFAULT '[]',
    duration            INTEGER NOT NULL
)";

/// Writes `tracks` to a new catalog database at `path`.
///
/// The file is built next to `path` and moved into place once complete, so
/// an existing catalog is never left half-written.
///
/// # Errors
///
/// Fails if `path` exists and `force` is not set, or on any I/O or SQL error.
pub fn init_catalog_db(path: &Path, tracks: &[MusicTrack], force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Catalog database already exists at {}. Use --force to overwrite it.",
            path.display()
        );
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staging = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create a staging file in {}", dir.display()))?;

    {
        let mut conn = Connection::open(staging.path())
            .with_context(|| format!("Failed to open staging database {}", staging.path().display()))?;
        conn.execute(CREATE_TRACKS, [])
            .context("Invalid SQL command when creating the tracks table")?;
        insert_tracks(&mut conn, tracks)?;
    }

    staging
        .persist(path)
        .with_context(|| format!("Failed to move catalog database into place at {}", path.display()))?;

    info!("Wrote {} tracks to {}", tracks.len(), path.display());
    Ok(())
}

/// Inserts all tracks in one transaction, in slice order.
fn insert_tracks(conn: &mut Connection, tracks: &[MusicTrack]) -> Result<()> {
    let tx = conn.transaction()?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO tracks (title, artist, genre, tempo, energy_level, mood_tags, weather_suitability, seasonal_relevance, duration)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;

        for track in tracks {
            stmt.execute((
                &track.title,
                &track.artist,
                &track.genre,
                track.tempo,
                track.energy_level,
                serde_json::to_string(&track.mood_tags)?,
                serde_json::to_string(&track.weather_suitability)?,
                serde_json::to_string(&track.seasonal_relevance)?,
                track.duration,
            ))
            .with_context(|| format!("Failed to insert track '{}'", track.title))?;
        }
    }

    tx.commit().context("Committing catalog transaction failed")?;
    Ok(())
}

/// Row as stored, before the JSON columns are decoded
struct TrackRow {
    id: i64,
    title: String,
    artist: String,
    genre: String,
    tempo: u32,
    energy_level: f64,
    mood_tags: String,
    weather_suitability: String,
    seasonal_relevance: String,
    duration: u32,
}

impl TrackRow {
    fn into_track(self) -> Result<MusicTrack> {
        let id = self.id;
        Ok(MusicTrack {
            mood_tags: serde_json::from_str(&self.mood_tags)
                .with_context(|| format!("Track {id} has malformed mood tags"))?,
            weather_suitability: serde_json::from_str(&self.weather_suitability)
                .with_context(|| format!("Track {id} has malformed weather suitability"))?,
            seasonal_relevance: serde_json::from_str(&self.seasonal_relevance)
                .with_context(|| format!("Track {id} has malformed seasonal relevance"))?,
            title: self.title,
            artist: self.artist,
            genre: self.genre,
            tempo: self.tempo,
            energy_level: self.energy_level,
            duration: self.duration,
        })
    }
}

/// Reads the catalog stored at `path`, in insertion order.
///
/// # Errors
///
/// Fails if the file does not exist, is not a catalog database, or holds
/// rows that cannot be decoded.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        bail!("No catalog database at {}", path.display());
    }

    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .with_context(|| format!("Failed to open catalog database {}", path.display()))?;

    let mut stmt = conn
        .prepare(
            "SELECT id, title, artist, genre, tempo, energy_level, mood_tags, weather_suitability, seasonal_relevance, duration
             FROM tracks ORDER BY id",
        )
        .with_context(|| format!("{} is not a catalog database", path.display()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(TrackRow {
                id: row.get(0)?,
                title: row.get(1)?,
                artist: row.get(2)?,
                genre: row.get(3)?,
                tempo: row.get(4)?,
                energy_level: row.get(5)?,
                mood_tags: row.get(6)?,
                weather_suitability: row.get(7)?,
                seasonal_relevance: row.get(8)?,
                duration: row.get(9)?,
            })
        })
        .context("Cannot query tracks")?;

    let mut tracks = Vec::new();
    for row in rows {
        tracks.push(row.context("Queried track could not be read")?.into_track()?);
    }

    info!("Loaded {} tracks from {}", tracks.len(), path.display());
    Ok(Catalog::new(tracks))
}

/// Loads a catalog from either a JSON file (`.json`) or a catalog database.
///
/// # Errors
///
/// See [`Catalog::from_json_file`] and [`load_catalog`].
pub fn open_catalog(path: &Path) -> Result<Catalog> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    debug!("Opening catalog {} as {}", path.display(), if is_json { "JSON" } else { "SQLite" });
    match is_json {
        true => Catalog::from_json_file(path),
        false => load_catalog(path),
    }
}
