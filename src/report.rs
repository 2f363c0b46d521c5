//! Plain-text rendering of scoring results for the terminal.

use crate::algorithm::ScoredTrack;
use crate::catalog::Catalog;
use crate::environment::EnvironmentalFactors;
use crate::playlist::Playlist;
use crate::simulation::SimulationReport;
use std::fmt::Write;

/// `m:ss`
#[must_use]
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn describe_conditions(factors: &EnvironmentalFactors) -> String {
    let event = factors
        .seasonal_event
        .map(|event| format!(", {event}"))
        .unwrap_or_default();
    format!(
        "{} {:.0}°F, {:02}:00 on day {}{event}",
        factors.weather, factors.temperature, factors.time_of_day, factors.day_of_week
    )
}

#[must_use]
pub fn render_mood(factors: &EnvironmentalFactors, mood_score: f64) -> String {
    format!(
        "Conditions: {}\nMood Score: {mood_score:.1}/10\n",
        describe_conditions(factors)
    )
}

#[must_use]
pub fn render_recommendations(recommendations: &[ScoredTrack<'_>]) -> String {
    if recommendations.is_empty() {
        return "No tracks in catalog.\n".to_string();
    }

    let mut out = String::new();
    for (i, scored) in recommendations.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} by {} [{}, {} BPM, energy {:.1}] (Confidence: {:.1})",
            i + 1,
            scored.track.title,
            scored.track.artist,
            scored.track.genre,
            scored.track.tempo,
            scored.track.energy_level,
            scored.confidence
        );
    }
    out
}

#[must_use]
pub fn render_playlist(factors: &EnvironmentalFactors, playlist: &Playlist) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Conditions: {}", describe_conditions(factors));
    let _ = writeln!(out, "Mood Score: {:.1}/10", playlist.mood_score);
    let _ = writeln!(out, "Weather Impact: {:.1}%", playlist.weather_impact * 100.0);
    let _ = writeln!(out, "Optimization: {}", playlist.optimization_summary.trim_end());
    let _ = writeln!(
        out,
        "Total Duration: {} ({} tracks)",
        format_duration(playlist.total_duration),
        playlist.len()
    );

    if playlist.is_empty() {
        out.push_str("\nNo track fits the requested duration.\n");
        return out;
    }

    out.push_str("\nRecommended Tracks:\n");
    for (i, entry) in playlist.entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} by {} [{}] (Confidence: {:.1})",
            i + 1,
            entry.track.title,
            entry.track.artist,
            format_duration(entry.track.duration),
            entry.confidence
        );
        let _ = writeln!(out, "   Reason: {}", entry.reason);
    }
    out
}

#[must_use]
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (i, track) in catalog.iter().enumerate() {
        let weather: Vec<&str> = track.weather_suitability.iter().map(|w| w.as_str()).collect();
        let seasons: Vec<&str> = track.seasonal_relevance.iter().map(|s| s.as_str()).collect();
        let _ = writeln!(
            out,
            "{:>3}. {} - {} ({}) {} BPM, energy {:.1}, {} | weather: {} | seasons: {} | tags: {}",
            i + 1,
            track.artist,
            track.title,
            track.genre,
            track.tempo,
            track.energy_level,
            format_duration(track.duration),
            weather.join(", "),
            seasons.join(", "),
            track.mood_tags.join(", ")
        );
    }
    let _ = writeln!(out, "{} tracks", catalog.len());
    out
}

#[must_use]
pub fn render_simulation(report: &SimulationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Simulated {} snapshots (seed {})", report.samples, report.seed);

    match &report.mood {
        Some(mood) => {
            let _ = writeln!(
                out,
                "Mood Score: mean {:.2}, std dev {:.2}, min {:.2}, max {:.2}",
                mood.mean, mood.std_deviation, mood.min, mood.max
            );
        }
        None => out.push_str("Mood Score: no samples\n"),
    }

    if !report.top_tracks.is_empty() {
        out.push_str("\nMost frequent first pick:\n");
        for tally in &report.top_tracks {
            let _ = writeln!(out, "  {:>5}  {} by {}", tally.first_places, tally.title, tally.artist);
        }
    }
    out
}
