//! `slotwise` CLI — schedule a directory of event description files.
//!
//! Every regular file under the directory is one event source: the file
//! stem is the event name, the first line is the description, and the
//! file's modification time anchors relative phrases like "next friday".
//!
//! ## Usage
//!
//! ```sh
//! # Print the schedule for the descriptions under ./events
//! slotwise events
//!
//! # Expand recurring appointments 14 days out instead of 60
//! slotwise events --horizon-days 14
//!
//! # Machine-readable output
//! slotwise events --json
//!
//! # Compute the schedule as of a specific moment
//! slotwise events --now 2026-09-01T08:00:00
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Local, NaiveDateTime};
use clap::Parser;
use slotwise_core::{get_schedule, SourceEntry};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "slotwise",
    version,
    about = "Turn a directory of event descriptions into a conflict-free schedule"
)]
struct Cli {
    /// Directory of event description files (walked recursively)
    directory: PathBuf,

    /// How many days out to expand recurring appointments
    #[arg(long, default_value_t = slotwise_core::DEFAULT_HORIZON_DAYS)]
    horizon_days: i64,

    /// Emit the schedule as a JSON array instead of text lines
    #[arg(long)]
    json: bool,

    /// Treat this moment as "now" instead of the wall clock
    /// (format: 2026-09-01T08:00:00)
    #[arg(long, value_parser = parse_now)]
    now: Option<NaiveDateTime>,
}

fn parse_now(value: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .map_err(|e| format!("invalid datetime {:?}: {}", value, e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let now = cli.now.unwrap_or_else(|| Local::now().naive_local());
    let horizon = now + Duration::days(cli.horizon_days);

    let mut entries = Vec::new();
    collect_entries(&cli.directory, &mut entries)?;
    // Directory iteration order is platform-dependent; sorting by name
    // keeps same-deadline tie-breaks reproducible.
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let schedule = get_schedule(&entries, Some(horizon), now)
        .with_context(|| format!("Failed to schedule {}", cli.directory.display()))?;

    if cli.json {
        let rows: Vec<_> = schedule.iter().filter_map(|e| e.as_scheduled()).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for event in &schedule {
            println!("{}", event);
        }
    }

    Ok(())
}

/// Recursively list (name, first line, mtime) for every file under `dir`.
fn collect_entries(dir: &Path, entries: &mut Vec<SourceEntry>) -> Result<()> {
    let listing =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    for item in listing {
        let item = item.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = item.path();

        if path.is_dir() {
            collect_entries(&path, entries)?;
            continue;
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let description = contents.lines().next().unwrap_or("").trim_end().to_string();

        let modified = item
            .metadata()
            .and_then(|m| m.modified())
            .with_context(|| format!("Failed to stat file: {}", path.display()))?;
        let reference: DateTime<Local> = modified.into();

        entries.push(SourceEntry::new(name, description, reference.naive_local()));
    }

    Ok(())
}
