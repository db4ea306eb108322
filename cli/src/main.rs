//! Event Split CLI
//!
//! Usage:
//!
//! ```text
//! event-split summary <snapshot.json>       chat summary of who owes what
//! event-split report <snapshot.json>        printable table
//! event-split result <snapshot.json>        raw calculation result as JSON
//! event-split share <snapshot.json> [--read-only]
//! event-split open <share-url>              summary of a shared event
//! event-split saturdays [year]              season Saturdays (April–September)
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

use chrono::Datelike;
use event_split_core::{
    format_long_date, render_report, season_saturdays, summary_message, AccessMode, EventSnapshot,
    ShareLink,
};
use std::error::Error;
use std::fs;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: event-split <summary|report|result|share|open|saturdays> [args]";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).ok_or(USAGE)?;

    match command {
        "summary" => {
            let snapshot = read_snapshot(args.get(1))?;
            let result = snapshot.compute();
            println!("{}", summary_message(&snapshot.config, &snapshot.attendees, &result));
        }
        "report" => {
            let snapshot = read_snapshot(args.get(1))?;
            let result = snapshot.compute();
            println!(
                "{}",
                render_report(&snapshot.config, &snapshot.expenses, &snapshot.attendees, &result)
            );
        }
        "result" => {
            let snapshot = read_snapshot(args.get(1))?;
            println!("{}", serde_json::to_string_pretty(&snapshot.compute())?);
        }
        "share" => {
            let snapshot = read_snapshot(args.get(1))?;
            let access = if args.iter().any(|a| a == "--read-only") {
                AccessMode::ReadOnly
            } else {
                AccessMode::Edit
            };
            println!("{}", ShareLink::from_snapshot(&snapshot, access)?.to_url_suffix());
        }
        "open" => {
            let url = args.get(1).ok_or(USAGE)?;
            let link = ShareLink::parse(url)?;
            let snapshot = link.snapshot()?;
            tracing::info!(access = ?link.access, "Opened shared event");
            let result = snapshot.compute();
            println!("{}", summary_message(&snapshot.config, &snapshot.attendees, &result));
        }
        "saturdays" => {
            let year = match args.get(1) {
                Some(raw) => raw.parse::<i32>()?,
                None => chrono::Local::now().year(),
            };
            for date in season_saturdays(year) {
                println!("{}  {}", date, format_long_date(date));
            }
        }
        other => {
            tracing::error!(command = other, "Unknown command");
            return Err(USAGE.into());
        }
    }

    Ok(())
}

/// Read a host-exported snapshot and reject it before computing if invalid
fn read_snapshot(path: Option<&String>) -> Result<EventSnapshot, Box<dyn Error>> {
    let path = path.ok_or(USAGE)?;
    let snapshot: EventSnapshot = serde_json::from_str(&fs::read_to_string(path)?)?;
    snapshot.validate()?;
    tracing::info!(
        path = %path,
        expenses = snapshot.expenses.len(),
        attendees = snapshot.attendees.len(),
        "Snapshot read"
    );
    Ok(snapshot)
}
