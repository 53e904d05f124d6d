//! Logs command - show recent event-log entries

use anyhow::{Context, Result};
use chrono::DateTime;

use tally_core::services::{EntryPoint, LoggingService};

use super::get_tally_dir;
use crate::output;

pub fn run(limit: usize, json: bool) -> Result<()> {
    let tally_dir = get_tally_dir();
    let logger = LoggingService::new(&tally_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION"))
        .context("Failed to open event log")?;

    let entries = logger.get_recent(limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No events logged yet.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Event", "Command", "Error"]);
    for entry in &entries {
        let time = DateTime::from_timestamp_millis(entry.timestamp)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| entry.timestamp.to_string());
        table.add_row(vec![
            time,
            entry.event.clone(),
            entry.command.clone().unwrap_or_default(),
            entry.error_message.clone().unwrap_or_default(),
        ]);
    }
    println!("{}", table);

    Ok(())
}
