//! List command - Display all registered aliases

use anyhow::Result;
use chrono::Utc;
use chrono_humanize::{Accuracy, HumanTime, Tense};
use std::io::IsTerminal;

use crate::color;
use crate::commands::common::open_store;
use crate::store::AliasEntry;

/// List all registered aliases
///
/// Prints the count followed by one row per alias. Interactive output gets a
/// humanized modification-time column; piped output stays plain so it can be
/// consumed by scripts.
///
/// # Errors
/// Returns an error if the alias directory cannot be read
pub fn cmd_list(color_mode: color::ColorMode) -> Result<()> {
    let store = open_store()?;
    let entries = store.entries()?;

    if entries.is_empty() {
        println!("There are no registered aliases");
        return Ok(());
    }

    println!("Found {} registered aliases:", entries.len());

    let show_times = std::io::stdout().is_terminal();
    for line in format_alias_rows(&entries, show_times, color_mode) {
        println!("{line}");
    }

    Ok(())
}

/// Format one row per alias, optionally with a humanized modified column
fn format_alias_rows(
    entries: &[AliasEntry],
    show_times: bool,
    color_mode: color::ColorMode,
) -> Vec<String> {
    if !show_times {
        return entries
            .iter()
            .map(|entry| format!("- {}", entry.name))
            .collect();
    }

    let now = Utc::now();
    let name_width = entries
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            let timestamp = entry.modified.map_or_else(
                || "–".to_string(),
                |modified| {
                    let duration = now.signed_duration_since(modified);
                    HumanTime::from(duration).to_text_en(Accuracy::Rough, Tense::Past)
                },
            );

            let padding = " ".repeat(name_width - entry.name.len());
            format!(
                "- {}{padding}  {}",
                color_mode.colorize_name(&entry.name),
                color::dim(color_mode, timestamp)
            )
        })
        .collect()
}
