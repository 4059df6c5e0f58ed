//! Common display utilities for CLI commands.

use colored::Colorize;

const MAX_DISPLAY_ITEMS: usize = 10;

/// Display a titled list of ids with optional truncation.
///
/// Shows up to `MAX_DISPLAY_ITEMS` ids with bullet points. If there are more,
/// shows "... and N more". Empty lists print nothing.
pub fn print_ids(title: &str, ids: &[String]) {
    if ids.is_empty() {
        return;
    }

    println!("  {} ({}):", title.white().bold(), ids.len());
    for id in ids.iter().take(MAX_DISPLAY_ITEMS) {
        println!("    {} {}", "•".dimmed(), id);
    }

    if ids.len() > MAX_DISPLAY_ITEMS {
        println!(
            "    {} ... and {} more",
            "•".dimmed(),
            ids.len() - MAX_DISPLAY_ITEMS
        );
    }
}
