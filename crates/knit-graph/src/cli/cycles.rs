//! `knit-graph cycles` command implementation.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use knit_graph::Analyzer;

use super::{load_config, load_graph};

/// Run the cycles command.
pub fn run(input: &Path, config: Option<&Path>) -> Result<()> {
    let analyzer = Analyzer::new(load_config(config)?);
    let analysis = analyzer.run(&load_graph(input)?);
    let cycles = &analysis.report.cycles;

    if cycles.is_empty() {
        println!("{}", "No circular dependencies detected.".green());
        return Ok(());
    }

    println!(
        "Found {} circular dependencies:",
        cycles.len().to_string().red().bold()
    );
    println!();

    for (i, cycle) in cycles.iter().enumerate() {
        println!("  {} {}:", "Cycle".yellow().bold(), i + 1);
        println!("    {}", cycle.to_string().dimmed());
    }

    Ok(())
}
