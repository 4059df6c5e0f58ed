//! `knit-graph summary` command implementation.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use knit_graph::Analyzer;

use super::display::print_ids;
use super::{load_config, load_graph};

/// Run the summary command.
pub fn run(input: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let analyzer = Analyzer::new(load_config(config)?);
    let report = analyzer.run(&load_graph(input)?).report;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Dependency Graph Summary".bold());
    println!();
    println!("  Nodes:  {}", report.node_count);
    println!("  Edges:  {}", report.edge_count);
    println!("  Cycles: {}", report.cycles.len());
    println!();

    if report.is_clean() && report.warning_nodes.is_empty() && report.dangling_edges.is_empty() {
        println!("{}", "No problems found.".green());
        return Ok(());
    }

    print_ids("Critical nodes", &report.critical_nodes);
    print_ids("Warning nodes", &report.warning_nodes);
    print_ids("Circular edges", &report.circular_edges);
    print_ids("Unused edges", &report.unused_edges);
    print_ids("Redundant edges", &report.redundant_edges);
    print_ids("Dangling edges", &report.dangling_edges);

    Ok(())
}
