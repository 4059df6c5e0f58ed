//! CLI command implementations.

pub mod analyze;
pub mod cycles;
pub mod display;
pub mod summary;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use knit_graph::{AnalyzerConfig, Graph};

/// Read a graph from a JSON file, or from stdin when `input` is `-`.
pub fn load_graph(input: &Path) -> Result<Graph> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read graph from stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed to read graph file {}", input.display()))?
    };

    Graph::from_json(&content).with_context(|| format!("{} is not a valid graph", input.display()))
}

/// Load the analyzer configuration, falling back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    match path {
        Some(path) => AnalyzerConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => Ok(AnalyzerConfig::default()),
    }
}
