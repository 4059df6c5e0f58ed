//! `knit-graph analyze` command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use knit_graph::{Analyzer, LayoutOrigin};

use super::{load_config, load_graph};

/// Run the analyze command.
pub fn run(
    input: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    upload: bool,
    compact: bool,
) -> Result<()> {
    let mut config = load_config(config)?;
    if upload {
        config.layout.origin = LayoutOrigin::UPLOAD;
    }

    let graph = load_graph(input)?;
    let enriched = Analyzer::new(config).analyze(&graph);

    let json = if compact {
        enriched.to_json()?
    } else {
        enriched.to_json_pretty()?
    };

    match output {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote enriched graph");
        }
        None => println!("{json}"),
    }

    Ok(())
}
