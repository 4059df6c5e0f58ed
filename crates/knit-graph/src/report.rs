//! Summary of one analysis run.
//!
//! The enriched graph carries diagnostics element by element; the report
//! gathers them into lists that are convenient for logs, the CLI and tests.

use crate::domain::diagnostics::{CIRCULAR_DEPENDENCY, REDUNDANT_DEPENDENCY, UNUSED_DEPENDENCY};
use crate::domain::{Graph, Severity};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A circular dependency, listed once regardless of how often it was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle {
    /// Node ids along the loop, smallest id first, without the closing repeat
    pub nodes: Vec<String>,
}

impl Cycle {
    /// Number of edges in the loop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the cycle has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the loop is a single self-referencing node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.nodes.len() == 1
    }
}

impl fmt::Display for Cycle {
    /// Formats as `a → b → c → a`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.nodes.first() else {
            return Ok(());
        };
        for id in &self.nodes {
            write!(f, "{id} → ")?;
        }
        write!(f, "{first}")
    }
}

/// Aggregated findings of an analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Number of node entries analyzed
    pub node_count: usize,
    /// Number of edges analyzed
    pub edge_count: usize,
    /// Distinct circular dependencies
    pub cycles: Vec<Cycle>,
    /// Ids of nodes with `critical` severity
    pub critical_nodes: Vec<String>,
    /// Ids of nodes with `warning` severity
    pub warning_nodes: Vec<String>,
    /// Ids of edges on a circular dependency
    pub circular_edges: Vec<String>,
    /// Ids of edges never traversed
    pub unused_edges: Vec<String>,
    /// Ids of edges whose target is reachable another way
    pub redundant_edges: Vec<String>,
    /// Ids of edges referencing an unknown node
    pub dangling_edges: Vec<String>,
}

impl AnalysisReport {
    /// Build the report from an enriched graph.
    pub(crate) fn collect(
        enriched: &Graph,
        cycles: Vec<Vec<String>>,
        dangling_edges: Vec<String>,
    ) -> Self {
        let nodes_with = |severity: Severity| {
            dedup_ids(
                enriched
                    .nodes
                    .iter()
                    .filter(|n| n.severity == severity)
                    .map(|n| n.id.as_str()),
            )
        };
        let edges_with = |issue: &str| {
            dedup_ids(
                enriched
                    .edges
                    .iter()
                    .filter(|e| e.has_issue(issue))
                    .map(|e| e.id.as_str()),
            )
        };

        Self {
            node_count: enriched.nodes.len(),
            edge_count: enriched.edges.len(),
            cycles: cycles.into_iter().map(|nodes| Cycle { nodes }).collect(),
            critical_nodes: nodes_with(Severity::Critical),
            warning_nodes: nodes_with(Severity::Warning),
            circular_edges: edges_with(CIRCULAR_DEPENDENCY),
            unused_edges: edges_with(UNUSED_DEPENDENCY),
            redundant_edges: edges_with(REDUNDANT_DEPENDENCY),
            dangling_edges,
        }
    }

    /// True when no cycle, unused edge or redundant edge was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.cycles.is_empty() && self.unused_edges.is_empty() && self.redundant_edges.is_empty()
    }
}

/// Collect ids in first-seen order, dropping repeats from duplicate entries.
fn dedup_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}
