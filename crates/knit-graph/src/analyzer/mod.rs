//! The graph analyzer.
//!
//! Analysis runs in three phases over a petgraph index of the input:
//!
//! | Phase | Module | Algorithm |
//! |-------|--------|-----------|
//! | Cycle detection | `cycles` | Per-start iterative DFS with a path stack |
//! | Edge necessity | `reachability` | Per-start BFS over outgoing edges |
//! | Enrichment | `enrich`, `layout` | Severity, issues, suggestions, thickness, grid positions |
//!
//! The analyzer is a pure function of its input: it holds no state between
//! runs, never mutates the graph it is given, and never fails. Cycles,
//! dangling references and isolated nodes are reported, not rejected.

mod cycles;
mod enrich;
mod index;
mod layout;
mod reachability;

use crate::config::AnalyzerConfig;
use crate::domain::Graph;
use crate::report::AnalysisReport;
use enrich::{CycleMembership, Findings};
use index::GraphIndex;
use std::collections::HashSet;

/// Result of [`Analyzer::run`]: the enriched graph plus a summary.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The input graph with every derived field recomputed
    pub graph: Graph,
    /// Aggregated findings
    pub report: AnalysisReport,
}

/// Dependency graph analyzer.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with the given configuration.
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Return an enriched copy of `graph`.
    ///
    /// Node and edge order, and the set of ids, are the same as in the input.
    #[must_use]
    pub fn analyze(&self, graph: &Graph) -> Graph {
        self.enrich(graph).0
    }

    /// Analyze `graph` and summarize the findings.
    #[must_use]
    pub fn run(&self, graph: &Graph) -> Analysis {
        let (enriched, index, findings) = self.enrich(graph);

        let unique = cycles::unique_cycles(&index, &findings.cycles);
        let dangling = dangling_edges(graph, &index);
        let report = AnalysisReport::collect(&enriched, unique, dangling);

        tracing::info!(
            nodes = report.node_count,
            edges = report.edge_count,
            cycles = report.cycles.len(),
            unused_edges = report.unused_edges.len(),
            redundant_edges = report.redundant_edges.len(),
            "Analysis complete"
        );

        Analysis {
            graph: enriched,
            report,
        }
    }

    fn enrich(&self, graph: &Graph) -> (Graph, GraphIndex, Findings) {
        tracing::debug!(
            node_count = graph.nodes.len(),
            edge_count = graph.edges.len(),
            "Starting dependency analysis"
        );

        let index = GraphIndex::build(graph);

        let findings = Findings {
            cycles: cycles::find_cycles(&index),
            necessary: reachability::necessary_edges(&index),
            redundant: if self.config.detect_redundant_edges {
                reachability::redundant_edges(&index)
            } else {
                HashSet::new()
            },
        };

        let membership = CycleMembership::from_cycles(&findings.cycles);
        let mut nodes = enrich::enrich_nodes(graph, &index, &membership, &self.config);
        let edges = enrich::enrich_edges(graph, &index, &membership, &findings, &self.config);
        layout::apply_default_layout(&mut nodes, &self.config.layout);

        (Graph { nodes, edges }, index, findings)
    }
}

/// Analyze `graph` with the default configuration.
#[must_use]
pub fn analyze(graph: &Graph) -> Graph {
    Analyzer::default().analyze(graph)
}

/// Ids of edges with an endpoint that names no node.
fn dangling_edges(graph: &Graph, index: &GraphIndex) -> Vec<String> {
    let known = |id: &str| index.lookup(id).is_some_and(|idx| index.is_present(idx));
    graph
        .edges
        .iter()
        .filter(|e| !known(&e.source) || !known(&e.target))
        .map(|e| e.id.clone())
        .collect()
}
