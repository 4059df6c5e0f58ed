//! Attach diagnostics to nodes and edges.

use super::cycles::CyclePath;
use super::index::GraphIndex;
use crate::config::AnalyzerConfig;
use crate::domain::diagnostics::{
    ALREADY_REACHABLE, CIRCULAR_DEPENDENCY, PART_OF_CYCLE, REDUNDANT_DEPENDENCY,
    REMOVE_DEPENDENCY, UNUSED_DEPENDENCY, consider_grouping,
};
use crate::domain::{Edge, Graph, Node, Severity};
use petgraph::graph::NodeIndex;
use std::collections::HashSet;

/// Raw results of the traversal phases.
pub(crate) struct Findings {
    /// Every cycle found, duplicates included
    pub cycles: Vec<CyclePath>,
    /// Positions of edges followed by some traversal
    pub necessary: HashSet<usize>,
    /// Positions of edges with an alternate path; empty unless enabled
    pub redundant: HashSet<usize>,
}

/// Cycle membership derived from [`Findings::cycles`].
pub(crate) struct CycleMembership {
    nodes: HashSet<NodeIndex>,
    steps: HashSet<(NodeIndex, NodeIndex)>,
}

impl CycleMembership {
    pub fn from_cycles(cycles: &[CyclePath]) -> Self {
        let mut nodes = HashSet::new();
        let mut steps = HashSet::new();
        for cycle in cycles {
            nodes.extend(cycle.iter().copied());
            steps.extend(cycle.windows(2).map(|w| (w[0], w[1])));
        }
        Self { nodes, steps }
    }

    pub fn contains_node(&self, node: NodeIndex) -> bool {
        self.nodes.contains(&node)
    }

    /// Whether `source → target` appears as consecutive entries of some cycle.
    pub fn contains_step(&self, source: NodeIndex, target: NodeIndex) -> bool {
        self.steps.contains(&(source, target))
    }
}

/// Rebuild every node with recomputed issues, suggestions and severity.
///
/// Coordinates are copied unchanged; layout fills them in afterwards.
pub(crate) fn enrich_nodes(
    graph: &Graph,
    index: &GraphIndex,
    membership: &CycleMembership,
    config: &AnalyzerConfig,
) -> Vec<Node> {
    graph
        .nodes
        .iter()
        .map(|node| {
            let (in_cycle, out_degree) = index
                .lookup(&node.id)
                .map_or((false, 0), |idx| {
                    (membership.contains_node(idx), index.out_degree(idx))
                });
            let crowded = out_degree > config.grouping_threshold;

            let severity = if in_cycle {
                Severity::Critical
            } else if crowded {
                Severity::Warning
            } else {
                Severity::Default
            };

            Node {
                issues: if in_cycle {
                    vec![PART_OF_CYCLE.to_string()]
                } else {
                    Vec::new()
                },
                suggestions: if crowded {
                    vec![consider_grouping(out_degree)]
                } else {
                    Vec::new()
                },
                severity,
                ..node.clone()
            }
        })
        .collect()
}

/// Rebuild every edge with recomputed issues, suggestions and thickness.
pub(crate) fn enrich_edges(
    graph: &Graph,
    index: &GraphIndex,
    membership: &CycleMembership,
    findings: &Findings,
    config: &AnalyzerConfig,
) -> Vec<Edge> {
    // Necessity is keyed by edge id: an id counts as used if any edge
    // carrying it was followed.
    let necessary_ids: HashSet<&str> = findings
        .necessary
        .iter()
        .filter_map(|&position| graph.edges.get(position))
        .map(|edge| edge.id.as_str())
        .collect();

    graph
        .edges
        .iter()
        .enumerate()
        .map(|(position, edge)| {
            let circular = index
                .endpoints(position)
                .is_some_and(|(source, target)| membership.contains_step(source, target));
            let unused = !necessary_ids.contains(edge.id.as_str());
            let redundant = findings.redundant.contains(&position);

            let mut issues = Vec::new();
            let mut suggestions = Vec::new();
            if circular {
                issues.push(CIRCULAR_DEPENDENCY.to_string());
            }
            if unused {
                issues.push(UNUSED_DEPENDENCY.to_string());
                suggestions.push(REMOVE_DEPENDENCY.to_string());
            }
            if redundant {
                issues.push(REDUNDANT_DEPENDENCY.to_string());
                suggestions.push(ALREADY_REACHABLE.to_string());
            }

            Edge {
                issues,
                suggestions,
                thickness: Some(edge_thickness(edge.thickness, circular, config)),
                ..edge.clone()
            }
        })
        .collect()
}

/// Circular edges are drawn thick. Otherwise a caller-supplied thickness wins,
/// unless it is the cycle thickness left over from an earlier run.
#[allow(clippy::float_cmp)]
fn edge_thickness(current: Option<f64>, circular: bool, config: &AnalyzerConfig) -> f64 {
    let thickness = &config.thickness;
    if circular {
        return thickness.cycle;
    }
    match current {
        Some(value) if value != thickness.cycle => value,
        _ => thickness.default,
    }
}
