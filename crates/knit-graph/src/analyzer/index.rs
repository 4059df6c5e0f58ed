//! Topology index over a [`Graph`] using petgraph.
//!
//! Every distinct node id becomes one vertex. Edge endpoints that name no node
//! become *phantom* vertices: they keep the edge in the graph, so it can still
//! be traversed from a real source, but traversals never start at or descend
//! into them.

use crate::domain::Graph;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// A vertex in the topology index.
#[derive(Debug, Clone)]
pub(crate) struct Vertex {
    /// Node id this vertex stands for
    pub id: String,
    /// `false` for ids only referenced by edges
    pub present: bool,
}

/// Read-only topology view built once per analysis run.
///
/// Edge weights are positions into `Graph::edges`, so results map back to the
/// caller's edges without cloning them into the index. Edges are added in
/// input order, one per input edge.
pub(crate) struct GraphIndex {
    graph: DiGraph<Vertex, usize>,
    node_map: HashMap<String, NodeIndex>,
    starts: Vec<NodeIndex>,
}

impl GraphIndex {
    /// Build the index for `graph`.
    pub fn build(graph: &Graph) -> Self {
        let mut topology: DiGraph<Vertex, usize> =
            DiGraph::with_capacity(graph.nodes.len(), graph.edges.len());
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();
        let mut starts = Vec::new();

        // Duplicate ids collapse onto the vertex created for their first entry.
        for node in &graph.nodes {
            if !node_map.contains_key(&node.id) {
                let idx = topology.add_node(Vertex {
                    id: node.id.clone(),
                    present: true,
                });
                node_map.insert(node.id.clone(), idx);
                starts.push(idx);
            }
        }

        let mut phantoms = 0usize;
        for (position, edge) in graph.edges.iter().enumerate() {
            let mut endpoint = |id: &str| -> NodeIndex {
                if let Some(&idx) = node_map.get(id) {
                    return idx;
                }
                phantoms += 1;
                let idx = topology.add_node(Vertex {
                    id: id.to_string(),
                    present: false,
                });
                node_map.insert(id.to_string(), idx);
                idx
            };
            let source = endpoint(&edge.source);
            let target = endpoint(&edge.target);
            topology.add_edge(source, target, position);
        }

        if phantoms > 0 {
            tracing::debug!(
                phantom_count = phantoms,
                "Edges reference unknown nodes; treating them as dead ends"
            );
        }

        Self {
            graph: topology,
            node_map,
            starts,
        }
    }

    /// Real vertices in first-appearance order; the traversal roots.
    pub fn starts(&self) -> &[NodeIndex] {
        &self.starts
    }

    /// Number of vertices, phantoms included.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Whether `idx` stands for a node of the input graph.
    pub fn is_present(&self, idx: NodeIndex) -> bool {
        self.graph[idx].present
    }

    /// Node id of a vertex.
    pub fn id(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].id
    }

    /// Vertex for a node id, phantom or not.
    pub fn lookup(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    /// Outgoing edges of `idx` as `(target, edge position)`, in input order.
    ///
    /// petgraph yields adjacency most-recent-first; sorting by position
    /// restores insertion order so traversals are deterministic.
    pub fn outgoing(&self, idx: NodeIndex) -> Vec<(NodeIndex, usize)> {
        let mut edges: Vec<_> = self
            .graph
            .edges(idx)
            .map(|e| (e.target(), *e.weight()))
            .collect();
        edges.sort_by_key(|&(_, position)| position);
        edges
    }

    /// Number of outgoing edges of `idx`, including edges to phantoms.
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges(idx).count()
    }

    /// Endpoints of the edge at `position` in the input.
    pub fn endpoints(&self, position: usize) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(EdgeIndex::new(position))
    }

    /// Number of edges, equal to the number of input edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
