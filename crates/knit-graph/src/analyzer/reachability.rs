//! Edge necessity and redundancy.
//!
//! Necessity: a breadth-first traversal is started from every real node and
//! every edge it follows is recorded. Since every real node is a root, an edge
//! ends up necessary exactly when its source is a real node; edges hanging off
//! an unknown source are never followed.
//!
//! Redundancy is opt-in: an edge `u → v` is redundant when `v` is still
//! reachable from `u` after removing that single edge.

use super::index::GraphIndex;
use petgraph::graph::NodeIndex;
use std::collections::{HashSet, VecDeque};

/// Positions of all edges followed by some traversal.
pub(crate) fn necessary_edges(index: &GraphIndex) -> HashSet<usize> {
    let mut necessary = HashSet::new();

    for &start in index.starts() {
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut queue: VecDeque<NodeIndex> = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            for (target, position) in index.outgoing(current) {
                necessary.insert(position);
                if index.is_present(target) && !visited.contains(&target) {
                    queue.push_back(target);
                }
            }
        }
    }

    tracing::debug!(
        edge_count = index.edge_count(),
        necessary_count = necessary.len(),
        "Edge necessity computed"
    );

    necessary
}

/// Positions of edges whose target is reachable from their source by another path.
///
/// Self-loops and edges touching phantom vertices are never redundant.
pub(crate) fn redundant_edges(index: &GraphIndex) -> HashSet<usize> {
    let mut redundant = HashSet::new();

    for position in 0..index.edge_count() {
        let Some((source, target)) = index.endpoints(position) else {
            continue;
        };
        if source == target || !index.is_present(source) || !index.is_present(target) {
            continue;
        }
        if reachable_without(index, source, target, position) {
            redundant.insert(position);
        }
    }

    tracing::debug!(redundant_count = redundant.len(), "Redundant edges computed");

    redundant
}

/// BFS from `from` looking for `to`, ignoring the edge at `skipped`.
fn reachable_without(index: &GraphIndex, from: NodeIndex, to: NodeIndex, skipped: usize) -> bool {
    let mut visited: HashSet<NodeIndex> = HashSet::from([from]);
    let mut queue: VecDeque<NodeIndex> = VecDeque::from([from]);

    while let Some(current) = queue.pop_front() {
        for (next, position) in index.outgoing(current) {
            if position == skipped || !index.is_present(next) {
                continue;
            }
            if next == to {
                return true;
            }
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    false
}
