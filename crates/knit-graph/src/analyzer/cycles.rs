//! Cycle detection.
//!
//! A depth-first walk is started from every real node in input order, each
//! with its own visited set. The walk keeps the current path on an explicit
//! stack; reaching a node that is already on the path records the stretch of
//! the path from that node onwards, closed by repeating the node. Vertices
//! finished earlier in the same walk are not descended into again, and
//! phantom vertices are never descended into at all.
//!
//! The same cycle is usually found once per member node. Enrichment only needs
//! membership, so duplicates are kept; [`unique_cycles`] collapses them for
//! reporting.

use super::index::GraphIndex;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;

/// A closed cycle: the first and last vertex are the same.
pub(crate) type CyclePath = Vec<NodeIndex>;

/// One level of the explicit DFS stack.
struct Frame {
    node: NodeIndex,
    successors: Vec<(NodeIndex, usize)>,
    cursor: usize,
}

/// Walk state for a single start node.
struct Walk<'a> {
    index: &'a GraphIndex,
    visited: HashSet<NodeIndex>,
    path: Vec<NodeIndex>,
    on_path: HashSet<NodeIndex>,
    frames: Vec<Frame>,
}

impl<'a> Walk<'a> {
    fn new(index: &'a GraphIndex) -> Self {
        Self {
            index,
            visited: HashSet::new(),
            path: Vec::new(),
            on_path: HashSet::new(),
            frames: Vec::new(),
        }
    }

    fn enter(&mut self, node: NodeIndex) {
        self.visited.insert(node);
        self.path.push(node);
        self.on_path.insert(node);
        self.frames.push(Frame {
            node,
            successors: self.index.outgoing(node),
            cursor: 0,
        });
    }

    fn leave(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.on_path.remove(&frame.node);
            self.path.pop();
        }
    }

    /// Run the walk from `start`, appending every cycle met to `cycles`.
    fn run(mut self, start: NodeIndex, cycles: &mut Vec<CyclePath>) {
        self.enter(start);

        while let Some(frame) = self.frames.last_mut() {
            let Some(&(next, _)) = frame.successors.get(frame.cursor) else {
                self.leave();
                continue;
            };
            frame.cursor += 1;

            if self.on_path.contains(&next) {
                // Back edge: the path from `next` to the top closes a loop.
                if let Some(pos) = self.path.iter().position(|&n| n == next) {
                    let mut cycle = self.path[pos..].to_vec();
                    cycle.push(next);
                    cycles.push(cycle);
                }
            } else if !self.visited.contains(&next) && self.index.is_present(next) {
                self.enter(next);
            }
        }
    }
}

/// Find every cycle reachable from every real node.
pub(crate) fn find_cycles(index: &GraphIndex) -> Vec<CyclePath> {
    let mut cycles = Vec::new();

    for &start in index.starts() {
        Walk::new(index).run(start, &mut cycles);
    }

    tracing::debug!(
        start_count = index.starts().len(),
        vertex_count = index.vertex_count(),
        raw_cycles = cycles.len(),
        "Cycle detection complete"
    );

    cycles
}

/// Collapse cycles found from different start nodes into one entry each.
///
/// Cycles are returned open (without the closing repeat) and rotated so the
/// smallest id comes first. Direction is kept: A→B→C→A and A→C→B→A are
/// distinct cycles in a directed graph.
pub(crate) fn unique_cycles(index: &GraphIndex, cycles: &[CyclePath]) -> Vec<Vec<String>> {
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut unique = Vec::new();

    for cycle in cycles {
        let Some((_, open)) = cycle.split_last() else {
            continue;
        };
        let ids: Vec<String> = open.iter().map(|&n| index.id(n).to_string()).collect();
        let normalized = normalize_cycle(&ids);

        if seen.insert(normalized.clone()) {
            unique.push(normalized);
        }
    }

    unique
}

/// Rotate an open cycle so its smallest id is first.
fn normalize_cycle(cycle: &[String]) -> Vec<String> {
    let min_idx = cycle
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map_or(0, |(idx, _)| idx);

    let mut normalized = Vec::with_capacity(cycle.len());
    normalized.extend_from_slice(&cycle[min_idx..]);
    normalized.extend_from_slice(&cycle[..min_idx]);
    normalized
}
