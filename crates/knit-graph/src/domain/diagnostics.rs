//! Fixed issue and suggestion texts attached by the analyzer.
//!
//! Renderers and exporters match on these strings, so they are part of the
//! output contract.

/// Node issue: the node lies on at least one circular dependency.
pub const PART_OF_CYCLE: &str = "Part of cycle";

/// Edge issue: the edge closes or continues a circular dependency.
pub const CIRCULAR_DEPENDENCY: &str = "Circular dependency";

/// Edge issue: no traversal from any node ever followed the edge.
pub const UNUSED_DEPENDENCY: &str = "Unused dependency";

/// Edge issue: the target stays reachable from the source without the edge.
pub const REDUNDANT_DEPENDENCY: &str = "Redundant dependency";

/// Edge suggestion paired with [`UNUSED_DEPENDENCY`].
pub const REMOVE_DEPENDENCY: &str = "Consider removing this dependency.";

/// Edge suggestion paired with [`REDUNDANT_DEPENDENCY`].
pub const ALREADY_REACHABLE: &str = "Dependency is already reachable through another path.";

/// Node suggestion for a node with `count` outgoing dependencies.
#[must_use]
pub fn consider_grouping(count: usize) -> String {
    format!("Consider grouping {count} dependencies.")
}
