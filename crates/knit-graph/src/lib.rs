//! Knit Graph - dependency graph analysis.
//!
//! Takes a dependency graph (nodes are modules or services, edges are
//! "depends on" relations) and returns it enriched with diagnostics:
//! which nodes and edges sit on circular dependencies, which edges are never
//! traversed, a severity per node, and grid coordinates for nodes that have
//! no position yet.
//!
//! ```
//! use knit_graph::{analyze, Edge, Graph, Node, Severity};
//!
//! let graph = Graph::new(
//!     vec![Node::new("a", "Service A"), Node::new("b", "Service B")],
//!     vec![Edge::new("a_b", "a", "b"), Edge::new("b_a", "b", "a")],
//! );
//!
//! let enriched = analyze(&graph);
//! assert!(enriched.nodes.iter().all(|n| n.severity == Severity::Critical));
//! ```

#![forbid(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod report;

pub use analyzer::{Analysis, Analyzer, analyze};
pub use config::{AnalyzerConfig, LayoutConfig, LayoutOrigin, ThicknessConfig};
pub use domain::{Edge, Graph, Node, Severity};
pub use error::{Error, Result};
pub use report::{AnalysisReport, Cycle};
