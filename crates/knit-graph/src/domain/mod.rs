//! Domain types for dependency graphs.
//!
//! These are the values exchanged with the outside world: a loader produces a
//! [`Graph`], the analyzer returns an enriched copy, and a renderer or exporter
//! consumes it. Fields the analyzer derives (`issues`, `suggestions`,
//! `severity`, `thickness`) are optional on input so that partially specified
//! graphs decode cleanly.

pub mod diagnostics;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label given to edges that arrive without one.
pub const DEFAULT_EDGE_LABEL: &str = "depends on";

/// Coarse classification surfaced to prioritize attention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Nothing notable
    #[default]
    Default,

    /// Too many outgoing dependencies
    Warning,

    /// Participates in a circular dependency
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// A vertex of the dependency graph: a module or service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier, the identity key of the node
    pub id: String,

    /// Display name
    #[serde(default)]
    pub label: String,

    /// Horizontal position; `None` until laid out or placed by the user
    #[serde(default)]
    pub x: Option<f64>,

    /// Vertical position; `None` until laid out or placed by the user
    #[serde(default)]
    pub y: Option<f64>,

    /// Problems found on this node (derived)
    #[serde(default)]
    pub issues: Vec<String>,

    /// Suggested improvements (derived)
    #[serde(default)]
    pub suggestions: Vec<String>,

    /// Visual severity level (derived)
    #[serde(default)]
    pub severity: Severity,
}

impl Node {
    /// Create an unpositioned node with no diagnostics.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x: None,
            y: None,
            issues: Vec::new(),
            suggestions: Vec::new(),
            severity: Severity::Default,
        }
    }

    /// Set an explicit position.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Whether both coordinates are set.
    #[must_use]
    pub fn is_positioned(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }
}

/// A directed "depends on" relation from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier
    pub id: String,

    /// ID of the depending node
    pub source: String,

    /// ID of the node depended upon
    pub target: String,

    /// Display label
    #[serde(default = "default_edge_label")]
    pub label: String,

    /// Problems found on this edge (derived)
    #[serde(default)]
    pub issues: Vec<String>,

    /// Suggested improvements (derived)
    #[serde(default)]
    pub suggestions: Vec<String>,

    /// Visual thickness; `None` means the configured default
    #[serde(default)]
    pub thickness: Option<f64>,
}

fn default_edge_label() -> String {
    DEFAULT_EDGE_LABEL.to_string()
}

impl Edge {
    /// Create an edge with the default label and no diagnostics.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: default_edge_label(),
            issues: Vec::new(),
            suggestions: Vec::new(),
            thickness: None,
        }
    }

    /// Whether this edge points back at its own source.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Whether `issue` has been recorded on this edge.
    #[must_use]
    pub fn has_issue(&self, issue: &str) -> bool {
        self.issues.iter().any(|i| i == issue)
    }
}

/// The exchanged value: an ordered list of nodes and an ordered list of edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes in input order
    #[serde(default)]
    pub nodes: Vec<Node>,

    /// Edges in input order
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph from its parts.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Decode a graph from JSON.
    ///
    /// Anything that is not shaped like a graph is rejected here, before it
    /// reaches the analyzer.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the graph as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encode the graph as single-line JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Find a node by id. With duplicate ids the last entry wins.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().rev().find(|n| n.id == id)
    }

    /// Find an edge by id.
    #[must_use]
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }
}
