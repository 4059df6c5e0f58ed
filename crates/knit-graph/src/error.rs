//! Error types for knit-graph operations.
//!
//! The analysis itself never fails: cycles, dangling references and isolated
//! nodes are what it reports, not reasons to reject a graph. Errors only arise
//! at the edges of the crate, when reading configuration or decoding a graph
//! that is not shaped like one.

use std::io;
use thiserror::Error;

/// The error type for knit-graph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be decoded as (or encoded from) a graph.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized Result type for knit-graph operations.
pub type Result<T> = std::result::Result<T, Error>;
