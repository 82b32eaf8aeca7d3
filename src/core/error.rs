//! Unified error handling for RouteGraph
//!
//! All fallible operations return [`GraphResult`]. Failures are reported
//! synchronously at the offending call; there is no retry or
//! partial-failure concept since every operation is pure and deterministic.
//! Unreachability of a destination is a valid domain outcome carried as
//! data (see [`crate::services::algorithm::Route`]), never an error.

use thiserror::Error;

/// Unified error type for graph construction, queries and the CLI driver.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Malformed construction input: zero vertex count, out-of-range edge
    /// endpoint, negative weight, or an invalid solve source.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Read query against an invalid vertex index.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Malformed graph or config text input.
    #[error("parse error: {0}")]
    Parse(String),

    /// Result rendering failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Unified result type.
pub type GraphResult<T> = Result<T, GraphError>;
