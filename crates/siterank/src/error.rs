//! Crate-wide error taxonomy.
//!
//! Validation happens at the API boundary before any computation; a
//! failure there aborts the whole query with no partial results. Empty
//! catalogs are never errors (they yield empty results).

use thiserror::Error;

/// Failure modes of the siting core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed boundary ring: empty, fewer than 3 distinct vertices,
    /// or not closed.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Out-of-domain caller input (negative distance thresholds,
    /// zero `k`, non-finite coordinates).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// A named region identifier did not resolve.
    #[error("boundary not found: {0}")]
    BoundaryNotFound(String),
    /// Unexpected mid-computation failure; the triggering message is
    /// preserved for the caller.
    #[error("computation failed: {0}")]
    Computation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
