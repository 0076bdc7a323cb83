//! Path search and trust analysis.
//!
//! - [`classify`]: untrusted counting and path security
//! - [`pathfinder`]: route with at most one untrusted node
//! - [`enumerate`]: exhaustive simple-path enumeration
//! - [`critical`]: critical edge analysis

pub mod classify;
pub mod pathfinder;
pub mod enumerate;
pub mod critical;

use crate::store::GraphStore;
use crate::types::NodeId;

/// Error type for strict queries.
///
/// The default query functions absorb these conditions into empty results;
/// the `try_*` variants surface them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Endpoint is not in the graph.
    #[error("Endpoint not found: {0}")]
    EndpointNotFound(NodeId),
    /// Endpoint is in the graph but untrusted.
    #[error("Endpoint is untrusted: {0}")]
    EndpointUntrusted(NodeId),
    /// A policy bound stopped enumeration before every path was seen.
    #[error("Path enumeration truncated (max_paths: {max_paths:?}, max_depth: {max_depth:?})")]
    PathLimitExceeded {
        /// Configured path ceiling.
        max_paths: Option<usize>,
        /// Configured depth ceiling.
        max_depth: Option<usize>,
    },
}

/// Both endpoints must be present and trusted.
pub(crate) fn check_endpoints<S: GraphStore + ?Sized>(
    store: &S,
    source: NodeId,
    dest: NodeId,
) -> Result<(), QueryError> {
    for id in [source, dest] {
        match store.is_trusted(&id) {
            None => return Err(QueryError::EndpointNotFound(id)),
            Some(false) => return Err(QueryError::EndpointUntrusted(id)),
            Some(true) => {}
        }
    }
    Ok(())
}

pub use classify::{count_untrusted, is_secure, is_semi_trusted, path_edges};
pub use pathfinder::{find_path, try_find_path};
pub use enumerate::{enumerate_paths, PathEnumerator, PathSet, EnumerationOutcome};
pub use critical::{critical_edges, CriticalEdgeAnalyzer, CriticalEdgeReport, Fallback};
