//! # courier-trust
//!
//! Trust-aware routing analysis for courier networks.
//!
//! A courier network is an undirected simple graph whose nodes are either
//! trusted or untrusted. The crate answers two questions:
//!
//! > Can a message travel from trusted `s` to trusted `t` through at most
//! > **one** untrusted node?
//!
//! > Which trust-boundary edges are **load-bearing**, in that cutting one
//! > leaves only routes with two untrusted nodes in a row, or none at all?
//!
//! ## Architecture
//!
//! ```text
//! InMemoryGraphStore ──► GraphStore (read-only view)
//!                             │
//!          ┌──────────────────┼───────────────────┐
//!          ▼                  ▼                   ▼
//!     find_path        PathEnumerator ──► CriticalEdgeAnalyzer
//!   (≤ 1 untrusted)     (simple paths)     (+ classify: is_secure)
//!                             ▲
//!                        SearchPolicy (bounds)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Node iteration and neighbor order are ascending by `NodeId`
//! - Edges are unordered pairs stored canonically (low, high)
//! - Same graph + same endpoints + same policy → identical report fingerprint
//!
//! ## Invalid input
//!
//! Absent or untrusted endpoints yield empty results (`None`, empty set).
//! The `try_*` variants report them as [`QueryError`] instead.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod policy;
pub mod store;
pub mod search;
pub mod analysis;
pub mod canonical;
pub mod demo;

// Re-exports
pub use types::{NodeId, Node, Edge, Path};
pub use policy::{SearchPolicy, PolicyError};
pub use store::{GraphStore, InMemoryGraphStore};
pub use search::{
    QueryError,
    count_untrusted, is_secure, is_semi_trusted, path_edges,
    find_path, try_find_path,
    enumerate_paths, PathEnumerator, PathSet, EnumerationOutcome,
    critical_edges, CriticalEdgeAnalyzer, CriticalEdgeReport, Fallback,
};
pub use analysis::{CourierAnalyzer, AnalysisCache, CacheConfig, CacheStats};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};

/// Default search policy version identifier.
pub const DEFAULT_POLICY_VERSION: &str = "search_policy_v1";
