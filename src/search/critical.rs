//! Critical edge analysis.
//!
//! An edge is critical for a `(source, dest)` pair when it lies on every
//! secure source-to-destination path and exactly one of its endpoints is
//! trusted. Cutting such an edge leaves only insecure routes, or none.
//!
//! ## Algorithm
//!
//! 1. Enumerate all simple paths `source → dest`
//! 2. No path at all: every semi-trusted edge in the graph is critical
//! 3. Drop insecure paths; if none remain, same global fallback as (2)
//! 4. Intersect the edge sets of the remaining paths and keep the
//!    semi-trusted ones
//!
//! Paths are streamed from the enumerator and folded into a running
//! intersection, so memory stays proportional to the graph rather than to
//! the number of paths.

use std::collections::BTreeSet;
use std::ops::ControlFlow;
use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::policy::SearchPolicy;
use crate::store::GraphStore;
use crate::types::{NodeId, Edge};
use super::classify::{is_secure, is_semi_trusted};
use super::enumerate::PathEnumerator;
use super::{check_endpoints, QueryError};

/// Why the global semi-trusted fallback was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// Source and destination are disconnected.
    NoPath,
    /// Every path has two consecutive untrusted nodes.
    NoSecurePath,
}

impl std::fmt::Display for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPath => write!(f, "no_path"),
            Self::NoSecurePath => write!(f, "no_secure_path"),
        }
    }
}

/// Result of a critical edge analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalEdgeReport {
    /// Source node.
    pub source: NodeId,
    /// Destination node.
    pub dest: NodeId,
    /// Number of simple paths enumerated.
    pub total_paths: usize,
    /// Number of those paths that are secure.
    pub secure_paths: usize,
    /// Set when the global fallback produced `edges`.
    pub fallback: Option<Fallback>,
    /// Whether a policy bound cut enumeration short.
    pub truncated: bool,
    /// Critical edges, ordered canonically.
    pub edges: BTreeSet<Edge>,
}

impl CriticalEdgeReport {
    /// Report with no paths and no edges (used for rejected endpoints).
    pub fn empty(source: NodeId, dest: NodeId) -> Self {
        Self {
            source,
            dest,
            total_paths: 0,
            secure_paths: 0,
            fallback: None,
            truncated: false,
            edges: BTreeSet::new(),
        }
    }

    /// Number of critical edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge is critical.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether `edge` is critical.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Deterministic content hash of the report.
    pub fn fingerprint(&self) -> String {
        canonical_hash_hex(self)
    }
}

/// Critical edge analyzer over a graph store.
pub struct CriticalEdgeAnalyzer<'a, S: GraphStore + ?Sized> {
    store: &'a S,
    policy: SearchPolicy,
}

impl<'a, S: GraphStore + ?Sized> CriticalEdgeAnalyzer<'a, S> {
    /// Create an analyzer with the default (unbounded) policy.
    pub fn new(store: &'a S) -> Self {
        Self::with_policy(store, SearchPolicy::default())
    }

    /// Create an analyzer with a custom policy.
    pub fn with_policy(store: &'a S, policy: SearchPolicy) -> Self {
        Self { store, policy }
    }

    /// Get the policy.
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Critical edges between `source` and `dest`.
    ///
    /// Empty if either endpoint is absent or untrusted.
    pub fn critical_edges(&self, source: NodeId, dest: NodeId) -> BTreeSet<Edge> {
        self.analyze(source, dest).edges
    }

    /// Full analysis; rejected endpoints yield [`CriticalEdgeReport::empty`].
    ///
    /// If a policy bound truncates enumeration, the answer is computed over
    /// the paths seen so far and `truncated` is set.
    pub fn analyze(&self, source: NodeId, dest: NodeId) -> CriticalEdgeReport {
        match check_endpoints(self.store, source, dest) {
            Ok(()) => self.run(source, dest),
            Err(e) => {
                tracing::debug!(error = %e, "critical edge query rejected");
                CriticalEdgeReport::empty(source, dest)
            }
        }
    }

    /// Strict form of [`analyze`](Self::analyze).
    ///
    /// Fails on absent or untrusted endpoints, and with
    /// [`QueryError::PathLimitExceeded`] when a bound truncated enumeration.
    pub fn try_analyze(&self, source: NodeId, dest: NodeId) -> Result<CriticalEdgeReport, QueryError> {
        check_endpoints(self.store, source, dest)?;
        let report = self.run(source, dest);
        if report.truncated {
            return Err(QueryError::PathLimitExceeded {
                max_paths: self.policy.max_paths,
                max_depth: self.policy.max_depth,
            });
        }
        Ok(report)
    }

    fn run(&self, source: NodeId, dest: NodeId) -> CriticalEdgeReport {
        let mut secure_paths = 0usize;
        let mut common: Option<BTreeSet<Edge>> = None;

        let outcome = PathEnumerator::new(self.store)
            .with_policy(&self.policy)
            .visit(source, dest, |nodes| {
                if is_secure(self.store, nodes) {
                    secure_paths += 1;
                    let edges: BTreeSet<Edge> = Edge::chain(nodes).collect();
                    common = Some(match common.take() {
                        None => edges,
                        Some(acc) => acc.intersection(&edges).copied().collect(),
                    });
                }
                ControlFlow::Continue(())
            });

        let fallback = if outcome.paths_visited == 0 {
            Some(Fallback::NoPath)
        } else if secure_paths == 0 {
            Some(Fallback::NoSecurePath)
        } else {
            None
        };

        let edges = match fallback {
            Some(_) => self.store.semi_trusted_edges(),
            None => common
                .unwrap_or_default()
                .into_iter()
                .filter(|edge| is_semi_trusted(self.store, edge))
                .collect(),
        };

        tracing::debug!(
            source = %source,
            dest = %dest,
            total_paths = outcome.paths_visited,
            secure_paths,
            fallback = ?fallback,
            critical = edges.len(),
            "critical edge analysis complete"
        );

        CriticalEdgeReport {
            source,
            dest,
            total_paths: outcome.paths_visited,
            secure_paths,
            fallback,
            truncated: outcome.truncated,
            edges,
        }
    }
}

/// Critical edges between `source` and `dest` with the default policy.
pub fn critical_edges<S: GraphStore + ?Sized>(store: &S, source: NodeId, dest: NodeId) -> BTreeSet<Edge> {
    CriticalEdgeAnalyzer::new(store).critical_edges(source, dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryGraphStore;
    use crate::types::Node;

    fn id(value: u128) -> NodeId {
        NodeId::from_u128(value)
    }

    fn e(a: u128, b: u128) -> Edge {
        Edge::new(id(a), id(b))
    }

    fn build(nodes: &[(u128, bool)], edges: &[(u128, u128)]) -> InMemoryGraphStore {
        let mut store = InMemoryGraphStore::new();
        for &(value, trusted) in nodes {
            store.add_node(Node::new(id(value), trusted));
        }
        for &(a, b) in edges {
            store.add_edge(&id(a), &id(b));
        }
        store
    }

    #[test]
    fn test_bridge_edges_are_critical() {
        // 1(T) - 2(U) - 3(T)
        let store = build(&[(1, true), (2, false), (3, true)], &[(1, 2), (2, 3)]);
        let report = CriticalEdgeAnalyzer::new(&store).analyze(id(1), id(3));

        assert_eq!(report.fallback, None);
        assert_eq!(report.total_paths, 1);
        assert_eq!(report.secure_paths, 1);
        assert_eq!(report.edges, BTreeSet::from([e(1, 2), e(2, 3)]));
    }

    #[test]
    fn test_trusted_bottleneck_not_reported() {
        // 1(T) - 2(T) - 3(T): a bottleneck, but no trust boundary
        let store = build(&[(1, true), (2, true), (3, true)], &[(1, 2), (2, 3)]);
        assert!(critical_edges(&store, id(1), id(3)).is_empty());
    }

    #[test]
    fn test_alternative_route_removes_criticality() {
        // 1 - 2(U) - 4 and 1 - 3(U) - 4: no edge on both routes
        let store = build(
            &[(1, true), (2, false), (3, false), (4, true)],
            &[(1, 2), (2, 4), (1, 3), (3, 4)],
        );
        let report = CriticalEdgeAnalyzer::new(&store).analyze(id(1), id(4));

        assert_eq!(report.secure_paths, 2);
        assert!(report.is_empty());
    }

    #[test]
    fn test_insecure_paths_ignored() {
        // Secure: 1 - 2(U) - 5 - 6
        // Insecure: 1 - 3(U) - 4(U) - 6
        let store = build(
            &[(1, true), (2, false), (3, false), (4, false), (5, true), (6, true)],
            &[(1, 2), (2, 5), (5, 6), (1, 3), (3, 4), (4, 6)],
        );
        let report = CriticalEdgeAnalyzer::new(&store).analyze(id(1), id(6));

        assert_eq!(report.total_paths, 2);
        assert_eq!(report.secure_paths, 1);
        // 5 - 6 is on the secure path but joins two trusted nodes
        assert_eq!(report.edges, BTreeSet::from([e(1, 2), e(2, 5)]));
    }

    #[test]
    fn test_no_path_fallback_is_global() {
        // 1 and 3 disconnected; 4(U) - 5(T) far away
        let store = build(
            &[(1, true), (2, false), (3, true), (4, false), (5, true)],
            &[(1, 2), (4, 5)],
        );
        let report = CriticalEdgeAnalyzer::new(&store).analyze(id(1), id(3));

        assert_eq!(report.fallback, Some(Fallback::NoPath));
        assert_eq!(report.edges, BTreeSet::from([e(1, 2), e(4, 5)]));
    }

    #[test]
    fn test_no_secure_path_fallback() {
        // Only route is 1 - 2(U) - 3(U) - 4
        let store = build(
            &[(1, true), (2, false), (3, false), (4, true)],
            &[(1, 2), (2, 3), (3, 4)],
        );
        let report = CriticalEdgeAnalyzer::new(&store).analyze(id(1), id(4));

        assert_eq!(report.fallback, Some(Fallback::NoSecurePath));
        assert_eq!(report.total_paths, 1);
        assert_eq!(report.edges, BTreeSet::from([e(1, 2), e(3, 4)]));
    }

    #[test]
    fn test_rejected_endpoints_yield_empty() {
        let store = build(&[(1, true), (2, false), (3, true)], &[(1, 2), (2, 3)]);
        let analyzer = CriticalEdgeAnalyzer::new(&store);

        assert!(analyzer.critical_edges(id(1), id(2)).is_empty());
        assert!(analyzer.critical_edges(id(1), id(9)).is_empty());

        assert_eq!(analyzer.try_analyze(id(2), id(3)), Err(QueryError::EndpointUntrusted(id(2))));
        assert_eq!(analyzer.try_analyze(id(1), id(9)), Err(QueryError::EndpointNotFound(id(9))));
    }

    #[test]
    fn test_strict_mode_rejects_truncation() {
        let store = build(
            &[(1, true), (2, false), (3, false), (4, true)],
            &[(1, 2), (2, 4), (1, 3), (3, 4)],
        );
        let policy = SearchPolicy::bounded(Some(1), None);
        let analyzer = CriticalEdgeAnalyzer::with_policy(&store, policy);

        let lenient = analyzer.analyze(id(1), id(4));
        assert!(lenient.truncated);
        assert_eq!(lenient.total_paths, 1);

        assert_eq!(
            analyzer.try_analyze(id(1), id(4)),
            Err(QueryError::PathLimitExceeded { max_paths: Some(1), max_depth: None })
        );
    }

    #[test]
    fn test_strict_mode_accepts_cap_equal_to_path_count() {
        let store = build(&[(1, true), (2, false), (3, true)], &[(1, 2), (2, 3)]);
        let policy = SearchPolicy::bounded(Some(1), Some(2));
        let analyzer = CriticalEdgeAnalyzer::with_policy(&store, policy);

        let report = analyzer.try_analyze(id(1), id(3)).unwrap();
        assert!(!report.truncated);
        assert_eq!(report.total_paths, 1);
        assert_eq!(report.edges, BTreeSet::from([e(1, 2), e(2, 3)]));
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let store = build(&[(1, true), (2, false), (3, true)], &[(1, 2), (2, 3)]);
        let analyzer = CriticalEdgeAnalyzer::new(&store);

        let first = analyzer.analyze(id(1), id(3));
        let second = analyzer.analyze(id(1), id(3));
        assert_eq!(first.fingerprint(), second.fingerprint());

        let empty = CriticalEdgeReport::empty(id(1), id(3));
        assert_ne!(first.fingerprint(), empty.fingerprint());
    }
}
