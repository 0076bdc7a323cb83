//! Query façade over a graph store.
//!
//! [`CourierAnalyzer`] borrows a store for the duration of its queries, so a
//! graph cannot be mutated while an analysis holds it.

pub mod cache;

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::policy::SearchPolicy;
use crate::search::{
    self, CriticalEdgeAnalyzer, CriticalEdgeReport, PathEnumerator, PathSet, QueryError,
};
use crate::store::GraphStore;
use crate::types::{NodeId, Edge, Path};

pub use cache::{AnalysisCache, CacheConfig, CacheStats};

/// Courier network queries bound to one store and one policy.
///
/// ## Example
///
/// ```rust
/// use courier_trust::{CourierAnalyzer, InMemoryGraphStore, Node, NodeId};
///
/// let (a, b, c) = (NodeId::from_u128(1), NodeId::from_u128(2), NodeId::from_u128(3));
/// let mut graph = InMemoryGraphStore::new();
/// graph.add_node(Node::trusted(a));
/// graph.add_node(Node::untrusted(b));
/// graph.add_node(Node::trusted(c));
/// graph.add_edge(&a, &b);
/// graph.add_edge(&b, &c);
///
/// let analyzer = CourierAnalyzer::new(&graph);
/// assert!(analyzer.find_path(a, c).is_some());
/// assert_eq!(analyzer.critical_edges(a, c).len(), 2);
/// ```
pub struct CourierAnalyzer<'a, S: GraphStore + ?Sized> {
    store: &'a S,
    policy: SearchPolicy,
    cache: Option<Arc<AnalysisCache>>,
}

impl<'a, S: GraphStore + ?Sized> CourierAnalyzer<'a, S> {
    /// Create an analyzer with the default (unbounded) policy.
    pub fn new(store: &'a S) -> Self {
        Self::with_policy(store, SearchPolicy::default())
    }

    /// Create an analyzer with a custom policy.
    pub fn with_policy(store: &'a S, policy: SearchPolicy) -> Self {
        Self {
            store,
            policy,
            cache: None,
        }
    }

    /// Route critical edge queries through a shared cache.
    pub fn with_cache(mut self, cache: Arc<AnalysisCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Get the policy.
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        self.store
    }

    /// Path with at most one untrusted node, or `None`.
    pub fn find_path(&self, source: NodeId, dest: NodeId) -> Option<Path> {
        search::find_path(self.store, source, dest)
    }

    /// Strict form of [`find_path`](Self::find_path).
    pub fn try_find_path(&self, source: NodeId, dest: NodeId) -> Result<Option<Path>, QueryError> {
        search::try_find_path(self.store, source, dest)
    }

    /// Simple paths from `source` to `dest` under this analyzer's policy.
    pub fn enumerate_paths(&self, source: NodeId, dest: NodeId) -> PathSet {
        PathEnumerator::new(self.store)
            .with_policy(&self.policy)
            .collect(source, dest)
    }

    /// Critical edges between `source` and `dest`.
    pub fn critical_edges(&self, source: NodeId, dest: NodeId) -> BTreeSet<Edge> {
        self.analyze(source, dest).edges.clone()
    }

    /// Full critical edge report (served from the cache when attached).
    pub fn analyze(&self, source: NodeId, dest: NodeId) -> Arc<CriticalEdgeReport> {
        match &self.cache {
            Some(cache) => cache.get_or_analyze(self.store, &self.policy, source, dest).0,
            None => Arc::new(self.analyzer().analyze(source, dest)),
        }
    }

    /// Strict form of [`analyze`](Self::analyze). Bypasses the cache.
    pub fn try_analyze(&self, source: NodeId, dest: NodeId) -> Result<CriticalEdgeReport, QueryError> {
        self.analyzer().try_analyze(source, dest)
    }

    fn analyzer(&self) -> CriticalEdgeAnalyzer<'a, S> {
        CriticalEdgeAnalyzer::with_policy(self.store, self.policy.clone())
    }
}
