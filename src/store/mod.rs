//! Graph storage backends.

pub mod memory;

use std::collections::BTreeSet;
use serde::Serialize;

use crate::canonical::canonical_hash_hex;
use crate::types::{NodeId, Edge};

/// Read-side view of a trust-labeled graph.
///
/// This is everything the search and analysis code needs. Implementations
/// must guarantee deterministic ordering of results (ascending `NodeId`).
/// A graph is treated as read-only for the duration of a query.
pub trait GraphStore {
    /// Whether the node is present.
    fn contains(&self, id: &NodeId) -> bool;

    /// Trust label of a node, `None` if absent.
    fn is_trusted(&self, id: &NodeId) -> Option<bool>;

    /// Adjacent node IDs (ordered by NodeId). Empty for absent nodes.
    fn neighbors(&self, id: &NodeId) -> Vec<NodeId>;

    /// All node IDs (ordered by NodeId).
    fn node_ids(&self) -> Vec<NodeId>;

    /// Every undirected edge, each exactly once.
    fn all_edges(&self) -> BTreeSet<Edge>;

    /// Every edge whose endpoints carry differing trust labels.
    fn semi_trusted_edges(&self) -> BTreeSet<Edge> {
        self.all_edges()
            .into_iter()
            .filter(|edge| {
                let (a, b) = edge.endpoints();
                self.is_trusted(&a).unwrap_or(false) != self.is_trusted(&b).unwrap_or(false)
            })
            .collect()
    }

    /// Canonical hash over nodes, trust labels and edges.
    ///
    /// Two stores with the same content produce the same hash regardless of
    /// insertion order.
    fn snapshot_hash(&self) -> String {
        #[derive(Serialize)]
        struct Snapshot {
            nodes: Vec<(NodeId, bool)>,
            edges: BTreeSet<Edge>,
        }

        let nodes = self
            .node_ids()
            .into_iter()
            .map(|id| (id, self.is_trusted(&id).unwrap_or(false)))
            .collect();

        canonical_hash_hex(&Snapshot {
            nodes,
            edges: self.all_edges(),
        })
    }
}

pub use memory::InMemoryGraphStore;
