//! In-memory trust-labeled graph store.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{NodeId, Node, Edge};
use super::GraphStore;

/// Per-node record: trust label plus adjacency.
#[derive(Debug, Clone, Default)]
struct NodeEntry {
    trusted: bool,
    adjacent: BTreeSet<NodeId>,
}

/// In-memory undirected simple graph with trust-labeled nodes.
///
/// Uses BTreeMap/BTreeSet for deterministic iteration order.
///
/// ## Invariants
///
/// - Adjacency is symmetric: `b ∈ adj(a)` iff `a ∈ adj(b)`
/// - No self-loops, no duplicate edges
/// - Every adjacency entry names a present node
///
/// Every mutation that changes the graph bumps [`revision`](Self::revision);
/// no-op mutations leave it unchanged.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGraphStore {
    /// Nodes by ID.
    nodes: BTreeMap<NodeId, NodeEntry>,
    /// Count of effective mutations.
    revision: u64,
}

impl InMemoryGraphStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with empty adjacency.
    ///
    /// No-op if a node with the same ID is already present. Returns whether
    /// the node was inserted.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.nodes.insert(
            node.id,
            NodeEntry {
                trusted: node.trusted,
                adjacent: BTreeSet::new(),
            },
        );
        self.revision += 1;
        true
    }

    /// Add a node under a freshly generated ID and return that ID.
    pub fn insert_node(&mut self, trusted: bool) -> NodeId {
        let id = NodeId::random();
        self.add_node(Node::new(id, trusted));
        id
    }

    /// Remove a node and every edge incident to it.
    ///
    /// No-op if absent. Returns whether the node was removed.
    pub fn remove_node(&mut self, id: &NodeId) -> bool {
        let Some(entry) = self.nodes.remove(id) else {
            return false;
        };
        for neighbor in &entry.adjacent {
            if let Some(other) = self.nodes.get_mut(neighbor) {
                other.adjacent.remove(id);
            }
        }
        self.revision += 1;
        true
    }

    /// Add an undirected edge between two present, distinct nodes.
    ///
    /// No-op if either node is absent, if `a == b`, or if the edge already
    /// exists. Returns whether the edge was added.
    pub fn add_edge(&mut self, a: &NodeId, b: &NodeId) -> bool {
        if a == b || !self.nodes.contains_key(a) || !self.nodes.contains_key(b) {
            return false;
        }
        let inserted = self
            .nodes
            .get_mut(a)
            .map(|entry| entry.adjacent.insert(*b))
            .unwrap_or(false);
        if let Some(entry) = self.nodes.get_mut(b) {
            entry.adjacent.insert(*a);
        }
        if inserted {
            self.revision += 1;
        }
        inserted
    }

    /// Remove the undirected edge between two present nodes.
    ///
    /// No-op if either node is absent or the edge does not exist. Returns
    /// whether an edge was removed.
    pub fn remove_edge(&mut self, a: &NodeId, b: &NodeId) -> bool {
        if !self.nodes.contains_key(a) || !self.nodes.contains_key(b) {
            return false;
        }
        let removed = self
            .nodes
            .get_mut(a)
            .map(|entry| entry.adjacent.remove(b))
            .unwrap_or(false);
        if let Some(entry) = self.nodes.get_mut(b) {
            entry.adjacent.remove(a);
        }
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Whether an edge joins `a` and `b`.
    pub fn has_edge(&self, a: &NodeId, b: &NodeId) -> bool {
        self.nodes
            .get(a)
            .map(|entry| entry.adjacent.contains(b))
            .unwrap_or(false)
    }

    /// Look up a node.
    pub fn node(&self, id: &NodeId) -> Option<Node> {
        self.nodes.get(id).map(|entry| Node::new(*id, entry.trusted))
    }

    /// All nodes, ordered by ID.
    pub fn all_nodes(&self) -> Vec<Node> {
        self.nodes
            .iter()
            .map(|(id, entry)| Node::new(*id, entry.trusted))
            .collect()
    }

    /// Number of adjacent nodes, `None` if absent.
    pub fn degree(&self, id: &NodeId) -> Option<usize> {
        self.nodes.get(id).map(|entry| entry.adjacent.len())
    }

    /// Get number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Get number of edges.
    pub fn num_edges(&self) -> usize {
        self.nodes.values().map(|e| e.adjacent.len()).sum::<usize>() / 2
    }

    /// Count of effective mutations since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl GraphStore for InMemoryGraphStore {
    fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    fn is_trusted(&self, id: &NodeId) -> Option<bool> {
        self.nodes.get(id).map(|entry| entry.trusted)
    }

    fn neighbors(&self, id: &NodeId) -> Vec<NodeId> {
        self.nodes
            .get(id)
            .map(|entry| entry.adjacent.iter().copied().collect())
            .unwrap_or_default()
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    fn all_edges(&self) -> BTreeSet<Edge> {
        self.nodes
            .iter()
            .flat_map(|(id, entry)| {
                entry
                    .adjacent
                    .iter()
                    .filter(move |other| id < *other)
                    .map(move |other| Edge::new(*id, *other))
            })
            .collect()
    }
}
