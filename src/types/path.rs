//! Paths through the courier network.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::edge::Edge;
use super::node::NodeId;

/// An ordered sequence of nodes `v0..vn`.
///
/// Paths produced by the search functions are simple (no repeated node) and
/// every consecutive pair is an edge of the graph they were searched in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path(Vec<NodeId>);

impl Path {
    /// Create a path from a node sequence.
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self(nodes)
    }

    /// The single-node path `[node]`.
    pub fn single(node: NodeId) -> Self {
        Self(vec![node])
    }

    /// Node sequence.
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// Consume into the node sequence.
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.0
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no nodes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First node.
    pub fn first(&self) -> Option<NodeId> {
        self.0.first().copied()
    }

    /// Last node.
    pub fn last(&self) -> Option<NodeId> {
        self.0.last().copied()
    }

    /// Whether `id` lies on the path.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.0.contains(id)
    }

    /// Whether no node repeats.
    pub fn is_simple(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.0.iter().all(|id| seen.insert(*id))
    }

    /// Consecutive node pairs as undirected edges, in path order.
    pub fn edges(&self) -> Vec<Edge> {
        Edge::chain(&self.0).collect()
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self(nodes)
    }
}

impl AsRef<[NodeId]> for Path {
    fn as_ref(&self) -> &[NodeId] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
