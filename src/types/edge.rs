//! Edge types for the courier network.

use serde::{Deserialize, Serialize};
use super::node::NodeId;

/// Undirected edge between two nodes.
///
/// Stored canonically with `low <= high`, so `Edge::new(a, b)` and
/// `Edge::new(b, a)` compare equal and hash identically. The derived `Ord`
/// therefore gives a deterministic ordering: (low, high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    low: NodeId,
    high: NodeId,
}

impl Edge {
    /// Create an edge from two endpoints in any order.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Both endpoints, lower id first.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.low, self.high)
    }

    /// Whether `id` is one of the endpoints.
    pub fn touches(&self, id: &NodeId) -> bool {
        self.low == *id || self.high == *id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other(&self, id: &NodeId) -> Option<NodeId> {
        if self.low == *id {
            Some(self.high)
        } else if self.high == *id {
            Some(self.low)
        } else {
            None
        }
    }

    /// Edges between consecutive nodes of a node sequence, in order.
    pub fn chain(nodes: &[NodeId]) -> impl Iterator<Item = Edge> + '_ {
        nodes.windows(2).map(|pair| Edge::new(pair[0], pair[1]))
    }

    /// Endpoints as a two-element array.
    pub fn as_array(&self) -> [NodeId; 2] {
        [self.low, self.high]
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.low, self.high)
    }
}
