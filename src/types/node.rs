//! Node types for the courier network.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use std::fmt;

/// Stable identifier for a node in the courier network.
///
/// Wraps a UUID and implements `Ord` for deterministic ordering. Membership
/// and equality are decided by this identifier alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Create a new NodeId from a UUID.
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a NodeId from a small integer (useful for fixtures).
    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Create a new NodeId from a UUID string.
    pub fn from_str(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Generate a new random NodeId.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for NodeId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A courier node: an identifier plus its trust label.
///
/// Adjacency is owned by the graph store, not by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier.
    pub id: NodeId,
    /// `true` if the node is trusted.
    pub trusted: bool,
}

impl Node {
    /// Create a new node.
    pub fn new(id: NodeId, trusted: bool) -> Self {
        Self { id, trusted }
    }

    /// Create a trusted node.
    pub fn trusted(id: NodeId) -> Self {
        Self::new(id, true)
    }

    /// Create an untrusted node.
    pub fn untrusted(id: NodeId) -> Self {
        Self::new(id, false)
    }
}
