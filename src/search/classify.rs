//! Path security classification.
//!
//! A path is *insecure* when two untrusted nodes sit next to each other on
//! it: the message would be handed directly from one untrusted courier to
//! another. Nodes that are not in the store are treated as untrusted.

use crate::store::GraphStore;
use crate::types::{NodeId, Edge};

fn untrusted<S: GraphStore + ?Sized>(store: &S, id: &NodeId) -> bool {
    !store.is_trusted(id).unwrap_or(false)
}

/// Number of untrusted nodes on the path.
pub fn count_untrusted<S: GraphStore + ?Sized>(store: &S, path: &[NodeId]) -> usize {
    path.iter().filter(|id| untrusted(store, id)).count()
}

/// `false` iff two consecutive nodes on the path are both untrusted.
///
/// Paths of length 0 or 1 are always secure.
pub fn is_secure<S: GraphStore + ?Sized>(store: &S, path: &[NodeId]) -> bool {
    !path
        .windows(2)
        .any(|pair| untrusted(store, &pair[0]) && untrusted(store, &pair[1]))
}

/// Whether exactly one endpoint of the edge is untrusted.
pub fn is_semi_trusted<S: GraphStore + ?Sized>(store: &S, edge: &Edge) -> bool {
    count_untrusted(store, &edge.as_array()) == 1
}

/// Consecutive node pairs of a path as undirected edges.
pub fn path_edges(path: &[NodeId]) -> Vec<Edge> {
    Edge::chain(path).collect()
}
