//! Fixed 26-node demonstration network.
//!
//! Nodes are named `a` through `z`. Only the first fifteen take part in any
//! edge; the rest are isolated.
//!
//! The component holding `a` and `c` is the cluster `a, b, c, d` with one
//! exit through `b - h` into the rest of the network. From `a` to `c` there
//! are three simple paths: `a c`, `a b c` and `a b d c`; the last is insecure
//! because `b` and `d` are both untrusted.

use std::collections::BTreeMap;

use crate::store::InMemoryGraphStore;
use crate::types::{Node, NodeId};

/// Trust label per node, in name order.
const NODES: [(char, bool); 26] = [
    ('a', true),
    ('b', false),
    ('c', true),
    ('d', false),
    ('e', false),
    ('f', false),
    ('g', true),
    ('h', true),
    ('i', true),
    ('j', true),
    ('k', true),
    ('l', false),
    ('m', true),
    ('n', false),
    ('o', true),
    ('p', false),
    ('q', true),
    ('r', false),
    ('s', true),
    ('t', false),
    ('u', true),
    ('v', false),
    ('w', true),
    ('x', false),
    ('y', true),
    ('z', false),
];

const EDGES: [(char, char); 18] = [
    ('a', 'b'),
    ('a', 'c'),
    ('b', 'c'),
    ('b', 'd'),
    ('b', 'h'),
    ('c', 'd'),
    ('e', 'f'),
    ('e', 'h'),
    ('e', 'k'),
    ('f', 'g'),
    ('f', 'i'),
    ('f', 'l'),
    ('g', 'n'),
    ('i', 'l'),
    ('j', 'l'),
    ('j', 'm'),
    ('j', 'o'),
    ('k', 'l'),
];

/// The demonstration network plus its name table.
#[derive(Debug, Clone)]
pub struct DemoNetwork {
    /// Graph.
    pub store: InMemoryGraphStore,
    names: BTreeMap<char, NodeId>,
}

impl DemoNetwork {
    /// Look up a node by its single-letter name.
    pub fn node(&self, name: char) -> Option<NodeId> {
        self.names.get(&name).copied()
    }

    /// Name of a node, if it belongs to the network.
    pub fn name_of(&self, id: &NodeId) -> Option<char> {
        self.names
            .iter()
            .find_map(|(name, node)| (node == id).then_some(*name))
    }
}

/// Build the demonstration network.
///
/// Node `a` gets ID 1, `b` ID 2, and so on.
pub fn courier_network() -> DemoNetwork {
    let mut store = InMemoryGraphStore::new();
    let mut names = BTreeMap::new();

    for (idx, (name, trusted)) in NODES.iter().enumerate() {
        let id = NodeId::from_u128(idx as u128 + 1);
        store.add_node(Node::new(id, *trusted));
        names.insert(*name, id);
    }

    for (a, b) in EDGES {
        if let (Some(a), Some(b)) = (names.get(&a), names.get(&b)) {
            store.add_edge(a, b);
        }
    }

    DemoNetwork { store, names }
}
