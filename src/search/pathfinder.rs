//! Bounded-untrust pathfinder.
//!
//! Finds a simple path between two trusted nodes that passes through at most
//! one untrusted node.
//!
//! ## Algorithm
//!
//! Depth-first search over states `(node, untrusted_seen)` where
//! `untrusted_seen` is 0 or 1. Tracking the count in the state, rather than
//! marking nodes visited once, keeps the search complete: a trusted node
//! first reached behind an untrusted relay is explored again on a clean
//! route. Each state is expanded at most once, so the search is linear in
//! the size of the graph.
//!
//! The state walk can revisit a trusted node under both counts. Cutting the
//! loop between the two visits yields a simple path whose untrusted count is
//! no larger.

use std::collections::{BTreeMap, BTreeSet};

use crate::store::GraphStore;
use crate::types::{NodeId, Path};
use super::{check_endpoints, QueryError};

/// Untrusted-node budget for a message route.
const MAX_UNTRUSTED: u8 = 1;

type State = (NodeId, u8);

/// Find a path from `source` to `dest` with at most one untrusted node.
///
/// Returns `None` if no such path exists, or if either endpoint is absent
/// or untrusted. When `source == dest` the single-node path is returned.
pub fn find_path<S: GraphStore + ?Sized>(store: &S, source: NodeId, dest: NodeId) -> Option<Path> {
    try_find_path(store, source, dest).ok().flatten()
}

/// Strict form of [`find_path`]: invalid endpoints are reported as errors.
pub fn try_find_path<S: GraphStore + ?Sized>(
    store: &S,
    source: NodeId,
    dest: NodeId,
) -> Result<Option<Path>, QueryError> {
    check_endpoints(store, source, dest)?;

    if source == dest {
        return Ok(Some(Path::single(source)));
    }

    let start: State = (source, 0);
    let mut stack: Vec<State> = vec![start];
    let mut seen: BTreeSet<State> = BTreeSet::from([start]);
    let mut parent: BTreeMap<State, State> = BTreeMap::new();

    while let Some(state) = stack.pop() {
        let (node, used) = state;
        if node == dest {
            let path = simplify(unwind(&parent, state));
            tracing::debug!(
                source = %source,
                dest = %dest,
                hops = path.len().saturating_sub(1),
                "found bounded-untrust path"
            );
            return Ok(Some(path));
        }

        // Reverse so the lowest neighbor is expanded first.
        for next in store.neighbors(&node).into_iter().rev() {
            let cost = u8::from(!store.is_trusted(&next).unwrap_or(false));
            let next_used = used + cost;
            if next_used > MAX_UNTRUSTED {
                continue;
            }
            let next_state = (next, next_used);
            if seen.insert(next_state) {
                parent.insert(next_state, state);
                stack.push(next_state);
            }
        }
    }

    tracing::debug!(source = %source, dest = %dest, "no bounded-untrust path");
    Ok(None)
}

/// Follow parent links back to the start state.
fn unwind(parent: &BTreeMap<State, State>, end: State) -> Vec<NodeId> {
    let mut walk = vec![end.0];
    let mut current = end;
    while let Some(prev) = parent.get(&current) {
        walk.push(prev.0);
        current = *prev;
    }
    walk.reverse();
    walk
}

/// Remove loops from a walk so that no node repeats.
fn simplify(walk: Vec<NodeId>) -> Path {
    let mut nodes: Vec<NodeId> = Vec::with_capacity(walk.len());
    let mut position: BTreeMap<NodeId, usize> = BTreeMap::new();

    for id in walk {
        if let Some(&idx) = position.get(&id) {
            for dropped in nodes.drain(idx + 1..) {
                position.remove(&dropped);
            }
        } else {
            position.insert(id, nodes.len());
            nodes.push(id);
        }
    }

    Path::new(nodes)
}
