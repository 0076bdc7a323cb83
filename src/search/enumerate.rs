//! Exhaustive simple-path enumeration.
//!
//! ## Algorithm
//!
//! Depth-first search from the source with a path-local on-path set. Each
//! frame of the explicit stack iterates the neighbors of one node on the
//! current path; exhausting a frame backtracks by one node. Arrivals at the
//! destination are reported and the search backtracks without descending
//! past it.
//!
//! ## Scalability
//!
//! The number of simple paths between two nodes grows exponentially with
//! graph density, and so does the running time. That cost is inherent to an
//! exact enumeration. [`SearchPolicy`] bounds let callers cap the work.
//!
//! `truncated` is set only when a path beyond a bound is known to exist:
//! after `max_paths` paths the search continues until it meets one more
//! arrival, and a depth prune counts only when `dest` is still reachable
//! from the pruned node without revisiting the current path. Confirming
//! that no further path exists can cost as much as finishing the
//! enumeration.

use std::collections::{BTreeSet, VecDeque};
use std::ops::ControlFlow;

use crate::policy::SearchPolicy;
use crate::store::GraphStore;
use crate::types::{NodeId, Path};

/// Summary of an enumeration run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationOutcome {
    /// Number of paths handed to the visitor.
    pub paths_visited: usize,
    /// Whether a policy bound cut the search short.
    pub truncated: bool,
}

/// Collected enumeration result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    /// Paths in discovery order.
    pub paths: Vec<Path>,
    /// Whether a policy bound cut the search short.
    pub truncated: bool,
}

/// Simple-path enumerator over a graph store.
pub struct PathEnumerator<'a, S: GraphStore + ?Sized> {
    store: &'a S,
    max_paths: Option<usize>,
    max_depth: Option<usize>,
}

impl<'a, S: GraphStore + ?Sized> PathEnumerator<'a, S> {
    /// Create an unbounded enumerator.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            max_paths: None,
            max_depth: None,
        }
    }

    /// Apply the bounds of a search policy.
    pub fn with_policy(mut self, policy: &SearchPolicy) -> Self {
        self.max_paths = policy.max_paths;
        self.max_depth = policy.max_depth;
        self
    }

    /// Call `visitor` once per simple path from `source` to `dest`.
    ///
    /// The slice passed to the visitor is only valid for the duration of the
    /// call. Returning `ControlFlow::Break` stops the search; that is not
    /// reported as truncation.
    pub fn visit<F>(&self, source: NodeId, dest: NodeId, mut visitor: F) -> EnumerationOutcome
    where
        F: FnMut(&[NodeId]) -> ControlFlow<()>,
    {
        let mut outcome = EnumerationOutcome::default();

        if !self.store.contains(&source) || !self.store.contains(&dest) {
            return outcome;
        }
        if source == dest {
            if self.max_paths == Some(0) {
                outcome.truncated = true;
            } else {
                outcome.paths_visited = 1;
                let _ = visitor(&[source]);
            }
            return outcome;
        }

        let mut path: Vec<NodeId> = vec![source];
        let mut on_path: BTreeSet<NodeId> = BTreeSet::from([source]);
        let mut frames = vec![self.store.neighbors(&source).into_iter()];

        loop {
            let Some(frame) = frames.last_mut() else {
                break;
            };

            let Some(next) = frame.next() else {
                // Dead end: backtrack one node.
                frames.pop();
                if let Some(done) = path.pop() {
                    on_path.remove(&done);
                }
                continue;
            };

            if on_path.contains(&next) {
                continue;
            }

            // Edges in the path after stepping to `next`.
            let depth = path.len();

            if next == dest {
                // A real path lies beyond either bound: report it, skip it.
                if self.max_depth.is_some_and(|max| depth > max) {
                    outcome.truncated = true;
                    continue;
                }
                if self.max_paths.is_some_and(|max| outcome.paths_visited >= max) {
                    outcome.truncated = true;
                    break;
                }
                path.push(dest);
                outcome.paths_visited += 1;
                let flow = visitor(&path);
                path.pop();

                if flow.is_break() {
                    break;
                }
                continue;
            }

            // Reaching `dest` through `next` needs at least one more edge.
            if self.max_depth.is_some_and(|max| depth + 1 > max) {
                if !outcome.truncated && self.reaches(next, dest, &on_path) {
                    outcome.truncated = true;
                }
                continue;
            }

            path.push(next);
            on_path.insert(next);
            frames.push(self.store.neighbors(&next).into_iter());
        }

        if outcome.truncated {
            tracing::warn!(
                source = %source,
                dest = %dest,
                paths = outcome.paths_visited,
                max_paths = ?self.max_paths,
                max_depth = ?self.max_depth,
                "path enumeration truncated by policy bound"
            );
        }

        outcome
    }

    /// Whether `dest` is reachable from `from` without entering `blocked`.
    fn reaches(&self, from: NodeId, dest: NodeId, blocked: &BTreeSet<NodeId>) -> bool {
        let mut seen: BTreeSet<NodeId> = BTreeSet::from([from]);
        let mut queue: VecDeque<NodeId> = VecDeque::from([from]);

        while let Some(node) = queue.pop_front() {
            for next in self.store.neighbors(&node) {
                if next == dest {
                    return true;
                }
                if !blocked.contains(&next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Collect every simple path from `source` to `dest`.
    pub fn collect(&self, source: NodeId, dest: NodeId) -> PathSet {
        let mut paths = Vec::new();
        let outcome = self.visit(source, dest, |nodes| {
            paths.push(Path::new(nodes.to_vec()));
            ControlFlow::Continue(())
        });
        PathSet {
            paths,
            truncated: outcome.truncated,
        }
    }
}

/// Every simple path from `source` to `dest`, without bounds.
///
/// Empty if either endpoint is absent or the two are disconnected.
pub fn enumerate_paths<S: GraphStore + ?Sized>(store: &S, source: NodeId, dest: NodeId) -> Vec<Path> {
    PathEnumerator::new(store).collect(source, dest).paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryGraphStore;
    use crate::types::Node;

    fn id(value: u128) -> NodeId {
        NodeId::from_u128(value)
    }

    fn ids(values: &[u128]) -> Vec<NodeId> {
        values.iter().copied().map(id).collect()
    }

    fn build(n: u128, edges: &[(u128, u128)]) -> InMemoryGraphStore {
        let mut store = InMemoryGraphStore::new();
        for value in 1..=n {
            store.add_node(Node::trusted(id(value)));
        }
        for &(a, b) in edges {
            store.add_edge(&id(a), &id(b));
        }
        store
    }

    /// Complete graph on `n` nodes.
    fn complete(n: u128) -> InMemoryGraphStore {
        let mut edges = Vec::new();
        for a in 1..=n {
            for b in (a + 1)..=n {
                edges.push((a, b));
            }
        }
        build(n, &edges)
    }

    #[test]
    fn test_diamond_has_two_paths() {
        //   2
        //  / \
        // 1   4
        //  \ /
        //   3
        let store = build(4, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        let paths = enumerate_paths(&store, id(1), id(4));

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].nodes(), ids(&[1, 2, 4]).as_slice());
        assert_eq!(paths[1].nodes(), ids(&[1, 3, 4]).as_slice());
    }

    #[test]
    fn test_complete_graph_path_count() {
        // K5 between two fixed nodes: sum over k=0..3 of 3!/(3-k)! = 1+3+6+6 = 16
        let store = complete(5);
        let paths = enumerate_paths(&store, id(1), id(5));

        assert_eq!(paths.len(), 16);
        assert!(paths.iter().all(|p| p.is_simple()));
        let unique: BTreeSet<_> = paths.iter().cloned().collect();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn test_disconnected_and_absent() {
        let store = build(4, &[(1, 2), (3, 4)]);

        assert!(enumerate_paths(&store, id(1), id(4)).is_empty());
        assert!(enumerate_paths(&store, id(1), id(9)).is_empty());
        assert!(enumerate_paths(&store, id(9), id(1)).is_empty());
    }

    #[test]
    fn test_source_equals_dest() {
        let store = build(2, &[(1, 2)]);
        let paths = enumerate_paths(&store, id(1), id(1));
        assert_eq!(paths, vec![Path::single(id(1))]);
    }

    #[test]
    fn test_path_does_not_pass_through_dest() {
        // 1 - 2 - 3, with 3 - 4 - 2 forming a loop behind dest
        let store = build(4, &[(1, 2), (2, 3), (3, 4), (4, 2)]);
        let paths = enumerate_paths(&store, id(1), id(3));

        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.last() == Some(id(3))));
        assert!(paths.iter().all(|p| !p.nodes()[..p.len() - 1].contains(&id(3))));
    }

    #[test]
    fn test_max_paths_truncates() {
        let store = complete(5);
        let policy = SearchPolicy::bounded(Some(4), None);
        let set = PathEnumerator::new(&store).with_policy(&policy).collect(id(1), id(5));

        assert_eq!(set.paths.len(), 4);
        assert!(set.truncated);
    }

    #[test]
    fn test_max_depth_prunes_long_paths() {
        let store = complete(5);
        let policy = SearchPolicy::bounded(None, Some(2));
        let set = PathEnumerator::new(&store).with_policy(&policy).collect(id(1), id(5));

        // Direct edge plus three two-hop routes
        assert_eq!(set.paths.len(), 4);
        assert!(set.paths.iter().all(|p| p.len() <= 3));
        assert!(set.truncated);
    }

    #[test]
    fn test_loose_bounds_do_not_truncate() {
        let store = build(3, &[(1, 2), (2, 3)]);
        let policy = SearchPolicy::bounded(Some(10), Some(10));
        let set = PathEnumerator::new(&store).with_policy(&policy).collect(id(1), id(3));

        assert_eq!(set.paths.len(), 1);
        assert!(!set.truncated);
    }

    #[test]
    fn test_path_cap_equal_to_path_count_is_exact() {
        let store = build(3, &[(1, 2), (2, 3)]);
        let policy = SearchPolicy::bounded(Some(1), None);
        let set = PathEnumerator::new(&store).with_policy(&policy).collect(id(1), id(3));

        assert_eq!(set.paths.len(), 1);
        assert!(!set.truncated);
    }

    #[test]
    fn test_zero_path_cap() {
        let store = build(4, &[(1, 2), (3, 4)]);
        let policy = SearchPolicy::bounded(Some(0), None);
        let enumerator = PathEnumerator::new(&store).with_policy(&policy);

        let disconnected = enumerator.collect(id(1), id(4));
        assert!(disconnected.paths.is_empty());
        assert!(!disconnected.truncated);

        let connected = enumerator.collect(id(1), id(2));
        assert!(connected.paths.is_empty());
        assert!(connected.truncated);
    }

    #[test]
    fn test_depth_prune_on_dead_end_spur_is_exact() {
        // 1 - 2 - 3 with a spur 2 - 4 - 5 that never reaches 3
        let store = build(5, &[(1, 2), (2, 3), (2, 4), (4, 5)]);
        let policy = SearchPolicy::bounded(None, Some(2));
        let set = PathEnumerator::new(&store).with_policy(&policy).collect(id(1), id(3));

        assert_eq!(set.paths.len(), 1);
        assert!(!set.truncated);
    }

    #[test]
    fn test_visitor_break_stops_without_truncation() {
        let store = complete(5);
        let mut seen = 0;
        let outcome = PathEnumerator::new(&store).visit(id(1), id(5), |_| {
            seen += 1;
            if seen == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(outcome.paths_visited, 2);
        assert!(!outcome.truncated);
    }
}
