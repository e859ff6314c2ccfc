//! Adjacency-list representation of a directed graph, and random DAG
//! generation.

use std::fmt;

use bitvec::vec::BitVec;
use rand::Rng;

/// Index of a node within a [`DiGraph`].
///
/// Node indices are dense non-negative integers; `random_dag` numbers its
/// nodes `0..n`.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Creates a new node index from a zero-based `usize`.
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index as a zero-based `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed graph stored as insertion-ordered successor lists.
///
/// Nodes are identified by [`NodeIndex`]. The graph is mutated only through
/// [`add_node`] and [`add_edge`] during construction and is read-only
/// afterwards; the ordering algorithms take it by shared reference.
///
/// No structural checks are performed on insertion: duplicate edges and
/// self-loops are stored as given, and cycles are only discovered by the
/// ordering algorithms.
///
/// [`add_node`]: DiGraph::add_node
/// [`add_edge`]: DiGraph::add_edge
///
/// # Example
///
/// ```
/// use topobench::{DiGraph, NodeIndex};
///
/// let mut graph = DiGraph::new();
/// graph.add_edge(NodeIndex::new(0), NodeIndex::new(1));
/// graph.add_node(NodeIndex::new(2));
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    /// Bit `i` is set iff node `i` is present.
    nodes: BitVec,
    /// Successor lists, indexed by node. Always the same length as `nodes`.
    adjacency: Vec<Vec<NodeIndex>>,
    node_count: usize,
}

impl DiGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with storage preallocated for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: BitVec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            node_count: 0,
        }
    }

    /// Inserts a node into the graph. Idempotent.
    pub fn add_node(&mut self, node: NodeIndex) {
        let index = node.index();
        if index >= self.nodes.len() {
            self.nodes.resize(index + 1, false);
            self.adjacency.resize_with(index + 1, Vec::new);
        }
        if !self.nodes.replace(index, true) {
            self.node_count += 1;
        }
    }

    /// Adds a directed edge from `from` to `to`, inserting either endpoint
    /// if it is not yet present.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.add_node(from);
        self.add_node(to);
        self.adjacency[from.index()].push(to);
    }

    /// Whether the graph contains the given node.
    #[inline]
    pub fn contains_node(&self, node: NodeIndex) -> bool {
        self.nodes.get(node.index()).is_some_and(|b| *b)
    }

    /// Returns the number of nodes in the graph.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of edges in the graph, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// One past the highest node index ever inserted.
    ///
    /// This is the size to use for dense per-node state such as the
    /// classification bitsets in the ordering algorithms.
    #[inline]
    pub fn node_capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over all nodes in the graph, in ascending index order.
    pub fn nodes_iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter_ones().map(NodeIndex::new)
    }

    /// Iterates over the successors of a node, in insertion order.
    ///
    /// Returns an empty iterator for nodes that are not in the graph.
    pub fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .copied()
    }

    /// Generates a random DAG with `nodes` nodes.
    ///
    /// For every ordered pair `(u, v)` with `u < v` the edge is added
    /// independently with probability `density`. Restricting edges to run
    /// from lower to higher indices guarantees the result is acyclic. All
    /// `nodes` nodes are added regardless of degree, so the graph may
    /// contain isolated nodes.
    ///
    /// Density `0.0` yields an edgeless graph; density `1.0` yields the
    /// complete DAG with `n * (n - 1) / 2` edges.
    ///
    /// # Panics
    ///
    /// Panics if `density` is not in the range `0.0..=1.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use topobench::DiGraph;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let graph = DiGraph::random_dag(100, 1.0, &mut rng);
    /// assert_eq!(graph.edge_count(), 100 * 99 / 2);
    /// ```
    pub fn random_dag(nodes: usize, density: f64, rng: &mut impl Rng) -> Self {
        let mut graph = Self::with_capacity(nodes);
        for u in 0..nodes {
            graph.add_node(NodeIndex::new(u));
            for v in u + 1..nodes {
                if rng.random_bool(density) {
                    graph.add_edge(NodeIndex::new(u), NodeIndex::new(v));
                }
            }
        }
        graph
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = DiGraph::new();
        graph.add_node(NodeIndex::new(3));
        graph.add_node(NodeIndex::new(3));
        graph.add_node(NodeIndex::new(0));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.contains_node(NodeIndex::new(3)));
        assert!(!graph.contains_node(NodeIndex::new(1)));
        assert!(!graph.contains_node(NodeIndex::new(100)));
    }

    #[test]
    fn add_edge_inserts_endpoints() {
        let mut graph = DiGraph::new();
        graph.add_edge(NodeIndex::new(0), NodeIndex::new(2));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_node(NodeIndex::new(0)));
        assert!(!graph.contains_node(NodeIndex::new(1)));
        assert!(graph.contains_node(NodeIndex::new(2)));
        assert_eq!(
            graph.successors(NodeIndex::new(0)).collect::<Vec<_>>(),
            [NodeIndex::new(2)]
        );
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let mut graph = DiGraph::new();
        graph.add_edge(NodeIndex::new(0), NodeIndex::new(1));
        graph.add_edge(NodeIndex::new(0), NodeIndex::new(1));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.successors(NodeIndex::new(0)).count(), 2);
    }

    #[test]
    fn nodes_iter_ascending() {
        let mut graph = DiGraph::new();
        graph.add_node(NodeIndex::new(5));
        graph.add_node(NodeIndex::new(1));
        graph.add_node(NodeIndex::new(3));

        let nodes: Vec<_> = graph.nodes_iter().map(NodeIndex::index).collect();
        assert_eq!(nodes, [1, 3, 5]);
        assert_eq!(graph.node_capacity(), 6);
    }

    #[test]
    fn random_dag_boundaries() {
        let mut rng = StdRng::seed_from_u64(42);

        let empty = DiGraph::random_dag(0, 0.5, &mut rng);
        assert!(empty.is_empty());
        assert_eq!(empty.edge_count(), 0);

        let edgeless = DiGraph::random_dag(20, 0.0, &mut rng);
        assert_eq!(edgeless.node_count(), 20);
        assert_eq!(edgeless.edge_count(), 0);

        let complete = DiGraph::random_dag(20, 1.0, &mut rng);
        assert_eq!(complete.node_count(), 20);
        assert_eq!(complete.edge_count(), 20 * 19 / 2);
    }

    #[test]
    fn random_dag_edges_run_forward() {
        let mut rng = StdRng::seed_from_u64(37);
        let graph = DiGraph::random_dag(50, 0.3, &mut rng);

        assert_eq!(graph.node_count(), 50);
        for u in graph.nodes_iter() {
            for v in graph.successors(u) {
                assert!(u.index() < v.index(), "edge {u} -> {v} runs backwards");
            }
        }
    }
}
