use std::collections::VecDeque;

use super::CycleDetected;
use crate::graph::{DiGraph, NodeIndex};

/// Topologically sorts a graph using Kahn's source-removal algorithm.
///
/// In-degrees are computed with a single scan over all successor lists, and
/// a FIFO queue is seeded with every node of in-degree zero. Popping a node
/// emits it and decrements the in-degree of each successor; successors that
/// reach in-degree zero join the queue. If the queue drains before every
/// node has been emitted, the remaining nodes all lie on or depend on a
/// cycle and the sort fails with [`CycleDetected`].
///
/// Ties between simultaneously ready nodes are broken by queue order; any
/// order consistent with the edges is a valid result.
///
/// # Example
///
/// ```
/// use topobench::{algorithms::kahn_sort, DiGraph, NodeIndex};
///
/// let mut graph = DiGraph::new();
/// graph.add_edge(NodeIndex::new(0), NodeIndex::new(1));
/// graph.add_edge(NodeIndex::new(1), NodeIndex::new(2));
///
/// let order = kahn_sort(&graph).unwrap();
/// assert_eq!(order, [0, 1, 2].map(NodeIndex::new));
/// ```
pub fn kahn_sort(graph: &DiGraph) -> Result<Vec<NodeIndex>, CycleDetected> {
    let mut in_degree = vec![0usize; graph.node_capacity()];
    for node in graph.nodes_iter() {
        for successor in graph.successors(node) {
            in_degree[successor.index()] += 1;
        }
    }

    let mut queue: VecDeque<NodeIndex> = graph
        .nodes_iter()
        .filter(|node| in_degree[node.index()] == 0)
        .collect();

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(node) = queue.pop_front() {
        order.push(node);
        for successor in graph.successors(node) {
            in_degree[successor.index()] -= 1;
            if in_degree[successor.index()] == 0 {
                queue.push_back(successor);
            }
        }
    }

    // Nodes still holding a positive in-degree are on or behind a cycle.
    if order.len() != graph.node_count() {
        return Err(CycleDetected);
    }
    Ok(order)
}
