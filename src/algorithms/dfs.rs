use bitvec::vec::BitVec;

use super::CycleDetected;
use crate::graph::{DiGraph, NodeIndex};

/// Topologically sorts a graph using a depth-first traversal.
///
/// Every node is classified as unvisited, in-progress, or finished. A node
/// is emitted once all of its descendants are finished, and the emission
/// sequence is reversed at the end to obtain the topological order. An edge
/// into an in-progress node is a back-edge, so the graph contains a cycle
/// and the sort fails with [`CycleDetected`].
///
/// The traversal keeps an explicit work-stack instead of recursing, so
/// dependency chains thousands of nodes long do not exhaust the call stack.
///
/// # Example
///
/// ```
/// use topobench::{algorithms::dfs_sort, DiGraph, NodeIndex};
///
/// let mut graph = DiGraph::new();
/// graph.add_edge(NodeIndex::new(0), NodeIndex::new(1));
/// graph.add_edge(NodeIndex::new(1), NodeIndex::new(2));
///
/// let order = dfs_sort(&graph).unwrap();
/// assert_eq!(order, [0, 1, 2].map(NodeIndex::new));
/// ```
pub fn dfs_sort(graph: &DiGraph) -> Result<Vec<NodeIndex>, CycleDetected> {
    let capacity = graph.node_capacity();
    let mut visited: BitVec = BitVec::repeat(false, capacity);
    let mut finished: BitVec = BitVec::repeat(false, capacity);
    let mut order = Vec::with_capacity(graph.node_count());
    let mut stack: Vec<NodeIndex> = Vec::new();

    for root in graph.nodes_iter() {
        if visited[root.index()] {
            continue;
        }
        stack.push(root);

        while let Some(&next) = stack.last() {
            if !visited.replace(next.index(), true) {
                // First sighting: the node becomes in-progress and stays on
                // the stack until all of its successors are finished.
                for successor in graph.successors(next) {
                    if !visited[successor.index()] {
                        stack.push(successor);
                    } else if !finished[successor.index()] {
                        // In-progress successor: a back-edge.
                        return Err(CycleDetected);
                    }
                }
            } else if !finished.replace(next.index(), true) {
                // Second sighting: all descendants are done.
                stack.pop();
                order.push(next);
            } else {
                // Duplicate stack entry for an already finished node.
                stack.pop();
            }
        }
    }

    order.reverse();
    Ok(order)
}
