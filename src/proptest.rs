//! Proptest strategies for generating random graphs.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::graph::{DiGraph, NodeIndex};

prop_compose! {
    /// A random DAG with at most `max_nodes` nodes and arbitrary density.
    ///
    /// The generated graph may be empty.
    pub fn gen_dag(max_nodes: usize)(
        nodes in 0..=max_nodes,
        density in 0.0..=1.0f64,
        seed in any::<u64>(),
    ) -> DiGraph {
        let mut rng = StdRng::seed_from_u64(seed);
        DiGraph::random_dag(nodes, density, &mut rng)
    }
}

/// A random graph guaranteed to contain at least one cycle.
///
/// Generates a DAG with between 2 and `max_nodes` nodes and closes a
/// two-cycle between an arbitrary pair of adjacent indices.
pub fn gen_cyclic_graph(max_nodes: usize) -> impl Strategy<Value = DiGraph> {
    (2..=max_nodes, 0.0..=1.0f64, any::<u64>())
        .prop_flat_map(|(nodes, density, seed)| (Just((nodes, density, seed)), 0..nodes - 1))
        .prop_map(|((nodes, density, seed), u)| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut graph = DiGraph::random_dag(nodes, density, &mut rng);
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(u + 1));
            graph.add_edge(NodeIndex::new(u + 1), NodeIndex::new(u));
            graph
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn gen_dag_within_bounds(graph in gen_dag(40)) {
            prop_assert!(graph.node_count() <= 40);
            for u in graph.nodes_iter() {
                for v in graph.successors(u) {
                    prop_assert!(u.index() < v.index());
                }
            }
        }

        #[test]
        fn gen_cyclic_graph_has_a_back_edge(graph in gen_cyclic_graph(40)) {
            prop_assert!(graph.node_count() >= 2);
            let back_edges = graph
                .nodes_iter()
                .flat_map(|u| graph.successors(u).map(move |v| (u, v)))
                .filter(|(u, v)| u.index() > v.index())
                .count();
            prop_assert!(back_edges >= 1);
        }
    }
}
