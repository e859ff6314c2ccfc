//! Measurement harness comparing the ordering algorithms across graph
//! sizes.
//!
//! For every target node count the harness generates a single random DAG
//! and times each algorithm against that same instance, so that the
//! comparison at a given size is measured on identical input. Timing is
//! mean wall-clock per call over a small fixed number of repetitions.

use std::hint::black_box;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;

use crate::algorithms::{Algorithm, CycleDetected};
use crate::graph::DiGraph;

/// Number of timed calls averaged into each measurement.
pub const RUNS_PER_MEASUREMENT: u32 = 10;

/// Smallest node count produced by [`size_steps`].
pub const MIN_STEP_NODES: usize = 50;

/// One timing record for an (algorithm, graph size) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Display name of the algorithm.
    pub algorithm: &'static str,
    /// Number of nodes `V` in the measured graph.
    pub nodes: usize,
    /// Number of edges `E` in the measured graph.
    pub edges: usize,
    /// `V + E`, the input size an `O(V + E)` algorithm scales with.
    pub size: usize,
    /// Mean wall-clock time per call in milliseconds, or `None` when the
    /// timing failed.
    pub avg_time_ms: Option<f64>,
}

/// Error produced by the measurement harness.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// An algorithm reported a cycle in a graph that was generated to be
    /// acyclic. This indicates a generation or algorithm defect and aborts
    /// the run.
    #[error("{algorithm} detected a cycle in a generated DAG with {nodes} nodes")]
    UnexpectedCycle {
        /// Display name of the failing algorithm.
        algorithm: &'static str,
        /// Node count of the offending graph.
        nodes: usize,
        /// The underlying cycle report.
        #[source]
        source: CycleDetected,
    },
}

/// Times each algorithm against one shared graph.
///
/// The graph is borrowed read-only by every invocation; records are
/// returned in the order the algorithms are given. The caller vouches that
/// the graph is acyclic, so a [`CycleDetected`] from any algorithm is
/// escalated to [`AnalysisError::UnexpectedCycle`] instead of being
/// recorded as a missing timing.
pub fn measure_graph(
    algorithms: &[Algorithm],
    graph: &DiGraph,
) -> Result<Vec<Measurement>, AnalysisError> {
    let nodes = graph.node_count();
    let edges = graph.edge_count();

    let mut records = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let start = Instant::now();
        for _ in 0..RUNS_PER_MEASUREMENT {
            let order = algorithm
                .sort(graph)
                .map_err(|source| AnalysisError::UnexpectedCycle {
                    algorithm: algorithm.name(),
                    nodes,
                    source,
                })?;
            black_box(order);
        }
        let avg_time_ms = start.elapsed().as_secs_f64() * 1e3 / f64::from(RUNS_PER_MEASUREMENT);

        records.push(Measurement {
            algorithm: algorithm.name(),
            nodes,
            edges,
            size: nodes + edges,
            avg_time_ms: Some(avg_time_ms),
        });
    }
    Ok(records)
}

/// Generates one random DAG with `nodes` nodes and times each algorithm
/// against it.
pub fn measure_size(
    algorithms: &[Algorithm],
    nodes: usize,
    density: f64,
    rng: &mut impl rand::Rng,
) -> Result<Vec<Measurement>, AnalysisError> {
    let graph = DiGraph::random_dag(nodes, density, rng);
    measure_graph(algorithms, &graph)
}

/// Runs the full analysis: one graph per node count, every algorithm timed
/// on each.
///
/// Node counts are processed in the given order; the returned records are
/// size-major, algorithm-minor.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use topobench::{analysis::run_analysis, Algorithm};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let records = run_analysis(&Algorithm::ALL, &[10, 20], 0.2, &mut rng).unwrap();
/// assert_eq!(records.len(), 4);
/// ```
pub fn run_analysis(
    algorithms: &[Algorithm],
    node_counts: &[usize],
    density: f64,
    rng: &mut impl rand::Rng,
) -> Result<Vec<Measurement>, AnalysisError> {
    let mut records = Vec::with_capacity(algorithms.len() * node_counts.len());
    for &nodes in node_counts {
        records.extend(measure_size(algorithms, nodes, density, rng)?);
    }
    Ok(records)
}

/// Returns `steps` node counts evenly spaced from [`MIN_STEP_NODES`] to
/// `max_nodes` inclusive, truncated to integers.
pub fn size_steps(max_nodes: usize, steps: usize) -> Vec<usize> {
    match steps {
        0 => Vec::new(),
        1 => vec![MIN_STEP_NODES],
        _ => {
            let start = MIN_STEP_NODES as f64;
            let stop = max_nodes as f64;
            (0..steps)
                .map(|i| (start + (stop - start) * i as f64 / (steps - 1) as f64) as usize)
                .collect()
        }
    }
}
