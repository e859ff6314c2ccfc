//! Topological ordering algorithms with cycle detection.
//!
//! Both algorithms consume a [`DiGraph`] by shared reference and either
//! produce a topological order over all of its nodes or report that the
//! graph contains a cycle. They run in `O(V + E)` time; [`dfs_sort`] keeps
//! an explicit work-stack so deep dependency chains cannot exhaust the call
//! stack, while [`kahn_sort`] is queue-driven and needs no stack at all.

mod dfs;
mod kahn;

pub use dfs::dfs_sort;
pub use kahn::kahn_sort;

use thiserror::Error;

use crate::graph::{DiGraph, NodeIndex};

/// Error returned by the ordering algorithms when the input graph is not a
/// DAG.
///
/// Carries no partial order: detection aborts the sort as soon as a cycle
/// is known to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("graph contains a cycle")]
pub struct CycleDetected;

/// The closed set of topological sorting strategies under comparison.
///
/// The benchmark harness dispatches on this enum rather than a runtime
/// registry; the set of strategies is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Depth-first search with back-edge detection.
    Dfs,
    /// Kahn's source-removal algorithm.
    Kahn,
}

impl Algorithm {
    /// All strategies, in the order they are benchmarked by default.
    pub const ALL: [Algorithm; 2] = [Algorithm::Dfs, Algorithm::Kahn];

    /// Human-readable name, used in measurement records and reports.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "DFS-based Sort",
            Algorithm::Kahn => "Kahn's Algorithm",
        }
    }

    /// Runs this strategy against the given graph.
    pub fn sort(self, graph: &DiGraph) -> Result<Vec<NodeIndex>, CycleDetected> {
        match self {
            Algorithm::Dfs => dfs_sort(graph),
            Algorithm::Kahn => kahn_sort(graph),
        }
    }
}
