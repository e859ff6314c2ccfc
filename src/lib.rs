#![warn(missing_docs)]
//! `topobench` empirically compares two algorithms for topologically
//! ordering a directed acyclic graph: a depth-first-search based sort and
//! Kahn's source-removal algorithm.
//!
//! The crate provides three pieces: [`DiGraph`], a mutable adjacency-list
//! digraph with a random DAG generator; the two ordering algorithms in
//! [`algorithms`], each returning either a topological order or a
//! [`CycleDetected`] failure; and the measurement harness in [`analysis`],
//! which times both algorithms over the same generated graph across a range
//! of sizes and produces one [`Measurement`] record per (algorithm, size)
//! pair. The [`report`] module serializes those records to CSV or JSON.
//!
//! Generated graphs are acyclic by construction (edges only run from lower
//! to higher node indices), but the algorithms make no such assumption and
//! detect cycles in arbitrary input.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use topobench::{dfs_sort, kahn_sort, DiGraph};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let graph = DiGraph::random_dag(100, 0.1, &mut rng);
//!
//! // Both algorithms order all 100 nodes; every edge runs forwards in
//! // the returned sequence.
//! let order = dfs_sort(&graph).unwrap();
//! assert_eq!(order.len(), 100);
//! let order = kahn_sort(&graph).unwrap();
//! assert_eq!(order.len(), 100);
//! ```

pub mod algorithms;
pub mod analysis;
pub mod graph;
#[cfg(feature = "proptest")]
pub mod proptest;
pub mod report;

pub use crate::algorithms::{dfs_sort, kahn_sort, Algorithm, CycleDetected};
pub use crate::analysis::{run_analysis, AnalysisError, Measurement};
pub use crate::graph::{DiGraph, NodeIndex};
