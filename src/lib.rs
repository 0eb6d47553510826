//! Logarithma - Graph Algorithms Library
//!
//! Single-source shortest paths over weighted graphs using Dijkstra's algorithm.
//! Distances can be queried on their own, or together with the shortest path to
//! one target (or to every reachable node).
//!
//! ```
//! use logarithma::{dijkstra, AdjacencyGraph, MutableGraph, Weight};
//! use ordered_float::OrderedFloat;
//!
//! let mut graph: AdjacencyGraph<&str, Weight> = AdjacencyGraph::undirected();
//! graph.add_edge("A", "B", OrderedFloat(4.0));
//! graph.add_edge("A", "C", OrderedFloat(2.0));
//! graph.add_edge("B", "C", OrderedFloat(1.0));
//!
//! let distances = dijkstra(&graph, &"A").unwrap();
//! assert_eq!(distances[&"B"], OrderedFloat(3.0));
//! ```
//!
//! Edge weights must be non-negative. This is not checked by the algorithms.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{dijkstra, dijkstra_with_path, Dijkstra},
    ShortestPathAlgorithm, ShortestPaths,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Graph, MutableGraph};

/// Default edge weight: an `f64` with a total order, as the algorithms require `Ord`.
///
/// Serializes as a plain number, infinity as `null` in JSON.
pub type Weight = ordered_float::OrderedFloat<f64>;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Source vertex {0} not found in graph")]
    UnknownSource(String),

    #[error("Target vertex {0} not found in graph")]
    UnknownTarget(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
