pub mod traits;
pub mod adjacency;
#[cfg(feature = "petgraph")]
pub mod petgraph;

pub use traits::{Graph, MutableGraph};
pub use adjacency::AdjacencyGraph;
