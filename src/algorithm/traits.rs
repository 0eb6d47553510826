use num_traits::{Float, Zero};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Graph;
use crate::Result;

/// Distances and reconstructed paths of a path query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths<N, W>
where
    N: Eq + Hash,
{
    /// Distance from the source to each node, infinity if unreachable
    pub distances: HashMap<N, W>,

    /// Node sequence from the source to each reported node.
    ///
    /// Holds only the target when one was requested, otherwise every reachable node.
    pub paths: HashMap<N, Vec<N>>,
}

impl<N, W> ShortestPaths<N, W>
where
    N: Eq + Hash,
    W: Float + Zero + Debug + Copy,
{
    /// Distance to `node`, `None` if the node is not part of the result
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// Path to `node`, `None` if no path was reconstructed for it
    pub fn path(&self, node: &N) -> Option<&[N]> {
        self.paths.get(node).map(Vec::as_slice)
    }

    /// Returns true if `node` has a finite distance from the source
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).map_or(false, |d| d != W::infinity())
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute the shortest distance from `source` to every node of the graph
    fn distances(&self, graph: &G, source: &G::Node) -> Result<HashMap<G::Node, W>>;

    /// Compute distances and shortest paths from `source`.
    ///
    /// With a target, only the target's path is returned and the search may stop
    /// as soon as the target's distance is final.
    fn shortest_paths(
        &self,
        graph: &G,
        source: &G::Node,
        target: Option<&G::Node>,
    ) -> Result<ShortestPaths<G::Node, W>>;

    /// Get the shortest path from source to target as a sequence of nodes.
    ///
    /// `Ok(None)` if the target is unreachable.
    fn path_to(
        &self,
        graph: &G,
        source: &G::Node,
        target: &G::Node,
    ) -> Result<Option<Vec<G::Node>>> {
        let mut result = self.shortest_paths(graph, source, Some(target))?;
        Ok(result.paths.remove(target).filter(|path| !path.is_empty()))
    }
}
