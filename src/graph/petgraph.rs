//! [`Graph`] implementation for `petgraph::Graph`.
//!
//! Nodes are identified by their `NodeIndex` and the edge weight is the
//! petgraph edge payload. Undirected petgraph graphs report neighbors in both
//! directions. Parallel edges are weighed by the cheapest one.

use ::petgraph::graph::{Graph as PetGraph, IndexType, NodeIndex};
use ::petgraph::EdgeType;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::traits::Graph;

impl<N, W, Ty, Ix> Graph<W> for PetGraph<N, W, Ty, Ix>
where
    N: Debug,
    W: Float + Zero + Debug + Copy,
    Ty: EdgeType,
    Ix: IndexType,
{
    type Node = NodeIndex<Ix>;

    fn nodes(&self) -> Box<dyn Iterator<Item = NodeIndex<Ix>> + '_> {
        Box::new(self.node_indices())
    }

    fn neighbors(&self, node: &NodeIndex<Ix>) -> Box<dyn Iterator<Item = NodeIndex<Ix>> + '_> {
        if node.index() >= PetGraph::node_count(self) {
            return Box::new(std::iter::empty());
        }
        Box::new(PetGraph::neighbors(self, *node))
    }

    fn edge_weight(&self, from: &NodeIndex<Ix>, to: &NodeIndex<Ix>) -> Option<W> {
        self.edges_connecting(*from, *to)
            .map(|edge| *edge.weight())
            .reduce(Float::min)
    }

    fn contains_node(&self, node: &NodeIndex<Ix>) -> bool {
        node.index() < PetGraph::node_count(self)
    }

    fn node_count(&self) -> usize {
        PetGraph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        PetGraph::edge_count(self)
    }

    fn is_directed(&self) -> bool {
        PetGraph::is_directed(self)
    }
}
