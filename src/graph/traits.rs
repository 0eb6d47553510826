use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait representing a weighted graph that shortest path queries run against
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Node identifier type
    type Node: Clone + Eq + Hash + Ord + Debug;

    /// Returns an iterator over all nodes in the graph
    fn nodes(&self) -> Box<dyn Iterator<Item = Self::Node> + '_>;

    /// Returns an iterator over the neighbors of a node.
    ///
    /// For directed graphs these are the heads of the outgoing edges.
    fn neighbors(&self, node: &Self::Node) -> Box<dyn Iterator<Item = Self::Node> + '_>;

    /// Gets the stored weight of an edge.
    ///
    /// `None` if the edge does not exist or carries no explicit weight.
    fn edge_weight(&self, from: &Self::Node, to: &Self::Node) -> Option<W>;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, node: &Self::Node) -> bool {
        self.nodes().any(|n| &n == node)
    }

    /// Weight used when traversing `from -> to`, defaulting to one
    fn weight(&self, from: &Self::Node, to: &Self::Node) -> W {
        self.edge_weight(from, to).unwrap_or_else(W::one)
    }

    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if edges only lead from their tail to their head
    fn is_directed(&self) -> bool;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a node, returns false if it was already present
    fn add_node(&mut self, node: Self::Node) -> bool;

    /// Removes a node and its connected edges from the graph
    fn remove_node(&mut self, node: &Self::Node) -> bool;

    /// Adds an edge with the given weight, inserting missing endpoints.
    ///
    /// Negative weights are rejected.
    fn add_edge(&mut self, from: Self::Node, to: Self::Node, weight: W) -> bool;

    /// Adds an edge without an explicit weight
    fn add_unweighted_edge(&mut self, from: Self::Node, to: Self::Node) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &Self::Node, to: &Self::Node) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: &Self::Node, to: &Self::Node, weight: W) -> bool;
}
