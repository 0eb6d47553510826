use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A weighted graph implementation using adjacency lists.
///
/// Nodes are arbitrary hashable identifiers and are enumerated in insertion
/// order. An undirected graph stores every edge in both endpoint lists.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    directed: bool,

    /// Nodes in insertion order
    order: Vec<N>,

    /// Edges for each node: node -> [(neighbor, weight)]
    adjacency: HashMap<N, Vec<(N, Option<W>)>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::with_capacity(false, 0)
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::with_capacity(true, 0)
    }

    /// Creates a new empty graph with room for the specified number of nodes
    pub fn with_capacity(directed: bool, nodes: usize) -> Self {
        AdjacencyGraph {
            directed,
            order: Vec::with_capacity(nodes),
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = Self::with_capacity(directed, 0);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.adjacency
            .values()
            .flatten()
            .all(|(_, weight)| weight.map_or(true, |w| w >= W::zero()))
    }

    /// Returns true if there's an edge from `from` to `to`
    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| target == to))
    }

    fn insert_half_edge(&mut self, from: &N, to: &N, weight: Option<W>) {
        let edges = self.adjacency.entry(from.clone()).or_default();
        match edges.iter_mut().find(|(target, _)| target == to) {
            Some(edge) => edge.1 = weight,
            None => edges.push((to.clone(), weight)),
        }
    }

    fn remove_half_edge(&mut self, from: &N, to: &N) -> bool {
        match self.adjacency.get_mut(from) {
            Some(edges) => {
                let len_before = edges.len();
                edges.retain(|(target, _)| target != to);
                len_before > edges.len()
            }
            None => false,
        }
    }

    fn set_edge(&mut self, from: N, to: N, weight: Option<W>) {
        self.add_node(from.clone());
        self.add_node(to.clone());

        self.insert_half_edge(&from, &to, weight);
        if !self.directed && from != to {
            self.insert_half_edge(&to, &from, weight);
        }
    }
}

impl<N, W> Graph<W> for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    type Node = N;

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.order.iter().cloned())
    }

    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = N> + '_> {
        if let Some(edges) = self.adjacency.get(node) {
            Box::new(edges.iter().map(|(target, _)| target.clone()))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .and_then(|(_, weight)| *weight)
    }

    fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn node_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        let half_edges: usize = self.adjacency.values().map(|edges| edges.len()).sum();
        if self.directed {
            return half_edges;
        }

        // Self-loops are stored once
        let loops = self
            .adjacency
            .iter()
            .filter(|(node, edges)| edges.iter().any(|(target, _)| target == *node))
            .count();
        (half_edges - loops) / 2 + loops
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<N, W> MutableGraph<W> for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node.clone(), Vec::new());
        self.order.push(node);
        true
    }

    fn remove_node(&mut self, node: &N) -> bool {
        if self.adjacency.remove(node).is_none() {
            return false;
        }

        // Drop every edge pointing at the removed node
        for edges in self.adjacency.values_mut() {
            edges.retain(|(target, _)| target != node);
        }
        self.order.retain(|n| n != node);
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }
        self.set_edge(from, to, Some(weight));
        true
    }

    fn add_unweighted_edge(&mut self, from: N, to: N) -> bool {
        self.set_edge(from, to, None);
        true
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let removed = self.remove_half_edge(from, to);
        if removed && !self.directed && from != to {
            self.remove_half_edge(to, from);
        }
        removed
    }

    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> bool {
        if weight < W::zero() || !self.has_edge(from, to) {
            return false;
        }

        self.insert_half_edge(from, to, Some(weight));
        if !self.directed && from != to {
            self.insert_half_edge(to, from, Some(weight));
        }
        true
    }
}
