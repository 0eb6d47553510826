use log::{debug, trace};
use num_traits::{Float, Zero};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::path::reconstruct_path;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPaths};
use crate::data_structures::Frontier;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// Runs in O((V + E) log V) using a binary heap with lazy deletion: improved
/// distances are pushed as new entries and stale ones are skipped when popped.
///
/// When several shortest paths exist, the reported one is determined by the
/// settling order: equal distances are settled smallest node first, and a node
/// keeps the predecessor that first reached its final distance.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    early_termination: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            early_termination: true,
        }
    }

    /// Stop the search as soon as the target is popped from the frontier.
    ///
    /// Enabled by default. When disabled, a path query with a target still
    /// computes every distance.
    pub fn with_early_termination(mut self, enabled: bool) -> Self {
        self.early_termination = enabled;
        self
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters collected by one run of the relaxation loop
#[derive(Debug, Default, Clone, Copy)]
struct RelaxationStats {
    settled: usize,
    relaxations: usize,
    stale_pops: usize,
    early_exit: bool,
}

/// Output of the relaxation loop
struct Relaxation<N, W> {
    distances: HashMap<N, W>,
    /// Absent key means no predecessor
    predecessors: HashMap<N, N>,
}

fn check_membership<W, G>(graph: &G, source: &G::Node, target: Option<&G::Node>) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if !graph.contains_node(source) {
        return Err(Error::UnknownSource(format!("{:?}", source)));
    }
    if let Some(target) = target {
        if !graph.contains_node(target) {
            return Err(Error::UnknownTarget(format!("{:?}", target)));
        }
    }
    Ok(())
}

/// Runs the relaxation loop from `source`, optionally stopping at `target`
/// and optionally recording predecessors.
///
/// Both nodes must already be known members of `graph`.
fn relax<W, G>(
    graph: &G,
    source: &G::Node,
    target: Option<&G::Node>,
    record_predecessors: bool,
) -> Relaxation<G::Node, W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let mut distances: HashMap<G::Node, W> =
        graph.nodes().map(|node| (node, W::infinity())).collect();
    distances.insert(source.clone(), W::zero());
    let mut predecessors = HashMap::new();

    let mut frontier = Frontier::starting_at(source.clone(), W::zero());
    let mut settled = HashSet::with_capacity(distances.len());
    let mut stats = RelaxationStats::default();

    while let Some((current, current_dist)) = frontier.pop() {
        // The first pop of the target already carries its final distance
        if target == Some(&current) {
            stats.early_exit = true;
            break;
        }

        if !settled.insert(current.clone()) {
            stats.stale_pops += 1;
            continue;
        }
        stats.settled += 1;
        trace!("Settled {:?} at distance {:?}", current, current_dist);

        for neighbor in graph.neighbors(&current) {
            let new_dist = current_dist + graph.weight(&current, &neighbor);
            let known = distances.get(&neighbor).copied().unwrap_or_else(W::infinity);

            if new_dist < known {
                stats.relaxations += 1;
                distances.insert(neighbor.clone(), new_dist);
                if record_predecessors {
                    predecessors.insert(neighbor.clone(), current.clone());
                }
                frontier.push(neighbor, new_dist);
            }
        }
    }

    debug!(
        "Dijkstra from {:?}: settled {} nodes, {} relaxations, {} stale entries, early exit: {}",
        source, stats.settled, stats.relaxations, stats.stale_pops, stats.early_exit
    );

    Relaxation {
        distances,
        predecessors,
    }
}

fn collect_paths<N, W>(
    target: Option<&N>,
    predecessors: &HashMap<N, N>,
    distances: &HashMap<N, W>,
) -> HashMap<N, Vec<N>>
where
    N: Clone + Eq + Hash + Debug,
    W: Float,
{
    match target {
        Some(target) => {
            let path = reconstruct_path(target, predecessors, distances);
            HashMap::from([(target.clone(), path)])
        }
        None => distances
            .iter()
            .filter(|(_, distance)| **distance != W::infinity())
            .map(|(node, _)| (node.clone(), reconstruct_path(node, predecessors, distances)))
            .collect(),
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn distances(&self, graph: &G, source: &G::Node) -> Result<HashMap<G::Node, W>> {
        check_membership::<W, G>(graph, source, None)?;
        Ok(relax::<W, G>(graph, source, None, false).distances)
    }

    fn shortest_paths(
        &self,
        graph: &G,
        source: &G::Node,
        target: Option<&G::Node>,
    ) -> Result<ShortestPaths<G::Node, W>> {
        check_membership::<W, G>(graph, source, target)?;

        let stop_at = target.filter(|_| self.early_termination);
        let Relaxation {
            distances,
            predecessors,
        } = relax::<W, G>(graph, source, stop_at, true);

        let paths = collect_paths(target, &predecessors, &distances);
        Ok(ShortestPaths { distances, paths })
    }
}

/// Shortest distance from `source` to every node of `graph`.
///
/// Unreachable nodes map to infinity.
pub fn dijkstra<W, G>(graph: &G, source: &G::Node) -> Result<HashMap<G::Node, W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    <Dijkstra as ShortestPathAlgorithm<W, G>>::distances(&Dijkstra::new(), graph, source)
}

/// Shortest distances from `source` together with reconstructed paths.
///
/// With a `target`, the search stops once the target is reached and `paths`
/// holds only the target's entry (empty if unreachable). Without one, `paths`
/// holds every reachable node.
pub fn dijkstra_with_path<W, G>(
    graph: &G,
    source: &G::Node,
    target: Option<&G::Node>,
) -> Result<ShortestPaths<G::Node, W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let dijkstra = Dijkstra::new();
    <Dijkstra as ShortestPathAlgorithm<W, G>>::shortest_paths(&dijkstra, graph, source, target)
}
