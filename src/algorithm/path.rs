use log::warn;
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Reconstructs the path from the source to `target` by following predecessor links.
///
/// The source is the node without a predecessor. Returns an empty path when the
/// target is unreachable, i.e. its distance is infinite or unknown.
pub fn reconstruct_path<N, W>(
    target: &N,
    predecessors: &HashMap<N, N>,
    distances: &HashMap<N, W>,
) -> Vec<N>
where
    N: Clone + Eq + Hash + Debug,
    W: Float,
{
    match distances.get(target) {
        Some(distance) if *distance != W::infinity() => {}
        _ => return Vec::new(),
    }

    let mut path = vec![target.clone()];
    let mut current = target;

    // Build path in reverse order
    while let Some(pred) = predecessors.get(current) {
        // A simple path visits each predecessor entry at most once
        if path.len() > predecessors.len() {
            warn!("Cycle in predecessor links while reconstructing path to {:?}", target);
            return Vec::new();
        }
        path.push(pred.clone());
        current = pred;
    }

    path.reverse();
    path
}
