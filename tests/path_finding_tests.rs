use logarithma::algorithm::dijkstra::Dijkstra;
use logarithma::algorithm::traits::ShortestPathAlgorithm;
use logarithma::graph::{AdjacencyGraph, Graph, MutableGraph};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

type Weight = OrderedFloat<f64>;
type Cell = (usize, usize);

// Test helper function to create a grid graph, skipping blocked cells
fn create_test_grid(width: usize, height: usize, blocked: &[Cell]) -> AdjacencyGraph<Cell, Weight> {
    let mut graph: AdjacencyGraph<Cell, Weight> = AdjacencyGraph::directed();

    for y in 0..height {
        for x in 0..width {
            if !blocked.contains(&(x, y)) {
                graph.add_node((x, y));
            }
        }
    }

    // Define possible moves (8 directions)
    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            if blocked.contains(&(x, y)) {
                continue;
            }
            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = (nx as usize, ny as usize);
                    if !blocked.contains(&neighbor) {
                        graph.add_edge((x, y), neighbor, OrderedFloat(cost));
                    }
                }
            }
        }
    }

    graph
}

fn path_weight(graph: &AdjacencyGraph<Cell, Weight>, path: &[Cell]) -> f64 {
    path.windows(2)
        .map(|pair| {
            assert!(graph.has_edge(&pair[0], &pair[1]), "Path should only use existing edges");
            graph.weight(&pair[0], &pair[1]).into_inner()
        })
        .sum()
}

#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10, &[]);
    let source = (0, 0);
    let target = (9, 9);

    let result = Dijkstra::new().shortest_paths(&graph, &source, Some(&target)).unwrap();

    // Nine diagonal steps
    let distance = result.distances[&target].into_inner();
    assert!((distance - 12.6).abs() < 1e-9);

    let path = result.path(&target).expect("Dijkstra should construct a path");
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    assert!((path_weight(&graph, path) - distance).abs() < 1e-9);
}

#[test]
fn test_path_finding_with_obstacles() {
    // Wall in column 5, open only at the bottom two rows
    let wall: Vec<Cell> = (0..8).map(|y| (5, y)).collect();
    let graph = create_test_grid(10, 10, &wall);
    let source = (0, 0);
    let target = (9, 0);

    let result = Dijkstra::new().shortest_paths(&graph, &source, None).unwrap();

    assert!(result.is_reachable(&target), "Dijkstra should find a path around obstacles");
    let path = result.path(&target).unwrap();

    assert_eq!(path[0], source);
    assert_eq!(path[path.len() - 1], target);
    assert!(path.iter().all(|cell| !wall.contains(cell)));
    assert!(path.iter().any(|&(_, y)| y >= 8), "Path should go through the gap");

    let distance = result.distances[&target].into_inner();
    assert!((path_weight(&graph, path) - distance).abs() < 1e-9);
}

#[test]
fn test_path_finding_removed_edges() {
    let mut graph = create_test_grid(3, 1, &[]);
    graph.remove_edge(&(1, 0), &(2, 0));

    let dijkstra = Dijkstra::new();
    assert_eq!(dijkstra.path_to(&graph, &(0, 0), &(2, 0)).unwrap(), None);
    assert_eq!(
        dijkstra.path_to(&graph, &(2, 0), &(0, 0)).unwrap(),
        Some(vec![(2, 0), (1, 0), (0, 0)])
    );
}

// Test the city pathfinding scenario
#[test]
fn test_city_pathfinding() {
    let width = 25;
    let height = 18;

    let mut buildings = Vec::new();
    for &(bx, by) in &[(3, 3), (10, 10)] {
        for dy in 0..3 {
            for dx in 0..3 {
                buildings.push((bx + dx, by + dy));
            }
        }
    }
    let graph = create_test_grid(width, height, &buildings);

    // Define some key locations
    let locations = HashMap::from([
        ("home", (0, 0)),
        ("work", (20, 15)),
        ("gym", (15, 8)),
        ("park", (8, 12)),
    ]);

    let dijkstra = Dijkstra::new();
    for (from_name, source) in &locations {
        let all = dijkstra.shortest_paths(&graph, source, None).unwrap();

        for (to_name, target) in &locations {
            let single = dijkstra.shortest_paths(&graph, source, Some(target)).unwrap();

            assert!(
                single.is_reachable(target),
                "Should find a path from {} to {}",
                from_name,
                to_name
            );
            assert_eq!(single.distances[target], all.distances[target]);

            let path = single.path(target).unwrap();
            assert_eq!(path[0], *source, "Path should start at source");
            assert_eq!(path[path.len() - 1], *target, "Path should end at target");

            let distance = all.distances[target].into_inner();
            assert!((path_weight(&graph, path) - distance).abs() < 1e-9);
        }
    }
}
