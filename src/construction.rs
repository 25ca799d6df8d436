//! Nearest-neighbor construction of an initial closed tour.

use crate::problem::DistanceMatrix;
use crate::tour::Tour;

/// Build a cheap feasible starting tour by always appending the nearest
/// unvisited node, then closing the loop back to the start node.
///
/// Ties are broken towards the lower node index, so the construction is
/// fully deterministic. Never fails on a valid matrix; `n = 2` yields the
/// trivial tour `[start, other, start]`.
pub fn nearest_neighbor(matrix: &DistanceMatrix, start: usize) -> Tour {
    let n = matrix.node_count();
    let mut visited = vec![false; n];
    let mut nodes = Vec::with_capacity(n + 1);

    visited[start] = true;
    nodes.push(start);

    let mut current = start;
    for _ in 1..n {
        let mut next = current;
        let mut best_distance = f64::INFINITY;

        // Strict comparison keeps the lowest index among equidistant
        // candidates.
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let distance = matrix.distance(current, candidate);
            if distance < best_distance {
                best_distance = distance;
                next = candidate;
            }
        }

        visited[next] = true;
        nodes.push(next);
        current = next;
    }

    nodes.push(start);
    Tour { nodes }
}
