//! Unit tests for the nearest-neighbor construction.

use tsp_ls::construction::nearest_neighbor;
use tsp_ls::problem::{Coordinate, DistanceMatrix};

/// Five points spread along the equator, in scrambled longitude order.
fn create_test_matrix() -> DistanceMatrix {
    let coordinates = vec![
        Coordinate::new(0.0, 0.0),
        Coordinate::new(0.0, 3.0),
        Coordinate::new(0.0, 1.0),
        Coordinate::new(0.0, 4.0),
        Coordinate::new(0.0, 2.0),
    ];
    DistanceMatrix::build(&coordinates).unwrap()
}

#[test]
fn test_two_nodes_trivial_tour() {
    let coordinates = vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
    let matrix = DistanceMatrix::build(&coordinates).unwrap();

    let tour = nearest_neighbor(&matrix, 0);
    assert_eq!(tour.nodes, vec![0, 1, 0]);
}

#[test]
fn test_tour_is_closed_permutation() {
    let matrix = create_test_matrix();
    let tour = nearest_neighbor(&matrix, 0);

    assert!(tour.is_valid(matrix.node_count()));
    assert_eq!(tour.nodes[0], 0);
    assert_eq!(tour.nodes[matrix.node_count()], 0);
}

#[test]
fn test_follows_nearest_unvisited() {
    // From longitude 0 the walk should sweep east in longitude order.
    let matrix = create_test_matrix();
    let tour = nearest_neighbor(&matrix, 0);
    assert_eq!(tour.nodes, vec![0, 2, 4, 1, 3, 0]);
}

#[test]
fn test_starts_at_requested_node() {
    let matrix = create_test_matrix();
    let tour = nearest_neighbor(&matrix, 3);

    assert!(tour.is_valid(matrix.node_count()));
    assert_eq!(tour.nodes[0], 3);
    assert_eq!(tour.nodes[matrix.node_count()], 3);
}

#[test]
fn test_tie_breaks_towards_lower_index() {
    // Nodes 1 and 2 sit at the same location, so both are exactly
    // equidistant from node 0; the lower index must be visited first.
    let coordinates = vec![
        Coordinate::new(0.0, 0.0),
        Coordinate::new(0.0, 1.0),
        Coordinate::new(0.0, 1.0),
    ];
    let matrix = DistanceMatrix::build(&coordinates).unwrap();

    let tour = nearest_neighbor(&matrix, 0);
    assert_eq!(tour.nodes, vec![0, 1, 2, 0]);
}

#[test]
fn test_construction_is_deterministic() {
    let matrix = create_test_matrix();
    let first = nearest_neighbor(&matrix, 0);
    let second = nearest_neighbor(&matrix, 0);
    assert_eq!(first, second);
}
