//! Unit tests for the 2-opt and Or-opt neighborhoods.

use std::time::Instant;
use tsp_ls::local_search::{Budget, LocalSearch};
use tsp_ls::problem::{Coordinate, DistanceMatrix};
use tsp_ls::tour::{Termination, Tour};

fn unbounded() -> Budget {
    Budget {
        max_sweeps: u64::MAX,
        deadline: None,
    }
}

/// Corners of a one-degree square.
fn create_square_matrix() -> DistanceMatrix {
    let coordinates = vec![
        Coordinate::new(0.0, 0.0),
        Coordinate::new(0.0, 1.0),
        Coordinate::new(1.0, 1.0),
        Coordinate::new(1.0, 0.0),
    ];
    DistanceMatrix::build(&coordinates).unwrap()
}

/// Points strung along the equator at the given longitudes.
fn create_equator_matrix(longitudes: &[f64]) -> DistanceMatrix {
    let coordinates: Vec<Coordinate> = longitudes
        .iter()
        .map(|&longitude| Coordinate::new(0.0, longitude))
        .collect();
    DistanceMatrix::build(&coordinates).unwrap()
}

#[test]
fn test_two_opt_untangles_bowtie() {
    let matrix = create_square_matrix();
    // 0 -> 2 -> 1 -> 3 -> 0 crosses both diagonals.
    let mut tour = Tour {
        nodes: vec![0, 2, 1, 3, 0],
    };
    let crossed_length = tour.length(&matrix);

    let improver = LocalSearch::new();
    let (applied, timed_out) = improver.two_opt_sweep(&mut tour, &matrix, &unbounded());

    assert!(applied > 0);
    assert!(!timed_out);
    assert!(tour.is_valid(4));
    assert!(tour.length(&matrix) < crossed_length);

    // The perimeter visits the corners in rotational order: every step moves
    // to an adjacent corner.
    for window in tour.nodes.windows(2) {
        let step = (4 + window[1]) - window[0];
        assert!(step % 4 == 1 || step % 4 == 3, "diagonal edge in {:?}", tour.nodes);
    }
}

#[test]
fn test_or_opt_relocates_stray_node() {
    // Node 3 sits far east; visiting it between 0 and 1 backtracks.
    let matrix = create_equator_matrix(&[0.0, 1.0, 2.0, 6.0]);
    let mut tour = Tour {
        nodes: vec![0, 3, 1, 2, 0],
    };
    let initial_length = tour.length(&matrix);

    let improver = LocalSearch::new();
    let (applied, timed_out) = improver.or_opt_sweep(&mut tour, &matrix, &unbounded());

    assert!(applied > 0);
    assert!(!timed_out);
    assert!(tour.is_valid(4));
    assert!(tour.length(&matrix) < initial_length);
}

#[test]
fn test_improve_is_monotone() {
    let matrix = create_equator_matrix(&[0.0, 5.0, 1.0, 4.0, 2.0, 3.0, 6.0]);
    let mut tour = Tour {
        nodes: vec![0, 1, 2, 3, 4, 5, 6, 0],
    };
    let initial_length = tour.length(&matrix);

    let improver = LocalSearch::new();
    let improvement = improver.improve(&mut tour, &matrix, &unbounded());

    assert_eq!(improvement.termination, Termination::LocalOptimum);
    assert!(tour.is_valid(7));
    assert!(tour.length(&matrix) <= initial_length);
}

#[test]
fn test_improve_is_idempotent() {
    let matrix = create_equator_matrix(&[0.0, 5.0, 1.0, 4.0, 2.0, 3.0]);
    let mut tour = Tour {
        nodes: vec![0, 1, 2, 3, 4, 5, 0],
    };

    let improver = LocalSearch::new();
    improver.improve(&mut tour, &matrix, &unbounded());

    let settled = tour.clone();
    let settled_length = tour.length(&matrix);
    let second = improver.improve(&mut tour, &matrix, &unbounded());

    assert_eq!(second.moves_applied, 0);
    assert_eq!(tour, settled);
    assert_eq!(tour.length(&matrix), settled_length);
}

#[test]
fn test_locally_optimal_tour_unchanged() {
    let matrix = create_square_matrix();
    let mut tour = Tour {
        nodes: vec![0, 1, 2, 3, 0],
    };

    let improver = LocalSearch::new();
    let improvement = improver.improve(&mut tour, &matrix, &unbounded());

    assert_eq!(improvement.termination, Termination::LocalOptimum);
    assert_eq!(improvement.moves_applied, 0);
    assert_eq!(tour.nodes, vec![0, 1, 2, 3, 0]);
}

#[test]
fn test_zero_sweep_budget_returns_input() {
    let matrix = create_square_matrix();
    let mut tour = Tour {
        nodes: vec![0, 2, 1, 3, 0],
    };
    let budget = Budget {
        max_sweeps: 0,
        deadline: None,
    };

    let improver = LocalSearch::new();
    let improvement = improver.improve(&mut tour, &matrix, &budget);

    assert_eq!(improvement.termination, Termination::BudgetExceeded);
    assert_eq!(improvement.moves_applied, 0);
    assert_eq!(tour.nodes, vec![0, 2, 1, 3, 0]);
}

#[test]
fn test_expired_deadline_leaves_valid_tour() {
    let matrix = create_equator_matrix(&[0.0, 5.0, 1.0, 4.0, 2.0]);
    let mut tour = Tour {
        nodes: vec![0, 1, 2, 3, 4, 0],
    };
    let budget = Budget {
        max_sweeps: u64::MAX,
        deadline: Some(Instant::now()),
    };

    let improver = LocalSearch::new();
    let improvement = improver.improve(&mut tour, &matrix, &budget);

    assert_eq!(improvement.termination, Termination::BudgetExceeded);
    assert!(tour.is_valid(5));
}

#[test]
fn test_sweeps_are_deterministic() {
    let matrix = create_equator_matrix(&[0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);

    let mut first = Tour {
        nodes: vec![0, 1, 2, 3, 4, 5, 0],
    };
    let mut second = first.clone();

    let improver = LocalSearch::new();
    improver.improve(&mut first, &matrix, &unbounded());
    improver.improve(&mut second, &matrix, &unbounded());

    assert_eq!(first, second);
}
