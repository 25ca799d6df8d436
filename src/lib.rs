//! # tsp-ls
//!
//! A single-vehicle closed-tour optimizer over geographic coordinates.
//!
//! The engine builds a great-circle distance matrix, constructs an initial
//! tour with the nearest-neighbor heuristic, and shortens it with 2-opt and
//! Or-opt local search until no improving move remains or a configured
//! budget runs out. Results are deterministic for a fixed input and
//! configuration.
//!
//! Turning addresses into coordinates and rendering the resulting tour are
//! jobs for external collaborators; this crate consumes `(latitude,
//! longitude)` pairs and produces a [`RouteResult`].

pub mod config;
pub mod construction;
pub mod error;
pub mod local_search;
pub mod problem;
pub mod task;
pub mod tour;

pub use crate::config::Config;
pub use crate::error::{InvalidInput, SolveError};
pub use crate::problem::{Coordinate, DistanceMatrix, Problem};
pub use crate::task::spawn_solve;
pub use crate::tour::{RouteResult, Termination, Tour};

use crate::construction::nearest_neighbor;
use crate::local_search::{Budget, Improvement, LocalSearch};
use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Progress of a solve call through its stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvePhase {
    Init,
    MatrixBuilt,
    Constructed,
    Improving,
    Done,
    Failed,
}

/// The outcome of improving one start node.
struct SingleRun {
    start: usize,
    tour: Tour,
    length: f64,
    improvement: Improvement,
}

/// Orchestrates one solve: validation, matrix build, construction,
/// improvement, result assembly.
///
/// A solver owns all of its mutable state for the duration of one call;
/// independent solvers may run concurrently without any locking.
pub struct TspSolver {
    coordinates: Vec<Coordinate>,
    config: Config,
    pub phase: SolvePhase,
    pub run_time: Duration,
}

impl TspSolver {
    /// Create a solver for the given coordinates and configuration.
    pub fn new(coordinates: Vec<Coordinate>, config: Config) -> Self {
        TspSolver {
            coordinates,
            config,
            phase: SolvePhase::Init,
            run_time: Duration::from_secs(0),
        }
    }

    /// Run the solve to completion.
    ///
    /// Fails only on invalid input. A budget hit is not a failure: the best
    /// tour found so far comes back tagged [`Termination::BudgetExceeded`].
    pub fn run(&mut self) -> Result<RouteResult, SolveError> {
        let started = Instant::now();
        self.phase = SolvePhase::Init;

        let problem = match Problem::new(self.coordinates.clone()) {
            Ok(problem) => problem,
            Err(error) => {
                self.phase = SolvePhase::Failed;
                return Err(error);
            }
        };
        let n = problem.node_count();

        if self.config.start_node >= n {
            self.phase = SolvePhase::Failed;
            return Err(SolveError::InvalidInput(
                InvalidInput::StartNodeOutOfBounds {
                    start_node: self.config.start_node,
                    node_count: n,
                },
            ));
        }

        self.phase = SolvePhase::MatrixBuilt;
        debug!("matrix built for {} nodes", n);

        let budget = Budget {
            max_sweeps: self.config.max_iterations,
            deadline: self.config.time_limit.map(|limit| started + limit),
        };
        let starts = self.start_nodes(n);

        let best = if starts.len() == 1 {
            let start = starts[0];
            let mut tour = nearest_neighbor(&problem.matrix, start);
            self.phase = SolvePhase::Constructed;
            debug!("constructed nearest-neighbor tour from node {}", start);

            self.phase = SolvePhase::Improving;
            let improver = LocalSearch::new();
            let improvement = improver.improve(&mut tour, &problem.matrix, &budget);
            tour.rotate_to(0);
            let length = tour.length(&problem.matrix);
            SingleRun {
                start,
                tour,
                length,
                improvement,
            }
        } else {
            // Fork/join multi-start: each start node constructs and improves
            // its own tour against the shared read-only matrix, then the
            // shortest result wins. Ties go to the lowest start node so the
            // outcome stays deterministic.
            self.phase = SolvePhase::Improving;
            debug!("multi-start over {} start nodes", starts.len());

            let runs: Vec<SingleRun> = starts
                .par_iter()
                .map(|&start| {
                    let mut tour = nearest_neighbor(&problem.matrix, start);
                    let improver = LocalSearch::new();
                    let improvement = improver.improve(&mut tour, &problem.matrix, &budget);
                    tour.rotate_to(0);
                    let length = tour.length(&problem.matrix);
                    SingleRun {
                        start,
                        tour,
                        length,
                        improvement,
                    }
                })
                .collect();

            runs.into_iter()
                .min_by(|left, right| {
                    left.length
                        .total_cmp(&right.length)
                        .then(left.start.cmp(&right.start))
                })
                .expect("at least one start node")
        };

        self.run_time = started.elapsed();
        self.phase = SolvePhase::Done;
        debug!(
            "solve done: {:.3} km after {} sweeps ({:?})",
            best.length, best.improvement.sweeps, best.improvement.termination
        );

        Ok(RouteResult {
            tour: best.tour,
            total_length: best.length,
            termination: best.improvement.termination,
            iterations: best.improvement.sweeps,
            run_time: self.run_time,
        })
    }

    /// Pick the start nodes for this solve: the configured one first, then
    /// seeded samples from the remaining indices for multi-start.
    fn start_nodes(&self, n: usize) -> Vec<usize> {
        let wanted = self.config.multi_start.clamp(1, n);
        let mut starts = vec![self.config.start_node];

        if wanted > 1 {
            let mut rest: Vec<usize> = (0..n).filter(|&i| i != self.config.start_node).collect();
            let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
            rest.shuffle(&mut rng);
            rest.truncate(wanted - 1);
            starts.extend(rest);
        }

        starts
    }
}

/// Solve with the default configuration.
pub fn solve(coordinates: &[Coordinate]) -> Result<RouteResult, SolveError> {
    solve_with_config(coordinates, Config::default())
}

/// Solve with an explicit configuration.
pub fn solve_with_config(
    coordinates: &[Coordinate],
    config: Config,
) -> Result<RouteResult, SolveError> {
    TspSolver::new(coordinates.to_vec(), config).run()
}
