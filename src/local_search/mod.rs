//! Local search: neighborhood sweeps that shorten a closed tour.

pub mod or_opt;
pub mod two_opt;

use crate::problem::DistanceMatrix;
use crate::tour::{Termination, Tour};
use log::debug;
use std::time::Instant;

/// Resource limits for one improvement run.
#[derive(Debug, Clone, Copy)]
pub struct Budget {
    /// Maximum number of completed sweep rounds.
    pub max_sweeps: u64,
    /// Absolute wall-clock deadline, if any.
    pub deadline: Option<Instant>,
}

impl Budget {
    /// Check whether the wall-clock deadline has passed.
    pub fn time_exhausted(&self) -> bool {
        self.deadline
            .map_or(false, |deadline| Instant::now() >= deadline)
    }
}

/// Summary of one improvement run.
#[derive(Debug, Clone, Copy)]
pub struct Improvement {
    /// Completed sweep rounds (one round = a 2-opt sweep plus an Or-opt
    /// sweep).
    pub sweeps: u64,
    /// Total moves applied across all sweeps.
    pub moves_applied: u64,
    /// Whether a local optimum was reached or a budget ran out.
    pub termination: Termination,
}

/// Drives 2-opt and Or-opt sweeps until no improving move remains or the
/// budget is exhausted.
pub struct LocalSearch {
    /// Minimum length gain (km) for a move to count as strictly improving.
    /// Keeps float noise from cycling the search.
    epsilon: f64,
}

impl Default for LocalSearch {
    fn default() -> Self {
        LocalSearch::new()
    }
}

impl LocalSearch {
    /// Create a new local search instance.
    pub fn new() -> Self {
        LocalSearch { epsilon: 1e-10 }
    }

    /// Improve the tour in place until a local optimum or budget exhaustion.
    ///
    /// Tour length is non-increasing across every applied move, and the tour
    /// remains a valid closed permutation at every point, so an interrupted
    /// run always leaves a usable tour. Sweeps scan candidates in fixed
    /// lowest-index-first order, making the whole run deterministic.
    pub fn improve(
        &self,
        tour: &mut Tour,
        matrix: &DistanceMatrix,
        budget: &Budget,
    ) -> Improvement {
        let mut sweeps = 0u64;
        let mut moves_applied = 0u64;

        loop {
            if sweeps >= budget.max_sweeps || budget.time_exhausted() {
                return Improvement {
                    sweeps,
                    moves_applied,
                    termination: Termination::BudgetExceeded,
                };
            }

            let (two_opt_moves, timed_out) = self.two_opt_sweep(tour, matrix, budget);
            moves_applied += two_opt_moves;
            if timed_out {
                return Improvement {
                    sweeps,
                    moves_applied,
                    termination: Termination::BudgetExceeded,
                };
            }

            let (or_opt_moves, timed_out) = self.or_opt_sweep(tour, matrix, budget);
            moves_applied += or_opt_moves;
            sweeps += 1;

            debug!(
                "sweep {}: {} two-opt moves, {} or-opt moves",
                sweeps, two_opt_moves, or_opt_moves
            );

            if timed_out {
                return Improvement {
                    sweeps,
                    moves_applied,
                    termination: Termination::BudgetExceeded,
                };
            }

            if two_opt_moves + or_opt_moves == 0 {
                return Improvement {
                    sweeps,
                    moves_applied,
                    termination: Termination::LocalOptimum,
                };
            }
        }
    }

    /// The strict-improvement threshold used by the sweeps.
    pub(crate) fn epsilon(&self) -> f64 {
        self.epsilon
    }
}
