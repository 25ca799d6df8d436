//! Or-opt neighborhood: relocate a short chain of consecutive nodes.

use crate::problem::DistanceMatrix;
use crate::tour::Tour;
use log::trace;

use super::{Budget, LocalSearch};

/// Longest chain of consecutive nodes the neighborhood relocates.
const MAX_CHAIN_LEN: usize = 3;

impl LocalSearch {
    /// One full sweep over all chains of 1 to 3 consecutive nodes.
    ///
    /// For each chain, every insertion point in the rest of the tour is
    /// evaluated and the best strictly improving relocation is applied.
    /// Returns the number of applied moves and whether the deadline cut the
    /// sweep short.
    pub fn or_opt_sweep(
        &self,
        tour: &mut Tour,
        matrix: &DistanceMatrix,
        budget: &Budget,
    ) -> (u64, bool) {
        let n = tour.node_count();
        let mut applied = 0u64;

        for chain_len in 1..=MAX_CHAIN_LEN {
            // A relocation needs at least one edge outside the chain and its
            // two flanking edges.
            if chain_len + 2 > n {
                break;
            }

            // Chains live in the interior positions; the fixed node at both
            // ends of the buffer never moves.
            for chain_start in 1..=(n - chain_len) {
                if budget.time_exhausted() {
                    return (applied, true);
                }

                let relocation = self.best_relocation(tour, matrix, chain_start, chain_len);
                if let Some((delta, edge)) = relocation {
                    apply_relocation(tour, chain_start, chain_len, edge);
                    applied += 1;
                    trace!(
                        "or-opt: moved chain of {} at {} to edge {}, delta {:.6} km",
                        chain_len,
                        chain_start,
                        edge,
                        delta
                    );
                }
            }
        }

        (applied, false)
    }

    /// Find the best strictly improving insertion edge for one chain, or
    /// `None` if no relocation improves the tour.
    fn best_relocation(
        &self,
        tour: &Tour,
        matrix: &DistanceMatrix,
        chain_start: usize,
        chain_len: usize,
    ) -> Option<(f64, usize)> {
        let n = tour.node_count();
        let prev = tour.nodes[chain_start - 1];
        let first = tour.nodes[chain_start];
        let last = tour.nodes[chain_start + chain_len - 1];
        let next = tour.nodes[chain_start + chain_len];

        // Length recovered by cutting the chain out and bridging the gap.
        let removal_gain = matrix.distance(prev, first) + matrix.distance(last, next)
            - matrix.distance(prev, next);

        let mut best_delta = f64::INFINITY;
        let mut best_edge = 0;

        for edge in 0..n {
            // Skip the chain's own edges and the two flanking it.
            if edge + 1 >= chain_start && edge < chain_start + chain_len {
                continue;
            }

            let u = tour.nodes[edge];
            let v = tour.nodes[edge + 1];
            let insertion_cost =
                matrix.distance(u, first) + matrix.distance(last, v) - matrix.distance(u, v);

            let delta = insertion_cost - removal_gain;
            if delta < best_delta {
                best_delta = delta;
                best_edge = edge;
            }
        }

        if best_delta < -self.epsilon() {
            Some((best_delta, best_edge))
        } else {
            None
        }
    }
}

/// Cut the chain out of the tour and splice it into the chosen edge.
///
/// `edge` indexes the tour positions before removal; it is adjusted for the
/// shift caused by draining the chain.
fn apply_relocation(tour: &mut Tour, chain_start: usize, chain_len: usize, edge: usize) {
    let chain: Vec<usize> = tour
        .nodes
        .drain(chain_start..chain_start + chain_len)
        .collect();

    let insert_at = if edge < chain_start {
        edge + 1
    } else {
        edge + 1 - chain_len
    };

    tour.nodes.splice(insert_at..insert_at, chain);
}
