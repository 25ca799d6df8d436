//! 2-opt neighborhood: reverse a tour segment to remove crossing edges.

use crate::problem::DistanceMatrix;
use crate::tour::Tour;
use log::trace;

use super::{Budget, LocalSearch};

impl LocalSearch {
    /// One full sweep over all non-adjacent edge pairs in tour order.
    ///
    /// Every strictly improving reversal is applied immediately and the
    /// sweep continues (first-improvement). Returns the number of applied
    /// moves and whether the deadline cut the sweep short.
    pub fn two_opt_sweep(
        &self,
        tour: &mut Tour,
        matrix: &DistanceMatrix,
        budget: &Budget,
    ) -> (u64, bool) {
        let n = tour.node_count();
        let mut applied = 0u64;

        for i in 0..n.saturating_sub(1) {
            if budget.time_exhausted() {
                return (applied, true);
            }

            for j in (i + 2)..n {
                // Edges (a, b) and (c, d) in tour order; reversing the
                // segment between them replaces them with (a, c) and (b, d).
                let a = tour.nodes[i];
                let b = tour.nodes[i + 1];
                let c = tour.nodes[j];
                let d = tour.nodes[j + 1];

                let delta = matrix.distance(a, c) + matrix.distance(b, d)
                    - matrix.distance(a, b)
                    - matrix.distance(c, d);

                if delta < -self.epsilon() {
                    tour.nodes[i + 1..=j].reverse();
                    applied += 1;
                    trace!("2-opt: reversed [{}, {}], delta {:.6} km", i + 1, j, delta);
                }
            }
        }

        (applied, false)
    }
}
