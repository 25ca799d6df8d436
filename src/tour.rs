//! Closed-tour representation and the solve result.

use crate::problem::DistanceMatrix;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A closed tour over `n` nodes.
///
/// `nodes` holds `n + 1` indices: a permutation of `0..n` in the first `n`
/// positions, with the first node repeated at the end to close the loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub nodes: Vec<usize>,
}

impl Tour {
    /// Number of distinct nodes visited (excluding the closing duplicate).
    pub fn node_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Total tour length: the sum of all consecutive edge distances,
    /// including the closing edge.
    pub fn length(&self, matrix: &DistanceMatrix) -> f64 {
        self.nodes
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| matrix.distance(from, to))
            .sum()
    }

    /// Check the closed-permutation invariant against an expected node count.
    pub fn is_valid(&self, node_count: usize) -> bool {
        if self.nodes.len() != node_count + 1 {
            return false;
        }
        if self.nodes[0] != self.nodes[node_count] {
            return false;
        }

        let mut seen = vec![false; node_count];
        for &node in &self.nodes[..node_count] {
            if node >= node_count || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }

    /// Rotate the tour in place so that it starts (and ends) at `node`.
    ///
    /// Rotation preserves the cycle and its length; it only canonicalizes
    /// the representation. Does nothing if `node` is not on the tour.
    pub fn rotate_to(&mut self, node: usize) {
        let n = self.node_count();
        let position = match self.nodes[..n].iter().position(|&x| x == node) {
            Some(position) => position,
            None => return,
        };
        if position == 0 {
            return;
        }

        let mut rotated = Vec::with_capacity(n + 1);
        rotated.extend_from_slice(&self.nodes[position..n]);
        rotated.extend_from_slice(&self.nodes[..position]);
        rotated.push(node);
        self.nodes = rotated;
    }
}

/// How a solve run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// No improving 2-opt or Or-opt move remained.
    LocalOptimum,
    /// The iteration or time budget ran out first. The returned tour is the
    /// best found so far and still satisfies every tour invariant.
    BudgetExceeded,
}

/// The frozen outcome of one solve call. Never mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// The best closed tour found, normalized to start at node 0.
    pub tour: Tour,
    /// Tour length in kilometers, including the closing edge.
    pub total_length: f64,
    /// Whether the improver reached a local optimum or hit a budget.
    pub termination: Termination,
    /// Completed improvement sweeps of the winning run.
    pub iterations: u64,
    /// Wall-clock time of the whole solve call.
    pub run_time: Duration,
}

impl RouteResult {
    /// True if the improver stopped because no improving move remained.
    pub fn is_local_optimum(&self) -> bool {
        self.termination == Termination::LocalOptimum
    }
}
