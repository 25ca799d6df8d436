//! Error taxonomy for the solving engine.
//!
//! The core has exactly one hard failure kind: malformed input. Budget
//! exhaustion is not an error; the best tour found so far is still returned,
//! tagged via [`crate::tour::Termination::BudgetExceeded`].

use std::error::Error;
use std::fmt;

/// Errors returned by a solve call.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The input failed validation before any computation started.
    InvalidInput(InvalidInput),
}

/// The specific validation that rejected the input.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// Fewer than two coordinates were supplied.
    NotEnoughPoints { count: usize },
    /// A coordinate lies outside the WGS84 range (or is not finite).
    CoordinateOutOfRange {
        index: usize,
        latitude: f64,
        longitude: f64,
    },
    /// The configured start node is not a valid node index.
    StartNodeOutOfBounds {
        start_node: usize,
        node_count: usize,
    },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NotEnoughPoints { count } => {
                write!(f, "need at least 2 coordinates, got {}", count)
            }
            InvalidInput::CoordinateOutOfRange {
                index,
                latitude,
                longitude,
            } => write!(
                f,
                "coordinate {} out of range: ({}, {})",
                index, latitude, longitude
            ),
            InvalidInput::StartNodeOutOfBounds {
                start_node,
                node_count,
            } => write!(
                f,
                "start node {} out of bounds for {} nodes",
                start_node, node_count
            ),
        }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
        }
    }
}

impl Error for SolveError {}
