//! Background solve submission.
//!
//! Interactive front ends must not block on a CPU-bound solve. This module
//! turns the fire-and-forget thread pattern into an explicit interface:
//! submit a request, receive the outcome over a channel.

use crate::config::Config;
use crate::error::SolveError;
use crate::problem::Coordinate;
use crate::tour::RouteResult;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Run a solve on a background thread and return the receiving end of a
/// channel that will carry its outcome.
///
/// Dropping the receiver cancels interest in the result; the worker finishes
/// on its own and the outcome is discarded. This is always safe because a
/// solve mutates nothing outside its own state.
pub fn spawn_solve(
    coordinates: Vec<Coordinate>,
    config: Config,
) -> Receiver<Result<RouteResult, SolveError>> {
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let outcome = crate::solve_with_config(&coordinates, config);
        // A send error just means the receiver is gone.
        let _ = sender.send(outcome);
    });

    receiver
}
