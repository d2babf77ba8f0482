use std::fmt;

use crate::State;

/// Why a batch descent run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The convergence criterion dropped below `epsilon`.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The line search could not find an acceptable step.
    LineSearchFailed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a batch descent run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last accepted state.
    pub state: State,

    /// Number of completed iterations.
    pub iters: usize,

    /// Objective evaluations made by the run.
    pub fcalls: usize,

    /// Gradient evaluations made by the run.
    pub gcalls: usize,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Converged => "converged",
            Self::MaxIters => "max_iterations",
            Self::LineSearchFailed => "linesearch_failed",
            Self::StoppedByObserver => "stopped",
        })
    }
}
