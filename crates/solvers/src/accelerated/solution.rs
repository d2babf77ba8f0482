use std::fmt;

use crate::State;

/// Why an accelerated gradient run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The convergence criterion dropped below `epsilon`.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The objective or its gradient became non-finite.
    Diverged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an accelerated gradient run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last finite iterate.
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
            Self::Diverged => "diverged",
            Self::StoppedByObserver => "stopped",
        })
    }
}
