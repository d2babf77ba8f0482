use thiserror::Error;

/// Reasons a line search can fail to find an acceptable step.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LineSearchError {
    #[error("search direction is not a descent direction")]
    NotDescent,

    #[error("no acceptable step within the iteration limit")]
    MaxIters,

    #[error("objective is not finite along the search direction")]
    NonFinite,

    #[error("step length or bracket shrank below the minimum width")]
    BracketCollapsed,
}
