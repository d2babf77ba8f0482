use thiserror::Error;

use nano_parallel::TaskError;

use crate::StateError;

use super::ConfigError;

/// Errors that prevent an accelerated gradient run or a tuning sweep from
/// completing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid initial state: {0}")]
    State(#[from] StateError),

    #[error("tuning grid has no candidates")]
    EmptyGrid,

    #[error("tuning task failed: {0}")]
    Task(#[from] TaskError),
}
