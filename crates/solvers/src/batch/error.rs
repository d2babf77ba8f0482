use thiserror::Error;

use crate::StateError;

use super::ConfigError;

/// Errors that prevent a batch descent run from starting.
///
/// Failures during the run are reported through [`Status`](super::Status).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid initial state: {0}")]
    State(#[from] StateError),
}
