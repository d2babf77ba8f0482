use thiserror::Error;

/// Errors reported when waiting on a pool task.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    #[error("task panicked while running")]
    Panicked,

    #[error("task was cancelled before it ran")]
    Cancelled,
}
