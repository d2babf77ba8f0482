use crate::{State, linesearch::LineSearchError};

/// Events emitted by the batch descent driver.
///
/// Each iteration emits [`Event::Descent`] once its direction is chosen,
/// then either [`Event::Accepted`] or [`Event::LineSearchFailed`].
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A search direction has been set on `state`.
    Descent {
        /// Zero-based iteration number.
        iter: usize,

        /// The current state, with the direction about to be searched.
        state: &'a State,

        /// Whether the direction strategy was abandoned for `−g`.
        restarted: bool,
    },

    /// The line search accepted a step.
    Accepted {
        iter: usize,

        /// The new state; `state.t()` is the accepted step length.
        state: &'a State,

        /// The initial step the line search started from.
        t0: f64,
    },

    /// The line search failed; the run ends after this event.
    LineSearchFailed {
        iter: usize,

        /// The state the search started from.
        state: &'a State,

        error: LineSearchError,
    },
}

impl<'a> Event<'a> {
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Descent { iter, .. }
            | Self::Accepted { iter, .. }
            | Self::LineSearchFailed { iter, .. } => *iter,
        }
    }

    #[must_use]
    pub fn state(&self) -> &'a State {
        match self {
            Self::Descent { state, .. }
            | Self::Accepted { state, .. }
            | Self::LineSearchFailed { state, .. } => state,
        }
    }
}
