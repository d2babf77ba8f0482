use crate::State;

/// Events emitted by the accelerated gradient solver.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A gradient step from the extrapolated point has been taken.
    Iterated {
        /// Zero-based iteration number.
        iter: usize,

        /// The new iterate; `state.t()` is the step length used.
        state: &'a State,

        /// Whether the momentum was reset after this step.
        restarted: bool,
    },
}

impl<'a> Event<'a> {
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Iterated { iter, .. } => *iter,
        }
    }

    #[must_use]
    pub fn state(&self) -> &'a State {
        match self {
            Self::Iterated { state, .. } => state,
        }
    }
}
