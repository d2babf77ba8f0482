use nano_core::Observer;

use crate::traits::{HasIterate, HasIteration};

/// One accepted iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration that produced the iterate.
    pub iter: usize,

    /// Objective value.
    pub f: f64,

    /// `‖g‖∞`.
    pub gradient_norm: f64,

    /// Accepted step length.
    pub t: f64,
}

/// Records every accepted iterate of a run.
///
/// Never requests an action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Returns `true` if no recorded objective is larger than the one before it.
    #[must_use]
    pub fn is_decreasing(&self) -> bool {
        self.records.windows(2).all(|pair| pair[1].f <= pair[0].f)
    }

    /// Consumes the history and returns the records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIteration + HasIterate,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(state) = event.iterate() {
            self.records.push(Record {
                iter: event.iteration(),
                f: state.f(),
                gradient_norm: state.gradient_norm(),
                t: state.t(),
            });
        }
        None
    }
}
