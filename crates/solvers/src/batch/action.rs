/// Actions an observer can take during a batch descent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run and return the current state.
    StopEarly,
}
