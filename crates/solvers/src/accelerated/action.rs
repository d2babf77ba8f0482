/// Actions an observer can take during an accelerated gradient run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run and return the current state.
    StopEarly,
}
