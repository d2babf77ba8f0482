//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events tagged with an iteration number
//! - [`HasIterate`] — events that may report a newly accepted iterate
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasGradientNorm`] — events that carry a gradient norm
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use nano_core::Observer;
//! use nano_observers::traits::{CanStopEarly, HasGradientNorm};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasGradientNorm, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.gradient_norm() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use nano_solvers::{State, accelerated, batch};

/// An event tagged with the solver iteration it belongs to.
pub trait HasIteration {
    /// Returns the zero-based iteration number.
    fn iteration(&self) -> usize;
}

/// An event that may report a newly accepted iterate.
pub trait HasIterate {
    /// Returns the iterate this event accepted, or `None` for events that
    /// only describe intermediate progress.
    fn iterate(&self) -> Option<&State>;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective at the accepted iterate.
    ///
    /// Returns `f64::NAN` when the event does not report a new iterate.
    fn objective(&self) -> f64;
}

/// An event that carries a gradient norm.
pub trait HasGradientNorm {
    /// Returns `‖g‖∞` at the accepted iterate.
    ///
    /// Returns `f64::NAN` when the event does not report a new iterate.
    fn gradient_norm(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- batch::Event ---

impl HasIteration for batch::Event<'_> {
    fn iteration(&self) -> usize {
        self.iter()
    }
}

impl HasIterate for batch::Event<'_> {
    fn iterate(&self) -> Option<&State> {
        match self {
            batch::Event::Accepted { state, .. } => Some(*state),
            batch::Event::Descent { .. } | batch::Event::LineSearchFailed { .. } => None,
        }
    }
}

impl HasObjective for batch::Event<'_> {
    fn objective(&self) -> f64 {
        self.iterate().map_or(f64::NAN, State::f)
    }
}

impl HasGradientNorm for batch::Event<'_> {
    fn gradient_norm(&self) -> f64 {
        self.iterate().map_or(f64::NAN, State::gradient_norm)
    }
}

// --- accelerated::Event ---

impl HasIteration for accelerated::Event<'_> {
    fn iteration(&self) -> usize {
        self.iter()
    }
}

impl HasIterate for accelerated::Event<'_> {
    fn iterate(&self) -> Option<&State> {
        Some(self.state())
    }
}

impl HasObjective for accelerated::Event<'_> {
    fn objective(&self) -> f64 {
        self.state().f()
    }
}

impl HasGradientNorm for accelerated::Event<'_> {
    fn gradient_norm(&self) -> f64 {
        self.state().gradient_norm()
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for batch::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for accelerated::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
