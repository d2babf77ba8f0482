//! Reusable observers for the nano optimizers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the batch and accelerated solvers.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasIterate`], [`HasObjective`], [`HasGradientNorm`],
//!   [`CanStopEarly`])
//! - [`History`] — records every accepted iterate
//! - [`Stall`] — stops a run once the objective stops improving
//!
//! Observers are passed to a solver by value. To inspect one afterwards,
//! forward events from a closure:
//!
//! ```rust
//! use nano_core::{Observer, functions::Matyas};
//! use nano_observers::History;
//! use nano_solvers::batch::{self, Action, Config, Direction, Event};
//! use ndarray::array;
//!
//! let mut history = History::new();
//! let config = Config::new(Direction::Gradient);
//! batch::minimize(&Matyas, array![5.0, 5.0], &config, |event: &Event<'_>| -> Option<Action> {
//!     history.observe(event)
//! })
//! .expect("valid run");
//!
//! assert!(history.is_decreasing());
//! ```
//!
//! [`Observer`]: nano_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasIterate`]: traits::HasIterate
//! [`HasObjective`]: traits::HasObjective
//! [`HasGradientNorm`]: traits::HasGradientNorm
//! [`CanStopEarly`]: traits::CanStopEarly

mod history;
mod stall;

pub mod traits;

pub use history::{History, Record};
pub use stall::Stall;
