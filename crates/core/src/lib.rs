//! Core traits and types for the nano optimizers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`] — a differentiable scalar objective over `ℝⁿ`
//! - [`Problem`] — a per-run evaluator that counts function and gradient
//!   calls and checks gradients against finite differences
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`functions`] — standard benchmark objectives with analytic gradients

mod function;
mod gradient;
mod observer;
mod problem;

pub mod functions;

pub use function::Function;
pub use gradient::{central_difference, finite_difference_step};
pub use observer::Observer;
pub use problem::Problem;
