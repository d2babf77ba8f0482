//! Line-search driven gradient optimizers.
//!
//! The building blocks, bottom-up:
//!
//! - [`interpolate`] — quadratic and cubic interpolants used to propose
//!   trial step lengths
//! - [`State`] — the current iterate `(x, f, g)` with its search direction
//!   and last accepted step length
//! - [`linesearch`] — step-length selection along a descent direction
//!   (backtracking, strong Wolfe, CG_DESCENT) and initial step estimators
//! - [`batch`] — the convergence driver with gradient descent, nonlinear
//!   conjugate gradient, and L-BFGS directions
//! - [`accelerated`] — Nesterov accelerated gradient with restarts
//! - [`tune`] — grid search over solver parameters, serially or on a
//!   [`ThreadPool`](nano_parallel::ThreadPool)
//!
//! # Example
//!
//! ```rust
//! use nano_core::functions::Rosenbrock;
//! use nano_solvers::batch::{self, Beta, Config, Direction, Status};
//! use ndarray::array;
//!
//! let config = Config::new(Direction::Conjugate(Beta::PolakRibiere));
//! let solution = batch::minimize_unobserved(&Rosenbrock::new(2), array![-1.2, 1.0], &config)
//!     .expect("valid configuration");
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.state.x()[0] - 1.0).abs() < 1e-3);
//! ```

mod parse;
mod state;

#[cfg(test)]
pub(crate) mod fixtures;

pub mod accelerated;
pub mod batch;
pub mod interpolate;
pub mod linesearch;
pub mod tune;

pub use parse::ParseError;
pub use state::{State, StateError};
