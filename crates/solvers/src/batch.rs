//! Line-search driven descent for smooth unconstrained minimization.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration:
//!
//! 1. stops if `‖g‖∞ / max(1, |f|) < epsilon`,
//! 2. chooses a descent direction `d` (see [`Direction`]),
//! 3. estimates an initial step `t0` (see [`Initializer`]),
//! 4. runs the line search (see [`Strategy`]) and moves to the accepted point.
//!
//! A failed line search ends the run with [`Status::LineSearchFailed`]; the
//! returned state is the last accepted point.
//!
//! # Directions
//!
//! - [`Direction::Gradient`] — steepest descent
//! - [`Direction::Conjugate`] — nonlinear conjugate gradient with any
//!   [`Beta`] formula; restarts with `−g` when successive gradients are far
//!   from orthogonal
//! - [`Direction::Lbfgs`] — limited-memory quasi-Newton
//!
//! Any direction that is not downhill is replaced by `−g` before the search.
//!
//! # Observer Events
//!
//! The driver emits [`Event::Descent`] after choosing each direction and
//! [`Event::Accepted`] or [`Event::LineSearchFailed`] after each search.
//! Observers can return [`Action::StopEarly`] from any event to end the run
//! with [`Status::StoppedByObserver`].
//!
//! [`Initializer`]: crate::linesearch::Initializer
//! [`Strategy`]: crate::linesearch::Strategy

mod action;
mod config;
mod direction;
mod error;
mod event;
mod lbfgs;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use direction::{Beta, Direction};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use ndarray::Array1;

use nano_core::{Function, Observer, Problem};

use crate::{
    State,
    linesearch::{InitialStep, LineSearch},
};

use direction::Descent;

/// Minimizes `function` from `x0`.
///
/// The observer receives an [`Event`] for each direction and each line
/// search. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the config is invalid, if `x0` has the wrong length,
/// or if the objective is not finite at `x0`. Problems during the run are
/// reported through [`Solution::status`].
pub fn minimize<F, Obs>(
    function: &F,
    x0: Array1<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;

    let problem = Problem::new(function);
    let mut state = State::new(&problem, x0)?;

    let mut descent = Descent::new(config.direction(), config.orthotest());
    let mut init = InitialStep::new(config.initializer());
    let mut search = LineSearch::new(config.line_search(), *config.wolfe());

    let finish = |status, state, iters| Solution {
        status,
        state,
        iters,
        fcalls: problem.fcalls(),
        gcalls: problem.gcalls(),
    };

    for iter in 0..config.max_iters() {
        if state.converged(config.epsilon()) {
            return Ok(finish(Status::Converged, state, iter));
        }

        let restarted = descent.prepare(&mut state);
        let event = Event::Descent {
            iter,
            state: &state,
            restarted,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, state, iter));
        }

        let previous = state.clone();
        let t0 = init.next(&state);

        if let Err(error) = search.search(&problem, &mut state, t0) {
            let event = Event::LineSearchFailed {
                iter,
                state: &state,
                error,
            };
            let _ = observer.observe(&event);
            return Ok(finish(Status::LineSearchFailed, state, iter));
        }

        descent.accepted(previous, &state);

        let event = Event::Accepted {
            iter,
            state: &state,
            t0,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, state, iter + 1));
        }
    }

    let status = if state.converged(config.epsilon()) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(finish(status, state, config.max_iters()))
}

/// Minimizes `function` from `x0` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the config is invalid, if `x0` has the wrong length,
/// or if the objective is not finite at `x0`.
pub fn minimize_unobserved<F>(
    function: &F,
    x0: Array1<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    minimize(function, x0, config, ())
}
