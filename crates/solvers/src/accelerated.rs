//! Nesterov accelerated gradient with adaptive restarts.
//!
//! # Algorithm
//!
//! The solver keeps the iterate `x` and an extrapolated point `y`, starting
//! with `y = x0` and `θ = 1`. Each iteration:
//!
//! 1. stops if `‖g‖∞ / max(1, |f|) < epsilon` at `x`,
//! 2. takes a gradient step from `y`: `x⁺ = y − α g(y)` with
//!    `α = alpha0 · (1 + k)^(−decay)`,
//! 3. advances `θ` (see [`Config::next_theta`]) and sets the momentum
//!    `β = θ (1 − θ) / (θ² + θ⁺)`,
//! 4. extrapolates `y = x⁺ + β (x⁺ − x)`, unless the [`Restart`] policy
//!    fires, in which case `θ = 1` and `y = x⁺`.
//!
//! A non-finite objective at `y` or `x⁺` ends the run with
//! [`Status::Diverged`].
//!
//! # Observer Events
//!
//! The solver emits [`Event::Iterated`] after every step. Observers can
//! return [`Action::StopEarly`] to end the run with
//! [`Status::StoppedByObserver`].
//!
//! # Tuning
//!
//! [`tune`] runs one independent trial per `(alpha0, decay, q)` point of a
//! [`Grid`] on a [`ThreadPool`] and keeps the best.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, Restart};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use std::sync::Arc;

use ndarray::Array1;

use nano_core::{Function, Observer, Problem};
use nano_parallel::ThreadPool;

use crate::{State, tune as search};

/// Minimizes `function` from `x0`.
///
/// # Errors
///
/// Returns an error if the config is invalid, if `x0` has the wrong length,
/// or if the objective is not finite at `x0`.
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
    let mut y = state.x().clone();
    let mut theta = 1.0;

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

        // After a restart `y` is the iterate itself and needs no evaluation.
        let origin = if y == *state.x() {
            let mut origin = state.clone();
            origin.set_direction(-state.g());
            origin
        } else {
            match State::new(&problem, y) {
                Ok(origin) => origin,
                Err(_) => return Ok(finish(Status::Diverged, state, iter)),
            }
        };

        let Some(next) = origin.step_to(&problem, config.learning_rate(iter)) else {
            return Ok(finish(Status::Diverged, state, iter));
        };

        let restarted = match config.restart() {
            Restart::None => false,
            Restart::Function => next.f() > state.f(),
            Restart::Gradient => origin.g().dot(&(next.x() - state.x())) > 0.0,
        };

        if restarted {
            theta = 1.0;
            y = next.x().clone();
        } else {
            let next_theta = config.next_theta(theta);
            let beta = theta * (1.0 - theta) / (theta * theta + next_theta);
            y = next.x() + &((next.x() - state.x()) * beta);
            theta = next_theta;
        }

        state = next;

        let event = Event::Iterated {
            iter,
            state: &state,
            restarted,
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

/// Candidate step lengths, decays, and momentum parameters for [`tune`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub alpha0: Vec<f64>,
    pub decay: Vec<f64>,
    pub q: Vec<f64>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            alpha0: vec![1e-3, 1e-2, 1e-1, 1.0],
            decay: vec![0.0, 0.5, 0.75, 0.9],
            q: vec![0.0, 0.05, 0.1, 0.2],
        }
    }
}

impl Grid {
    /// Returns `base` with every `(alpha0, decay, q)` triple of the grid
    /// applied, `alpha0` varying slowest and `q` fastest.
    #[must_use]
    pub fn candidates(&self, base: &Config) -> Vec<Config> {
        let mut candidates =
            Vec::with_capacity(self.alpha0.len() * self.decay.len() * self.q.len());
        for &alpha0 in &self.alpha0 {
            for &decay in &self.decay {
                for &q in &self.q {
                    candidates.push(base.with_alpha0(alpha0).with_decay(decay).with_q(q));
                }
            }
        }
        candidates
    }
}

/// The outcome of [`tune`].
#[derive(Debug, Clone)]
pub struct Tuned {
    /// The winning configuration.
    pub config: Config,

    /// Its run; counters cover this trial only.
    pub solution: Solution,
}

/// Runs one trial per grid point on `pool` and returns the best.
///
/// Each trial starts from `x0` with `config` and the grid's `alpha0`,
/// `decay`, and `q`, and evaluates `function` through its own counters.
/// Trials are ranked by final objective value; diverged trials rank last.
///
/// # Errors
///
/// Returns an error if the grid is empty, if any candidate config is invalid,
/// if `x0` is not a valid starting point, or if a trial panicked.
pub fn tune<F>(
    pool: &ThreadPool,
    function: &Arc<F>,
    x0: &Array1<f64>,
    grid: &Grid,
    config: &Config,
) -> Result<Tuned, Error>
where
    F: Function + Send + Sync + 'static,
{
    let candidates = grid.candidates(config);
    for candidate in &candidates {
        candidate.validate()?;
    }

    let function = Arc::clone(function);
    let x0 = x0.clone();

    let best = search::fixed_parallel(pool, candidates, move |candidate| {
        let result = minimize_unobserved(&*function, x0.clone(), candidate);
        let score = match &result {
            Ok(solution) if solution.status != Status::Diverged => solution.state.f(),
            _ => f64::INFINITY,
        };
        (score, result)
    })?
    .ok_or(Error::EmptyGrid)?;

    Ok(Tuned {
        config: best.value,
        solution: best.result?,
    })
}
