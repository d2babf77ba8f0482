//! Step-length selection along a descent direction.
//!
//! Given a state with a descent direction `d` and an initial guess `t0`, a
//! line search looks for a step `t` along the slice `φ(t) = f(x + t d)`
//! that satisfies the strategy's acceptance test:
//!
//! - [`Strategy::Backtracking`] — shrinks `t` until the Armijo (sufficient
//!   decrease) condition holds, proposing each shorter step from a cubic or
//!   quadratic interpolant
//! - [`Strategy::StrongWolfe`] — the bracketing and zoom search of Nocedal
//!   and Wright, accepting on the strong Wolfe conditions
//! - [`Strategy::CgDescent`] — the Hager–Zhang secant search, accepting on
//!   the Wolfe or the approximate Wolfe conditions
//!
//! Trial points where the objective or its gradient is not finite are
//! treated as failing the sufficient decrease test, so every strategy backs
//! away from them. The state passed to [`LineSearch::search`] changes only
//! when an acceptable step is found.
//!
//! [`Initializer`] chooses `t0` from the history of the run.

mod backtracking;
mod cg_descent;
mod config;
mod error;
mod init;
mod step;
mod strong_wolfe;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::LineSearchError;
pub use init::{InitialStep, Initializer};
pub use step::Step;

use std::{fmt, str::FromStr};

use nano_core::{Function, Problem};

use crate::{ParseError, State};

use cg_descent::CgDescent;

/// Smallest step length or bracket width a line search will work with.
pub const MIN_STEP: f64 = 10.0 * f64::EPSILON;

/// The available line-search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Backtracking,
    StrongWolfe,
    CgDescent,
}

/// A line search bound to a strategy and its parameters.
///
/// Some strategies keep memory between calls (CG_DESCENT adapts its
/// approximate Wolfe tolerance to the history of objective values), so one
/// `LineSearch` should be used for exactly one optimization run.
#[derive(Debug, Clone)]
pub struct LineSearch {
    strategy: Strategy,
    config: Config,
    cg_descent: CgDescent,
}

impl LineSearch {
    #[must_use]
    pub fn new(strategy: Strategy, config: Config) -> Self {
        Self {
            strategy,
            config,
            cg_descent: CgDescent::default(),
        }
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Searches along `state.d()` starting from the step `t0`.
    ///
    /// On success `state` is replaced by the accepted point, whose `t()` is
    /// the accepted step length. A non-finite or non-positive `t0` is
    /// replaced by `1`; `t0` is clamped to `[MIN_STEP, max_step]`.
    ///
    /// # Errors
    ///
    /// Returns a [`LineSearchError`] if the direction is not a descent
    /// direction or no acceptable step was found. `state` is unchanged.
    pub fn search<F>(
        &mut self,
        problem: &Problem<'_, F>,
        state: &mut State,
        t0: f64,
    ) -> Result<(), LineSearchError>
    where
        F: Function + ?Sized,
    {
        if !state.has_descent() {
            return Err(LineSearchError::NotDescent);
        }

        let t0 = if t0.is_finite() && t0 > 0.0 { t0 } else { 1.0 };
        let t0 = t0.clamp(MIN_STEP, self.config.max_step());

        let accepted = match self.strategy {
            Strategy::Backtracking => backtracking::search(problem, state, t0, &self.config),
            Strategy::StrongWolfe => strong_wolfe::search(problem, state, t0, &self.config),
            Strategy::CgDescent => self.cg_descent.search(problem, state, t0, &self.config),
        }?;

        *state = accepted;
        Ok(())
    }
}

/// Evaluates the trial step `t` from `state0`.
///
/// Non-finite evaluations are reported as `(t, +∞, NaN)` with no state.
fn probe<F>(problem: &Problem<'_, F>, state0: &State, t: f64) -> (Step, Option<State>)
where
    F: Function + ?Sized,
{
    match state0.step_to(problem, t) {
        Some(state) => (state.step(), Some(state)),
        None => (Step::new(t, f64::INFINITY, f64::NAN), None),
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Backtracking => "backtrack",
            Self::StrongWolfe => "strong-wolfe",
            Self::CgDescent => "cg-descent",
        })
    }
}

impl FromStr for Strategy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backtrack" | "backtracking" => Ok(Self::Backtracking),
            "strong-wolfe" | "interpolation" | "nocedal-wright" => Ok(Self::StrongWolfe),
            "cg-descent" | "cgdescent" => Ok(Self::CgDescent),
            _ => Err(ParseError::unknown(
                "line search",
                s,
                "backtrack, strong-wolfe, cg-descent",
            )),
        }
    }
}
