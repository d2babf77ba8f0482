use ndarray::Array1;
use thiserror::Error;

use nano_core::{Function, Problem};

use crate::linesearch::Step;

/// The current iterate of a gradient-based optimizer.
///
/// Holds the point `x`, its objective value `f` and gradient `g`, the search
/// direction `d`, and the last accepted step length `t`. The value and the
/// gradient always correspond to `x`: moves are made by evaluating a trial
/// point first and replacing the whole state only when the evaluation is
/// finite.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    x: Array1<f64>,
    f: f64,
    g: Array1<f64>,
    d: Array1<f64>,
    t: f64,
}

/// Errors that can occur when creating a [`State`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("objective expects {expected} dimensions but got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("objective or gradient is not finite at the initial point")]
    NonFinite,
}

impl State {
    /// Evaluates the objective at `x0` and starts with `d = −g` and `t = 0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x0` or the gradient at `x0` has the wrong length,
    /// or if the objective or its gradient is not finite there.
    pub fn new<F>(problem: &Problem<'_, F>, x0: Array1<f64>) -> Result<Self, StateError>
    where
        F: Function + ?Sized,
    {
        if x0.len() != problem.size() {
            return Err(StateError::DimensionMismatch {
                expected: problem.size(),
                found: x0.len(),
            });
        }

        let (f, g) = problem.vgrad(&x0);
        if g.len() != problem.size() {
            return Err(StateError::DimensionMismatch {
                expected: problem.size(),
                found: g.len(),
            });
        }
        if !is_finite(f, &g) {
            return Err(StateError::NonFinite);
        }

        let d = -&g;
        Ok(Self {
            x: x0,
            f,
            g,
            d,
            t: 0.0,
        })
    }

    #[must_use]
    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    #[must_use]
    pub fn f(&self) -> f64 {
        self.f
    }

    #[must_use]
    pub fn g(&self) -> &Array1<f64> {
        &self.g
    }

    /// Returns the current search direction.
    #[must_use]
    pub fn d(&self) -> &Array1<f64> {
        &self.d
    }

    /// Returns the step length that produced this state.
    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Returns the directional derivative `g·d`.
    #[must_use]
    pub fn dg(&self) -> f64 {
        self.g.dot(&self.d)
    }

    /// Returns `‖g‖∞`.
    #[must_use]
    pub fn gradient_norm(&self) -> f64 {
        self.g.iter().fold(0.0, |max, v| max.max(v.abs()))
    }

    /// Returns the relative gradient size `‖g‖∞ / max(1, |f|)`.
    #[must_use]
    pub fn convergence_criterion(&self) -> f64 {
        self.gradient_norm() / self.f.abs().max(1.0)
    }

    /// Returns `true` if the convergence criterion is below `epsilon`.
    #[must_use]
    pub fn converged(&self, epsilon: f64) -> bool {
        self.convergence_criterion() < epsilon
    }

    /// Evaluates the point `x + t d` without modifying `self`.
    ///
    /// The returned state keeps this state's direction. Returns `None` if the
    /// objective or gradient is not finite at the trial point, or if the
    /// gradient has the wrong length.
    #[must_use]
    pub fn step_to<F>(&self, problem: &Problem<'_, F>, t: f64) -> Option<Self>
    where
        F: Function + ?Sized,
    {
        let mut x = self.x.clone();
        x.scaled_add(t, &self.d);

        let (f, g) = problem.vgrad(&x);
        (g.len() == x.len() && is_finite(f, &g)).then(|| Self {
            x,
            f,
            g,
            d: self.d.clone(),
            t,
        })
    }

    /// Moves to `x + t d` if the objective is finite there.
    ///
    /// Returns `false` and leaves the state untouched otherwise.
    pub fn update<F>(&mut self, problem: &Problem<'_, F>, t: f64) -> bool
    where
        F: Function + ?Sized,
    {
        match self.step_to(problem, t) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    /// Sufficient decrease: `f ≤ f₀ + c1·t·(g₀·d₀)`.
    #[must_use]
    pub fn has_armijo(&self, state0: &State, c1: f64) -> bool {
        self.step().has_armijo(&state0.origin(), c1)
    }

    /// Curvature condition: `g·d₀ ≥ c2·(g₀·d₀)`.
    #[must_use]
    pub fn has_wolfe(&self, state0: &State, c2: f64) -> bool {
        self.step().has_wolfe(&state0.origin(), c2)
    }

    /// Strong curvature condition: `|g·d₀| ≤ c2·|g₀·d₀|`.
    #[must_use]
    pub fn has_strong_wolfe(&self, state0: &State, c2: f64) -> bool {
        self.step().has_strong_wolfe(&state0.origin(), c2)
    }

    /// Approximate sufficient decrease: `f ≤ f₀ + epsilon`.
    #[must_use]
    pub fn has_approx_armijo(&self, state0: &State, epsilon: f64) -> bool {
        self.step().has_approx_armijo(&state0.origin(), epsilon)
    }

    /// Approximate Wolfe: `(2c1 − 1)·(g₀·d₀) ≥ g·d₀ ≥ c2·(g₀·d₀)`.
    #[must_use]
    pub fn has_approx_wolfe(&self, state0: &State, c1: f64, c2: f64) -> bool {
        self.step().has_approx_wolfe(&state0.origin(), c1, c2)
    }

    /// Returns `true` if the current direction is a descent direction.
    #[must_use]
    pub fn has_descent(&self) -> bool {
        self.step().has_descent()
    }

    /// The line-search sample `(t, f, g·d)` this state represents.
    #[must_use]
    pub fn step(&self) -> Step {
        Step::new(self.t, self.f, self.dg())
    }

    /// The line-search sample at step length zero.
    #[must_use]
    pub fn origin(&self) -> Step {
        Step::new(0.0, self.f, self.dg())
    }

    pub(crate) fn set_direction(&mut self, d: Array1<f64>) {
        debug_assert_eq!(d.len(), self.x.len());
        self.d = d;
    }
}

fn is_finite(f: f64, g: &Array1<f64>) -> bool {
    f.is_finite() && g.iter().all(|v| v.is_finite())
}
