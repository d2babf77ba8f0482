//! The CG_DESCENT line search of Hager and Zhang.
//!
//! Maintains a bracket `[a, b]` with `φ'(a) < 0`, `φ(a) ≤ φ(0) + ε`, and
//! `φ'(b) ≥ 0`, and shrinks it with double secant steps, falling back to
//! bisection when a secant step shrinks the bracket too slowly. A trial is
//! accepted on the Armijo and Wolfe conditions, or on the approximate Wolfe
//! conditions once the run has switched to them.

use std::ops::ControlFlow::{self, Break, Continue};

use nano_core::{Function, Problem};

use crate::State;

use super::{Config, LineSearchError, MIN_STEP, Step, probe};

/// Scale of the approximate Armijo tolerance `ε = EPSILON · C`.
const EPSILON: f64 = 1e-6;
/// Bisection weight in the `U3` bracket update.
const THETA: f64 = 0.5;
/// Required shrink factor of a double secant step.
const GAMMA: f64 = 0.66;
/// Decay of the running average of `|f|`.
const DELTA: f64 = 0.7;
/// Switch to approximate Wolfe once `|f − f₀| ≤ OMEGA · C`.
const OMEGA: f64 = 1e-3;
/// Expansion factor of the initial bracketing.
const RHO: f64 = 5.0;

/// Memory carried from one line search to the next within a run.
#[derive(Debug, Clone, Default)]
pub(super) struct CgDescent {
    sum_q: f64,
    sum_c: f64,
    approx: bool,
}

impl CgDescent {
    pub(super) fn search<F>(
        &mut self,
        problem: &Problem<'_, F>,
        state0: &State,
        t0: f64,
        config: &Config,
    ) -> Result<State, LineSearchError>
    where
        F: Function + ?Sized,
    {
        self.sum_q = 1.0 + self.sum_q * DELTA;
        self.sum_c += (state0.f().abs() - self.sum_c) / self.sum_q;

        let mut search = Search {
            problem,
            state0,
            origin: state0.origin(),
            config,
            epsilon: EPSILON * self.sum_c,
            sum_c: self.sum_c,
            approx: self.approx,
        };

        let outcome = search.run(t0);
        self.approx = search.approx;
        outcome
    }
}

/// `Break` carries a trial that passed the termination test.
type Flow<T> = ControlFlow<State, T>;

/// A single line search; every helper breaks as soon as an evaluated trial
/// is acceptable.
struct Search<'s, 'p, F: ?Sized> {
    problem: &'s Problem<'p, F>,
    state0: &'s State,
    origin: Step,
    config: &'s Config,
    epsilon: f64,
    sum_c: f64,
    approx: bool,
}

impl<F: Function + ?Sized> Search<'_, '_, F> {
    fn run(&mut self, t0: f64) -> Result<State, LineSearchError> {
        match self.shrink(t0) {
            Break(state) => Ok(state),
            Continue(error) => Err(error),
        }
    }

    /// Brackets from `t0` and shrinks until a trial is accepted; continues
    /// with the failure reason otherwise.
    fn shrink(&mut self, t0: f64) -> Flow<LineSearchError> {
        let c = self.eval(t0)?;

        let (mut a, mut b) = self.bracket(c)?;
        if !a.is_finite() || (b.alpha - a.alpha).abs() < MIN_STEP {
            (a, b) = (self.origin, c);
        }

        for _ in 0..self.config.max_iters() {
            let width = (b.alpha - a.alpha).abs();
            if width < MIN_STEP {
                return Continue(if b.is_finite() {
                    LineSearchError::BracketCollapsed
                } else {
                    LineSearchError::NonFinite
                });
            }

            (a, b) = self.secant2(a, b)?;

            if (b.alpha - a.alpha).abs() > GAMMA * width {
                let c = self.eval(0.5 * (a.alpha + b.alpha))?;
                (a, b) = self.update(a, b, c)?;
            }
        }

        Continue(LineSearchError::MaxIters)
    }

    /// Evaluates `t` and accepts it if it passes the termination test.
    fn eval(&mut self, t: f64) -> Flow<Step> {
        let (step, trial) = probe(self.problem, self.state0, t);

        if let Some(state) = trial
            && self.converged(&step)
        {
            return Break(state);
        }

        Continue(step)
    }

    fn converged(&mut self, step: &Step) -> bool {
        let (c1, c2) = (self.config.c1(), self.config.c2());

        if self.approx {
            return step.has_approx_armijo(&self.origin, self.epsilon)
                && step.has_approx_wolfe(&self.origin, c1, c2);
        }

        let done = step.has_armijo(&self.origin, c1) && step.has_wolfe(&self.origin, c2);
        if done {
            self.approx = (step.phi - self.origin.phi).abs() <= OMEGA * self.sum_c;
        }
        done
    }

    fn has_approx_armijo(&self, step: &Step) -> bool {
        step.has_approx_armijo(&self.origin, self.epsilon)
    }

    /// Expands from the initial trial until the slope turns non-negative or
    /// the value rises above the approximate Armijo bound.
    fn bracket(&mut self, mut c: Step) -> Flow<(Step, Step)> {
        let mut a = self.origin;

        for _ in 0..self.config.max_iters() {
            if c.is_finite() && !c.has_descent() {
                return Continue((a, c));
            }
            if !c.is_finite() || !self.has_approx_armijo(&c) {
                return self.update_u(self.origin, c);
            }
            if c.alpha >= self.config.max_step() {
                break;
            }

            a = c;
            c = self.eval((RHO * c.alpha).min(self.config.max_step()))?;
        }

        Continue((a, c))
    }

    /// Shrinks `[a, b]` where `b` violates the approximate Armijo bound (or
    /// is not finite) while still descending.
    fn update_u(&mut self, mut a: Step, mut b: Step) -> Flow<(Step, Step)> {
        for _ in 0..self.config.max_iters() {
            if (b.alpha - a.alpha).abs() < MIN_STEP {
                break;
            }

            let d = self.eval((1.0 - THETA) * a.alpha + THETA * b.alpha)?;
            if !d.is_finite() {
                b = d;
            } else if !d.has_descent() {
                return Continue((a, d));
            } else if self.has_approx_armijo(&d) {
                a = d;
            } else {
                b = d;
            }
        }

        Continue((a, b))
    }

    /// Replaces one end of `[a, b]` with the interior point `c`.
    fn update(&mut self, a: Step, b: Step, c: Step) -> Flow<(Step, Step)> {
        let (min, max) = (a.alpha.min(b.alpha), a.alpha.max(b.alpha));
        if !(c.alpha > min && c.alpha < max) {
            return Continue((a, b));
        }

        if !c.is_finite() {
            self.update_u(a, c)
        } else if !c.has_descent() {
            Continue((a, c))
        } else if self.has_approx_armijo(&c) {
            Continue((c, b))
        } else {
            self.update_u(a, c)
        }
    }

    /// Secant step through the slopes at `a` and `b`.
    ///
    /// Falls back to `a` itself when the secant formula is not finite.
    fn secant(&mut self, a: Step, b: Step) -> Flow<Step> {
        let t = (a.alpha * b.gphi - b.alpha * a.gphi) / (b.gphi - a.gphi);
        if t.is_finite() { self.eval(t) } else { Continue(a) }
    }

    fn secant2(&mut self, a: Step, b: Step) -> Flow<(Step, Step)> {
        let c = self.secant(a, b)?;
        let (new_a, new_b) = self.update(a, b, c)?;

        if c.alpha == new_b.alpha {
            let c = self.secant(b, new_b)?;
            self.update(new_a, new_b, c)
        } else if c.alpha == new_a.alpha {
            let c = self.secant(a, new_a)?;
            self.update(new_a, new_b, c)
        } else {
            Continue((new_a, new_b))
        }
    }
}
