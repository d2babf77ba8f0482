use nano_core::{Function, Problem};

use crate::{
    State,
    interpolate::{Cubic, Quadratic},
};

use super::{Config, LineSearchError, MIN_STEP, Step, probe};

/// Growth factor between bracketing trials.
const EXPANSION: f64 = 3.0;

/// Bracketing line search accepting on the strong Wolfe conditions.
///
/// The bracketing phase grows the step until it either satisfies strong
/// Wolfe, overshoots (Armijo fails, the value stops decreasing, or the slope
/// turns non-negative), or reaches `max_step`. An overshoot hands the
/// bracket to [`zoom`].
pub(super) fn search<F>(
    problem: &Problem<'_, F>,
    state0: &State,
    t0: f64,
    config: &Config,
) -> Result<State, LineSearchError>
where
    F: Function + ?Sized,
{
    let origin = state0.origin();
    let mut prev = origin;
    let mut t = t0;

    for i in 0..config.max_iters() {
        let (step, trial) = probe(problem, state0, t);

        if !step.has_armijo(&origin, config.c1()) || (i > 0 && step.phi >= prev.phi) {
            return zoom(problem, state0, prev, step, config);
        }

        if step.has_strong_wolfe(&origin, config.c2())
            && let Some(state) = trial
        {
            return Ok(state);
        }

        if step.gphi >= 0.0 {
            return zoom(problem, state0, step, prev, config);
        }

        if t >= config.max_step() {
            break;
        }

        prev = step;
        t = (EXPANSION * t).min(config.max_step());
    }

    Err(LineSearchError::MaxIters)
}

/// Shrinks a bracket known to contain a strong Wolfe step.
///
/// `lo` always satisfies Armijo and has the lowest value seen so far; `hi`
/// is the other end of the bracket, which may lie on either side of `lo`.
fn zoom<F>(
    problem: &Problem<'_, F>,
    state0: &State,
    mut lo: Step,
    mut hi: Step,
    config: &Config,
) -> Result<State, LineSearchError>
where
    F: Function + ?Sized,
{
    let origin = state0.origin();

    for _ in 0..config.max_iters() {
        if (hi.alpha - lo.alpha).abs() < MIN_STEP {
            return Err(if hi.is_finite() {
                LineSearchError::BracketCollapsed
            } else {
                LineSearchError::NonFinite
            });
        }

        let (step, trial) = probe(problem, state0, interpolate(&lo, &hi));

        if !step.has_armijo(&origin, config.c1()) || step.phi >= lo.phi {
            hi = step;
            continue;
        }

        if step.has_strong_wolfe(&origin, config.c2())
            && let Some(state) = trial
        {
            return Ok(state);
        }

        if step.gphi * (hi.alpha - lo.alpha) >= 0.0 {
            hi = lo;
        }
        lo = step;
    }

    Err(LineSearchError::MaxIters)
}

/// Picks the next trial inside the bracket.
///
/// Prefers the cubic minimizer through both ends, then the vertex of the
/// convex quadratic through `lo` (value and slope) and `hi` (value), then
/// bisection. Interpolated steps within a tenth of the width from either end
/// are rejected.
fn interpolate(lo: &Step, hi: &Step) -> f64 {
    let (min, max) = (lo.alpha.min(hi.alpha), lo.alpha.max(hi.alpha));
    let margin = 0.1 * (max - min);
    let inside = |t: &f64| t.is_finite() && *t > min + margin && *t < max - margin;

    Cubic::fit(lo.alpha, lo.phi, lo.gphi, hi.alpha, hi.phi, hi.gphi)
        .and_then(|cubic| cubic.minimum())
        .filter(inside)
        .or_else(|| {
            Quadratic::fit(lo.alpha, lo.phi, lo.gphi, hi.alpha, hi.phi)
                .filter(Quadratic::is_convex)
                .map(|quadratic| quadratic.extremum())
                .filter(inside)
        })
        .unwrap_or(0.5 * (lo.alpha + hi.alpha))
}
