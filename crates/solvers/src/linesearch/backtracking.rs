use nano_core::{Function, Problem};

use crate::{
    State,
    interpolate::{Cubic, Quadratic},
};

use super::{Config, LineSearchError, MIN_STEP, Step};

/// Shrinks the step until the Armijo condition holds.
///
/// Each rejected trial proposes the next step from the cubic through the
/// origin and the trial, then the quadratic, then plain halving, with the
/// proposal kept within `[0.1 t, 0.5 t]`. A non-finite trial halves the step.
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
    let mut t = t0;
    let mut last_finite = true;

    for _ in 0..config.max_iters() {
        if t < MIN_STEP {
            return Err(if last_finite {
                LineSearchError::BracketCollapsed
            } else {
                LineSearchError::NonFinite
            });
        }

        match state0.step_to(problem, t) {
            Some(trial) if trial.has_armijo(state0, config.c1()) => return Ok(trial),
            Some(trial) => {
                last_finite = true;
                t = shorter(&origin, &trial.step());
            }
            None => {
                last_finite = false;
                t *= 0.5;
            }
        }
    }

    Err(if last_finite {
        LineSearchError::MaxIters
    } else {
        LineSearchError::NonFinite
    })
}

/// Proposes a shorter step after `trial` failed the Armijo test.
fn shorter(origin: &Step, trial: &Step) -> f64 {
    let t = trial.alpha;

    let proposal = Cubic::fit(0.0, origin.phi, origin.gphi, t, trial.phi, trial.gphi)
        .and_then(|cubic| cubic.minimum())
        .or_else(|| {
            Quadratic::fit(0.0, origin.phi, origin.gphi, t, trial.phi)
                .filter(Quadratic::is_convex)
                .map(|quadratic| quadratic.extremum())
        })
        .unwrap_or(0.5 * t);

    proposal.clamp(0.1 * t, 0.5 * t)
}
