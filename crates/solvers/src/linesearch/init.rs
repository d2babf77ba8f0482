use std::{fmt, str::FromStr};

use crate::{ParseError, State};

/// How the first trial step of each line search is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Initializer {
    /// Always `1`. The natural choice for quasi-Newton directions.
    Unit,

    /// `t_prev · dg_prev / dg`: assumes the first-order change along the
    /// direction stays the same between iterations.
    Consistent,

    /// `min(1, 1.01 · 2 (f − f_prev) / dg)`: the minimizer of the quadratic
    /// through the last decrease.
    Quadratic,
}

/// A stateful initial step estimator for one optimization run.
///
/// Every estimator returns `1` on its first call and whenever its formula
/// produces a non-finite or non-positive value.
#[derive(Debug, Clone)]
pub struct InitialStep {
    initializer: Initializer,
    previous: Option<Previous>,
}

#[derive(Debug, Clone, Copy)]
struct Previous {
    f: f64,
    dg: f64,
}

impl InitialStep {
    #[must_use]
    pub fn new(initializer: Initializer) -> Self {
        Self {
            initializer,
            previous: None,
        }
    }

    #[must_use]
    pub fn initializer(&self) -> Initializer {
        self.initializer
    }

    /// Returns the initial step for a line search from `state`.
    ///
    /// `state` must already carry the direction of the upcoming search.
    pub fn next(&mut self, state: &State) -> f64 {
        let (f, dg) = (state.f(), state.dg());

        let t0 = match (self.initializer, self.previous) {
            (Initializer::Unit, _) | (_, None) => 1.0,
            (Initializer::Consistent, Some(prev)) => state.t() * prev.dg / dg,
            (Initializer::Quadratic, Some(prev)) => (1.01 * 2.0 * (f - prev.f) / dg).min(1.0),
        };

        self.previous = Some(Previous { f, dg });

        if t0.is_finite() && t0 > 0.0 { t0 } else { 1.0 }
    }

    /// Forgets the history, so the next call returns `1`.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

impl fmt::Display for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unit => "unit",
            Self::Consistent => "consistent",
            Self::Quadratic => "quadratic",
        })
    }
}

impl FromStr for Initializer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unit" => Ok(Self::Unit),
            "consistent" => Ok(Self::Consistent),
            "quadratic" => Ok(Self::Quadratic),
            _ => Err(ParseError::unknown(
                "initializer",
                s,
                "unit, consistent, quadratic",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    use nano_core::{Problem, functions::Sphere};

    #[test]
    fn first_call_is_unit() {
        let sphere = Sphere::new(2);
        let problem = Problem::new(&sphere);
        let state = State::new(&problem, array![1.0, 1.0]).expect("valid start");

        for initializer in [Initializer::Unit, Initializer::Consistent, Initializer::Quadratic] {
            let mut init = InitialStep::new(initializer);
            assert_relative_eq!(init.next(&state), 1.0);
        }
    }

    #[test]
    fn follows_history() {
        let sphere = Sphere::new(1);
        let problem = Problem::new(&sphere);

        // f = x², x = 2: f = 4, g = 4, d = -4, dg = -16.
        let mut state = State::new(&problem, array![2.0]).expect("valid start");

        let mut consistent = InitialStep::new(Initializer::Consistent);
        let mut quadratic = InitialStep::new(Initializer::Quadratic);
        let _ = consistent.next(&state);
        let _ = quadratic.next(&state);

        // Step to x = 1: f = 1, g = 2, d kept at -4 so dg = -8.
        assert!(state.update(&problem, 0.25));

        // 0.25 · (-16) / (-8)
        assert_relative_eq!(consistent.next(&state), 0.5);
        // min(1, 1.01 · 2 · (1 - 4) / (-8)) = min(1, 0.7575)
        assert_relative_eq!(quadratic.next(&state), 0.7575, epsilon = 1e-12);

        quadratic.reset();
        assert_relative_eq!(quadratic.next(&state), 1.0);
    }

    #[test]
    fn falls_back_on_bad_estimates() {
        let sphere = Sphere::new(1);
        let problem = Problem::new(&sphere);
        let mut state = State::new(&problem, array![1.0]).expect("valid start");

        let mut quadratic = InitialStep::new(Initializer::Quadratic);
        let _ = quadratic.next(&state);

        // An uphill move makes the quadratic estimate negative.
        state.set_direction(array![1.0]);
        assert!(state.update(&problem, 1.0));
        state.set_direction(array![-1.0]);
        assert_relative_eq!(quadratic.next(&state), 1.0);
    }

    #[test]
    fn parses_names() {
        assert_eq!("consistent".parse(), Ok(Initializer::Consistent));
        assert_eq!(Initializer::Quadratic.to_string(), "quadratic");
        assert!("cubic".parse::<Initializer>().is_err());
    }
}
