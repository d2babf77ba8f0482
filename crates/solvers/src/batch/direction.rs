use std::{fmt, str::FromStr};

use ndarray::Array1;

use crate::{ParseError, State};

use super::lbfgs::History;

/// How each iteration's search direction is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Steepest descent, `d = −g`.
    Gradient,

    /// Nonlinear conjugate gradient, `d = −g + β d_prev`.
    Conjugate(Beta),

    /// Limited-memory BFGS with the given number of correction pairs.
    Lbfgs { history: usize },
}

/// Formulas for the conjugate gradient coefficient `β`.
///
/// With `y = g − g_prev` and `d = d_prev`:
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Beta {
    /// Hestenes–Stiefel: `g·y / d·y`.
    HestenesStiefel,

    /// Fletcher–Reeves: `|g|² / |g_prev|²`.
    FletcherReeves,

    /// Polak–Ribière–Polyak, clipped at zero: `max(0, g·y / |g_prev|²)`.
    PolakRibiere,

    /// Conjugate descent (Fletcher): `−|g|² / d·g_prev`.
    ConjugateDescent,

    /// Liu–Storey: `−g·y / d·g_prev`.
    LiuStorey,

    /// Dai–Yuan: `|g|² / d·y`.
    DaiYuan,

    /// Hager–Zhang, bounded below by `η = −1 / (|d| min(0.01, |g_prev|))`.
    HagerZhang,

    /// Hybrid `max(0, min(DY, HS))`.
    DaiYuanHestenesStiefel,

    /// Hybrid `|g|² / max(d·y, −d·g_prev)`.
    DaiYuanConjugateDescent,
}

impl Beta {
    /// Computes `β` from the previous state (with its direction) and the
    /// current gradient.
    #[must_use]
    pub fn compute(self, prev: &State, g: &Array1<f64>) -> f64 {
        let gp = prev.g();
        let dp = prev.d();
        let y = g - gp;

        let gg = g.dot(g);
        let dy = dp.dot(&y);
        let dgp = dp.dot(gp);

        match self {
            Self::HestenesStiefel => g.dot(&y) / dy,
            Self::FletcherReeves => gg / gp.dot(gp),
            Self::PolakRibiere => (g.dot(&y) / gp.dot(gp)).max(0.0),
            Self::ConjugateDescent => -gg / dgp,
            Self::LiuStorey => -g.dot(&y) / dgp,
            Self::DaiYuan => gg / dy,
            Self::HagerZhang => {
                let div = 1.0 / dy;
                let yy = y.dot(&y);
                let beta = div * (g.dot(&y) - 2.0 * yy * div * dp.dot(g));

                let dnorm = dp.dot(dp).sqrt();
                let gpnorm = gp.dot(gp).sqrt();
                let eta = -1.0 / (dnorm * gpnorm.min(0.01));
                beta.max(eta)
            }
            Self::DaiYuanHestenesStiefel => (gg / dy).min(g.dot(&y) / dy).max(0.0),
            Self::DaiYuanConjugateDescent => gg / dy.max(-dgp),
        }
    }
}

/// Produces descent directions for one run.
///
/// Remembers the previous state (for conjugate gradient) or the correction
/// pairs (for L-BFGS). Every direction is checked before use: one that is
/// not finite or not downhill is replaced by `−g`, which counts as a restart.
#[derive(Debug, Clone)]
pub(super) struct Descent {
    direction: Direction,
    orthotest: f64,
    previous: Option<State>,
    history: History,
}

impl Descent {
    pub(super) fn new(direction: Direction, orthotest: f64) -> Self {
        let capacity = match direction {
            Direction::Lbfgs { history } => history,
            Direction::Gradient | Direction::Conjugate(_) => 0,
        };

        Self {
            direction,
            orthotest,
            previous: None,
            history: History::new(capacity),
        }
    }

    /// Sets the search direction on `state`.
    ///
    /// Returns `true` if the strategy's direction was abandoned for `−g`.
    pub(super) fn prepare(&mut self, state: &mut State) -> bool {
        let g = state.g();
        let steepest = || -g;

        let (d, mut restarted) = match (self.direction, &self.previous) {
            (Direction::Gradient, _) | (Direction::Conjugate(_), None) => (steepest(), false),
            (Direction::Conjugate(beta), Some(prev)) => {
                // Successive gradients far from orthogonal: CG has lost conjugacy.
                if g.dot(prev.g()).abs() >= self.orthotest * g.dot(g) {
                    (steepest(), true)
                } else {
                    let beta = beta.compute(prev, g);
                    (prev.d() * beta - g, false)
                }
            }
            (Direction::Lbfgs { .. }, _) => (self.history.direction(g), false),
        };

        let downhill = d.dot(g) < 0.0 && d.iter().all(|v| v.is_finite());
        let d = if downhill {
            d
        } else {
            restarted = true;
            steepest()
        };

        state.set_direction(d);
        restarted
    }

    /// Records an accepted step from `previous` (with the direction used) to
    /// `current`.
    pub(super) fn accepted(&mut self, previous: State, current: &State) {
        if let Direction::Lbfgs { .. } = self.direction {
            let s = current.x() - previous.x();
            let y = current.g() - previous.g();
            self.history.push(s, y);
        }
        self.previous = Some(previous);
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gradient => f.write_str("gd"),
            Self::Conjugate(beta) => write!(f, "cgd-{beta}"),
            Self::Lbfgs { .. } => f.write_str("lbfgs"),
        }
    }
}

impl fmt::Display for Beta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HestenesStiefel => "hs",
            Self::FletcherReeves => "fr",
            Self::PolakRibiere => "prp",
            Self::ConjugateDescent => "cd",
            Self::LiuStorey => "ls",
            Self::DaiYuan => "dy",
            Self::HagerZhang => "n",
            Self::DaiYuanHestenesStiefel => "dyhs",
            Self::DaiYuanConjugateDescent => "dycd",
        })
    }
}

impl FromStr for Beta {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hs" => Ok(Self::HestenesStiefel),
            "fr" => Ok(Self::FletcherReeves),
            "prp" => Ok(Self::PolakRibiere),
            "cd" => Ok(Self::ConjugateDescent),
            "ls" => Ok(Self::LiuStorey),
            "dy" => Ok(Self::DaiYuan),
            "n" | "hz" => Ok(Self::HagerZhang),
            "dyhs" => Ok(Self::DaiYuanHestenesStiefel),
            "dycd" => Ok(Self::DaiYuanConjugateDescent),
            _ => Err(ParseError::unknown(
                "beta formula",
                s,
                "hs, fr, prp, cd, ls, dy, n, dyhs, dycd",
            )),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Parses `gd`, `lbfgs`, or `cgd-<beta>`.
    ///
    /// `lbfgs` keeps the default of six correction pairs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gd" => Ok(Self::Gradient),
            "lbfgs" => Ok(Self::Lbfgs { history: 6 }),
            _ => match s.strip_prefix("cgd-") {
                Some(beta) => beta.parse().map(Self::Conjugate),
                None => Err(ParseError::unknown(
                    "direction",
                    s,
                    "gd, lbfgs, cgd-<beta>",
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    use nano_core::{Problem, functions::Sphere};

    const BETAS: [Beta; 9] = [
        Beta::HestenesStiefel,
        Beta::FletcherReeves,
        Beta::PolakRibiere,
        Beta::ConjugateDescent,
        Beta::LiuStorey,
        Beta::DaiYuan,
        Beta::HagerZhang,
        Beta::DaiYuanHestenesStiefel,
        Beta::DaiYuanConjugateDescent,
    ];

    #[test]
    fn formulas_agree_after_exact_line_search() {
        // After a steepest descent step with an exact line search on a
        // quadratic, d_prev = −g_prev and g ⟂ g_prev, so every formula
        // reduces to |g|² / |g_prev|².
        let sphere = Sphere::new(2);
        let problem = Problem::new(&sphere);

        let prev = State::new(&problem, array![1.0, 0.0]).expect("valid start");
        let g = array![0.0, 0.5];

        let expected = g.dot(&g) / prev.g().dot(prev.g());
        for beta in BETAS {
            assert_relative_eq!(beta.compute(&prev, &g), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn prp_is_clipped_at_zero() {
        let sphere = Sphere::new(2);
        let problem = Problem::new(&sphere);
        let prev = State::new(&problem, array![1.0, 1.0]).expect("valid start");

        // g·(g − g_prev) < 0.
        let g = array![0.5, 0.5];
        assert_relative_eq!(Beta::PolakRibiere.compute(&prev, &g), 0.0);
        assert!(Beta::HestenesStiefel.compute(&prev, &g) < 0.0);
    }

    #[test]
    fn restarts_on_lost_conjugacy() {
        let sphere = Sphere::new(2);
        let problem = Problem::new(&sphere);

        let mut descent = Descent::new(Direction::Conjugate(Beta::FletcherReeves), 0.1);
        let mut state = State::new(&problem, array![2.0, 1.0]).expect("valid start");

        assert!(!descent.prepare(&mut state));
        let previous = state.clone();
        // A short step keeps g nearly parallel to g_prev.
        assert!(state.update(&problem, 0.01));
        descent.accepted(previous, &state);

        assert!(descent.prepare(&mut state));
        assert_eq!(state.d(), &(-state.g()));
    }

    #[test]
    fn parses_names() {
        assert_eq!("gd".parse(), Ok(Direction::Gradient));
        assert_eq!(
            "cgd-prp".parse(),
            Ok(Direction::Conjugate(Beta::PolakRibiere))
        );
        assert_eq!("lbfgs".parse(), Ok(Direction::Lbfgs { history: 6 }));
        assert_eq!(
            Direction::Conjugate(Beta::HagerZhang).to_string(),
            "cgd-n"
        );
        assert!("cgd-xyz".parse::<Direction>().is_err());
        assert!("newton".parse::<Direction>().is_err());
    }
}
