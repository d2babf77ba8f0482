use thiserror::Error;

use crate::linesearch::{self, Initializer, Strategy};

use super::Direction;

/// Configuration for the batch descent driver.
///
/// [`Config::new`] picks the line search, initial step, and Wolfe constants
/// that suit the direction family:
///
/// | direction   | line search  | initializer | c1     | c2    |
/// |-------------|--------------|-------------|--------|-------|
/// | gradient    | strong Wolfe | quadratic   | `1e-4` | `0.9` |
/// | conjugate   | strong Wolfe | quadratic   | `1e-4` | `0.1` |
/// | L-BFGS      | strong Wolfe | unit        | `1e-4` | `0.9` |
///
/// The defaults run at most 1000 iterations and stop once
/// `‖g‖∞ / max(1, |f|) < 1e-6`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    direction: Direction,
    line_search: Strategy,
    initializer: Initializer,
    wolfe: linesearch::Config,
    max_iters: usize,
    epsilon: f64,
    orthotest: f64,
}

/// Errors that can occur when validating a batch driver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("orthotest must be finite and positive")]
    Orthotest,

    #[error("L-BFGS history must hold at least one pair")]
    History,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Direction::Conjugate(super::Beta::PolakRibiere))
    }
}

impl Config {
    /// Creates the default configuration for `direction`.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        let (initializer, c2) = match direction {
            Direction::Gradient => (Initializer::Quadratic, 0.9),
            Direction::Conjugate(_) => (Initializer::Quadratic, 0.1),
            Direction::Lbfgs { .. } => (Initializer::Unit, 0.9),
        };

        Self {
            direction,
            line_search: Strategy::StrongWolfe,
            initializer,
            // Known-good values, unwrap is safe
            wolfe: linesearch::Config::wolfe(1e-4, c2).unwrap(),
            max_iters: 1000,
            epsilon: 1e-6,
            orthotest: 0.1,
        }
    }

    /// Checks the values the builder methods cannot reject on their own.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` or `orthotest` is not finite and
    /// positive, or if an L-BFGS direction keeps no history.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ConfigError::Epsilon);
        }
        if !(self.orthotest.is_finite() && self.orthotest > 0.0) {
            return Err(ConfigError::Orthotest);
        }
        if let Direction::Lbfgs { history: 0 } = self.direction {
            return Err(ConfigError::History);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_line_search(mut self, line_search: Strategy) -> Self {
        self.line_search = line_search;
        self
    }

    #[must_use]
    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.initializer = initializer;
        self
    }

    #[must_use]
    pub fn with_wolfe(mut self, wolfe: linesearch::Config) -> Self {
        self.wolfe = wolfe;
        self
    }

    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the conjugate gradient restart threshold on `|g·g_prev| / |g|²`.
    #[must_use]
    pub fn with_orthotest(mut self, orthotest: f64) -> Self {
        self.orthotest = orthotest;
        self
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn line_search(&self) -> Strategy {
        self.line_search
    }

    #[must_use]
    pub fn initializer(&self) -> Initializer {
        self.initializer
    }

    #[must_use]
    pub fn wolfe(&self) -> &linesearch::Config {
        &self.wolfe
    }

    /// Returns the maximum number of descent iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on `‖g‖∞ / max(1, |f|)`.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn orthotest(&self) -> f64 {
        self.orthotest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::batch::Beta;

    #[test]
    fn defaults_follow_direction_family() {
        let gd = Config::new(Direction::Gradient);
        assert_eq!(gd.initializer(), Initializer::Quadratic);
        assert!((gd.wolfe().c2() - 0.9).abs() < f64::EPSILON);

        let cg = Config::new(Direction::Conjugate(Beta::DaiYuan));
        assert!((cg.wolfe().c2() - 0.1).abs() < f64::EPSILON);

        let lbfgs = Config::new(Direction::Lbfgs { history: 6 });
        assert_eq!(lbfgs.initializer(), Initializer::Unit);
        assert_eq!(lbfgs.line_search(), Strategy::StrongWolfe);
    }

    #[test]
    fn validation() {
        assert_eq!(Config::default().validate(), Ok(()));
        assert_eq!(
            Config::default().with_epsilon(0.0).validate(),
            Err(ConfigError::Epsilon)
        );
        assert_eq!(
            Config::default().with_orthotest(f64::NAN).validate(),
            Err(ConfigError::Orthotest)
        );
        assert_eq!(
            Config::new(Direction::Lbfgs { history: 0 }).validate(),
            Err(ConfigError::History)
        );
    }
}
