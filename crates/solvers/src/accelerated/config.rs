use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::ParseError;

/// When to reset the momentum of the accelerated iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Restart {
    /// Never restart.
    None,

    /// Restart when the objective increases: `f(x_k) > f(x_{k−1})`.
    Function,

    /// Restart when the gradient at the extrapolated point opposes the
    /// last move: `g(y_{k−1})·(x_k − x_{k−1}) > 0`.
    Gradient,
}

/// Configuration for the accelerated gradient solver.
///
/// The step at iteration `k` is `alpha0 · (1 + k)^(−decay)`. The momentum
/// parameter `q ∈ [0, 1)` is the assumed inverse condition number: `0`
/// gives the classic Nesterov schedule, larger values cap the momentum for
/// strongly convex objectives.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    alpha0: f64,
    decay: f64,
    q: f64,
    restart: Restart,
    max_iters: usize,
    epsilon: f64,
}

/// Errors that can occur when validating an accelerated gradient config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha0 must be finite and positive")]
    Alpha0,

    #[error("decay must be in [0, 1]")]
    Decay,

    #[error("q must be in [0, 1)")]
    Q,

    #[error("epsilon must be finite and positive")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 0.0).unwrap()
    }
}

impl Config {
    /// Creates a config with the given step and momentum parameter.
    ///
    /// Uses gradient restarts, no decay, at most 1000 iterations, and
    /// `epsilon = 1e-6`.
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha0` or `q` is out of range.
    pub fn new(alpha0: f64, q: f64) -> Result<Self, ConfigError> {
        let config = Self {
            alpha0,
            decay: 0.0,
            q,
            restart: Restart::Gradient,
            max_iters: 1000,
            epsilon: 1e-6,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns the first parameter found out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha0.is_finite() && self.alpha0 > 0.0) {
            return Err(ConfigError::Alpha0);
        }
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(ConfigError::Decay);
        }
        if !(0.0..1.0).contains(&self.q) {
            return Err(ConfigError::Q);
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ConfigError::Epsilon);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_alpha0(mut self, alpha0: f64) -> Self {
        self.alpha0 = alpha0;
        self
    }

    #[must_use]
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    #[must_use]
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    #[must_use]
    pub fn with_restart(mut self, restart: Restart) -> Self {
        self.restart = restart;
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

    #[must_use]
    pub fn alpha0(&self) -> f64 {
        self.alpha0
    }

    #[must_use]
    pub fn decay(&self) -> f64 {
        self.decay
    }

    #[must_use]
    pub fn q(&self) -> f64 {
        self.q
    }

    #[must_use]
    pub fn restart(&self) -> Restart {
        self.restart
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the step length for iteration `iter`.
    #[must_use]
    pub fn learning_rate(&self, iter: usize) -> f64 {
        let k = iter as f64;
        self.alpha0 * (1.0 + k).powf(-self.decay)
    }

    /// Advances the momentum sequence: solves `θ² = (1 − θ) θₖ² + q θ`.
    #[must_use]
    pub fn next_theta(&self, theta: f64) -> f64 {
        let b = theta * theta - self.q;
        0.5 * (-b + (b * b + 4.0 * theta * theta).sqrt())
    }
}

impl fmt::Display for Restart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Function => "function",
            Self::Gradient => "gradient",
        })
    }
}

impl FromStr for Restart {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "function" => Ok(Self::Function),
            "gradient" => Ok(Self::Gradient),
            _ => Err(ParseError::unknown("restart", s, "none, function, gradient")),
        }
    }
}
