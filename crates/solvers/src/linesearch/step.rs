/// A sample of the line-search slice `φ(α) = f(x₀ + α d₀)`.
///
/// Holds the step length, the objective value, and the directional
/// derivative `φ'(α) = g(x₀ + α d₀)·d₀`. The acceptance tests compare a
/// sample against the origin sample at `α = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub alpha: f64,
    pub phi: f64,
    pub gphi: f64,
}

impl Step {
    #[must_use]
    pub fn new(alpha: f64, phi: f64, gphi: f64) -> Self {
        Self { alpha, phi, gphi }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.phi.is_finite() && self.gphi.is_finite()
    }

    #[must_use]
    pub fn has_armijo(&self, origin: &Step, c1: f64) -> bool {
        self.phi <= origin.phi + c1 * self.alpha * origin.gphi
    }

    #[must_use]
    pub fn has_wolfe(&self, origin: &Step, c2: f64) -> bool {
        self.gphi >= c2 * origin.gphi
    }

    #[must_use]
    pub fn has_strong_wolfe(&self, origin: &Step, c2: f64) -> bool {
        self.gphi.abs() <= c2 * origin.gphi.abs()
    }

    #[must_use]
    pub fn has_approx_armijo(&self, origin: &Step, epsilon: f64) -> bool {
        self.phi <= origin.phi + epsilon
    }

    #[must_use]
    pub fn has_approx_wolfe(&self, origin: &Step, c1: f64, c2: f64) -> bool {
        (2.0 * c1 - 1.0) * origin.gphi >= self.gphi && self.gphi >= c2 * origin.gphi
    }

    #[must_use]
    pub fn has_descent(&self) -> bool {
        self.gphi < 0.0
    }
}
