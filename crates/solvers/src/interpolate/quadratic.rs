/// A quadratic `q(x) = a (x − x₀)² + b (x − x₀) + c` with `a ≠ 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    x0: f64,
    a: f64,
    b: f64,
    c: f64,
}

impl Quadratic {
    /// Fits the quadratic through `q(x0) = f0`, `q'(x0) = g0`, `q(x1) = f1`.
    ///
    /// Returns `None` if `x0 == x1`, if the fit is degenerate (linear), or
    /// if any coefficient is non-finite.
    #[must_use]
    pub fn fit(x0: f64, f0: f64, g0: f64, x1: f64, f1: f64) -> Option<Self> {
        let h = x1 - x0;
        if h == 0.0 {
            return None;
        }

        let a = (f1 - f0 - g0 * h) / (h * h);
        Self::shifted(x0, a, g0, f0)
    }

    /// Builds `a x² + b x + c`.
    ///
    /// Returns `None` if `a == 0` or any coefficient is non-finite.
    #[must_use]
    pub fn from_coefficients(a: f64, b: f64, c: f64) -> Option<Self> {
        Self::shifted(0.0, a, b, c)
    }

    fn shifted(x0: f64, a: f64, b: f64, c: f64) -> Option<Self> {
        let valid = a != 0.0 && [x0, a, b, c].iter().all(|v| v.is_finite());
        valid.then_some(Self { x0, a, b, c })
    }

    /// Returns the stationary point.
    ///
    /// This is the minimizer when the leading coefficient is positive.
    #[must_use]
    pub fn extremum(&self) -> f64 {
        self.x0 - self.b / (2.0 * self.a)
    }

    /// Returns `true` if the parabola opens upward.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.a > 0.0
    }

    #[must_use]
    pub fn value(&self, x: f64) -> f64 {
        let s = x - self.x0;
        (self.a * s + self.b) * s + self.c
    }

    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        2.0 * self.a * (x - self.x0) + self.b
    }

    /// Returns `[a, b, c]` for `a x² + b x + c`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 3] {
        let Self { x0, a, b, c } = *self;
        [a, b - 2.0 * a * x0, (a * x0 - b) * x0 + c]
    }
}
