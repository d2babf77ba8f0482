/// A cubic `p(x) = a s³ + b s² + c s + d` in the shifted variable `s = x − x₀`.
///
/// Only cubics with real stationary points are representable: either the
/// derivative's discriminant `b² − 3ac` is non-negative, or the cubic
/// degenerates to a parabola (`a = 0`, `b ≠ 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    x0: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Cubic {
    /// Fits the Hermite cubic through `(x0, f0, g0)` and `(x1, f1, g1)`.
    ///
    /// Returns `None` if `x0 == x1`, if the fitted polynomial has no real
    /// stationary point, or if any coefficient is non-finite.
    #[must_use]
    pub fn fit(x0: f64, f0: f64, g0: f64, x1: f64, f1: f64, g1: f64) -> Option<Self> {
        let h = x1 - x0;
        if h == 0.0 {
            return None;
        }

        let slope = (f1 - f0) / h;
        let a = (g0 + g1 - 2.0 * slope) / (h * h);
        let b = (3.0 * slope - 2.0 * g0 - g1) / h;

        Self::shifted(x0, a, b, g0, f0)
    }

    /// Builds `a x³ + b x² + c x + d`.
    ///
    /// Returns `None` under the same conditions as [`Cubic::fit`].
    #[must_use]
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64) -> Option<Self> {
        Self::shifted(0.0, a, b, c, d)
    }

    fn shifted(x0: f64, a: f64, b: f64, c: f64, d: f64) -> Option<Self> {
        if ![x0, a, b, c, d].iter().all(|v| v.is_finite()) {
            return None;
        }
        if a == 0.0 && b == 0.0 {
            return None;
        }
        if b * b - 3.0 * a * c < 0.0 {
            return None;
        }
        Some(Self { x0, a, b, c, d })
    }

    fn discriminant(&self) -> f64 {
        (self.b * self.b - 3.0 * self.a * self.c).max(0.0)
    }

    /// Returns both stationary points in ascending order.
    ///
    /// For a degenerate (parabolic) cubic both entries are the vertex.
    #[must_use]
    pub fn extrema(&self) -> [f64; 2] {
        let Self { x0, a, b, c, .. } = *self;

        if a == 0.0 {
            let s = -c / (2.0 * b);
            return [x0 + s, x0 + s];
        }

        // Avoids cancellation between -b and the root of the discriminant.
        let q = -(b + b.signum() * self.discriminant().sqrt());
        let first = q / (3.0 * a);
        let second = if q == 0.0 { 0.0 } else { c / q };

        let (lo, hi) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        [x0 + lo, x0 + hi]
    }

    /// Returns the local minimizer: the stationary point with positive curvature.
    ///
    /// Returns `None` for a degenerate cubic that opens downward, or when
    /// both stationary points coincide at an inflection.
    #[must_use]
    pub fn minimum(&self) -> Option<f64> {
        let Self { x0, a, b, c, .. } = *self;

        let s = if a == 0.0 {
            if b <= 0.0 {
                return None;
            }
            -c / (2.0 * b)
        } else {
            let root = self.discriminant().sqrt();
            if b >= 0.0 {
                -c / (b + root)
            } else {
                (root - b) / (3.0 * a)
            }
        };

        let x = x0 + s;
        x.is_finite().then_some(x)
    }

    #[must_use]
    pub fn value(&self, x: f64) -> f64 {
        let s = x - self.x0;
        ((self.a * s + self.b) * s + self.c) * s + self.d
    }

    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        let s = x - self.x0;
        (3.0 * self.a * s + 2.0 * self.b) * s + self.c
    }

    /// Returns `[a, b, c, d]` for `a x³ + b x² + c x + d`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 4] {
        let Self { x0, a, b, c, d } = *self;
        [
            a,
            b - 3.0 * a * x0,
            (3.0 * a * x0 - 2.0 * b) * x0 + c,
            ((b - a * x0) * x0 - c) * x0 + d,
        ]
    }
}
