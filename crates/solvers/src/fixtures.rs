//! Objectives with deliberate defects, shared by the unit tests.

use ndarray::{Array1, array};

use nano_core::Function;

/// `f(x) = −x₀` inside the unit ball, NaN outside.
pub(crate) struct Ball;

impl Function for Ball {
    fn size(&self) -> usize {
        2
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        if x.dot(x) < 1.0 { -x[0] } else { f64::NAN }
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        (self.value(x), array![-1.0, 0.0])
    }
}

/// `f(x) = x₀² + x₁²` over two dimensions, with a gradient of length three.
pub(crate) struct LongGradient;

impl Function for LongGradient {
    fn size(&self) -> usize {
        2
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        x.dot(x)
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        (self.value(x), array![2.0 * x[0], 2.0 * x[1], 0.0])
    }
}

/// `f(x) = x²`, whose gradient gains a spurious entry once `x ≥ 1`.
pub(crate) struct Ragged;

impl Function for Ragged {
    fn size(&self) -> usize {
        1
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        x[0] * x[0]
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let g = if x[0] < 1.0 {
            array![2.0 * x[0]]
        } else {
            array![2.0 * x[0], 0.0]
        };
        (self.value(x), g)
    }
}
