use ndarray::{Array1, array};

use crate::Function;

/// Matyas: `f(x, y) = 0.26 (x² + y²) − 0.48 xy`.
///
/// A convex quadratic with Hessian eigenvalues `1.0` and `0.04`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matyas;

impl Function for Matyas {
    fn size(&self) -> usize {
        2
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        0.26 * (x[0] * x[0] + x[1] * x[1]) - 0.48 * x[0] * x[1]
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let g = array![
            0.52 * x[0] - 0.48 * x[1],
            0.52 * x[1] - 0.48 * x[0]
        ];
        (self.value(x), g)
    }
}

/// Booth: `f(x, y) = (x + 2y − 7)² + (2x + y − 5)²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booth;

impl Function for Booth {
    fn size(&self) -> usize {
        2
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        let a = x[0] + 2.0 * x[1] - 7.0;
        let b = 2.0 * x[0] + x[1] - 5.0;
        a * a + b * b
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let a = x[0] + 2.0 * x[1] - 7.0;
        let b = 2.0 * x[0] + x[1] - 5.0;
        (a * a + b * b, array![2.0 * a + 4.0 * b, 4.0 * a + 2.0 * b])
    }
}

/// Beale: `Σₖ (cₖ − x + x yᵏ)²` for `c = (1.5, 2.25, 2.625)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beale;

const BEALE: [f64; 3] = [1.5, 2.25, 2.625];

impl Function for Beale {
    fn size(&self) -> usize {
        2
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        let (u, v) = (x[0], x[1]);
        BEALE
            .iter()
            .zip(1..)
            .map(|(c, k)| {
                let t = c - u + u * v.powi(k);
                t * t
            })
            .sum()
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let (u, v) = (x[0], x[1]);
        let mut f = 0.0;
        let mut g = Array1::zeros(2);

        for (c, k) in BEALE.iter().zip(1..) {
            let t = c - u + u * v.powi(k);
            f += t * t;
            g[0] += 2.0 * t * (v.powi(k) - 1.0);
            g[1] += 2.0 * t * u * f64::from(k) * v.powi(k - 1);
        }

        (f, g)
    }
}

/// Himmelblau: `f(x, y) = (x² + y − 11)² + (x + y² − 7)²`.
///
/// Has four global minima, one of them at `(3, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Himmelblau;

impl Function for Himmelblau {
    fn size(&self) -> usize {
        2
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        let a = x[0] * x[0] + x[1] - 11.0;
        let b = x[0] + x[1] * x[1] - 7.0;
        a * a + b * b
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let a = x[0] * x[0] + x[1] - 11.0;
        let b = x[0] + x[1] * x[1] - 7.0;
        let g = array![4.0 * x[0] * a + 2.0 * b, 2.0 * a + 4.0 * x[1] * b];
        (a * a + b * b, g)
    }
}
