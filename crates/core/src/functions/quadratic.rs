use ndarray::Array1;

use crate::Function;

/// `f(x) = Σ xᵢ²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sphere {
    size: usize,
}

impl Sphere {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Function for Sphere {
    fn size(&self) -> usize {
        self.size
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        x.dot(x)
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        (x.dot(x), x * 2.0)
    }
}

/// Rotated hyper-ellipsoid: `f(x) = Σᵢ Σ_{j≤i} xⱼ²`.
///
/// Equivalent to `Σⱼ (n − j) xⱼ²`, an axis-aligned quadratic whose
/// condition number grows linearly with `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatedEllipsoid {
    size: usize,
}

impl RotatedEllipsoid {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    fn weight(&self, j: usize) -> f64 {
        (self.size - j) as f64
    }
}

impl Function for RotatedEllipsoid {
    fn size(&self) -> usize {
        self.size
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        x.iter()
            .enumerate()
            .map(|(j, xj)| self.weight(j) * xj * xj)
            .sum()
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let g = Array1::from_shape_fn(self.size, |j| 2.0 * self.weight(j) * x[j]);
        (self.value(x), g)
    }
}
