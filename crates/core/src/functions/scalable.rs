use ndarray::Array1;

use crate::Function;

/// Rosenbrock: `Σ 100 (xᵢ₊₁ − xᵢ²)² + (1 − xᵢ)²`.
///
/// The curved valley makes this the standard stress test for line searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rosenbrock {
    size: usize,
}

impl Rosenbrock {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Function for Rosenbrock {
    fn size(&self) -> usize {
        self.size
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        x.windows(2)
            .into_iter()
            .map(|w| {
                let a = w[1] - w[0] * w[0];
                let b = 1.0 - w[0];
                100.0 * a * a + b * b
            })
            .sum()
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let mut f = 0.0;
        let mut g = Array1::zeros(self.size);

        for i in 1..self.size {
            let a = x[i] - x[i - 1] * x[i - 1];
            let b = 1.0 - x[i - 1];
            f += 100.0 * a * a + b * b;
            g[i - 1] += -400.0 * x[i - 1] * a - 2.0 * b;
            g[i] += 200.0 * a;
        }

        (f, g)
    }
}

/// Zakharov: `Σ xᵢ² + s² + s⁴` with `s = Σ ½ (i+1) xᵢ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zakharov {
    size: usize,
}

impl Zakharov {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    fn weighted_sum(x: &Array1<f64>) -> f64 {
        x.iter()
            .enumerate()
            .map(|(i, xi)| 0.5 * (i + 1) as f64 * xi)
            .sum()
    }
}

impl Function for Zakharov {
    fn size(&self) -> usize {
        self.size
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        let s = Self::weighted_sum(x);
        x.dot(x) + s.powi(2) + s.powi(4)
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let s = Self::weighted_sum(x);
        let ds = 2.0 * s + 4.0 * s.powi(3);
        let g = Array1::from_shape_fn(self.size, |i| 2.0 * x[i] + ds * 0.5 * (i + 1) as f64);
        (x.dot(x) + s.powi(2) + s.powi(4), g)
    }
}

/// Trid: `Σ (xᵢ − 1)² − Σ xᵢ xᵢ₋₁`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trid {
    size: usize,
}

impl Trid {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Function for Trid {
    fn size(&self) -> usize {
        self.size
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        let squares: f64 = x.iter().map(|xi| (xi - 1.0).powi(2)).sum();
        let products: f64 = x.windows(2).into_iter().map(|w| w[0] * w[1]).sum();
        squares - products
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let n = self.size;
        let g = Array1::from_shape_fn(n, |i| {
            let mut gi = 2.0 * (x[i] - 1.0);
            if i > 0 {
                gi -= x[i - 1];
            }
            if i + 1 < n {
                gi -= x[i + 1];
            }
            gi
        });
        (self.value(x), g)
    }
}

/// Dixon–Price: `(x₀ − 1)² + Σ_{i≥1} (i+1) (2xᵢ² − xᵢ₋₁)²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DixonPrice {
    size: usize,
}

impl DixonPrice {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Function for DixonPrice {
    fn size(&self) -> usize {
        self.size
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        self.vgrad(x).0
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let mut g = Array1::zeros(self.size);
        if self.size == 0 {
            return (0.0, g);
        }

        let mut f = (x[0] - 1.0).powi(2);
        g[0] = 2.0 * (x[0] - 1.0);

        for i in 1..self.size {
            let weight = (i + 1) as f64;
            let r = 2.0 * x[i] * x[i] - x[i - 1];
            f += weight * r * r;
            g[i] += weight * 2.0 * r * 4.0 * x[i];
            g[i - 1] -= weight * 2.0 * r;
        }

        (f, g)
    }
}
