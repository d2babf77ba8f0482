use std::collections::VecDeque;

use ndarray::Array1;

/// Correction pairs `(s, y)` for the L-BFGS two-loop recursion.
///
/// Holds at most `capacity` pairs, dropping the oldest first. Pairs with
/// `s·y ≤ 0` would break positive definiteness and are not stored.
#[derive(Debug, Clone)]
pub(super) struct History {
    capacity: usize,
    pairs: VecDeque<Pair>,
}

#[derive(Debug, Clone)]
struct Pair {
    s: Array1<f64>,
    y: Array1<f64>,
    rho: f64,
}

impl History {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            pairs: VecDeque::with_capacity(capacity),
        }
    }

    pub(super) fn push(&mut self, s: Array1<f64>, y: Array1<f64>) {
        let sy = s.dot(&y);
        if self.capacity == 0 || !(sy > 0.0 && sy.is_finite()) {
            return;
        }

        if self.pairs.len() == self.capacity {
            self.pairs.pop_front();
        }
        self.pairs.push_back(Pair { s, y, rho: 1.0 / sy });
    }

    /// Returns `−H g`, with `H` the inverse Hessian approximation.
    ///
    /// The initial matrix is `γ I` with `γ = s·y / y·y` from the newest pair.
    /// With no pairs stored this is steepest descent.
    pub(super) fn direction(&self, g: &Array1<f64>) -> Array1<f64> {
        let mut q = g.clone();
        let mut alphas = Vec::with_capacity(self.pairs.len());

        for pair in self.pairs.iter().rev() {
            let alpha = pair.rho * pair.s.dot(&q);
            q.scaled_add(-alpha, &pair.y);
            alphas.push(alpha);
        }

        if let Some(newest) = self.pairs.back() {
            q *= newest.s.dot(&newest.y) / newest.y.dot(&newest.y);
        }

        for (pair, alpha) in self.pairs.iter().zip(alphas.iter().rev()) {
            let beta = pair.rho * pair.y.dot(&q);
            q.scaled_add(alpha - beta, &pair.s);
        }

        -q
    }
}
