use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::Array1;

use crate::{Function, gradient::central_difference};

/// A single optimization run's view of a [`Function`].
///
/// Wraps a borrowed objective and counts how many times the value and the
/// gradient are requested. Each run owns its own `Problem`, so concurrent
/// runs over one shared objective keep independent counters.
///
/// Counters are atomic, which makes a `Problem` shareable across threads
/// whenever the objective itself is [`Sync`].
#[derive(Debug)]
pub struct Problem<'a, F: ?Sized> {
    function: &'a F,
    fcalls: AtomicUsize,
    gcalls: AtomicUsize,
}

impl<'a, F: Function + ?Sized> Problem<'a, F> {
    /// Wraps `function` with zeroed counters.
    #[must_use]
    pub fn new(function: &'a F) -> Self {
        Self {
            function,
            fcalls: AtomicUsize::new(0),
            gcalls: AtomicUsize::new(0),
        }
    }

    /// Returns the wrapped objective.
    #[must_use]
    pub fn function(&self) -> &'a F {
        self.function
    }

    /// Returns the number of free dimensions.
    #[must_use]
    pub fn size(&self) -> usize {
        self.function.size()
    }

    /// Evaluates the objective at `x`, counting one function call.
    pub fn value(&self, x: &Array1<f64>) -> f64 {
        self.fcalls.fetch_add(1, Ordering::Relaxed);
        self.function.value(x)
    }

    /// Evaluates the objective and its gradient at `x`.
    ///
    /// Counts one function call and one gradient call. The gradient is
    /// returned as the objective produced it; its length is not checked.
    pub fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        self.fcalls.fetch_add(1, Ordering::Relaxed);
        self.gcalls.fetch_add(1, Ordering::Relaxed);
        self.function.vgrad(x)
    }

    /// Returns the number of function evaluations so far.
    #[must_use]
    pub fn fcalls(&self) -> usize {
        self.fcalls.load(Ordering::Relaxed)
    }

    /// Returns the number of gradient evaluations so far.
    #[must_use]
    pub fn gcalls(&self) -> usize {
        self.gcalls.load(Ordering::Relaxed)
    }

    /// Resets both counters to zero.
    pub fn reset(&self) {
        self.fcalls.store(0, Ordering::Relaxed);
        self.gcalls.store(0, Ordering::Relaxed);
    }

    /// Measures how well the objective's gradient agrees with finite differences.
    ///
    /// Returns `‖g − g_fd‖∞ / (1 + |f|)` at `x`. Small values (below `1e-6`
    /// for smooth, well-scaled objectives) indicate a correct gradient.
    ///
    /// The evaluations made here are not counted.
    #[must_use]
    pub fn grad_accuracy(&self, x: &Array1<f64>) -> f64 {
        let (f, g) = self.function.vgrad(x);
        let g_fd = central_difference(|x| self.function.value(x), x);

        let error = g
            .iter()
            .zip(&g_fd)
            .fold(0.0_f64, |max, (a, b)| max.max((a - b).abs()));

        error / (1.0 + f.abs())
    }
}
