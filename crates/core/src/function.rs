use ndarray::Array1;

use crate::gradient::central_difference;

/// A scalar objective `f: ℝⁿ → ℝ` to be minimized.
///
/// Implementors provide the dimension and the value. Objectives with an
/// analytic gradient should override [`Function::vgrad`]; the default
/// approximates the gradient with central finite differences of
/// [`Function::value`].
///
/// Non-finite values are allowed and signal that `x` lies outside the
/// objective's domain. Solvers treat such points as failed trials.
pub trait Function {
    /// Returns the number of free dimensions.
    fn size(&self) -> usize;

    /// Evaluates the objective at `x`.
    fn value(&self, x: &Array1<f64>) -> f64;

    /// Evaluates the objective and its gradient at `x`.
    ///
    /// The returned gradient must have length [`Function::size`].
    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        let f = self.value(x);
        let g = central_difference(|x| self.value(x), x);
        (f, g)
    }
}

impl<F: Function + ?Sized> Function for &F {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        (**self).value(x)
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        (**self).vgrad(x)
    }
}

impl<F: Function + ?Sized> Function for std::sync::Arc<F> {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        (**self).value(x)
    }

    fn vgrad(&self, x: &Array1<f64>) -> (f64, Array1<f64>) {
        (**self).vgrad(x)
    }
}
