use ndarray::Array1;

/// Returns the perturbation used by [`central_difference`].
///
/// Balances truncation error (`O(h²)`) against cancellation error (`O(ε/h)`).
#[must_use]
pub fn finite_difference_step() -> f64 {
    (10.0 * f64::EPSILON).cbrt()
}

/// Approximates the gradient of `f` at `x` with central differences.
///
/// Each coordinate costs two evaluations of `f`.
pub fn central_difference<F>(f: F, x: &Array1<f64>) -> Array1<f64>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let h = finite_difference_step();
    let mut probe = x.clone();

    Array1::from_shape_fn(x.len(), |i| {
        let xi = x[i];

        probe[i] = xi + h;
        let fp = f(&probe);

        probe[i] = xi - h;
        let fm = f(&probe);

        probe[i] = xi;
        (fp - fm) / (2.0 * h)
    })
}
