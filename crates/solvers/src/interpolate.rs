//! Polynomial interpolants for step-length selection.
//!
//! Both interpolants are fitted through samples of a one-dimensional slice
//! `φ(α) = f(x + α d)` and report their extrema, which line searches use as
//! the next trial step. Fitting fails with `None` when the samples do not
//! determine a usable polynomial (coincident abscissae, a vanishing leading
//! coefficient, non-finite coefficients, or a cubic without real extrema).
//!
//! Polynomials are stored in the shifted variable `s = x − x₀` for
//! conditioning; [`Quadratic::coefficients`] and [`Cubic::coefficients`]
//! expand them back to powers of `x`.

mod cubic;
mod quadratic;

pub use cubic::Cubic;
pub use quadratic::Quadratic;
