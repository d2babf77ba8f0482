//! Shared fixtures for the cross-crate scenarios under `tests/`.

use ndarray::{Array1, array};

use nano_core::Function;
use nano_solvers::{batch::Direction, linesearch::Strategy};

/// Every direction name the batch driver accepts.
pub const DIRECTIONS: [&str; 11] = [
    "gd",
    "lbfgs",
    "cgd-hs",
    "cgd-fr",
    "cgd-prp",
    "cgd-cd",
    "cgd-ls",
    "cgd-dy",
    "cgd-n",
    "cgd-dyhs",
    "cgd-dycd",
];

/// Every line-search name the batch driver accepts.
pub const LINE_SEARCHES: [&str; 3] = ["backtrack", "strong-wolfe", "cg-descent"];

/// `f(x) = −x₀` inside the unit disc, NaN outside.
///
/// Any descent method walks towards the boundary until no finite step is left.
pub struct Ball;

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

/// Parses every direction name.
///
/// # Panics
///
/// Panics if a name is not recognized.
#[must_use]
pub fn directions() -> Vec<Direction> {
    DIRECTIONS
        .iter()
        .map(|name| name.parse().expect("known direction"))
        .collect()
}

/// Parses every line-search name.
///
/// # Panics
///
/// Panics if a name is not recognized.
#[must_use]
pub fn line_searches() -> Vec<Strategy> {
    LINE_SEARCHES
        .iter()
        .map(|name| name.parse().expect("known line search"))
        .collect()
}

/// Returns `‖x − target‖∞`.
#[must_use]
pub fn distance(x: &Array1<f64>, target: &Array1<f64>) -> f64 {
    (x - target).iter().fold(0.0, |max, v| max.max(v.abs()))
}
