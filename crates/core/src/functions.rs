//! Standard benchmark objectives with analytic gradients.
//!
//! These are the usual unconstrained test problems used to exercise line
//! searches and descent directions. Fixed-size functions are two-dimensional;
//! the scalable ones take their dimension at construction.
//!
//! | function             | minimum `x*`            | `f(x*)` |
//! |----------------------|-------------------------|---------|
//! | [`Sphere`]           | `0`                     | `0`     |
//! | [`RotatedEllipsoid`] | `0`                     | `0`     |
//! | [`Matyas`]           | `(0, 0)`                | `0`     |
//! | [`Booth`]            | `(1, 3)`                | `0`     |
//! | [`Beale`]            | `(3, 0.5)`              | `0`     |
//! | [`Himmelblau`]       | `(3, 2)` and three more | `0`     |
//! | [`Rosenbrock`]       | `1`                     | `0`     |
//! | [`Zakharov`]         | `0`                     | `0`     |
//! | [`Trid`]             | `xᵢ = (i+1)(n−i)`       | `−n(n+4)(n−1)/6` |
//! | [`DixonPrice`]       | `xᵢ = 2^(−(2^i − 1)/2^i)` | `0`   |

mod classic;
mod quadratic;
mod scalable;

pub use classic::{Beale, Booth, Himmelblau, Matyas};
pub use quadratic::{RotatedEllipsoid, Sphere};
pub use scalable::{DixonPrice, Rosenbrock, Trid, Zakharov};
