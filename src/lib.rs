//! Quadrature rules for finite element integration.
//!
//! Three catalogs, all returning a [`Rule`] of points and matching weights:
//!
//! - [`line_rule`]: Gauss-Legendre rules on [-1, 1] with 2 to 10 points
//! - [`hypercube_rule`]: tensor products of those on [-1, 1]^d
//! - [`triangle_rule`]: rules of order 1 to 7 on the reference triangle
//!
//! ```
//! use fem_quadrature::hypercube_rule;
//!
//! let rule = hypercube_rule(3, 2).unwrap();
//! let area = rule.integrate(|_x| 1.0);
//! assert!((area - 4.0).abs() < 1e-12);
//! ```
//!
//! Rules are built once per process and cloned out on every lookup, so they
//! can be requested freely from any thread.

#[cfg(test)]
#[macro_use]
mod macros;

pub mod domain;
pub mod error;
pub mod hypercube;
pub mod legacy;
pub mod line;
pub mod rule;
pub mod triangle;

pub use domain::{rule, rule_for_degree, Domain};
pub use error::{QuadratureError, Result};
pub use hypercube::hypercube_rule;
pub use line::line_rule;
pub use rule::Rule;
pub use triangle::triangle_rule;
