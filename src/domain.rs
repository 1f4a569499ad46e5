//! Rule selection by reference domain.
//!
//! Assembly code usually knows the element shape and the polynomial degree
//! of its integrand, not the catalog key. [`rule_for_degree`] maps the former
//! onto the latter.

use std::ops::RangeInclusive;

use crate::error::Result;
use crate::hypercube::hypercube_rule;
use crate::line::{self, line_rule};
use crate::rule::Rule;
use crate::triangle::{self, triangle_rule};

/// Dimensionality used by [`Domain::default`].
pub const DEFAULT_DIMENSIONS: usize = 2;
/// Triangle order used when a caller does not pick one.
pub const DEFAULT_TRIANGLE_ORDER: usize = 2;

/// Reference domain of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Segment [-1, 1].
    Line,
    /// Hypercube [-1, 1]^dimensions.
    Hypercube { dimensions: usize },
    /// Triangle with vertices (0, 0), (1, 0), (0, 1).
    Triangle,
}

impl Default for Domain {
    fn default() -> Self {
        return Domain::Hypercube { dimensions: DEFAULT_DIMENSIONS };
    }
}

impl Domain {
    /// Precision values accepted by [`rule`]: points per axis for lines and
    /// hypercubes, polynomial order for triangles.
    pub fn precision_range(&self) -> RangeInclusive<usize> {
        return match self {
            Domain::Line | Domain::Hypercube { .. } => line::MIN_POINTS..=line::MAX_POINTS,
            Domain::Triangle => triangle::MIN_ORDER..=triangle::MAX_ORDER,
        };
    }

    /// Smallest precision whose rule integrates every polynomial of total
    /// degree `degree` exactly.
    ///
    /// An `n`-point Gauss-Legendre rule is exact up to degree `2n - 1`;
    /// triangle rules are exact up to their order.
    pub fn precision_for_degree(&self, degree: usize) -> Result<usize> {
        match self {
            Domain::Line | Domain::Hypercube { .. } => {
                let point_count = (degree / 2 + 1).max(line::MIN_POINTS);
                line::cached(point_count)?;
                return Ok(point_count);
            }
            Domain::Triangle => {
                let order = degree.max(triangle::MIN_ORDER);
                triangle::check_order(order)?;
                return Ok(order);
            }
        }
    }
}

/// Looks up the rule for `domain` at `precision`.
pub fn rule(domain: Domain, precision: usize) -> Result<Rule> {
    return match domain {
        Domain::Line => line_rule(precision),
        Domain::Hypercube { dimensions } => hypercube_rule(precision, dimensions),
        Domain::Triangle => triangle_rule(precision),
    };
}

/// Cheapest tabulated rule on `domain` that is exact for polynomials of
/// total degree `degree`.
pub fn rule_for_degree(domain: Domain, degree: usize) -> Result<Rule> {
    let precision = domain.precision_for_degree(degree)?;
    return rule(domain, precision);
}
