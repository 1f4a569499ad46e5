//! Tensor-product Gauss-Legendre rules on the reference hypercube [-1, 1]^d.

use std::convert::TryFrom;

use ndarray::{Array1, Array2};

use crate::error::{QuadratureError, Result};
use crate::line;
use crate::rule::Rule;

/// Tensor-product rule with `point_count` Gauss-Legendre points per axis on
/// `dimensions` axes.
///
/// Points come out in lexicographic order of their per-axis indices, with the
/// last axis varying fastest: for `hypercube_rule(2, 2)` that is
/// `(-a, -a), (-a, a), (a, -a), (a, a)`. The weight of a point is the product
/// of its per-axis weights.
///
/// Errors from the line catalog are returned unchanged.
pub fn hypercube_rule(point_count: usize, dimensions: usize) -> Result<Rule> {
    let base = line::cached(point_count)?;
    if dimensions < 1 {
        log::debug!("rejecting hypercube rule with {} dimensions", dimensions);
        return Err(QuadratureError::InvalidDimension { dimensions });
    }

    let n = point_count;
    // ndarray caps the element count of the points matrix at isize::MAX
    let total = u32::try_from(dimensions)
        .ok()
        .and_then(|d| n.checked_pow(d))
        .filter(|t| {
            t.checked_mul(dimensions)
                .map_or(false, |len| len <= isize::MAX as usize)
        })
        .ok_or(QuadratureError::TooManyPoints { point_count, dimensions })?;
    log::trace!("assembling {}^{} tensor-product rule", n, dimensions);

    // stride of axis j in the flat index: n^(dimensions - 1 - j)
    let mut strides = vec![1; dimensions];
    for j in (0..dimensions - 1).rev() {
        strides[j] = strides[j + 1] * n;
    }

    let x = base.abscissas();
    let w = base.weights();
    let points = Array2::from_shape_fn((total, dimensions), |(k, j)| x[(k / strides[j]) % n]);
    let weights = Array1::from_shape_fn(total, |k| {
        return strides.iter().fold(1.0, |acc, &s| acc * w[(k / s) % n]);
    });

    return Ok(Rule::new(points, weights));
}
