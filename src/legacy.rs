//! Fixed rules kept for older call sites.
//!
//! Unlike the rest of the crate these return `(weights, points)`, in that
//! order. Callers depend on it; do not swap the tuple.

use ndarray::{arr2, Array1, Array2};

use crate::triangle;

/// 2 x 2 Gauss grid on [-1, 1] x [-1, 1], every weight 1.
///
/// Same point set as `hypercube_rule(2, 2)`, listed as
/// `(-a, a), (a, a), (-a, -a), (a, -a)` with the 15-digit value of
/// `a = 1/sqrt(3)`.
pub fn quadrilateral_2x2() -> (Array1<f64>, Array2<f64>) {
    let a = 0.577350269189626;
    let weights = Array1::ones(4);
    let points = arr2(&[[-a, a], [a, a], [-a, -a], [a, -a]]);
    return (weights, points);
}

/// 3-point triangle rule, the `triangle_rule(2)` family.
pub fn triangle_3() -> (Array1<f64>, Array2<f64>) {
    let (points, weights) = triangle::three_point_family().into_parts();
    return (weights, points);
}

/// 7-point triangle rule, the `triangle_rule(3)` family.
pub fn triangle_7() -> (Array1<f64>, Array2<f64>) {
    let (points, weights) = triangle::seven_point_family().into_parts();
    return (weights, points);
}
