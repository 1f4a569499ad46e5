use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// A quadrature rule: one point per row of `points`, paired with the weight
/// at the same index.
///
/// Rules are values. Catalog lookups hand out clones, so callers are free to
/// consume them with [`Rule::into_parts`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    points: Array2<f64>,
    weights: Array1<f64>,
}

impl Rule {
    /// Builds a rule from a `(len, dim)` points matrix and `len` weights.
    ///
    /// Crate-internal: the catalogs and the tensor-product builder are the
    /// only producers, and they always agree on the length.
    pub(crate) fn new(points: Array2<f64>, weights: Array1<f64>) -> Self {
        debug_assert_eq!(points.len_of(Axis(0)), weights.len());
        return Rule { points, weights };
    }

    pub fn points(&self) -> ArrayView2<'_, f64> {
        return self.points.view();
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        return self.weights.view();
    }

    /// Coordinates of the `index`-th point.
    ///
    /// Panics if `index >= self.len()`.
    pub fn point(&self, index: usize) -> ArrayView1<'_, f64> {
        return self.points.row(index);
    }

    /// The first coordinate of every point. On a 1-D rule these are the
    /// Gauss-Legendre abscissas.
    pub fn abscissas(&self) -> ArrayView1<'_, f64> {
        return self.points.column(0);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        return self.weights.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.weights.is_empty();
    }

    /// Dimensionality of the reference domain.
    pub fn dim(&self) -> usize {
        return self.points.len_of(Axis(1));
    }

    /// Iterates `(point, weight)` pairs in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (ArrayView1<'_, f64>, f64)> + '_ {
        return self.points.outer_iter().zip(self.weights.iter().copied());
    }

    /// Sum of all weights, i.e. the measure the rule assigns to its domain.
    pub fn weight_sum(&self) -> f64 {
        return self.weights.sum();
    }

    /// Approximates the integral of `f` over the reference domain as
    /// `sum_i weights[i] * f(points[i])`.
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(ArrayView1<f64>) -> f64,
    {
        return self.iter().map(|(x, w)| w * f(x)).sum();
    }

    /// Consumes the rule into `(points, weights)`.
    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        return (self.points, self.weights);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    fn two_point() -> Rule {
        let x = 0.577350269189625764;
        Rule::new(arr2(&[[-x], [x]]), arr1(&[1.0, 1.0]))
    }

    #[test]
    fn test_shape() {
        let rule = two_point();
        assert_eq!(rule.len(), 2);
        assert_eq!(rule.dim(), 1);
        assert!(!rule.is_empty());
        assert_eq!(rule.abscissas().to_vec(), vec![-0.577350269189625764, 0.577350269189625764]);
        assert_eq!(rule.point(1)[0], 0.577350269189625764);
    }

    #[test]
    fn test_integrate() {
        let rule = two_point();
        assert_eq!(rule.integrate(|_x| 1.0), 2.0);
        assert_eq!(rule.integrate(|x| x[0]), 0.0);
        assert_approx_eq!(rule.integrate(|x| x[0] * x[0]), 2.0 / 3.0, 1e-15);
        assert_approx_eq!(rule.integrate(|x| x[0].powi(3)), 0.0, 1e-15);
    }

    #[test]
    fn test_iter_pairs_points_with_weights() {
        let rule = Rule::new(arr2(&[[0.25, 0.5], [0.75, 0.125]]), arr1(&[0.3, 0.7]));
        let pairs: Vec<(Vec<f64>, f64)> = rule.iter().map(|(p, w)| (p.to_vec(), w)).collect();
        assert_eq!(pairs, vec![(vec![0.25, 0.5], 0.3), (vec![0.75, 0.125], 0.7)]);
        assert_eq!(rule.weight_sum(), 1.0);
    }

    #[test]
    fn test_into_parts() {
        let (points, weights) = two_point().into_parts();
        assert_eq!(points.shape(), &[2, 1]);
        assert_eq!(weights, arr1(&[1.0, 1.0]));
    }
}
