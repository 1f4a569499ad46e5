use approx::{assert_abs_diff_eq, assert_relative_eq};
use fem_quadrature::{
    hypercube_rule, legacy, line_rule, rule_for_degree, triangle_rule, Domain, QuadratureError,
};

#[test]
fn boundary_requests_fail() {
    assert!(line_rule(1).unwrap_err().is_precision_error());
    assert!(line_rule(11).unwrap_err().is_precision_error());
    assert!(triangle_rule(0).unwrap_err().is_order_error());
    assert!(triangle_rule(8).unwrap_err().is_order_error());
    assert_eq!(
        hypercube_rule(4, 0).unwrap_err(),
        QuadratureError::InvalidDimension { dimensions: 0 }
    );
}

#[test]
fn hypercube_weights_sum_to_volume() {
    for n in 2..=10 {
        for d in 1..=3 {
            let rule = hypercube_rule(n, d).unwrap();
            assert_relative_eq!(rule.weight_sum(), 2.0_f64.powi(d as i32), epsilon = 1e-12);
        }
    }
}

#[test]
fn two_by_two_matches_legacy_grid() {
    let rule = hypercube_rule(2, 2).unwrap();
    let (weights, points) = legacy::quadrilateral_2x2();
    assert_eq!(rule.len(), 4);

    let mut expected: Vec<(f64, f64, f64)> = points
        .outer_iter()
        .zip(weights.iter())
        .map(|(p, &w)| (p[0], p[1], w))
        .collect();
    let mut actual: Vec<(f64, f64, f64)> = rule.iter().map(|(p, w)| (p[0], p[1], w)).collect();
    let by_coords = |a: &(f64, f64, f64), b: &(f64, f64, f64)| {
        a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
    };
    expected.sort_by(by_coords);
    actual.sort_by(by_coords);

    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(a.0, e.0, epsilon = 1e-14);
        assert_abs_diff_eq!(a.1, e.1, epsilon = 1e-14);
        assert_eq!(a.2, 1.0);
        assert_eq!(e.2, 1.0);
    }
}

#[test]
fn legacy_triangle_returns_weights_first() {
    let (weights, points) = legacy::triangle_3();
    assert_eq!(weights.len(), 3);
    assert_eq!(points.shape(), &[3, 2]);
    for &w in weights.iter() {
        assert_abs_diff_eq!(w, 1.0 / 3.0, epsilon = 1e-11);
    }
    assert_abs_diff_eq!(points[[1, 0]], 2.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[[2, 1]], 2.0 / 3.0, epsilon = 1e-12);

    let rule = triangle_rule(2).unwrap();
    assert_eq!(rule.points(), points.view());
    assert_eq!(rule.weights(), weights.view());
}

#[test]
fn negative_weight_is_balanced() {
    let rule = triangle_rule(7).unwrap();
    let negative: f64 = rule.weights().iter().filter(|&&w| w < 0.0).sum();
    let positive: f64 = rule.weights().iter().filter(|&&w| w > 0.0).sum();
    assert!(negative < 0.0);
    assert_abs_diff_eq!(positive + negative, 1.0, epsilon = 1e-11);
}

// Area and first moment of a distorted quadrilateral through the bilinear
// map from [-1, 1]^2.
#[test]
fn bilinear_quadrilateral_area() {
    let corners = [[0.0, 0.0], [2.0, 0.0], [3.0, 1.0], [0.0, 1.0]];
    let shape_grad = |xi: f64, eta: f64| {
        [
            [-(1.0 - eta) / 4.0, -(1.0 - xi) / 4.0],
            [(1.0 - eta) / 4.0, -(1.0 + xi) / 4.0],
            [(1.0 + eta) / 4.0, (1.0 + xi) / 4.0],
            [-(1.0 + eta) / 4.0, (1.0 - xi) / 4.0],
        ]
    };
    let jacobian_det = |xi: f64, eta: f64| {
        let grad = shape_grad(xi, eta);
        let mut j = [[0.0; 2]; 2];
        for (c, g) in corners.iter().zip(grad.iter()) {
            for a in 0..2 {
                for b in 0..2 {
                    j[a][b] += c[a] * g[b];
                }
            }
        }
        j[0][0] * j[1][1] - j[0][1] * j[1][0]
    };

    let rule = rule_for_degree(Domain::Hypercube { dimensions: 2 }, 2).unwrap();
    let area = rule.integrate(|p| jacobian_det(p[0], p[1]));
    assert_relative_eq!(area, 2.5, epsilon = 1e-12);
}

#[test]
fn triangle_rules_integrate_over_physical_triangle() {
    // affine image of the reference triangle with vertices (1, 1), (4, 1), (1, 3)
    let det = 3.0 * 2.0;
    for order in 1..=7 {
        let rule = triangle_rule(order).unwrap();
        let area = 0.5 * det * rule.integrate(|_p| 1.0);
        assert_abs_diff_eq!(area, 3.0, epsilon = 1e-10);

        let x_moment = 0.5 * det * rule.integrate(|p| 1.0 + 3.0 * p[0]);
        assert_abs_diff_eq!(x_moment / area, 2.0, epsilon = 1e-10);
    }
}

#[test]
fn catalogs_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let line = line_rule(2 + i).unwrap();
                let tri = triangle_rule(1 + i).unwrap();
                (line.len(), tri.len())
            })
        })
        .collect();
    let sizes: Vec<(usize, usize)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(sizes, vec![(2, 1), (3, 3), (4, 7), (5, 7)]);
}
