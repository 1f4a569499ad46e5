//! Rules on the reference triangle with vertices (0, 0), (1, 0), (0, 1).
//!
//! Constants follow section 5.5 of Bathe, *Finite Element Procedures*. Weights
//! are normalized to sum to one; multiply by the triangle area (1/2 on the
//! reference triangle) to integrate.

use ndarray::{arr1, arr2, Array1};
use once_cell::sync::Lazy;

use crate::error::{QuadratureError, Result};
use crate::rule::Rule;

/// Lowest tabulated order.
pub const MIN_ORDER: usize = 1;
/// Highest tabulated order.
pub const MAX_ORDER: usize = 7;

// family index for orders MIN_ORDER..=MAX_ORDER
const ORDER_FAMILY: [usize; MAX_ORDER - MIN_ORDER + 1] = [0, 1, 2, 2, 2, 3, 3];

fn centroid_family() -> Rule {
    let points = arr2(&[[0.3333333333333, 0.3333333333333]]);
    let weights = arr1(&[1.0]);
    return Rule::new(points, weights);
}

pub(crate) fn three_point_family() -> Rule {
    let points = arr2(&[
        [0.1666666666667, 0.1666666666667],
        [0.6666666666667, 0.1666666666667],
        [0.1666666666667, 0.6666666666667],
    ]);
    let weights = Array1::from_elem(3, 0.333333333333);
    return Rule::new(points, weights);
}

pub(crate) fn seven_point_family() -> Rule {
    let points = arr2(&[
        [0.1012865073235, 0.1012865073235],
        [0.7974269853531, 0.1012865073235],
        [0.1012865073235, 0.7974269853531],
        [0.4701420641051, 0.0597158717898],
        [0.4701420641051, 0.4701420641051],
        [0.0597158717898, 0.4701420641051],
        [0.3333333333333, 0.3333333333333],
    ]);
    let weights = arr1(&[
        0.1259391805448, 0.1259391805448, 0.1259391805448,
        0.1323941527885, 0.1323941527885, 0.1323941527885,
        0.225,
    ]);
    return Rule::new(points, weights);
}

// The centroid weight is negative. That is a property of this rule.
fn thirteen_point_family() -> Rule {
    let points = arr2(&[
        [0.0651301029022, 0.0651301029022],
        [0.8697397941956, 0.0651301029022],
        [0.0651301029022, 0.8697397941956],
        [0.3128654960049, 0.0486903154253],
        [0.6384441885698, 0.3128654960049],
        [0.0486903154253, 0.6384441885698],
        [0.6384441885698, 0.0486903154253],
        [0.3128654960049, 0.6384441885698],
        [0.0486903154253, 0.3128654960049],
        [0.2603459660790, 0.2603459660790],
        [0.4793080678413, 0.2603459660790],
        [0.2603459660790, 0.4793080678413],
        [0.3333333333333, 0.3333333333333],
    ]);
    let weights = arr1(&[
        0.0533472356088, 0.0533472356088, 0.0533472356088,
        0.0771137608903, 0.0771137608903, 0.0771137608903,
        0.0771137608903, 0.0771137608903, 0.0771137608903,
        0.1756152574332, 0.1756152574332, 0.1756152574332,
        -0.1495700444677,
    ]);
    return Rule::new(points, weights);
}

static TRIANGLE_RULES: Lazy<[Rule; 4]> = Lazy::new(|| {
    log::trace!("materializing triangle rules");
    return [
        centroid_family(),
        three_point_family(),
        seven_point_family(),
        thirteen_point_family(),
    ];
});

/// Rule on the reference triangle for polynomial order `order`.
///
/// | order | points |
/// |-------|--------|
/// | 1     | 1      |
/// | 2     | 3      |
/// | 3..=5 | 7      |
/// | 6, 7  | 13     |
///
/// Fails with [`QuadratureError::UnsupportedOrder`] outside
/// `MIN_ORDER..=MAX_ORDER`.
pub fn triangle_rule(order: usize) -> Result<Rule> {
    check_order(order)?;
    let family = ORDER_FAMILY[order - MIN_ORDER];
    return Ok(TRIANGLE_RULES[family].clone());
}

pub(crate) fn check_order(order: usize) -> Result<()> {
    if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
        log::debug!("rejecting triangle rule of order {}", order);
        return Err(QuadratureError::UnsupportedOrder {
            order,
            min: MIN_ORDER,
            max: MAX_ORDER,
        });
    }
    return Ok(());
}
