//! Errors raised when a requested rule is not in the catalogs.

use thiserror::Error;

/// Errors that can occur while looking up or building a quadrature rule.
///
/// Every variant carries the offending input. The catalogs are static, so
/// none of these are transient: retrying with the same input fails again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadratureError {
    /// Number of Gauss-Legendre points is not tabulated.
    #[error("unsupported number of points: {point_count} (the number of points should be in [{min}, {max}])")]
    UnsupportedPrecision {
        /// The requested number of points
        point_count: usize,
        /// Smallest tabulated number of points
        min: usize,
        /// Largest tabulated number of points
        max: usize,
    },

    /// Triangle order is not tabulated.
    #[error("unsupported triangle order: {order} (the order should be in [{min}, {max}])")]
    UnsupportedOrder {
        /// The requested order
        order: usize,
        /// Smallest tabulated order
        min: usize,
        /// Largest tabulated order
        max: usize,
    },

    /// Hypercube dimensionality is below one.
    #[error("invalid number of dimensions: {dimensions} (must be at least 1)")]
    InvalidDimension {
        /// The requested number of dimensions
        dimensions: usize,
    },

    /// `point_count^dimensions` points, or their coordinates, are more than
    /// an array can hold.
    #[error("tensor-product rule with {point_count}^{dimensions} points is too large")]
    TooManyPoints {
        /// Points per axis
        point_count: usize,
        /// Number of axes
        dimensions: usize,
    },
}

/// A specialized `Result` type for quadrature lookups.
pub type Result<T> = std::result::Result<T, QuadratureError>;

impl QuadratureError {
    /// Returns `true` if the number of 1-D points was rejected.
    pub fn is_precision_error(&self) -> bool {
        return matches!(self, QuadratureError::UnsupportedPrecision { .. });
    }

    /// Returns `true` if the triangle order was rejected.
    pub fn is_order_error(&self) -> bool {
        return matches!(self, QuadratureError::UnsupportedOrder { .. });
    }

    /// Returns `true` if the hypercube shape was rejected.
    pub fn is_dimension_error(&self) -> bool {
        return matches!(
            self,
            QuadratureError::InvalidDimension { .. } | QuadratureError::TooManyPoints { .. }
        );
    }
}
