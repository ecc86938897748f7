//! Polynomial feature augmentation.
//!
//! ## Purpose
//!
//! This module maps raw `(day, temperature)` observations onto the fixed
//! five-term design used by the regression model:
//!
//! ```text
//! [1, day, day², temperature, day·temperature]
//! ```
//!
//! ## Invariants
//!
//! * The design always has exactly [`FEATURE_COUNT`] columns.
//! * Column 0 is the constant intercept term 1.
//! * Row order follows the input row order.
//!
//! ## Non-goals
//!
//! * This module does not support other polynomial orders or feature sets.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::Matrix;

/// Number of design terms (and regression coefficients).
pub const FEATURE_COUNT: usize = 5;

/// Number of raw predictor columns consumed: day and temperature.
pub const RAW_COLUMNS: usize = 2;

/// Build the design terms for one observation.
#[inline]
pub fn augment_row<T: Float>(day: T, temperature: T) -> [T; FEATURE_COUNT] {
    [T::one(), day, day * day, temperature, day * temperature]
}

/// Build the `rows x 5` design matrix from `[day, temperature]` rows.
///
/// Only the first two columns of `x` are read.
pub fn augment<T: Float>(x: &Matrix<T>) -> Result<Matrix<T>, RegressionError> {
    if x.cols() < RAW_COLUMNS {
        return Err(RegressionError::DimensionMismatch {
            op: "augment",
            left: x.shape(),
            right: (x.rows(), RAW_COLUMNS),
        });
    }

    let mut design = Matrix::zeros(x.rows(), FEATURE_COUNT);
    for i in 0..x.rows() {
        let terms = augment_row(x.get(i, 0), x.get(i, 1));
        design.row_mut(i).copy_from_slice(&terms);
    }
    Ok(design)
}
