//! Sample moments and Pearson correlation.
//!
//! ## Approximations
//!
//! * `pearson_correlation` returns zero when either series is constant
//!   (the denominator is exactly zero) instead of failing.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;

/// Arithmetic mean; zero for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(values.len()).unwrap_or_else(T::one)
}

/// Pearson correlation coefficient between two equally long series.
///
/// r = (nΣxy - ΣxΣy) / sqrt((nΣx² - (Σx)²)(nΣy² - (Σy)²))
pub fn pearson_correlation<T: Float>(x: &[T], y: &[T]) -> Result<T, RegressionError> {
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let n = T::from(x.len()).unwrap_or_else(T::zero);
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2, mut sum_y2) =
        (T::zero(), T::zero(), T::zero(), T::zero(), T::zero());

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sum_x = sum_x + xi;
        sum_y = sum_y + yi;
        sum_xy = sum_xy + xi * yi;
        sum_x2 = sum_x2 + xi * xi;
        sum_y2 = sum_y2 + yi * yi;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();

    if denominator == T::zero() {
        return Ok(T::zero());
    }
    Ok(numerator / denominator)
}
