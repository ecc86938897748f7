//! Tests for the mean and Pearson correlation.
//!
//! ## Test Organization
//!
//! 1. **Mean**
//! 2. **Correlation** - Bounds, symmetry, constant series, errors

use approx::assert_relative_eq;

use rollreg::prelude::*;
use rollreg::{mean, pearson_correlation};

// ============================================================================
// Mean Tests
// ============================================================================

/// Test the arithmetic mean.
#[test]
fn test_mean() {
    assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    assert_eq!(mean::<f64>(&[]), 0.0);
}

// ============================================================================
// Correlation Tests
// ============================================================================

/// Test a series is perfectly correlated with itself.
#[test]
fn test_correlation_self() {
    let x = [2357.85, 2669.7, 2998.05, 3512.85, 3248.85];

    assert_relative_eq!(pearson_correlation(&x, &x).unwrap(), 1.0, epsilon = 1e-12);
}

/// Test perfect negative correlation.
#[test]
fn test_correlation_negative() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [10.0, 8.0, 6.0, 4.0, 2.0];

    assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), -1.0, epsilon = 1e-12);
}

/// Test correlation is symmetric and invariant under affine maps.
#[test]
fn test_correlation_symmetry() {
    let x = [1.0, 3.0, 2.0, 5.0, 4.0, 7.0];
    let y = [2.0, 2.5, 2.0, 4.0, 3.0, 6.5];
    let y_scaled: Vec<f64> = y.iter().map(|v| 3.0 * v + 10.0).collect();

    let r_xy = pearson_correlation(&x, &y).unwrap();
    let r_yx = pearson_correlation(&y, &x).unwrap();

    assert_relative_eq!(r_xy, r_yx, epsilon = 1e-12);
    assert_relative_eq!(r_xy, pearson_correlation(&x, &y_scaled).unwrap(), epsilon = 1e-12);
    assert!(r_xy > 0.0 && r_xy <= 1.0);
}

/// Test a constant series has zero correlation instead of NaN.
#[test]
fn test_correlation_constant_series() {
    let x = [5.0, 5.0, 5.0, 5.0];
    let y = [1.0, 2.0, 3.0, 4.0];

    assert_eq!(pearson_correlation(&x, &y).unwrap(), 0.0);
    assert_eq!(pearson_correlation(&y, &x).unwrap(), 0.0);
}

/// Test series of different lengths are rejected.
#[test]
fn test_correlation_length_mismatch() {
    let result = pearson_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]);

    assert_eq!(
        result,
        Err(RegressionError::LengthMismatch { x_len: 3, y_len: 2 })
    );
}
