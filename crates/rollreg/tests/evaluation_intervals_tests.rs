#![cfg(feature = "dev")]
//! Tests for confidence interval computation.
//!
//! These tests verify the interval utilities used for fitted values and
//! rolling forecasts:
//! - Critical value lookup from the confidence level
//! - Standard errors from the inverse Gram matrix
//! - Band construction over a design matrix
//!
//! ## Test Organization
//!
//! 1. **Interval Method** - Defaults, probabilities, critical values
//! 2. **Standard Errors** - Leverage scaling, clamping
//! 3. **Bands** - Symmetry, ordering, shape checks

mod common;

use approx::assert_relative_eq;

use common::{reference_x, reference_y};
use rollreg::internals::algorithms::ols::{LeastSquaresFit, residual_variance};
use rollreg::internals::evaluation::intervals::IntervalMethod;
use rollreg::prelude::*;
use rollreg::{augment, t_critical};

// ============================================================================
// Interval Method Tests
// ============================================================================

/// Test the default method uses 95% coverage.
#[test]
fn test_interval_method_default() {
    let method: IntervalMethod<f64> = IntervalMethod::default();

    assert_relative_eq!(method.level, 0.95);
    assert_relative_eq!(method.probability(), 0.975);
}

/// Test the critical value follows the t table.
#[test]
fn test_interval_method_critical_value() {
    let method = IntervalMethod::confidence(0.95);

    assert_relative_eq!(method.critical_value(15).unwrap(), 2.131);
    assert_eq!(
        method.critical_value(12).unwrap(),
        t_critical(0.975, 12).unwrap()
    );

    let narrow = IntervalMethod::confidence(0.90);
    assert_relative_eq!(narrow.critical_value(15).unwrap(), 1.753, epsilon = 1e-12);
}

/// Test zero degrees of freedom propagates as an error.
#[test]
fn test_interval_method_zero_df() {
    let method: IntervalMethod<f64> = IntervalMethod::default();

    assert!(matches!(
        method.critical_value(0),
        Err(RegressionError::InvalidDegreesOfFreedom(0))
    ));
}

// ============================================================================
// Standard Error Tests
// ============================================================================

/// Test the standard error is sqrt(x G xᵀ · Dad).
#[test]
fn test_standard_error_identity_gram() {
    let g: Matrix<f64> = Matrix::identity(2);

    // x G xᵀ = 9 + 16 = 25
    let se = IntervalMethod::standard_error(&[3.0, 4.0], &g, 4.0).unwrap();
    assert_relative_eq!(se, 10.0);
}

/// Test a negative quadratic form from rounding is clamped to zero.
#[test]
fn test_standard_error_clamped() {
    let g = Matrix::new(1, 1, vec![-1e-18]).unwrap();

    let se = IntervalMethod::standard_error(&[1.0], &g, 1.0).unwrap();
    assert_eq!(se, 0.0);
}

/// Test symmetric bounds around the estimate.
#[test]
fn test_bounds() {
    let (lo, hi) = IntervalMethod::bounds(100.0, 5.0, 2.0);

    assert_eq!((lo, hi), (90.0, 110.0));
}

// ============================================================================
// Band Tests
// ============================================================================

/// Test bands over the reference design.
///
/// Verifies that every band is symmetric, ordered and scaled by the same t.
#[test]
fn test_compute_bands_reference() {
    let x = reference_x();
    let y = reference_y();
    let design = augment(&x).unwrap();
    let fit = LeastSquaresFit::solve(&design, &y).unwrap();
    let dad = residual_variance(&y.column_values(0), &fit.fitted, 5).unwrap();

    let method = IntervalMethod::confidence(0.95);
    let bands = method
        .compute_bands(&design, &fit.fitted, &fit.gram_inverse, dad, 15)
        .unwrap();

    assert_relative_eq!(bands.t_value, 2.131);
    assert_eq!(bands.lower.len(), 20);
    assert_eq!(bands.upper.len(), 20);
    for i in 0..20 {
        let se = bands.standard_errors[i];
        assert!(se > 0.0);
        assert!(bands.lower[i] < fit.fitted[i] && fit.fitted[i] < bands.upper[i]);
        assert_relative_eq!(
            fit.fitted[i] - bands.lower[i],
            bands.upper[i] - fit.fitted[i],
            max_relative = 1e-9
        );
        assert_relative_eq!(bands.upper[i] - bands.lower[i], 2.0 * 2.131 * se, max_relative = 1e-9);
    }
}

/// Test wider coverage produces wider bands.
#[test]
fn test_compute_bands_width_grows_with_level() {
    let x = reference_x();
    let y = reference_y();
    let design = augment(&x).unwrap();
    let fit = LeastSquaresFit::solve(&design, &y).unwrap();
    let dad = residual_variance(&y.column_values(0), &fit.fitted, 5).unwrap();

    let wide = IntervalMethod::confidence(0.95)
        .compute_bands(&design, &fit.fitted, &fit.gram_inverse, dad, 15)
        .unwrap();
    let narrow = IntervalMethod::confidence(0.90)
        .compute_bands(&design, &fit.fitted, &fit.gram_inverse, dad, 15)
        .unwrap();

    for i in 0..20 {
        assert!(wide.upper[i] - wide.lower[i] > narrow.upper[i] - narrow.lower[i]);
    }
}

/// Test fitted values must align with the design rows.
#[test]
fn test_compute_bands_length_mismatch() {
    let design = augment(&reference_x()).unwrap();
    let g: Matrix<f64> = Matrix::identity(5);

    let result = IntervalMethod::confidence(0.95).compute_bands(&design, &[1.0; 3], &g, 1.0, 15);
    assert!(matches!(
        result,
        Err(RegressionError::LengthMismatch { x_len: 20, y_len: 3 })
    ));
}
