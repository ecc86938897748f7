#![cfg(feature = "dev")]
//! Tests for the normal-equation solver and variance estimators.
//!
//! ## Test Organization
//!
//! 1. **Solve** - Exact recovery, Gram inverse, shape checks
//! 2. **Prediction**
//! 3. **Variance Estimators** - Residual and total variance, degenerate samples

mod common;

use approx::assert_relative_eq;

use common::{TRUE_COEFFICIENTS, noise_free_data};
use rollreg::internals::algorithms::ols::{
    LeastSquaresFit, gram_inverse, predict_with, residual_variance, total_variance,
};
use rollreg::prelude::*;
use rollreg::{augment, augment_row, multiply, transpose};

// ============================================================================
// Solve Tests
// ============================================================================

/// Test noise-free data recovers the generating coefficients.
///
/// Verifies that fitted values reproduce the targets.
#[test]
fn test_solve_recovers_coefficients() {
    let (x, y) = noise_free_data(10);
    let design = augment(&x).unwrap();

    let fit = LeastSquaresFit::solve(&design, &y).unwrap();

    assert_eq!(fit.coefficients.shape(), (5, 1));
    for (i, &b) in TRUE_COEFFICIENTS.iter().enumerate() {
        assert_relative_eq!(fit.coefficients.get(i, 0), b, epsilon = 1e-4);
    }
    for (i, &f) in fit.fitted.iter().enumerate() {
        assert_relative_eq!(f, y.get(i, 0), max_relative = 1e-8);
    }
}

/// Test the stored Gram inverse inverts DᵀD.
#[test]
fn test_solve_gram_inverse() {
    let (x, y) = noise_free_data(8);
    let design = augment(&x).unwrap();
    let fit = LeastSquaresFit::solve(&design, &y).unwrap();

    assert_eq!(fit.gram_inverse, gram_inverse(&design).unwrap());

    let gram = multiply(&transpose(&design), &design).unwrap();
    let product = multiply(&gram, &fit.gram_inverse).unwrap();
    for i in 0..5 {
        assert_relative_eq!(product.get(i, i), 1.0, epsilon = 1e-6);
    }
}

/// Test a rank-deficient design is reported as singular.
///
/// Verifies that a constant day column collapses the design rank.
#[test]
fn test_solve_singular_design() {
    let x = Matrix::new(
        6,
        2,
        vec![3.0, 20.0, 3.0, 21.0, 3.0, 22.0, 3.0, 23.0, 3.0, 24.0, 3.0, 25.0],
    )
    .unwrap();
    let y = Matrix::column(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let design = augment(&x).unwrap();

    assert!(matches!(
        LeastSquaresFit::solve(&design, &y),
        Err(RegressionError::SingularMatrix { .. })
    ));
}

/// Test mismatched design and target rows are rejected.
#[test]
fn test_solve_mismatched_rows() {
    let (x, _) = noise_free_data(8);
    let design = augment(&x).unwrap();
    let y = Matrix::column(vec![1.0; 7]);

    assert!(matches!(
        LeastSquaresFit::solve(&design, &y),
        Err(RegressionError::MismatchedObservations { x_rows: 8, y_rows: 7 })
    ));
}

// ============================================================================
// Prediction Tests
// ============================================================================

/// Test prediction is the dot product of terms and coefficients.
#[test]
fn test_predict_with() {
    let b = Matrix::column(TRUE_COEFFICIENTS.to_vec());
    let terms = augment_row(2.0, 10.0);

    // 100 + 24 - 2 + 300 + 16
    assert_relative_eq!(predict_with(&b, &terms).unwrap(), 438.0, epsilon = 1e-12);
}

/// Test prediction agrees with the solver's own helper.
#[test]
fn test_predict_row_matches_predict_with() {
    let (x, y) = noise_free_data(9);
    let fit = LeastSquaresFit::solve(&augment(&x).unwrap(), &y).unwrap();
    let terms = augment_row(12.0, 19.5);

    assert_eq!(
        fit.predict_row(&terms).unwrap(),
        predict_with(&fit.coefficients, &terms).unwrap()
    );
}

/// Test prediction rejects terms of the wrong length.
#[test]
fn test_predict_with_wrong_length() {
    let b = Matrix::column(TRUE_COEFFICIENTS.to_vec());

    assert!(matches!(
        predict_with(&b, &[1.0, 2.0]),
        Err(RegressionError::DimensionMismatch { .. })
    ));
}

// ============================================================================
// Variance Estimator Tests
// ============================================================================

/// Test residual variance divides by `n - params`.
#[test]
fn test_residual_variance() {
    let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let fitted = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 9.0];

    // SSE = 4, df = 2
    assert_relative_eq!(residual_variance(&y, &fitted, 5).unwrap(), 2.0);
}

/// Test residual variance needs more observations than parameters.
#[test]
fn test_residual_variance_degenerate() {
    let y = [1.0; 5];

    assert_eq!(
        residual_variance(&y, &y, 5),
        Err(RegressionError::DegenerateSample { got: 5, min: 6 })
    );
}

/// Test residual variance rejects unequal lengths.
#[test]
fn test_residual_variance_length_mismatch() {
    assert!(matches!(
        residual_variance(&[1.0; 7], &[1.0; 6], 5),
        Err(RegressionError::LengthMismatch { x_len: 7, y_len: 6 })
    ));
}

/// Test the unbiased sample variance.
#[test]
fn test_total_variance() {
    // mean 5, squared deviations sum to 32
    let y = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    assert_relative_eq!(total_variance(&y).unwrap(), 32.0 / 7.0, epsilon = 1e-12);
    assert_eq!(total_variance(&[3.0, 3.0, 3.0]).unwrap(), 0.0);
}

/// Test total variance needs at least two observations.
#[test]
fn test_total_variance_single() {
    assert!(matches!(
        total_variance(&[1.0]),
        Err(RegressionError::DegenerateSample { got: 1, min: 2 })
    ));
}
