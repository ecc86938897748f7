//! Ordinary least squares via the normal equations.
//!
//! ## Purpose
//!
//! This module solves `B = (DᵀD)⁻¹ DᵀY` for a design matrix `D` and target
//! column `Y`, and provides the residual and total variance estimators the
//! evaluation layer builds on.
//!
//! ## Design notes
//!
//! * **Solver**: Explicit inversion of the Gram matrix `DᵀD`; the inverse is
//!   kept because prediction variances need it.
//! * **Errors**: A rank-deficient design surfaces as `SingularMatrix`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not build the design matrix (see `features`).
//! * This module does not weight observations or regularize.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::correlation::mean;
use crate::math::linalg::{inverse, multiply, transpose};
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Least-Squares Fit
// ============================================================================

/// Solution of the normal equations for one design.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquaresFit<T> {
    /// Inverse Gram matrix `(DᵀD)⁻¹`.
    pub gram_inverse: Matrix<T>,

    /// Coefficient column `B`.
    pub coefficients: Matrix<T>,

    /// Fitted values `D·B`.
    pub fitted: Vec<T>,
}

impl<T: Float> LeastSquaresFit<T> {
    /// Solve the normal equations for `design` and target column `y`.
    pub fn solve(design: &Matrix<T>, y: &Matrix<T>) -> Result<Self, RegressionError> {
        if design.rows() != y.rows() {
            return Err(RegressionError::MismatchedObservations {
                x_rows: design.rows(),
                y_rows: y.rows(),
            });
        }

        let design_t = transpose(design);
        let gram_inverse = gram_inverse_from(&design_t, design)?;
        let moment = multiply(&design_t, y)?;
        let coefficients = multiply(&gram_inverse, &moment)?;
        let fitted = multiply(design, &coefficients)?.into_vec();

        Ok(Self {
            gram_inverse,
            coefficients,
            fitted,
        })
    }

    /// Predict the response for one row of design terms.
    pub fn predict_row(&self, terms: &[T]) -> Result<T, RegressionError> {
        predict_with(&self.coefficients, terms)
    }
}

/// Compute `(DᵀD)⁻¹` for a design matrix.
pub fn gram_inverse<T: Float>(design: &Matrix<T>) -> Result<Matrix<T>, RegressionError> {
    gram_inverse_from(&transpose(design), design)
}

fn gram_inverse_from<T: Float>(
    design_t: &Matrix<T>,
    design: &Matrix<T>,
) -> Result<Matrix<T>, RegressionError> {
    inverse(&multiply(design_t, design)?)
}

/// Dot product of a design row with a coefficient column.
pub fn predict_with<T: Float>(coefficients: &Matrix<T>, terms: &[T]) -> Result<T, RegressionError> {
    if coefficients.cols() != 1 || coefficients.rows() != terms.len() {
        return Err(RegressionError::DimensionMismatch {
            op: "predict",
            left: (1, terms.len()),
            right: coefficients.shape(),
        });
    }
    Ok(terms
        .iter()
        .zip(coefficients.as_slice())
        .fold(T::zero(), |acc, (&x, &b)| acc + x * b))
}

// ============================================================================
// Variance Estimators
// ============================================================================

/// Residual variance `Σ(y - ŷ)² / (n - params)`.
pub fn residual_variance<T: Float>(
    y: &[T],
    fitted: &[T],
    params: usize,
) -> Result<T, RegressionError> {
    if y.len() != fitted.len() {
        return Err(RegressionError::LengthMismatch {
            x_len: y.len(),
            y_len: fitted.len(),
        });
    }
    let n = y.len();
    if n <= params {
        return Err(RegressionError::DegenerateSample {
            got: n,
            min: params + 1,
        });
    }

    let sse = y
        .iter()
        .zip(fitted)
        .fold(T::zero(), |acc, (&yi, &fi)| acc + (yi - fi) * (yi - fi));
    Ok(sse / T::from(n - params).unwrap_or_else(T::one))
}

/// Sample variance `Σ(y - ȳ)² / (n - 1)`.
pub fn total_variance<T: Float>(y: &[T]) -> Result<T, RegressionError> {
    let n = y.len();
    if n < 2 {
        return Err(RegressionError::DegenerateSample { got: n, min: 2 });
    }

    let y_mean = mean(y);
    let ss = y
        .iter()
        .fold(T::zero(), |acc, &yi| acc + (yi - y_mean) * (yi - y_mean));
    Ok(ss / T::from(n - 1).unwrap_or_else(T::one))
}
