//! Input validation for regression configuration and data.
//!
//! ## Purpose
//!
//! This module checks observation matrices and configuration parameters
//! before any estimation work starts.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shape checks**: X is `n x 2` (or wider), Y is `n x 1`, both non-empty.
//! * **Finite checks**: No NaN or infinite values reach the solver.
//! * **Degrees of freedom**: More observations than coefficients.
//!
//! ## Non-goals
//!
//! * This module does not check domain semantics such as day monotonicity.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::features::RAW_COLUMNS;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration and input data.
///
/// All methods return `Result<(), RegressionError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate an observation set `(X, Y)`.
    pub fn validate_observations<T: Float>(
        x: &Matrix<T>,
        y: &Matrix<T>,
    ) -> Result<(), RegressionError> {
        // Check 1: Non-empty
        if x.is_empty() || y.is_empty() {
            return Err(RegressionError::EmptyInput);
        }

        // Check 2: Same number of observations
        if x.rows() != y.rows() {
            return Err(RegressionError::MismatchedObservations {
                x_rows: x.rows(),
                y_rows: y.rows(),
            });
        }

        // Check 3: Shapes
        if x.cols() < RAW_COLUMNS {
            return Err(RegressionError::DimensionMismatch {
                op: "observations",
                left: x.shape(),
                right: (x.rows(), RAW_COLUMNS),
            });
        }
        if y.cols() != 1 {
            return Err(RegressionError::DimensionMismatch {
                op: "observations",
                left: y.shape(),
                right: (y.rows(), 1),
            });
        }

        // Check 4: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate an incoming observation stream against the window's width.
    ///
    /// Unlike [`Self::validate_observations`], a stream with zero rows is valid.
    pub fn validate_stream<T: Float>(
        x: &Matrix<T>,
        y: &Matrix<T>,
        window_cols: usize,
    ) -> Result<(), RegressionError> {
        if x.rows() != y.rows() {
            return Err(RegressionError::MismatchedObservations {
                x_rows: x.rows(),
                y_rows: y.rows(),
            });
        }
        if x.cols() != window_cols {
            return Err(RegressionError::DimensionMismatch {
                op: "observation stream",
                left: x.shape(),
                right: (x.rows(), window_cols),
            });
        }
        if y.cols() != 1 {
            return Err(RegressionError::DimensionMismatch {
                op: "observation stream",
                left: y.shape(),
                right: (y.rows(), 1),
            });
        }

        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    fn validate_finite<T: Float>(m: &Matrix<T>, name: &str) -> Result<(), RegressionError> {
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                let v = m.get(i, j);
                if !v.is_finite() {
                    return Err(RegressionError::InvalidNumericValue(format!(
                        "{}[{}, {}]={}",
                        name,
                        i,
                        j,
                        v.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), RegressionError> {
        if !val.is_finite() {
            return Err(RegressionError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that `n` observations leave positive residual degrees of freedom.
    pub fn validate_sample_size(n: usize, params: usize) -> Result<(), RegressionError> {
        if n <= params {
            return Err(RegressionError::DegenerateSample {
                got: n,
                min: params + 1,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the confidence level for intervals.
    pub fn validate_confidence_level<T: Float>(level: T) -> Result<(), RegressionError> {
        if !level.is_finite() || level <= T::zero() || level >= T::one() {
            return Err(RegressionError::InvalidConfidenceLevel(
                level.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the F-test significance level.
    pub fn validate_significance<T: Float>(alpha: T) -> Result<(), RegressionError> {
        if !alpha.is_finite() || alpha <= T::zero() || alpha >= T::one() {
            return Err(RegressionError::InvalidSignificance(
                alpha.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that the rolling window leaves positive degrees of freedom.
    pub fn validate_window_size(window_size: usize, params: usize) -> Result<(), RegressionError> {
        Self::validate_sample_size(window_size, params)
    }

    /// Validate that the initial data exactly fills the window.
    pub fn validate_window_rows(window_size: usize, rows: usize) -> Result<(), RegressionError> {
        if rows != window_size {
            return Err(RegressionError::WindowMismatch { window_size, rows });
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegressionError> {
        if let Some(parameter) = duplicate_param {
            return Err(RegressionError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
