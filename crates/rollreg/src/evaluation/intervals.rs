//! Confidence intervals for fitted and predicted values.
//!
//! ## Purpose
//!
//! This module turns the inverse Gram matrix and the residual variance into
//! standard errors and t-based confidence bounds.
//!
//! ## Key concepts
//!
//! * **Prediction variance**: `x · (DᵀD)⁻¹ · xᵀ` for a design row `x`.
//! * **Standard error**: `SE = sqrt(x · (DᵀD)⁻¹ · xᵀ · Dad)`.
//! * **Bounds**: `ŷ ± t((1 + level) / 2, df) · SE`.
//!
//! ## Invariants
//!
//! * Confidence levels satisfy 0 < level < 1.
//! * Standard errors are non-negative, so lower <= upper.
//!
//! ## Non-goals
//!
//! * This module does not provide bootstrap or simultaneous bands.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::distributions::t_critical;
use crate::math::linalg::quadratic_form;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Interval Configuration
// ============================================================================

/// Two-sided confidence interval at a fixed coverage level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalMethod<T> {
    /// Desired coverage (e.g., 0.95 for 95% intervals).
    pub level: T,
}

/// Per-observation interval output.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalBands<T> {
    /// Critical t value used for every row.
    pub t_value: T,

    /// Standard error of each fitted value.
    pub standard_errors: Vec<T>,

    /// Lower confidence bounds.
    pub lower: Vec<T>,

    /// Upper confidence bounds.
    pub upper: Vec<T>,
}

impl<T: Float> Default for IntervalMethod<T> {
    fn default() -> Self {
        Self::confidence(T::from(0.95).unwrap_or_else(T::one))
    }
}

impl<T: Float> IntervalMethod<T> {
    /// Confidence intervals at the specified level.
    pub fn confidence(level: T) -> Self {
        Self { level }
    }

    /// Cumulative probability `(1 + level) / 2` fed to the t table.
    #[inline]
    pub fn probability(&self) -> T {
        (T::one() + self.level) / (T::one() + T::one())
    }

    /// Critical t value for `df` residual degrees of freedom.
    pub fn critical_value(&self, df: usize) -> Result<T, RegressionError> {
        t_critical(self.probability(), df)
    }

    // ========================================================================
    // Standard Errors
    // ========================================================================

    /// Standard error of the response at design row `terms`.
    pub fn standard_error(
        terms: &[T],
        gram_inverse: &Matrix<T>,
        residual_variance: T,
    ) -> Result<T, RegressionError> {
        let leverage = quadratic_form(terms, gram_inverse)?;
        // Rounding can push a tiny quadratic form below zero
        Ok((leverage.max(T::zero()) * residual_variance).sqrt())
    }

    /// Symmetric bounds `estimate ± t · se`.
    #[inline]
    pub fn bounds(estimate: T, se: T, t_value: T) -> (T, T) {
        (estimate - t_value * se, estimate + t_value * se)
    }

    // ========================================================================
    // Interval Computation
    // ========================================================================

    /// Compute bounds for every row of `design` around `fitted`.
    pub fn compute_bands(
        &self,
        design: &Matrix<T>,
        fitted: &[T],
        gram_inverse: &Matrix<T>,
        residual_variance: T,
        df: usize,
    ) -> Result<IntervalBands<T>, RegressionError> {
        if design.rows() != fitted.len() {
            return Err(RegressionError::LengthMismatch {
                x_len: design.rows(),
                y_len: fitted.len(),
            });
        }

        let t_value = self.critical_value(df)?;
        let n = fitted.len();
        let mut standard_errors = Vec::with_capacity(n);
        let mut lower = Vec::with_capacity(n);
        let mut upper = Vec::with_capacity(n);

        for (i, &estimate) in fitted.iter().enumerate() {
            let se = Self::standard_error(design.row(i), gram_inverse, residual_variance)?;
            let (lo, hi) = Self::bounds(estimate, se, t_value);
            standard_errors.push(se);
            lower.push(lo);
            upper.push(hi);
        }

        Ok(IntervalBands {
            t_value,
            standard_errors,
            lower,
            upper,
        })
    }
}
