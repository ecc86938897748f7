//! Execution engine for polynomial regression.
//!
//! ## Purpose
//!
//! This module runs one complete regression over an observation set:
//! augmentation, the least-squares solve, variance estimates, the adequacy
//! test, correlation, and per-observation confidence bounds.
//!
//! ## Design notes
//!
//! * **Pure**: Every run is a function of `(X, Y, config)`; no state survives a call.
//! * **Silent**: The engine returns results and never prints.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! 1. Augment X into the `n x 5` design `D`.
//! 2. Solve `B = (DᵀD)⁻¹ DᵀY` and compute `YR = D·B`.
//! 3. Residual variance `Dad` over `n - 5` df, total variance `DY` over `n - 1`.
//! 4. F-test of `DY / Dad` at the configured significance.
//! 5. Pearson correlation of Y and YR.
//! 6. Bounds `YR ± t · sqrt(xᵢ (DᵀD)⁻¹ xᵢᵀ · Dad)`.
//!
//! ## Invariants
//!
//! * At least six observations are required (five coefficients plus one df).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::features::{FEATURE_COUNT, augment};
use crate::algorithms::ols::{LeastSquaresFit, residual_variance, total_variance};
use crate::engine::output::RegressionResult;
use crate::engine::validator::Validator;
use crate::evaluation::adequacy::FTest;
use crate::evaluation::intervals::IntervalMethod;
use crate::math::correlation::pearson_correlation;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for one regression run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionConfig<T> {
    /// Coverage of the confidence bounds.
    pub confidence_level: T,

    /// Significance level of the adequacy F-test.
    pub significance: T,
}

impl<T: Float> Default for RegressionConfig<T> {
    fn default() -> Self {
        Self {
            confidence_level: T::from(0.95).unwrap_or_else(T::one),
            significance: T::from(0.05).unwrap_or_else(T::zero),
        }
    }
}

impl<T: Float> RegressionConfig<T> {
    /// Check both levels lie strictly inside (0, 1).
    pub fn validate(&self) -> Result<(), RegressionError> {
        Validator::validate_confidence_level(self.confidence_level)?;
        Validator::validate_significance(self.significance)
    }

    /// Interval method at the configured coverage.
    #[inline]
    pub fn interval_method(&self) -> IntervalMethod<T> {
        IntervalMethod::confidence(self.confidence_level)
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the regression pipeline.
pub struct RegressionExecutor;

impl RegressionExecutor {
    /// Fit the model to `(x, y)` and evaluate it.
    pub fn run<T: Float>(
        x: &Matrix<T>,
        y: &Matrix<T>,
        config: &RegressionConfig<T>,
    ) -> Result<RegressionResult<T>, RegressionError> {
        Validator::validate_observations(x, y)?;
        let n = x.rows();
        Validator::validate_sample_size(n, FEATURE_COUNT)?;

        let design = augment(x)?;
        let fit = LeastSquaresFit::solve(&design, y)?;

        let targets = y.column_values(0);
        let dad = residual_variance(&targets, &fit.fitted, FEATURE_COUNT)?;
        let dy = total_variance(&targets)?;
        let f_test = FTest::evaluate(dy, dad, n, FEATURE_COUNT, config.significance);

        let correlation = pearson_correlation(&targets, &fit.fitted)?;

        let df = n - FEATURE_COUNT;
        let bands = config.interval_method().compute_bands(
            &design,
            &fit.fitted,
            &fit.gram_inverse,
            dad,
            df,
        )?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            observations = n,
            f_statistic = f_test.statistic.to_f64().unwrap_or(f64::NAN),
            f_critical = f_test.critical.to_f64().unwrap_or(f64::NAN),
            adequate = f_test.decision.is_adequate(),
            correlation = correlation.to_f64().unwrap_or(f64::NAN),
            "regression fitted"
        );

        let residuals = targets
            .iter()
            .zip(&fit.fitted)
            .map(|(&yi, &fi)| yi - fi)
            .collect();

        Ok(RegressionResult {
            fitted: fit.fitted,
            coefficients: fit.coefficients,
            confidence_lower: bands.lower,
            confidence_upper: bands.upper,
            correlation,
            adequacy: f_test.decision,
            residuals,
            standard_errors: bands.standard_errors,
            residual_variance: dad,
            total_variance: dy,
            f_test,
            t_value: bands.t_value,
            degrees_of_freedom: df,
            confidence_level: config.confidence_level,
        })
    }
}
