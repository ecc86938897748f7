//! Batch adapter for one-shot regression.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: the whole observation
//! set is fitted once and a single `RegressionResult` is returned.
//!
//! ## Design notes
//!
//! * **Validation**: Levels are validated by `build()`, data by `fit()`.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This adapter does not handle sequential re-estimation (use the rolling adapter).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{RegressionConfig, RegressionExecutor};
use crate::engine::output::RegressionResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch regression processor.
#[derive(Debug, Clone)]
pub struct BatchRegressionBuilder<T> {
    /// Coverage of the confidence bounds.
    pub confidence_level: T,

    /// Significance level of the adequacy test.
    pub significance: T,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchRegressionBuilder<T> {
    fn default() -> Self {
        let config = RegressionConfig::default();
        Self {
            confidence_level: config.confidence_level,
            significance: config.significance,
            duplicate_param: None,
        }
    }
}

impl<T: Float> BatchRegressionBuilder<T> {
    /// Set the confidence level for the bounds.
    pub fn confidence_level(mut self, level: T) -> Self {
        self.confidence_level = level;
        self
    }

    /// Set the significance level of the F-test.
    pub fn significance(mut self, alpha: T) -> Self {
        self.significance = alpha;
        self
    }

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchRegression<T>, RegressionError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = RegressionConfig {
            confidence_level: self.confidence_level,
            significance: self.significance,
        };
        config.validate()?;

        Ok(BatchRegression { config })
    }
}

// ============================================================================
// Batch Processor
// ============================================================================

/// Configured batch regression.
#[derive(Debug, Clone, Copy)]
pub struct BatchRegression<T> {
    config: RegressionConfig<T>,
}

impl<T: Float> BatchRegression<T> {
    /// Fit `[day, temperature]` rows `x` against target column `y`.
    pub fn fit(&self, x: &Matrix<T>, y: &Matrix<T>) -> Result<RegressionResult<T>, RegressionError> {
        RegressionExecutor::run(x, y, &self.config)
    }

    /// The resolved configuration.
    pub fn config(&self) -> &RegressionConfig<T> {
        &self.config
    }
}
