//! High-level API for polynomial regression and rolling forecasts.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring the regression and choosing an execution adapter
//! (Batch or Rolling), plus two fixed-parameter convenience functions.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Marker types transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RegressionBuilder`] via `Regression::new()`.
//! 2. Chain configuration methods (`.confidence_level()`, `.window_size()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` or `.adapter(Rolling)`.
//! 4. Call `.build()` on the adapter builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchRegressionBuilder;
use crate::adapters::rolling::RollingRegressionBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::BatchRegression;
pub use crate::adapters::rolling::{RollingForecaster, RollingRegression};
pub use crate::engine::output::{ForecastStep, PredictionResult, RegressionResult};
pub use crate::evaluation::adequacy::Adequacy;
pub use crate::evaluation::diagnostics::ForecastAccuracy;
pub use crate::primitives::errors::RegressionError;
pub use crate::primitives::matrix::Matrix;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Rolling};
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring the regression and its execution mode.
#[derive(Debug, Clone)]
pub struct RegressionBuilder<T> {
    /// Coverage of the confidence bounds (default 0.95).
    pub confidence_level: Option<T>,

    /// Significance level of the adequacy F-test (default 0.05).
    pub significance: Option<T>,

    /// Window size (Rolling only, default 20).
    pub window_size: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RegressionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            confidence_level: None,
            significance: None,
            window_size: None,
            duplicate_param: None,
        }
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: RegressionAdapter<T>,
    {
        A::convert(self)
    }

    /// Set the confidence level for interval bounds (e.g., 0.95).
    pub fn confidence_level(mut self, level: T) -> Self {
        if self.confidence_level.is_some() {
            self.duplicate_param = Some("confidence_level");
        }
        self.confidence_level = Some(level);
        self
    }

    /// Set the significance level of the adequacy F-test (e.g., 0.05).
    pub fn significance(mut self, alpha: T) -> Self {
        if self.significance.is_some() {
            self.duplicate_param = Some("significance");
        }
        self.significance = Some(alpha);
        self
    }

    /// Set the rolling window size (Rolling only).
    pub fn window_size(mut self, size: usize) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(size);
        self
    }
}

/// Trait for transitioning from the generic builder to an execution builder.
pub trait RegressionAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`RegressionBuilder`] into a specialized execution builder.
    fn convert(builder: RegressionBuilder<T>) -> Self::Output;
}

/// Marker for one-shot batch regression.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> RegressionAdapter<T> for Batch {
    type Output = BatchRegressionBuilder<T>;

    fn convert(builder: RegressionBuilder<T>) -> Self::Output {
        let mut result = BatchRegressionBuilder::default();

        if let Some(level) = builder.confidence_level {
            result.confidence_level = level;
        }
        if let Some(alpha) = builder.significance {
            result.significance = alpha;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for rolling-window forecasting.
#[derive(Debug, Clone, Copy)]
pub struct Rolling;

impl<T: Float> RegressionAdapter<T> for Rolling {
    type Output = RollingRegressionBuilder<T>;

    fn convert(builder: RegressionBuilder<T>) -> Self::Output {
        let mut result = RollingRegressionBuilder::default();

        if let Some(size) = builder.window_size {
            result.window_size = size;
        }
        if let Some(level) = builder.confidence_level {
            result.confidence_level = level;
        }
        if let Some(alpha) = builder.significance {
            result.significance = alpha;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Fit the five-term model with 95% bounds and a 5% F-test.
pub fn run_regression<T: Float>(
    x: &Matrix<T>,
    y: &Matrix<T>,
) -> Result<RegressionResult<T>, RegressionError> {
    RegressionBuilder::<T>::new().adapter(Batch).build()?.fit(x, y)
}

/// Forecast each row of `(new_x, new_y)` from a rolling window of
/// `window_size` observations seeded with `(initial_x, initial_y)`.
pub fn rolling_window_predict<T: Float>(
    initial_x: &Matrix<T>,
    initial_y: &Matrix<T>,
    new_x: &Matrix<T>,
    new_y: &Matrix<T>,
    window_size: usize,
) -> Result<PredictionResult<T>, RegressionError> {
    RegressionBuilder::<T>::new()
        .window_size(window_size)
        .adapter(Rolling)
        .build()?
        .predict(initial_x, initial_y, new_x, new_y)
}
