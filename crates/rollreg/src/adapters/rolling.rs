//! Rolling-window adapter for sequential re-estimation.
//!
//! ## Purpose
//!
//! This module re-fits the regression on a fixed-size window of the most
//! recent observations each time a new observation arrives, predicts that
//! observation before it enters the window, and reports a confidence band
//! for the prediction.
//!
//! ## Design notes
//!
//! * **Storage**: A `RollingWindow` holding two matrices of constant row count.
//! * **Eviction**: FIFO; the oldest row leaves as the new row enters at the end.
//! * **Refit**: Every step runs the full engine on the current window, then
//!   recomputes `(DᵀD)⁻¹` and the residual variance for the prediction band.
//! * **Ordering**: Steps are strictly sequential; each depends on the window
//!   left by the previous one.
//!
//! ## Key concepts
//!
//! * **Day index**: Step `i` (0-based) reports day `window_size + i + 1`.
//! * **Degrees of freedom**: `window_size - 5` for the t critical value.
//!
//! ## Invariants
//!
//! * The window always holds exactly `window_size` rows.
//! * After a step the new observation is the last row of the window.
//!
//! ## Non-goals
//!
//! * This adapter does not reorder or parallelize steps.
//! * This adapter does not grow or shrink the window.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::features::{FEATURE_COUNT, RAW_COLUMNS, augment, augment_row};
use crate::algorithms::ols::{gram_inverse, predict_with, residual_variance};
use crate::engine::executor::{RegressionConfig, RegressionExecutor};
use crate::engine::output::{ForecastStep, PredictionResult};
use crate::engine::validator::Validator;
use crate::evaluation::intervals::IntervalMethod;
use crate::math::linalg::multiply;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::Matrix;
use crate::primitives::window::RollingWindow;

/// Window size used when none is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 20;

// ============================================================================
// Rolling Builder
// ============================================================================

/// Builder for the rolling-window forecaster.
#[derive(Debug, Clone)]
pub struct RollingRegressionBuilder<T> {
    /// Number of observations in the window.
    pub window_size: usize,

    /// Coverage of the prediction bounds.
    pub confidence_level: T,

    /// Significance level of the per-step adequacy test.
    pub significance: T,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RollingRegressionBuilder<T> {
    fn default() -> Self {
        let config = RegressionConfig::default();
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            confidence_level: config.confidence_level,
            significance: config.significance,
            duplicate_param: None,
        }
    }
}

impl<T: Float> RollingRegressionBuilder<T> {
    /// Set the window size.
    pub fn window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Set the confidence level for the prediction bounds.
    pub fn confidence_level(mut self, level: T) -> Self {
        self.confidence_level = level;
        self
    }

    /// Set the significance level of the F-test.
    pub fn significance(mut self, alpha: T) -> Self {
        self.significance = alpha;
        self
    }

    /// Build the rolling processor.
    pub fn build(self) -> Result<RollingRegression<T>, RegressionError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_window_size(self.window_size, FEATURE_COUNT)?;

        let config = RegressionConfig {
            confidence_level: self.confidence_level,
            significance: self.significance,
        };
        config.validate()?;

        Ok(RollingRegression {
            config,
            window_size: self.window_size,
        })
    }
}

// ============================================================================
// Rolling Processor
// ============================================================================

/// Configured rolling-window regression.
#[derive(Debug, Clone, Copy)]
pub struct RollingRegression<T> {
    config: RegressionConfig<T>,
    window_size: usize,
}

impl<T: Float> RollingRegression<T> {
    /// Configured window size.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Start a forecaster seeded with exactly `window_size` observations.
    pub fn forecaster(
        &self,
        initial_x: Matrix<T>,
        initial_y: Matrix<T>,
    ) -> Result<RollingForecaster<T>, RegressionError> {
        Validator::validate_observations(&initial_x, &initial_y)?;
        Validator::validate_window_rows(self.window_size, initial_x.rows())?;

        Ok(RollingForecaster {
            config: self.config,
            window_size: self.window_size,
            window: RollingWindow::new(initial_x, initial_y)?,
            steps: 0,
        })
    }

    /// Forecast every row of `(new_x, new_y)` in order.
    ///
    /// An empty stream yields an empty result once the seed window is valid.
    pub fn predict(
        &self,
        initial_x: &Matrix<T>,
        initial_y: &Matrix<T>,
        new_x: &Matrix<T>,
        new_y: &Matrix<T>,
    ) -> Result<PredictionResult<T>, RegressionError> {
        let mut forecaster = self.forecaster(initial_x.clone(), initial_y.clone())?;
        Validator::validate_stream(new_x, new_y, initial_x.cols())?;

        let mut output = PredictionResult::with_capacity(new_x.rows());
        for i in 0..new_x.rows() {
            let step = forecaster.step(new_x.row(i), new_y.get(i, 0))?;
            output.push(&step);
        }
        Ok(output)
    }
}

// ============================================================================
// Forecaster
// ============================================================================

/// Stateful forecaster over a sliding observation window.
#[derive(Debug, Clone)]
pub struct RollingForecaster<T> {
    config: RegressionConfig<T>,
    window_size: usize,
    window: RollingWindow<T>,
    steps: usize,
}

impl<T: Float> RollingForecaster<T> {
    /// Current window contents.
    #[inline]
    pub fn window(&self) -> &RollingWindow<T> {
        &self.window
    }

    /// Number of steps taken so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Predict the observation `x_row` (`[day, temperature, ..]`), then slide
    /// it into the window together with its realized value `actual`.
    pub fn step(&mut self, x_row: &[T], actual: T) -> Result<ForecastStep<T>, RegressionError> {
        if x_row.len() != self.window.x().cols() || x_row.len() < RAW_COLUMNS {
            return Err(RegressionError::DimensionMismatch {
                op: "rolling step",
                left: (1, x_row.len()),
                right: (1, self.window.x().cols()),
            });
        }
        for &v in x_row {
            Validator::validate_scalar(v, "x")?;
        }
        Validator::validate_scalar(actual, "y")?;

        let day = self.window_size + self.steps + 1;

        // Refit on the current window
        let result = RegressionExecutor::run(self.window.x(), self.window.y(), &self.config)?;

        let terms = augment_row(x_row[0], x_row[1]);
        let prediction = predict_with(&result.coefficients, &terms)?;

        // Prediction variance from the current window's design
        let design = augment(self.window.x())?;
        let g = gram_inverse(&design)?;
        let window_fitted = multiply(&design, &result.coefficients)?.into_vec();
        let dad = residual_variance(&self.window.targets(), &window_fitted, FEATURE_COUNT)?;

        let method: IntervalMethod<T> = self.config.interval_method();
        let standard_error = IntervalMethod::standard_error(&terms, &g, dad)?;
        let t_value = method.critical_value(self.window_size - FEATURE_COUNT)?;
        let (lower, upper) = IntervalMethod::bounds(prediction, standard_error, t_value);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "rolling.step",
            day,
            prediction = prediction.to_f64().unwrap_or(f64::NAN),
            lower = lower.to_f64().unwrap_or(f64::NAN),
            upper = upper.to_f64().unwrap_or(f64::NAN),
            adequate = result.is_adequate()
        )
        .entered();

        self.window.slide(x_row, actual)?;
        self.steps += 1;

        Ok(ForecastStep {
            day,
            prediction,
            standard_error,
            lower,
            upper,
            actual,
        })
    }
}
