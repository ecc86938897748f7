//! Output types for regression and rolling forecasts.
//!
//! ## Purpose
//!
//! This module defines the value objects handed to callers: the full
//! `RegressionResult` of one fit, the `ForecastStep` of one rolling step,
//! and the accumulated `PredictionResult` of a forecasting run.
//!
//! ## Design notes
//!
//! * **Immutable**: Results are produced once per run and never modified afterwards.
//! * **Generics**: Results are generic over `Float` types.
//! * **Presentation**: `Display` implementations are the only formatting
//!   boundary; the engine itself performs no I/O.
//!
//! ## Invariants
//!
//! * Per-observation vectors of a `RegressionResult` all have length n.
//! * `coefficients` is a `5 x 1` column.
//! * Every sequence in a `PredictionResult` has one entry per step.
//! * Lower bounds never exceed upper bounds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::features::augment_row;
use crate::algorithms::ols::predict_with;
use crate::evaluation::adequacy::{Adequacy, FTest};
use crate::evaluation::diagnostics::ForecastAccuracy;
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Regression Result
// ============================================================================

/// Complete output of one regression run.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionResult<T> {
    /// Fitted values `YR = D·B`.
    pub fitted: Vec<T>,

    /// Coefficient column `[B0, B1, B2, B3, B4]`.
    pub coefficients: Matrix<T>,

    /// Lower confidence bound for each fitted value.
    pub confidence_lower: Vec<T>,

    /// Upper confidence bound for each fitted value.
    pub confidence_upper: Vec<T>,

    /// Pearson correlation between observed and fitted values.
    pub correlation: T,

    /// F-test decision.
    pub adequacy: Adequacy,

    /// Residuals `y - YR`.
    pub residuals: Vec<T>,

    /// Standard error of each fitted value.
    pub standard_errors: Vec<T>,

    /// Residual variance `Dad`.
    pub residual_variance: T,

    /// Total variance of the response `DY`.
    pub total_variance: T,

    /// Full F-test outcome.
    pub f_test: FTest<T>,

    /// Critical t value used for the bounds.
    pub t_value: T,

    /// Residual degrees of freedom (`n - 5`).
    pub degrees_of_freedom: usize,

    /// Coverage of the confidence bounds.
    pub confidence_level: T,
}

impl<T: Float> RegressionResult<T> {
    /// Number of observations fitted.
    #[inline]
    pub fn n_observations(&self) -> usize {
        self.fitted.len()
    }

    /// Coefficient `B{index}`.
    #[inline]
    pub fn coefficient(&self, index: usize) -> T {
        self.coefficients.get(index, 0)
    }

    /// Whether the model passed the adequacy test.
    #[inline]
    pub fn is_adequate(&self) -> bool {
        self.adequacy.is_adequate()
    }

    /// Point prediction for a new `(day, temperature)` observation.
    pub fn predict(&self, day: T, temperature: T) -> core::result::Result<T, RegressionError> {
        predict_with(&self.coefficients, &augment_row(day, temperature))
    }
}

impl<T: Float + Display> Display for RegressionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Observations: {}", self.n_observations())?;
        writeln!(f, "  Model:        {}", self.adequacy)?;
        writeln!(f, "  Correlation:  {:.4}", self.correlation)?;
        writeln!(
            f,
            "  F-statistic:  {:.4} (critical {:.4}, df {}/{})",
            self.f_test.statistic, self.f_test.critical, self.f_test.df1, self.f_test.df2
        )?;
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        for i in 0..self.coefficients.rows() {
            writeln!(f, "  B{} = {:.4}", i, self.coefficient(i))?;
        }
        writeln!(f)?;

        writeln!(f, "Fitted Data:")?;
        writeln!(
            f,
            "{:>6} {:>12} {:>12} {:>12} {:>12}",
            "Row", "Fitted", "Conf_Lower", "Conf_Upper", "Residual"
        )?;
        writeln!(f, "{:-<58}", "")?;
        for i in 0..self.fitted.len() {
            writeln!(
                f,
                "{:>6} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
                i + 1,
                self.fitted[i],
                self.confidence_lower[i],
                self.confidence_upper[i],
                self.residuals[i]
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Forecast Step
// ============================================================================

/// One step of the rolling forecaster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastStep<T> {
    /// Day index of the forecast (`window_size + step + 1`).
    pub day: usize,

    /// Point prediction.
    pub prediction: T,

    /// Standard error of the prediction.
    pub standard_error: T,

    /// Lower confidence bound.
    pub lower: T,

    /// Upper confidence bound.
    pub upper: T,

    /// Observed value that arrived for this step.
    pub actual: T,
}

impl<T: Float> ForecastStep<T> {
    /// Forecast error `prediction - actual`.
    #[inline]
    pub fn error(&self) -> T {
        self.prediction - self.actual
    }
}

// ============================================================================
// Prediction Result
// ============================================================================

/// Accumulated output of a rolling forecasting run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionResult<T> {
    /// Point predictions.
    pub predictions: Vec<T>,

    /// Lower confidence bounds.
    pub lower: Vec<T>,

    /// Upper confidence bounds.
    pub upper: Vec<T>,

    /// Observed values.
    pub actuals: Vec<T>,

    /// Day index of each forecast.
    pub days: Vec<usize>,
}

impl<T: Float> PredictionResult<T> {
    /// Empty result with room for `capacity` steps.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            predictions: Vec::with_capacity(capacity),
            lower: Vec::with_capacity(capacity),
            upper: Vec::with_capacity(capacity),
            actuals: Vec::with_capacity(capacity),
            days: Vec::with_capacity(capacity),
        }
    }

    /// Append one step.
    pub fn push(&mut self, step: &ForecastStep<T>) {
        self.predictions.push(step.prediction);
        self.lower.push(step.lower);
        self.upper.push(step.upper);
        self.actuals.push(step.actual);
        self.days.push(step.day);
    }

    /// Number of forecasts.
    #[inline]
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Forecast errors `prediction - actual`.
    pub fn errors(&self) -> Vec<T> {
        self.predictions
            .iter()
            .zip(&self.actuals)
            .map(|(&p, &a)| p - a)
            .collect()
    }

    /// Accuracy metrics over all steps.
    pub fn accuracy(&self) -> ForecastAccuracy<T> {
        ForecastAccuracy::compute(&self.predictions, &self.actuals, &self.lower, &self.upper)
    }
}

impl<T: Float + Display> Display for PredictionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Forecasts:")?;
        writeln!(
            f,
            "{:>6} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "Day", "Actual", "Predicted", "Conf_Lower", "Conf_Upper", "Error"
        )?;
        writeln!(f, "{:-<71}", "")?;
        for i in 0..self.len() {
            writeln!(
                f,
                "{:>6} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
                self.days[i],
                self.actuals[i],
                self.predictions[i],
                self.lower[i],
                self.upper[i],
                self.predictions[i] - self.actuals[i]
            )?;
        }
        writeln!(f)?;
        write!(f, "{}", self.accuracy())
    }
}
