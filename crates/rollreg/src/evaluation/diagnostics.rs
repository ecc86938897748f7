//! Accuracy metrics for out-of-sample forecasts.
//!
//! ## Purpose
//!
//! This module summarizes how well a sequence of one-step-ahead forecasts
//! matched the observations that arrived afterwards.
//!
//! ## Key concepts
//!
//! * **Error**: `prediction - actual` for each step.
//! * **MAE / RMSE**: Mean absolute and root mean squared error.
//! * **MAPE**: Mean absolute percentage error; undefined when any actual is zero.
//! * **Coverage**: Share of actuals falling inside their confidence bounds.
//!
//! ## Invariants
//!
//! * MAE, RMSE and coverage are non-negative; coverage is at most 1.
//!
//! ## Non-goals
//!
//! * This module does not compute in-sample fit statistics (see the engine output).

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Forecast Accuracy
// ============================================================================

/// Accuracy of a forecast sequence against realized values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastAccuracy<T> {
    /// Number of forecasts evaluated.
    pub count: usize,

    /// Mean Absolute Error.
    pub mae: T,

    /// Root Mean Squared Error.
    pub rmse: T,

    /// Mean Absolute Percentage Error, in percent.
    pub mape: Option<T>,

    /// Fraction of actuals within `[lower, upper]`.
    pub coverage: T,
}

impl<T: Float> ForecastAccuracy<T> {
    /// Compute accuracy over aligned forecast sequences.
    ///
    /// Sequences are truncated to the shortest length.
    pub fn compute(predictions: &[T], actuals: &[T], lower: &[T], upper: &[T]) -> Self {
        let count = predictions
            .len()
            .min(actuals.len())
            .min(lower.len())
            .min(upper.len());

        if count == 0 {
            return Self {
                count,
                mae: T::zero(),
                rmse: T::zero(),
                mape: None,
                coverage: T::zero(),
            };
        }

        let mut sum_abs = T::zero();
        let mut sum_sq = T::zero();
        let mut sum_pct = T::zero();
        let mut pct_defined = true;
        let mut covered = 0usize;

        for i in 0..count {
            let err = predictions[i] - actuals[i];
            sum_abs = sum_abs + err.abs();
            sum_sq = sum_sq + err * err;

            if actuals[i] == T::zero() {
                pct_defined = false;
            } else {
                sum_pct = sum_pct + (err / actuals[i]).abs();
            }

            if actuals[i] >= lower[i] && actuals[i] <= upper[i] {
                covered += 1;
            }
        }

        let n = T::from(count).unwrap_or_else(T::one);
        let hundred = T::from(100.0).unwrap_or_else(T::one);

        Self {
            count,
            mae: sum_abs / n,
            rmse: (sum_sq / n).sqrt(),
            mape: pct_defined.then(|| sum_pct / n * hundred),
            coverage: T::from(covered).unwrap_or_else(T::zero) / n,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for ForecastAccuracy<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Forecast Accuracy:")?;
        writeln!(f, "  Forecasts:  {}", self.count)?;
        writeln!(f, "  MAE:        {:.6}", self.mae)?;
        writeln!(f, "  RMSE:       {:.6}", self.rmse)?;
        match self.mape {
            Some(mape) => writeln!(f, "  MAPE:       {:.4}%", mape)?,
            None => writeln!(f, "  MAPE:       undefined")?,
        }
        write!(f, "  Coverage:   {:.4}", self.coverage)
    }
}
