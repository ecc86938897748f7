//! Fixed-size sliding window over observation rows.
//!
//! This module provides the FIFO buffer used by the rolling forecaster:
//! a pair of matrices whose row count never changes, where each slide
//! evicts the oldest observation and appends the newest one at the end.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::Matrix;

/// Rolling window of predictor rows and their targets.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow<T> {
    // Predictor rows, oldest first.
    x: Matrix<T>,

    // Target column aligned with `x`.
    y: Matrix<T>,
}

impl<T: Float> RollingWindow<T> {
    /// Take ownership of an initial observation set.
    pub fn new(x: Matrix<T>, y: Matrix<T>) -> Result<Self, RegressionError> {
        if x.rows() != y.rows() {
            return Err(RegressionError::MismatchedObservations {
                x_rows: x.rows(),
                y_rows: y.rows(),
            });
        }
        if y.cols() != 1 {
            return Err(RegressionError::DimensionMismatch {
                op: "window",
                left: y.shape(),
                right: (y.rows(), 1),
            });
        }
        Ok(Self { x, y })
    }

    /// Number of observations held (constant for the window's lifetime).
    #[inline]
    pub fn len(&self) -> usize {
        self.x.rows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current predictor rows.
    #[inline]
    pub fn x(&self) -> &Matrix<T> {
        &self.x
    }

    /// Current targets.
    #[inline]
    pub fn y(&self) -> &Matrix<T> {
        &self.y
    }

    /// Evict the oldest observation and append `(x_row, y)` as the newest.
    pub fn slide(&mut self, x_row: &[T], y: T) -> Result<(), RegressionError> {
        if x_row.len() != self.x.cols() {
            return Err(RegressionError::DimensionMismatch {
                op: "window slide",
                left: (1, x_row.len()),
                right: (1, self.x.cols()),
            });
        }
        self.x.rotate_in_row(x_row);
        self.y.rotate_in_row(&[y]);
        Ok(())
    }

    /// Release the window matrices.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.x, self.y)
    }

    /// Targets as a plain vector.
    pub fn targets(&self) -> Vec<T> {
        self.y.column_values(0)
    }
}
