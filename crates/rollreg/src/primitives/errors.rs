//! Error types for regression and forecasting operations.
//!
//! ## Purpose
//!
//! This module defines every failure the estimation engine can report,
//! from malformed matrices through singular normal equations to invalid
//! distribution arguments.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending shapes, counts or values.
//! * **Deterministic**: All variants describe input-validity faults; none are transient.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape errors**: Incompatible dimensions, non-square inversion, bad buffers.
//! 2. **Numerical errors**: Singular matrices detected by the pivot tolerance.
//! 3. **Statistical errors**: Insufficient degrees of freedom, probabilities outside (0, 1).
//! 4. **Configuration errors**: Invalid levels, window sizes, or repeated builder parameters.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for regression and forecasting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// Observation matrices are empty.
    EmptyInput,

    /// Matrix buffer length does not equal `rows * cols`.
    InvalidMatrixData {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Length of the supplied buffer.
        len: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        /// Name of the operation that rejected its operands.
        op: &'static str,
        /// Shape `(rows, cols)` of the left operand.
        left: (usize, usize),
        /// Shape `(rows, cols)` of the right operand (or the required shape).
        right: (usize, usize),
    },

    /// Inversion was requested on a non-square matrix.
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A pivot fell below the singularity tolerance during inversion.
    SingularMatrix {
        /// Pivot column at which elimination failed.
        column: usize,
    },

    /// Degrees of freedom must be strictly positive.
    InvalidDegreesOfFreedom(usize),

    /// Too few observations to estimate the residual variance.
    DegenerateSample {
        /// Number of observations provided.
        got: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Probability must lie strictly between 0 and 1.
    InvalidProbability(f64),

    /// Correlation inputs must have the same number of elements.
    LengthMismatch {
        /// Length of the first series.
        x_len: usize,
        /// Length of the second series.
        y_len: usize,
    },

    /// Predictor and target matrices disagree on the number of observations.
    MismatchedObservations {
        /// Rows in the predictor matrix.
        x_rows: usize,
        /// Rows in the target matrix.
        y_rows: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Confidence level must be strictly between 0 and 1.
    InvalidConfidenceLevel(f64),

    /// Significance level must be strictly between 0 and 1.
    InvalidSignificance(f64),

    /// The initial window does not hold exactly `window_size` observations.
    WindowMismatch {
        /// Configured window size.
        window_size: usize,
        /// Rows supplied for the initial window.
        rows: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RegressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input matrices are empty"),
            Self::InvalidMatrixData { rows, cols, len } => match rows.checked_mul(*cols) {
                Some(expected) => write!(
                    f,
                    "Invalid matrix data: {rows}x{cols} requires {expected} elements, got {len}"
                ),
                None => write!(f, "Invalid matrix data: {rows}x{cols} is too large to allocate"),
            },
            Self::DimensionMismatch { op, left, right } => write!(
                f,
                "Dimension mismatch in {op}: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Self::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square to invert, got {rows}x{cols}")
            }
            Self::SingularMatrix { column } => {
                write!(f, "Matrix is singular (pivot below tolerance at column {column})")
            }
            Self::InvalidDegreesOfFreedom(df) => {
                write!(f, "Invalid degrees of freedom: {df} (must be > 0)")
            }
            Self::DegenerateSample { got, min } => {
                write!(f, "Degenerate sample: got {got} observations, need at least {min}")
            }
            Self::InvalidProbability(p) => {
                write!(f, "Invalid probability: {p} (must be > 0 and < 1)")
            }
            Self::LengthMismatch { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} values, y has {y_len}")
            }
            Self::MismatchedObservations { x_rows, y_rows } => {
                write!(f, "Observation mismatch: X has {x_rows} rows, Y has {y_rows}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidConfidenceLevel(level) => {
                write!(f, "Invalid confidence level: {level} (must be > 0 and < 1)")
            }
            Self::InvalidSignificance(alpha) => {
                write!(f, "Invalid significance level: {alpha} (must be > 0 and < 1)")
            }
            Self::WindowMismatch { window_size, rows } => write!(
                f,
                "Window mismatch: window_size is {window_size} but initial data has {rows} rows"
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
            ),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RegressionError {}
