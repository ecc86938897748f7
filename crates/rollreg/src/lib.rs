//! # rollreg — Polynomial Regression with Rolling-Window Forecasts
//!
//! Ordinary least-squares regression of a response (e.g. daily energy
//! consumption) on a day index and a temperature, with an F-test for model
//! adequacy, t-based confidence intervals, and sequential re-estimation over
//! a fixed-size rolling window as new observations arrive.
//!
//! ## The Model
//!
//! Each raw observation `[day, temperature]` is expanded into five terms
//!
//! ```text
//! y = B0 + B1·day + B2·day² + B3·temperature + B4·day·temperature
//! ```
//!
//! and the coefficients are estimated from the normal equations
//! `B = (DᵀD)⁻¹ DᵀY`, with `(DᵀD)⁻¹` obtained by Gauss–Jordan elimination
//! with partial pivoting.
//!
//! ## Quick Start
//!
//! ```rust
//! use rollreg::prelude::*;
//!
//! let x = Matrix::new(8, 2, vec![
//!     1.0, 21.5,  2.0, 21.2,  3.0, 22.1,  4.0, 25.1,
//!     5.0, 26.4,  6.0, 22.6,  7.0, 17.7,  8.0, 18.5,
//! ])?;
//! let y = Matrix::column(vec![
//!     2357.85, 2669.7, 2669.7, 2998.05, 3512.85, 3542.55, 3248.85, 3341.25,
//! ]);
//!
//! let model = Regression::new()
//!     .confidence_level(0.95)   // 95% confidence bounds
//!     .significance(0.05)       // 5% F-test
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! assert_eq!(result.coefficients.shape(), (5, 1));
//! println!("{}", result);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ## Rolling Forecasts
//!
//! The rolling adapter keeps exactly `window_size` observations. For every
//! new observation it refits on the window, predicts the observation with a
//! confidence band, and then slides the window forward (oldest row out,
//! newest row in).
//!
//! ```rust
//! use rollreg::prelude::*;
//!
//! # let x = Matrix::new(8, 2, vec![
//! #     1.0, 21.5,  2.0, 21.2,  3.0, 22.1,  4.0, 25.1,
//! #     5.0, 26.4,  6.0, 22.6,  7.0, 17.7,  8.0, 18.5,
//! # ])?;
//! # let y = Matrix::column(vec![
//! #     2357.85, 2669.7, 2669.7, 2998.05, 3512.85, 3542.55, 3248.85, 3341.25,
//! # ]);
//! let new_x = Matrix::new(2, 2, vec![9.0, 21.2, 10.0, 20.3])?;
//! let new_y = Matrix::column(vec![3453.45, 3598.65]);
//!
//! let forecaster = Regression::new()
//!     .window_size(8)
//!     .adapter(Rolling)
//!     .build()?;
//!
//! let forecasts = forecaster.predict(&x, &y, &new_x, &new_y)?;
//! assert_eq!(forecasts.days, vec![9, 10]);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, RegressionError>`; singular
//! designs, insufficient degrees of freedom and malformed matrices are all
//! reported as distinct variants rather than panics.
//!
//! ## Approximations
//!
//! * F critical values are tabulated for alpha = 0.05 and small degrees of
//!   freedom only; other combinations use the constant 3.0.
//! * t critical values beyond df = 30 use a normal-quantile approximation.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! rollreg = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - feature augmentation and least squares.
mod algorithms;

// Layer 4: Evaluation - adequacy, intervals and forecast accuracy.
mod evaluation;

// Layer 5: Engine - orchestration and result types.
mod engine;

// Layer 6: Adapters - batch and rolling execution.
mod adapters;

// High-level fluent API.
mod api;

pub use crate::algorithms::features::{FEATURE_COUNT, augment, augment_row};
pub use crate::api::{
    Adapter, Adequacy, Batch, BatchRegression, ForecastAccuracy, ForecastStep, Matrix,
    PredictionResult, RegressionAdapter, RegressionBuilder, RegressionError, RegressionResult,
    Rolling, RollingForecaster, RollingRegression, rolling_window_predict, run_regression,
};
pub use crate::math::correlation::{mean, pearson_correlation};
pub use crate::math::distributions::{f_critical, normal_quantile, t_critical};
pub use crate::math::linalg::{inverse, multiply, transpose};

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Adequacy::{Adequate, Inadequate},
        Batch, ForecastAccuracy, ForecastStep, Matrix, PredictionResult,
        RegressionBuilder as Regression, RegressionError, RegressionResult, Rolling,
        RollingForecaster, rolling_window_predict, run_regression,
    };
}

// Internal modules for development and testing.
//
// Re-exports the layer modules so integration tests can reach internals
// such as the validator and the least-squares solver.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
