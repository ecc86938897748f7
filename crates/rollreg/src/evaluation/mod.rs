//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit analysis: the F-test for model adequacy,
//! standard errors with confidence bounds, and accuracy metrics for
//! rolling forecasts.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// F-test adequacy decision.
pub mod adequacy;

/// Standard errors and confidence bounds.
pub mod intervals;

/// Forecast accuracy metrics.
pub mod diagnostics;
