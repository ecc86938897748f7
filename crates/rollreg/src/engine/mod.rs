//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates one regression run by coordinating the
//! algorithms (augmentation, least squares) and the evaluation tools
//! (F-test, intervals), and defines the result types returned to callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Regression execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types.
pub mod output;
