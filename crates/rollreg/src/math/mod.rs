//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions: dense matrix algebra,
//! distribution critical values and sample correlation. Nothing here knows
//! about regression models or windows.
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
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Multiply, transpose, invert.
pub mod linalg;

/// Student's t and Fisher's F critical values.
pub mod distributions;

/// Mean and Pearson correlation.
pub mod correlation;
