//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the estimation algorithms: polynomial feature
//! augmentation and the least-squares solver with its variance estimators.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Design matrix construction.
pub mod features;

/// Normal-equation solver and variance estimators.
pub mod ols;
