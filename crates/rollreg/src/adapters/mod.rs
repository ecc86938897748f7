//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing processors that adapt the engine layer
//! to different execution modes:
//!
//! - **Batch**: One regression over a complete observation set
//! - **Rolling**: Sequential re-estimation over a fixed-size window
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// One-shot batch regression.
pub mod batch;

/// Rolling-window forecasting.
pub mod rolling;
