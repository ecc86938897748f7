//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures shared throughout the
//! crate: the dense matrix, the rolling observation window and the error
//! type. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Dense row-major matrix.
pub mod matrix;

/// Fixed-size FIFO window over observation rows.
pub mod window;

/// Shared error types.
pub mod errors;
