//! Dense row-major matrix storage.
//!
//! ## Purpose
//!
//! This module provides the `Matrix` container shared by every layer of the
//! crate: observation sets, design matrices, coefficient vectors and the
//! augmented matrices used during inversion.
//!
//! ## Design notes
//!
//! * **Layout**: Elements are stored contiguously in row-major order.
//! * **Shape**: Row and column counts are fixed at construction.
//! * **Mutation**: Element values may be updated in place through `set` or `IndexMut`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` for every constructed matrix.
//! * Element `(i, j)` lives at `data[i * cols + j]`.
//!
//! ## Non-goals
//!
//! * This module does not implement arithmetic (see the math layer).
//! * This module does not support sparse or strided storage.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;

// ============================================================================
// Matrix
// ============================================================================

/// Dense row-major matrix with a fixed shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a matrix from a row-major buffer, validating its length.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, RegressionError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(RegressionError::InvalidMatrixData {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Create an `n x 1` column vector.
    pub fn column(values: Vec<T>) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values,
        }
    }

    // ========================================================================
    // Shape
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Read element `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.rows && j < self.cols, "get: index out of bounds");
        self.data[i * self.cols + j]
    }

    /// Overwrite element `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        debug_assert!(i < self.rows && j < self.cols, "set: index out of bounds");
        self.data[i * self.cols + j] = value;
    }

    /// Borrow row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Mutably borrow row `i` as a slice.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Copy column `j` into a vector.
    pub fn column_values(&self, j: usize) -> Vec<T> {
        (0..self.rows).map(|i| self.get(i, j)).collect()
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// Borrow the row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Drop the first row, shift the rest up, and write `row` into the last slot.
    ///
    /// The shape is unchanged. `row` must have exactly `cols` elements.
    pub(crate) fn rotate_in_row(&mut self, row: &[T]) {
        debug_assert_eq!(row.len(), self.cols, "rotate_in_row: width mismatch");
        if self.rows == 0 {
            return;
        }
        self.data.rotate_left(self.cols);
        let last = self.rows - 1;
        self.row_mut(last).copy_from_slice(row);
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i * self.cols + j]
    }
}
