//! Dense linear algebra over [`Matrix`].
//!
//! ## Purpose
//!
//! This module implements the three matrix operations the least-squares
//! solver needs (multiplication, transposition, inversion) plus the
//! quadratic form used for prediction variances.
//!
//! ## Design notes
//!
//! * **Inversion**: Gauss–Jordan elimination on the augmented matrix `[A | I]`.
//! * **Pivoting**: Partial pivoting; the largest magnitude in the column wins and
//!   exact ties keep the lowest row index.
//! * **Singularity**: A pivot with magnitude below `1e-10` is reported as singular.
//! * **Purity**: Every function allocates a fresh result and leaves its inputs untouched.
//!
//! ## Invariants
//!
//! * `multiply(a, b)` has shape `a.rows x b.cols`.
//! * `transpose(transpose(a)) == a`.
//! * `multiply(a, inverse(a))` is the identity within floating tolerance.
//!
//! ## Non-goals
//!
//! * This module does not provide decompositions, eigenvalues or sparse storage.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;
use crate::primitives::matrix::Matrix;

/// Pivots smaller than this in magnitude mark the matrix as singular.
pub const SINGULARITY_TOLERANCE: f64 = 1e-10;

// ============================================================================
// Products
// ============================================================================

/// Compute the matrix product `a * b`.
pub fn multiply<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, RegressionError> {
    if a.cols() != b.rows() {
        return Err(RegressionError::DimensionMismatch {
            op: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }

    let mut result = Matrix::zeros(a.rows(), b.cols());
    for i in 0..a.rows() {
        let a_row = a.row(i);
        for j in 0..b.cols() {
            let sum = a_row
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (k, &a_ik)| acc + a_ik * b.get(k, j));
            result.set(i, j, sum);
        }
    }
    Ok(result)
}

/// Return the transpose of `a`.
pub fn transpose<T: Float>(a: &Matrix<T>) -> Matrix<T> {
    let mut result = Matrix::zeros(a.cols(), a.rows());
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            result.set(j, i, a.get(i, j));
        }
    }
    result
}

/// Evaluate the quadratic form `x · g · xᵀ` for a row vector `x`.
pub fn quadratic_form<T: Float>(x: &[T], g: &Matrix<T>) -> Result<T, RegressionError> {
    if g.rows() != x.len() || g.cols() != x.len() {
        return Err(RegressionError::DimensionMismatch {
            op: "quadratic form",
            left: (1, x.len()),
            right: g.shape(),
        });
    }

    let mut total = T::zero();
    for (j, &xj) in x.iter().enumerate() {
        for (l, &xl) in x.iter().enumerate() {
            total = total + xj * g.get(j, l) * xl;
        }
    }
    Ok(total)
}

// ============================================================================
// Inversion
// ============================================================================

/// Row in `start..rows` with the largest magnitude in `column`.
///
/// Exact ties (including opposite signs) keep the lowest row index.
pub fn select_pivot<T: Float>(m: &Matrix<T>, column: usize, start: usize) -> usize {
    let mut pivot_row = start;
    for k in (start + 1)..m.rows() {
        if m.get(k, column).abs() > m.get(pivot_row, column).abs() {
            pivot_row = k;
        }
    }
    pivot_row
}

/// Invert a square matrix by Gauss–Jordan elimination with partial pivoting.
pub fn inverse<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>, RegressionError> {
    if a.rows() != a.cols() {
        return Err(RegressionError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }

    let n = a.rows();
    let width = 2 * n;
    let tolerance = T::from(SINGULARITY_TOLERANCE).unwrap_or_else(T::epsilon);

    // Build [A | I]
    let mut aug = Matrix::zeros(n, width);
    for i in 0..n {
        for j in 0..n {
            aug.set(i, j, a.get(i, j));
        }
        aug.set(i, i + n, T::one());
    }

    for i in 0..n {
        let pivot_row = select_pivot(&aug, i, i);
        aug.swap_rows(i, pivot_row);

        let pivot = aug.get(i, i);
        if pivot.abs() < tolerance {
            return Err(RegressionError::SingularMatrix { column: i });
        }

        for v in aug.row_mut(i) {
            *v = *v / pivot;
        }

        for k in 0..n {
            if k == i {
                continue;
            }
            let factor = aug.get(k, i);
            if factor == T::zero() {
                continue;
            }
            for j in 0..width {
                let updated = aug.get(k, j) - factor * aug.get(i, j);
                aug.set(k, j, updated);
            }
        }
    }

    let mut result = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            result.set(i, j, aug.get(i, j + n));
        }
    }
    Ok(result)
}
