//! Tests for the dense matrix container.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Buffer validation, zeros, identity, columns
//! 2. **Access** - Element, row and column access, indexing
//! 3. **Mutation** - Setting elements and swapping rows

use rollreg::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test construction from a row-major buffer.
///
/// Verifies that shape and element order are preserved.
#[test]
fn test_new_row_major() {
    let m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.get(0, 2), 3.0);
    assert_eq!(m.get(1, 0), 4.0);
}

/// Test construction rejects a buffer of the wrong length.
#[test]
fn test_new_invalid_length() {
    let result = Matrix::new(2, 2, vec![1.0, 2.0, 3.0]);

    assert_eq!(
        result,
        Err(RegressionError::InvalidMatrixData {
            rows: 2,
            cols: 2,
            len: 3
        })
    );
}

/// Test a shape whose element count overflows is rejected, not wrapped.
#[test]
fn test_new_shape_overflow() {
    let result = Matrix::<f64>::new(usize::MAX, 2, vec![]);

    assert_eq!(
        result,
        Err(RegressionError::InvalidMatrixData {
            rows: usize::MAX,
            cols: 2,
            len: 0
        })
    );
    assert!(result.unwrap_err().to_string().contains("too large"));
}

/// Test the zero-sized matrix is allowed and empty.
#[test]
fn test_new_empty() {
    let m: Matrix<f64> = Matrix::new(0, 2, vec![]).unwrap();

    assert!(m.is_empty());
    assert_eq!(m.rows(), 0);
}

/// Test identity and zeros constructors.
#[test]
fn test_identity_and_zeros() {
    let id: Matrix<f64> = Matrix::identity(3);
    let zeros: Matrix<f64> = Matrix::zeros(3, 3);

    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(id.get(i, j), if i == j { 1.0 } else { 0.0 });
            assert_eq!(zeros.get(i, j), 0.0);
        }
    }
}

/// Test column vector construction.
#[test]
fn test_column() {
    let c = Matrix::column(vec![1.0f32, 2.0, 3.0]);

    assert_eq!(c.shape(), (3, 1));
    assert_eq!(c.column_values(0), vec![1.0, 2.0, 3.0]);
}

// ============================================================================
// Access Tests
// ============================================================================

/// Test row slices and column copies.
#[test]
fn test_row_and_column_access() {
    let m = Matrix::new(3, 2, vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0]).unwrap();

    assert_eq!(m.row(1), &[2.0, 20.0]);
    assert_eq!(m.column_values(1), vec![10.0, 20.0, 30.0]);
    assert_eq!(m.as_slice().len(), 6);
}

/// Test tuple indexing agrees with `get`.
#[test]
fn test_index_tuple() {
    let mut m = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();

    assert_eq!(m[(1, 0)], m.get(1, 0));

    m[(0, 1)] = 9.0;
    assert_eq!(m.get(0, 1), 9.0);
}

// ============================================================================
// Mutation Tests
// ============================================================================

/// Test setting an element.
#[test]
fn test_set() {
    let mut m: Matrix<f64> = Matrix::zeros(2, 2);
    m.set(1, 1, 5.0);

    assert_eq!(m.into_vec(), vec![0.0, 0.0, 0.0, 5.0]);
}

/// Test swapping rows.
///
/// Verifies that swapping a row with itself is a no-op.
#[test]
fn test_swap_rows() {
    let mut m = Matrix::new(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

    m.swap_rows(0, 2);
    assert_eq!(m.row(0), &[5.0, 6.0]);
    assert_eq!(m.row(2), &[1.0, 2.0]);

    let before = m.clone();
    m.swap_rows(1, 1);
    assert_eq!(m, before);
}
