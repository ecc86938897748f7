#![cfg(feature = "dev")]
//! Tests for the rolling observation window.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Shape validation
//! 2. **Sliding** - FIFO eviction and constant length

use rollreg::internals::primitives::window::RollingWindow;
use rollreg::prelude::*;

fn small_window() -> RollingWindow<f64> {
    let x = Matrix::new(3, 2, vec![1.0, 20.0, 2.0, 21.0, 3.0, 22.0]).unwrap();
    let y = Matrix::column(vec![100.0, 200.0, 300.0]);
    RollingWindow::new(x, y).unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test construction with aligned matrices.
#[test]
fn test_window_new() {
    let win = small_window();

    assert_eq!(win.len(), 3);
    assert!(!win.is_empty());
    assert_eq!(win.targets(), vec![100.0, 200.0, 300.0]);
}

/// Test construction rejects misaligned row counts.
#[test]
fn test_window_mismatched_rows() {
    let x = Matrix::new(2, 2, vec![1.0, 20.0, 2.0, 21.0]).unwrap();
    let y = Matrix::column(vec![1.0, 2.0, 3.0]);

    let result = RollingWindow::new(x, y);
    assert!(matches!(
        result,
        Err(RegressionError::MismatchedObservations {
            x_rows: 2,
            y_rows: 3
        })
    ));
}

/// Test construction rejects a multi-column target.
#[test]
fn test_window_wide_target() {
    let x = Matrix::new(2, 2, vec![1.0, 20.0, 2.0, 21.0]).unwrap();
    let y = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();

    assert!(matches!(
        RollingWindow::new(x, y),
        Err(RegressionError::DimensionMismatch { .. })
    ));
}

// ============================================================================
// Sliding Tests
// ============================================================================

/// Test sliding evicts the oldest row and appends the new one.
///
/// Verifies that the remaining rows keep their relative order.
#[test]
fn test_slide_fifo() {
    let mut win = small_window();
    win.slide(&[4.0, 23.0], 400.0).unwrap();

    assert_eq!(win.len(), 3);
    assert_eq!(win.x().row(0), &[2.0, 21.0]);
    assert_eq!(win.x().row(1), &[3.0, 22.0]);
    assert_eq!(win.x().row(2), &[4.0, 23.0]);
    assert_eq!(win.targets(), vec![200.0, 300.0, 400.0]);
}

/// Test repeated slides keep the length constant.
#[test]
fn test_slide_repeated() {
    let mut win = small_window();
    for k in 0..10 {
        let day = 4.0 + k as f64;
        win.slide(&[day, 20.0], day * 100.0).unwrap();
        assert_eq!(win.len(), 3);
        assert_eq!(win.x().row(2)[0], day);
    }

    let (x, y) = win.into_parts();
    assert_eq!(x.column_values(0), vec![11.0, 12.0, 13.0]);
    assert_eq!(y.column_values(0), vec![1100.0, 1200.0, 1300.0]);
}

/// Test sliding a row of the wrong width fails and leaves the window intact.
#[test]
fn test_slide_width_mismatch() {
    let mut win = small_window();
    let before = win.clone();

    let result = win.slide(&[4.0], 400.0);
    assert!(matches!(
        result,
        Err(RegressionError::DimensionMismatch { .. })
    ));
    assert_eq!(win, before);
}
