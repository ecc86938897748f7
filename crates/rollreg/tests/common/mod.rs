//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rollreg::Matrix;

/// The 20-day reference observations: `[day, temperature]` rows.
pub fn reference_x() -> Matrix<f64> {
    Matrix::new(
        20,
        2,
        vec![
            1.0, 21.5, 2.0, 21.2, 3.0, 22.1, 4.0, 25.1, 5.0, 26.4, //
            6.0, 22.6, 7.0, 17.7, 8.0, 18.5, 9.0, 21.2, 10.0, 20.3, //
            11.0, 17.0, 12.0, 19.2, 13.0, 19.4, 14.0, 21.9, 15.0, 25.5, //
            16.0, 26.3, 17.0, 26.3, 18.0, 24.7, 19.0, 21.4, 20.0, 21.04,
        ],
    )
    .unwrap()
}

/// Energy consumption for the 20 reference days.
pub fn reference_y() -> Matrix<f64> {
    Matrix::column(vec![
        2357.85, 2669.7, 2669.7, 2998.05, 3512.85, 3542.55, 3248.85, 3341.25, 3453.45, 3598.65,
        3413.85, 4271.85, 4393.95, 3686.1, 3682.8, 3550.8, 4719.0, 3979.35, 4131.6, 4141.5,
    ])
}

/// Days 21-26, arriving after the reference period.
pub fn additional_x() -> Matrix<f64> {
    Matrix::new(
        6,
        2,
        vec![
            21.0, 21.3, 22.0, 23.0, 23.0, 23.45, 24.0, 23.8, 25.0, 21.42, 26.0, 23.09,
        ],
    )
    .unwrap()
}

/// Realized consumption for days 21-26.
pub fn additional_y() -> Matrix<f64> {
    Matrix::column(vec![4027.65, 3986.4, 3963.3, 4026.0, 3936.9, 3996.3])
}

/// Exact model coefficients used by `noise_free_data`.
pub const TRUE_COEFFICIENTS: [f64; 5] = [100.0, 12.0, -0.5, 30.0, 0.8];

/// Observations generated without noise from `TRUE_COEFFICIENTS`.
pub fn noise_free_data(n: usize) -> (Matrix<f64>, Matrix<f64>) {
    let temps = [21.5, 21.2, 22.1, 25.1, 26.4, 22.6, 17.7, 18.5, 21.2, 20.3, 17.0, 19.2];
    let mut x = Vec::with_capacity(n * 2);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        let d = (i + 1) as f64;
        let t = temps[i % temps.len()];
        let b = TRUE_COEFFICIENTS;
        x.push(d);
        x.push(t);
        y.push(b[0] + b[1] * d + b[2] * d * d + b[3] * t + b[4] * d * t);
    }
    (Matrix::new(n, 2, x).unwrap(), Matrix::column(y))
}
