//! Critical values for Student's t and Fisher's F distributions.
//!
//! ## Purpose
//!
//! This module supplies the critical values used by the adequacy test and
//! the confidence intervals: table lookups for small degrees of freedom,
//! linear interpolation between tabulated rows, and a normal-quantile
//! approximation for large samples.
//!
//! ## Design notes
//!
//! * **Tables**: Immutable process-wide statics; nothing is computed at runtime.
//! * **t-distribution**: One-sided probabilities 0.95 and 0.975 for df in
//!   `{1..10, 15, 20, 25, 30}`; gaps are interpolated linearly in df.
//! * **F-distribution**: alpha = 0.05 only, df1 in `{1..5}`, df2 in `{1..5, 10, 20, 30}`.
//! * **Normal quantile**: Abramowitz–Stegun rational approximation (26.2.23),
//!   absolute error below 4.5e-4.
//!
//! ## Approximations
//!
//! * `f_critical` returns [`F_CRITICAL_FALLBACK`] for any untabulated
//!   `(alpha, df1, df2)`. This is a coarse constant, not an interpolation.
//! * `t_critical` falls back to the normal quantile when `df > 30` or when
//!   the probability is not one of the tabulated columns.
//!
//! ## Non-goals
//!
//! * This module does not implement general distribution functions (CDF, PDF).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RegressionError;

// ============================================================================
// Tables
// ============================================================================

/// Largest df served from the t table; beyond it the normal quantile is used.
pub const T_TABLE_MAX_DF: usize = 30;

/// Value returned by [`f_critical`] outside the tabulated range.
pub const F_CRITICAL_FALLBACK: f64 = 3.0;

/// Tabulated one-sided probabilities, in column order of [`T_TABLE`].
const T_PROBABILITIES: [f64; 2] = [0.95, 0.975];

/// Student's t critical values: `(df, [p = 0.95, p = 0.975])`, sorted by df.
static T_TABLE: [(usize, [f64; 2]); 14] = [
    (1, [6.314, 12.706]),
    (2, [2.920, 4.303]),
    (3, [2.353, 3.182]),
    (4, [2.132, 2.776]),
    (5, [2.015, 2.571]),
    (6, [1.943, 2.447]),
    (7, [1.895, 2.365]),
    (8, [1.860, 2.306]),
    (9, [1.833, 2.262]),
    (10, [1.812, 2.228]),
    (15, [1.753, 2.131]),
    (20, [1.725, 2.086]),
    (25, [1.708, 2.060]),
    (30, [1.697, 2.042]),
];

/// Denominator degrees of freedom, in column order of [`F_TABLE_05`].
const F_DF2_KEYS: [usize; 8] = [1, 2, 3, 4, 5, 10, 20, 30];

/// F critical values at alpha = 0.05; row `df1 - 1`, column per [`F_DF2_KEYS`].
static F_TABLE_05: [[f64; 8]; 5] = [
    [161.4, 18.51, 10.13, 7.71, 6.61, 4.96, 4.35, 4.17],
    [199.5, 19.00, 9.55, 6.94, 5.79, 4.10, 3.49, 3.32],
    [215.7, 19.16, 9.28, 6.59, 5.41, 3.71, 3.10, 2.92],
    [224.6, 19.25, 9.12, 6.39, 5.19, 3.48, 2.87, 2.69],
    [230.2, 19.30, 9.01, 6.26, 5.05, 3.33, 2.71, 2.53],
];

// Abramowitz–Stegun 26.2.23 coefficients
const C0: f64 = 2.515_517;
const C1: f64 = 0.802_853;
const C2: f64 = 0.010_328;
const D1: f64 = 1.432_788;
const D2: f64 = 0.189_269;
const D3: f64 = 0.001_308;

// ============================================================================
// Student's t
// ============================================================================

/// Critical value of Student's t distribution at cumulative `probability`.
///
/// Exact table hits are returned as-is; other `df <= 30` are linearly
/// interpolated between the bracketing rows with weight
/// `(df - lower) / (upper - lower)`.
pub fn t_critical<T: Float>(probability: T, df: usize) -> Result<T, RegressionError> {
    if df == 0 {
        return Err(RegressionError::InvalidDegreesOfFreedom(df));
    }

    if df > T_TABLE_MAX_DF {
        return normal_quantile(probability);
    }

    let p = probability.to_f64().unwrap_or(f64::NAN);
    let Some(col) = T_PROBABILITIES.iter().position(|&q| (q - p).abs() < 1e-9) else {
        return normal_quantile(probability);
    };

    if let Some((_, row)) = T_TABLE.iter().find(|(key, _)| *key == df) {
        return Ok(to_float(row[col]));
    }

    for pair in T_TABLE.windows(2) {
        let (lo_df, lo_row) = pair[0];
        let (hi_df, hi_row) = pair[1];
        if df >= lo_df && df <= hi_df {
            let weight = (df - lo_df) as f64 / (hi_df - lo_df) as f64;
            let value = lo_row[col] + weight * (hi_row[col] - lo_row[col]);
            return Ok(to_float(value));
        }
    }

    normal_quantile(probability)
}

// ============================================================================
// Fisher's F
// ============================================================================

/// Critical value of Fisher's F distribution for significance `alpha`.
///
/// Only alpha = 0.05 is tabulated (matched to two decimals). Any other
/// combination yields [`F_CRITICAL_FALLBACK`], which callers must treat as
/// a reduced-precision approximation.
pub fn f_critical<T: Float>(alpha: T, df1: usize, df2: usize) -> T {
    let alpha_pct = (alpha.to_f64().unwrap_or(f64::NAN) * 100.0).round();
    if alpha_pct != 5.0 || df1 == 0 || df1 > F_TABLE_05.len() {
        return to_float(F_CRITICAL_FALLBACK);
    }

    match F_DF2_KEYS.iter().position(|&key| key == df2) {
        Some(col) => to_float(F_TABLE_05[df1 - 1][col]),
        None => to_float(F_CRITICAL_FALLBACK),
    }
}

// ============================================================================
// Standard Normal
// ============================================================================

/// Quantile of the standard normal distribution.
pub fn normal_quantile<T: Float>(p: T) -> Result<T, RegressionError> {
    let pf = p.to_f64().unwrap_or(f64::NAN);
    if !(pf > 0.0 && pf < 1.0) {
        return Err(RegressionError::InvalidProbability(pf));
    }

    if pf < 0.5 {
        return Ok(to_float(-upper_normal_quantile(1.0 - pf)));
    }
    Ok(to_float(upper_normal_quantile(pf)))
}

// Valid for 0.5 <= p < 1.
fn upper_normal_quantile(p: f64) -> f64 {
    let t = (-2.0 * (1.0 - p).ln()).sqrt();
    let num = C0 + C1 * t + C2 * t * t;
    let den = 1.0 + D1 * t + D2 * t * t + D3 * t * t * t;
    t - num / den
}

#[inline]
fn to_float<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
