//! F-test for regression adequacy.
//!
//! ## Purpose
//!
//! This module compares the total variance of the response against the
//! residual variance of the fit and decides whether the model explains the
//! data better than its mean.
//!
//! ## Key concepts
//!
//! * **Statistic**: `F = DY / Dad`, total variance over residual variance.
//! * **Critical value**: `f_critical(alpha, params - 1, n - params)`.
//! * **Decision**: Adequate iff the statistic strictly exceeds the critical value.
//!
//! ## Approximations
//!
//! * The critical value inherits the table fallback of
//!   [`f_critical`](crate::math::distributions::f_critical); for untabulated
//!   degrees of freedom the decision is made against a constant.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::distributions::f_critical;

// ============================================================================
// Decision
// ============================================================================

/// Outcome of the adequacy test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adequacy {
    /// The F-statistic exceeds its critical value.
    Adequate,

    /// The F-statistic does not exceed its critical value.
    Inadequate,
}

impl Adequacy {
    /// Whether the model passed the test.
    #[inline]
    pub fn is_adequate(self) -> bool {
        matches!(self, Self::Adequate)
    }
}

impl Display for Adequacy {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Adequate => write!(f, "Adequate"),
            Self::Inadequate => write!(f, "Inadequate"),
        }
    }
}

// ============================================================================
// F-Test
// ============================================================================

/// Result of the variance-ratio test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FTest<T> {
    /// Observed ratio `DY / Dad`.
    pub statistic: T,

    /// Critical value the statistic is compared against.
    pub critical: T,

    /// Numerator degrees of freedom (`params - 1`).
    pub df1: usize,

    /// Denominator degrees of freedom (`n - params`).
    pub df2: usize,

    /// Test outcome.
    pub decision: Adequacy,
}

impl<T: Float> FTest<T> {
    /// Run the test for `n` observations and `params` coefficients.
    pub fn evaluate(
        total_variance: T,
        residual_variance: T,
        n: usize,
        params: usize,
        alpha: T,
    ) -> Self {
        let statistic = total_variance / residual_variance;
        let df1 = params.saturating_sub(1);
        let df2 = n.saturating_sub(params);
        let critical = f_critical(alpha, df1, df2);

        let decision = if statistic > critical {
            Adequacy::Adequate
        } else {
            Adequacy::Inadequate
        };

        Self {
            statistic,
            critical,
            df1,
            df2,
            decision,
        }
    }
}
