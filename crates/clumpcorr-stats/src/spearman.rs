//! Spearman rank correlation with an explicit precondition guard.

use serde::Serialize;

use crate::distribution::student_t_two_sided;
use crate::rank::{average_ranks, distinct_count};

/// Outcome of a rank correlation between two samples.
///
/// # Examples
///
/// ```
/// use clumpcorr_stats::spearman::{spearman, Correlation};
///
/// assert_eq!(spearman(&[1.0], &[2.0]), Correlation::InsufficientData);
/// assert_eq!(
///     spearman(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]),
///     Correlation::InsufficientVariation
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Correlation {
    /// Coefficient and two-sided p-value.
    #[serde(rename_all = "camelCase")]
    Computed {
        /// Spearman's rho in `[-1, 1]`.
        rho: f64,
        /// Two-sided p-value under the t approximation.
        p_value: f64,
    },
    /// At least one sample is constant; rho is undefined.
    InsufficientVariation,
    /// Fewer than two paired observations.
    InsufficientData,
}

impl Correlation {
    /// `(rho, p_value)` when the correlation was computed.
    pub fn values(&self) -> Option<(f64, f64)> {
        match *self {
            Correlation::Computed { rho, p_value } => Some((rho, p_value)),
            _ => None,
        }
    }
}

/// Spearman's rank correlation between paired samples `x` and `y`.
///
/// Returns [`Correlation::InsufficientData`] for fewer than two pairs and
/// [`Correlation::InsufficientVariation`] when either sample holds a single
/// distinct value. Otherwise rho is the Pearson correlation of the average
/// ranks and the p-value comes from Student's t with `n - 2` degrees of
/// freedom. Two pairs leave no degrees of freedom and report `p = 1.0`.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length.
///
/// # Examples
///
/// ```
/// use clumpcorr_stats::spearman::spearman;
///
/// let (rho, p) = spearman(&[1.0, 2.0, 3.0], &[1.0, 3.0, 2.0]).values().unwrap();
/// assert!((rho - 0.5).abs() < 1e-12);
/// assert!((p - 2.0 / 3.0).abs() < 1e-9);
/// ```
pub fn spearman(x: &[f64], y: &[f64]) -> Correlation {
    assert_eq!(x.len(), y.len(), "paired samples must have equal length");

    let n = x.len();
    if n < 2 {
        return Correlation::InsufficientData;
    }
    if distinct_count(x) < 2 || distinct_count(y) < 2 {
        return Correlation::InsufficientVariation;
    }

    let rho = pearson(&average_ranks(x), &average_ranks(y)).clamp(-1.0, 1.0);
    let df = (n - 2) as f64;

    let p_value = if df == 0.0 {
        1.0
    } else if (1.0 - rho.abs()) <= f64::EPSILON {
        0.0
    } else {
        let t = rho * (df / ((1.0 - rho) * (1.0 + rho))).sqrt();
        student_t_two_sided(t, df)
    };

    Correlation::Computed { rho, p_value }
}

/// Pearson correlation; callers guarantee non-zero variance.
fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let (mut cov, mut var_a, mut var_b) = (0.0, 0.0, 0.0);
    for (x, y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }
    cov / (var_a * var_b).sqrt()
}
