use crate::error::AnalyticsError;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

/// Pearson correlation coefficient between two aligned observation series,
/// clamped to `[-1, 1]`.
///
/// The engine is agnostic to what the aligned observations represent (return
/// series or price levels) - alignment is the caller's responsibility.
///
/// See docs: <https://www.investopedia.com/terms/c/correlationcoefficient.asp>
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Correlation {
    pub value: Decimal,
}

impl Correlation {
    /// Calculate the Pearson [`Correlation`] of two aligned series:
    /// `sum(da * db) / sqrt(sum(da^2) * sum(db^2))` with `d` the deviations
    /// from each series mean.
    ///
    /// If either series is constant the denominator is zero and the
    /// correlation resolves to a neutral zero rather than dividing by zero.
    ///
    /// # Errors
    /// * [`AnalyticsError::LengthMismatch`] if the series lengths differ.
    /// * [`AnalyticsError::InsufficientData`] if fewer than two aligned
    ///   observations are provided.
    pub fn calculate(
        series_a: &[Decimal],
        series_b: &[Decimal],
    ) -> Result<Self, AnalyticsError> {
        let (sum_ab, sum_aa, sum_bb) = deviation_sums(series_a, series_b)?;

        let denominator = (sum_aa * sum_bb).sqrt().unwrap_or(Decimal::ZERO);
        if denominator.is_zero() {
            return Ok(Self {
                value: Decimal::ZERO,
            });
        }

        let value = sum_ab
            .checked_div(denominator)
            .unwrap_or(Decimal::ZERO)
            .clamp(-Decimal::ONE, Decimal::ONE);

        Ok(Self { value })
    }
}

/// Sensitivity of an asset's observations to a benchmark's observations:
/// `covariance(asset, benchmark) / variance(benchmark)`, both sample
/// statistics (ddof = 1 - beta has no population-variance variant in this
/// design).
///
/// See docs: <https://www.investopedia.com/terms/b/beta.asp>
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Beta {
    pub value: Decimal,
}

impl Beta {
    /// Calculate the [`Beta`] of an asset series against an aligned benchmark
    /// series.
    ///
    /// Returns `Ok(None)` if the benchmark variance is zero: a motionless
    /// benchmark offers nothing to measure sensitivity against, and zero
    /// would wrongly imply "no sensitivity" rather than "undefined".
    ///
    /// # Errors
    /// * [`AnalyticsError::LengthMismatch`] if the series lengths differ.
    /// * [`AnalyticsError::InsufficientData`] if fewer than two aligned
    ///   observations are provided.
    pub fn calculate(
        asset: &[Decimal],
        benchmark: &[Decimal],
    ) -> Result<Option<Self>, AnalyticsError> {
        let (sum_ab, _, sum_bb) = deviation_sums(asset, benchmark)?;

        let bessel = Decimal::from(asset.len() - 1);
        let covariance = sum_ab / bessel;
        let benchmark_variance = sum_bb / bessel;

        if benchmark_variance.is_zero() {
            return Ok(None);
        }

        Ok(covariance
            .checked_div(benchmark_variance)
            .map(|value| Self { value }))
    }
}

/// Mean-centred deviation sums of two aligned series:
/// `(sum(da * db), sum(da^2), sum(db^2))`.
fn deviation_sums(
    series_a: &[Decimal],
    series_b: &[Decimal],
) -> Result<(Decimal, Decimal, Decimal), AnalyticsError> {
    if series_a.len() != series_b.len() {
        return Err(AnalyticsError::LengthMismatch {
            left: series_a.len(),
            right: series_b.len(),
        });
    }
    if series_a.len() < 2 {
        return Err(AnalyticsError::InsufficientData {
            required: 2,
            found: series_a.len(),
        });
    }

    let count = Decimal::from(series_a.len());
    let mean_a = series_a.iter().sum::<Decimal>() / count;
    let mean_b = series_b.iter().sum::<Decimal>() / count;

    let mut sum_ab = Decimal::ZERO;
    let mut sum_aa = Decimal::ZERO;
    let mut sum_bb = Decimal::ZERO;

    for (a, b) in series_a.iter().zip(series_b) {
        let da = *a - mean_a;
        let db = *b - mean_b;
        sum_ab += da * db;
        sum_aa += da * da;
        sum_bb += db * db;
    }

    Ok((sum_ab, sum_aa, sum_bb))
}
