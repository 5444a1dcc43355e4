use crate::error::AnalyticsError;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

/// Delta degrees of freedom - the variance denominator policy.
///
/// The two conventions in this domain disagree (the annualised Sharpe input
/// historically used the population estimator, validation harnesses the
/// sample estimator), so the choice is an explicit parameter at every call
/// site rather than a hidden default.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Deserialize, Serialize,
)]
pub enum Ddof {
    /// Biased "population" estimator: denominator `N`.
    #[default]
    Population,
    /// Unbiased "sample" estimator with Bessel's correction: denominator `N - 1`.
    Sample,
}

impl Ddof {
    /// Denominator adjustment applied by this policy (0 or 1).
    pub fn delta(&self) -> usize {
        match self {
            Ddof::Population => 0,
            Ddof::Sample => 1,
        }
    }
}

/// Dispersion statistics of a sample: mean, variance and standard deviation,
/// with the denominator governed by an explicit [`Ddof`].
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Dispersion {
    pub mean: Decimal,
    pub variance: Decimal,
    pub std_dev: Decimal,
    pub count: usize,
}

impl Dispersion {
    /// Compute the [`Dispersion`] of a sample in a single pass using the
    /// [Welford Online](https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm)
    /// recurrence:
    ///
    /// `new_mean = prev_mean + (value - prev_mean) / count`
    /// `M = prev_m + (value - prev_mean) * (value - new_mean)`
    /// `variance = M / (N - ddof)`
    ///
    /// # Errors
    /// [`AnalyticsError::DegenerateSample`] if `N - ddof <= 0` (eg/ a
    /// single-element sample with [`Ddof::Sample`]).
    pub fn from_sample(sample: &[Decimal], ddof: Ddof) -> Result<Self, AnalyticsError> {
        let count = sample.len();
        if count <= ddof.delta() {
            return Err(AnalyticsError::DegenerateSample {
                count,
                ddof: ddof.delta(),
            });
        }

        let mut mean = Decimal::ZERO;
        let mut recurrence_m = Decimal::ZERO;
        let mut seen = Decimal::ZERO;

        for value in sample {
            seen += Decimal::ONE;
            let next_mean = mean + ((*value - mean) / seen);
            recurrence_m += (*value - mean) * (*value - next_mean);
            mean = next_mean;
        }

        let denominator = seen - Decimal::from(ddof.delta());
        let variance = recurrence_m
            .checked_div(denominator)
            .expect("denominator is validated non-zero");

        let std_dev = variance.sqrt().unwrap_or(Decimal::ZERO);

        Ok(Self {
            mean,
            variance,
            std_dev,
            count,
        })
    }
}
