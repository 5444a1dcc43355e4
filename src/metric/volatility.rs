use crate::time::{self, TimeInterval};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a volatility (standard deviation of returns) over a specific
/// [`TimeInterval`].
///
/// Also used for downside volatility, where the underlying deviation is
/// computed over the strictly negative subsequence of returns only.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Volatility<Interval> {
    pub value: Decimal,
    pub interval: Interval,
}

impl<Interval> Volatility<Interval>
where
    Interval: TimeInterval,
{
    /// Construct a [`Volatility`] from the standard deviation of a series
    /// sampled at the provided [`TimeInterval`].
    pub fn calculate(std_dev_returns: Decimal, returns_period: Interval) -> Self {
        Self {
            value: std_dev_returns,
            interval: returns_period,
        }
    }

    /// Scale the [`Volatility`] from the current [`TimeInterval`] to the
    /// provided [`TimeInterval`].
    ///
    /// Volatility scales with the square root of time under the IID returns
    /// assumption: `scaled = value * sqrt(target / current)`.
    pub fn scale<TargetInterval>(self, target: TargetInterval) -> Volatility<TargetInterval>
    where
        TargetInterval: TimeInterval,
    {
        let scale = time::sqrt_scale_factor(self.interval, target);

        Volatility {
            value: self.value.checked_mul(scale).unwrap_or(Decimal::MAX),
            interval: target,
        }
    }
}
