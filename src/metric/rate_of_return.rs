use crate::time::{self, TimeInterval};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the Rate Of Return over a specific [`TimeInterval`].
///
/// Unlike risk-adjusted ratios, a rate of return scales linearly with time:
/// a 1% daily return scales to a ~252% annual return (not sqrt(252)%),
/// assuming simple rather than compound interest.
///
/// See docs: <https://www.investopedia.com/terms/r/rateofreturn.asp>
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct RateOfReturn<Interval> {
    pub value: Decimal,
    pub interval: Interval,
}

impl<Interval> RateOfReturn<Interval>
where
    Interval: TimeInterval,
{
    /// Construct a [`RateOfReturn`] from the mean return of a series sampled
    /// at the provided [`TimeInterval`].
    pub fn calculate(mean_return: Decimal, returns_period: Interval) -> Self {
        Self {
            value: mean_return,
            interval: returns_period,
        }
    }

    /// Scale the [`RateOfReturn`] from the current [`TimeInterval`] to the
    /// provided [`TimeInterval`]: `scaled = value * (target / current)`.
    pub fn scale<TargetInterval>(self, target: TargetInterval) -> RateOfReturn<TargetInterval>
    where
        TargetInterval: TimeInterval,
    {
        let scale = time::linear_scale_factor(self.interval, target);

        RateOfReturn {
            value: self.value.checked_mul(scale).unwrap_or(Decimal::MAX),
            interval: target,
        }
    }
}
