use crate::time::{self, TimeInterval};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the Sharpe Ratio value over a specific [`TimeInterval`].
///
/// Measures the risk-adjusted performance of an investment by comparing its
/// excess returns (over a risk-free rate) to its total volatility.
///
/// See docs: <https://www.investopedia.com/articles/07/sharpe_ratio.asp>
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct SharpeRatio<Interval> {
    pub value: Decimal,
    pub interval: Interval,
}

impl<Interval> SharpeRatio<Interval>
where
    Interval: TimeInterval,
{
    /// Calculate the [`SharpeRatio`] over the provided [`TimeInterval`].
    ///
    /// `Sharpe Ratio = (mean_return - risk_free_return) / std_dev_returns`
    ///
    /// A zero standard deviation (a riskless constant series) yields a zero
    /// ratio - the degenerate-volatility sentinel. A constant series has no
    /// meaningful risk-adjusted excess return, and zero keeps the value
    /// neutral for ranking rather than infinitely favourable.
    pub fn calculate(
        risk_free_return: Decimal,
        mean_return: Decimal,
        std_dev_returns: Decimal,
        returns_period: Interval,
    ) -> Self {
        if std_dev_returns.is_zero() {
            Self {
                value: Decimal::ZERO,
                interval: returns_period,
            }
        } else {
            let excess_returns = mean_return - risk_free_return;
            Self {
                value: excess_returns
                    .checked_div(std_dev_returns)
                    .unwrap_or(Decimal::MAX),
                interval: returns_period,
            }
        }
    }

    /// Scale the [`SharpeRatio`] from the current [`TimeInterval`] to the
    /// provided [`TimeInterval`].
    ///
    /// This scaling assumes returns are independently and identically
    /// distributed: `scaled = value * sqrt(target / current)`.
    pub fn scale<TargetInterval>(self, target: TargetInterval) -> SharpeRatio<TargetInterval>
    where
        TargetInterval: TimeInterval,
    {
        let scale = time::sqrt_scale_factor(self.interval, target);

        SharpeRatio {
            value: self.value.checked_mul(scale).unwrap_or(Decimal::MAX),
            interval: target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::decimal_is_close,
        time::{Annual252, Daily},
    };
    use rust_decimal_macros::dec;

    #[test]
    fn test_sharpe_ratio_calculate_with_daily_interval() {
        let risk_free_return = dec!(0.0015); // 0.15%
        let mean_return = dec!(0.0025); // 0.25%
        let std_dev_returns = dec!(0.02); // 2%

        let actual = SharpeRatio::calculate(risk_free_return, mean_return, std_dev_returns, Daily);

        assert_eq!(actual.value, dec!(0.05));
        assert_eq!(actual.interval, Daily);
    }

    #[test]
    fn test_sharpe_ratio_zero_std_dev_is_zero_sentinel() {
        // A riskless constant series resolves to a neutral zero ratio, not an
        // error and not an infinitely favourable score.
        let actual = SharpeRatio::calculate(dec!(0.001), dec!(0.002), dec!(0.0), Daily);

        assert_eq!(actual.value, Decimal::ZERO);
    }

    #[test]
    fn test_sharpe_ratio_negative_excess_returns() {
        let actual = SharpeRatio::calculate(dec!(0.001), dec!(-0.002), dec!(0.015), Daily);

        assert_eq!(actual.value, dec!(-0.2)); // (-0.002 - 0.001) / 0.015
    }

    #[test]
    fn test_sharpe_ratio_scale_from_daily_to_annual_252() {
        let daily = SharpeRatio {
            value: dec!(0.05),
            interval: Daily,
        };

        let actual = daily.scale(Annual252);

        // 0.05 * sqrt(252) ~= 0.7937
        assert!(decimal_is_close(actual.value, dec!(0.7937), dec!(0.0001)));
        assert_eq!(actual.interval, Annual252);
    }
}
