use crate::time::{self, TimeInterval};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Legacy numeric stand-in for a [`SortinoValue::NoDownside`] marker, kept
/// for presentation layers that require a finite number.
const NO_DOWNSIDE_DISPLAY_SENTINEL: u32 = 999;

/// The value of a Sortino Ratio - either a finite ratio, or a marker that the
/// observed returns contained no downside at all.
///
/// A series with zero downside deviation has an undefined ("effectively
/// infinite") Sortino Ratio. Representing that case as a tagged variant
/// instead of a numeric sentinel prevents accidental arithmetic on it
/// downstream, while the derived ordering still ranks `NoDownside` above
/// every finite ratio - zero downside is the maximally favourable score.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Deserialize, Serialize)]
pub enum SortinoValue {
    Ratio(Decimal),
    NoDownside,
}

impl Default for SortinoValue {
    fn default() -> Self {
        Self::Ratio(Decimal::ZERO)
    }
}

impl SortinoValue {
    /// Finite rendering of this value for display layers: a ratio maps to
    /// itself, `NoDownside` to the legacy `999` sentinel.
    pub fn display_value(&self) -> Decimal {
        match self {
            Self::Ratio(value) => *value,
            Self::NoDownside => Decimal::from(NO_DOWNSIDE_DISPLAY_SENTINEL),
        }
    }
}

/// Represents the Sortino Ratio value over a specific [`TimeInterval`].
///
/// Similar to the Sharpe Ratio, but only considers downside volatility (the
/// deviation of strictly negative returns) rather than total volatility. The
/// downside target threshold is fixed at zero - returns below the risk-free
/// rate but above zero do not count as downside. This is a deliberate
/// simplification of the classic target-return formulation.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct SortinoRatio<Interval> {
    pub value: SortinoValue,
    pub interval: Interval,
}

impl<Interval> SortinoRatio<Interval>
where
    Interval: TimeInterval,
{
    /// Calculate the [`SortinoRatio`] over the provided [`TimeInterval`].
    ///
    /// `Sortino Ratio = (mean_return - risk_free_return) / downside_deviation`
    ///
    /// A zero downside deviation (no negative returns observed, or all
    /// downside returns identical) yields [`SortinoValue::NoDownside`].
    pub fn calculate(
        risk_free_return: Decimal,
        mean_return: Decimal,
        downside_deviation: Decimal,
        returns_period: Interval,
    ) -> Self {
        if downside_deviation.is_zero() {
            Self {
                value: SortinoValue::NoDownside,
                interval: returns_period,
            }
        } else {
            let excess_returns = mean_return - risk_free_return;
            Self {
                value: SortinoValue::Ratio(
                    excess_returns
                        .checked_div(downside_deviation)
                        .unwrap_or(Decimal::MAX),
                ),
                interval: returns_period,
            }
        }
    }

    /// Scale the [`SortinoRatio`] from the current [`TimeInterval`] to the
    /// provided [`TimeInterval`].
    ///
    /// Finite ratios scale with the square root of time (IID assumption,
    /// debatable for downside deviation); `NoDownside` is scale-invariant.
    pub fn scale<TargetInterval>(self, target: TargetInterval) -> SortinoRatio<TargetInterval>
    where
        TargetInterval: TimeInterval,
    {
        let value = match self.value {
            SortinoValue::Ratio(ratio) => {
                let scale = time::sqrt_scale_factor(self.interval, target);
                SortinoValue::Ratio(ratio.checked_mul(scale).unwrap_or(Decimal::MAX))
            }
            SortinoValue::NoDownside => SortinoValue::NoDownside,
        };

        SortinoRatio {
            value,
            interval: target,
        }
    }
}
