use chrono::TimeDelta;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};
use std::fmt::Debug;

/// Trait that represents a time interval used for financial calculations.
///
/// Implementors represent different time periods (eg/ daily, annual) and
/// provide a consistent way to access their duration and human-readable name.
/// The sampling-frequency policy behind annualisation (252 trading periods,
/// 365 calendar days, etc.) is expressed through these types rather than as
/// scattered literals.
pub trait TimeInterval: Debug + Copy {
    fn name(&self) -> SmolStr;
    fn interval(&self) -> TimeDelta;
}

/// Annual [`TimeInterval`] with 365 trading days - useful for markets that
/// trade 24/7, such as crypto.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Annual365;

impl TimeInterval for Annual365 {
    fn name(&self) -> SmolStr {
        SmolStr::new("Annual(365)")
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(365)
    }
}

/// Annual [`TimeInterval`] with 252 trading days - the traditional-market
/// convention (weekends and holidays excluded).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Annual252;

impl TimeInterval for Annual252 {
    fn name(&self) -> SmolStr {
        SmolStr::new("Annual(252)")
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(252)
    }
}

/// Daily [`TimeInterval`] - the assumed sampling period of an input price
/// series (one observation per trading day).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Daily;

impl TimeInterval for Daily {
    fn name(&self) -> SmolStr {
        SmolStr::new("Daily")
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(1)
    }
}

impl TimeInterval for TimeDelta {
    fn name(&self) -> SmolStr {
        format_smolstr!("Duration {} (minutes)", self.num_minutes())
    }

    fn interval(&self) -> TimeDelta {
        *self
    }
}

/// Linear scale factor between two [`TimeInterval`]s: `target / current`.
///
/// Used for quantities that scale linearly with time, such as a mean return
/// (eg/ `Daily` -> `Annual252` yields 252).
pub fn linear_scale_factor<Current, Target>(current: Current, target: Target) -> Decimal
where
    Current: TimeInterval,
    Target: TimeInterval,
{
    let target_secs = Decimal::from(target.interval().num_seconds());
    let current_secs = Decimal::from(current.interval().num_seconds());

    target_secs
        .abs()
        .checked_div(current_secs.abs())
        .unwrap_or(Decimal::MAX)
}

/// Square-root scale factor between two [`TimeInterval`]s:
/// `sqrt(target / current)`.
///
/// Used for quantities that scale with the square root of time under the IID
/// returns assumption, such as volatility and risk-adjusted ratios
/// (eg/ `Daily` -> `Annual252` yields sqrt(252)).
pub fn sqrt_scale_factor<Current, Target>(current: Current, target: Target) -> Decimal
where
    Current: TimeInterval,
    Target: TimeInterval,
{
    linear_scale_factor(current, target)
        .sqrt()
        .expect("interval scale factor is non-negative")
}
