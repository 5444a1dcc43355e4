use crate::{error::AnalyticsError, returns::validate_prices};
use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum peak-to-trough percentage decline observed over a price series.
///
/// Drawdown is a level-based measure computed over raw prices, not returns.
/// With strictly positive prices the value always lies in `[0, 1)`.
///
/// See docs: <https://www.investopedia.com/terms/m/maximum-drawdown-mdd.asp>
#[derive(
    Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize, Constructor,
)]
pub struct MaxDrawdown {
    pub value: Decimal,
}

impl MaxDrawdown {
    /// Calculate the [`MaxDrawdown`] of a chronological price series in a
    /// single pass.
    ///
    /// # Errors
    /// * [`AnalyticsError::InsufficientData`] for an empty series.
    /// * [`AnalyticsError::InvalidInput`] if any price is not strictly
    ///   positive.
    pub fn from_prices(prices: &[Decimal]) -> Result<Self, AnalyticsError> {
        validate_prices(prices)?;

        let Some((first, rest)) = prices.split_first() else {
            return Err(AnalyticsError::InsufficientData {
                required: 1,
                found: 0,
            });
        };

        let mut generator = DrawdownGenerator::init(*first);
        for price in rest {
            generator.update(*price);
        }

        Ok(generator.generate())
    }

    /// Percentage gain required to recover the prior peak from the maximum
    /// drawdown trough: `dd / (1 - dd)`.
    ///
    /// A 20% drawdown needs a 25% gain to recover. Derived on demand, never
    /// stored.
    pub fn recovery_required(&self) -> Decimal {
        self.value
            .checked_div(Decimal::ONE - self.value)
            .unwrap_or(Decimal::MAX)
    }
}

/// [`MaxDrawdown`] generator tracking a running peak over a stream of prices.
///
/// Invariant: prices must be strictly positive (enforced by
/// [`MaxDrawdown::from_prices`]; callers driving the generator directly are
/// responsible for validation).
#[derive(
    Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize, Constructor,
)]
pub struct DrawdownGenerator {
    pub peak: Decimal,
    pub max: Decimal,
}

impl DrawdownGenerator {
    /// Initialise a [`DrawdownGenerator`] from the first price of a series.
    pub fn init(first_price: Decimal) -> Self {
        Self {
            peak: first_price,
            max: Decimal::ZERO,
        }
    }

    /// Update the internal running peak and maximum drawdown with the next
    /// price.
    pub fn update(&mut self, price: Decimal) {
        if price > self.peak {
            self.peak = price;
            return;
        }

        if let Some(drawdown) = (self.peak - price).checked_div(self.peak)
            && drawdown > self.max
        {
            self.max = drawdown;
        }
    }

    /// Generate the current [`MaxDrawdown`].
    pub fn generate(&self) -> MaxDrawdown {
        MaxDrawdown::new(self.max)
    }
}
