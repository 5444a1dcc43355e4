use crate::error::AnalyticsError;
use rust_decimal::Decimal;

/// Derive the simple-return series of a chronological price series.
///
/// `return[i] = (price[i+1] - price[i]) / price[i]`, so a series of `n`
/// prices yields `n - 1` returns. The input is never mutated and the output
/// is recomputed per call - there is no hidden state.
///
/// # Errors
/// * [`AnalyticsError::InsufficientData`] if fewer than two prices are
///   provided (a single price point has no return).
/// * [`AnalyticsError::InvalidInput`] if any price is not strictly positive.
///   Prices at or below zero would otherwise leak division artefacts into
///   every downstream metric, so the engine fails fast on the first offender.
pub fn simple_returns(prices: &[Decimal]) -> Result<Vec<Decimal>, AnalyticsError> {
    validate_prices(prices)?;

    if prices.len() < 2 {
        return Err(AnalyticsError::InsufficientData {
            required: 2,
            found: prices.len(),
        });
    }

    Ok(prices
        .windows(2)
        .map(|window| (window[1] - window[0]) / window[0])
        .collect())
}

/// Validate that every price in the series is strictly positive.
///
/// `Decimal` rules out NaN and infinities at the type level, so positivity is
/// the only invariant left to enforce.
pub fn validate_prices(prices: &[Decimal]) -> Result<(), AnalyticsError> {
    match prices
        .iter()
        .enumerate()
        .find(|(_, price)| **price <= Decimal::ZERO)
    {
        Some((index, price)) => Err(AnalyticsError::InvalidInput {
            index,
            price: *price,
        }),
        None => Ok(()),
    }
}
