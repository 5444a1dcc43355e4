use crate::{
    FnvIndexMap,
    dispersion::{Ddof, Dispersion},
    error::AnalyticsError,
    metric::{
        correlation::{Beta, Correlation},
        drawdown::MaxDrawdown,
        rate_of_return::RateOfReturn,
        sharpe::SharpeRatio,
        sortino::SortinoRatio,
        volatility::Volatility,
    },
    returns::simple_returns,
    time::{Daily, TimeInterval},
};
use derive_more::{Constructor, From};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tracing::{error, warn};

/// Table rendering of [`TearSheet`]s for human consumption.
pub mod display;

/// Annual risk-free rate expressed in percent (eg/ `4.5` for 4.5% pa).
///
/// See docs: <https://www.investopedia.com/terms/r/risk-freerate.asp>
#[derive(
    Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize, Constructor, From,
)]
pub struct RiskFreeRate(pub Decimal);

impl RiskFreeRate {
    /// Pro-rated daily risk-free return as a fraction:
    /// `annual_percent / 100 / 365`.
    ///
    /// Simple pro-ration over calendar days, not compounded - consistent with
    /// the simple-return basis of the rest of the engine.
    pub fn daily_rate(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED / Decimal::from(365)
    }
}

/// Named chronological price series owned by the caller.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct AssetSeries {
    pub name: SmolStr,
    pub prices: Vec<Decimal>,
}

impl AssetSeries {
    pub fn new<Name>(name: Name, prices: Vec<Decimal>) -> Self
    where
        Name: Into<SmolStr>,
    {
        Self {
            name: name.into(),
            prices,
        }
    }
}

/// Risk-adjusted performance summary of a single asset over a
/// [`TimeInterval`].
///
/// Immutable once generated - every field is derived from the input price
/// series and the generator configuration, never updated in place.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct TearSheet<Interval> {
    pub rate_of_return: RateOfReturn<Interval>,
    pub volatility: Volatility<Interval>,
    pub downside_volatility: Volatility<Interval>,
    pub sharpe: SharpeRatio<Interval>,
    pub sortino: SortinoRatio<Interval>,
    pub max_drawdown: MaxDrawdown,
    /// Sensitivity to the benchmark series, if one was provided and its
    /// variance was non-zero.
    pub beta: Option<Beta>,
    /// Pearson correlation against each peer or benchmark, keyed by name.
    pub correlations: FnvIndexMap<SmolStr, Correlation>,
    /// Number of return observations backing the statistics.
    pub sample_size: usize,
}

/// Summary of a multi-asset analysis: one [`TearSheet`] per successfully
/// analysed asset, with per-asset failures recorded rather than aborting the
/// batch.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MultiAssetSummary<Interval> {
    pub tear_sheets: FnvIndexMap<SmolStr, TearSheet<Interval>>,
    pub failures: FnvIndexMap<SmolStr, AnalyticsError>,
}

// Hand-written so an empty summary does not require `Interval: Default` -
// intervals such as `chrono::TimeDelta` provide none.
impl<Interval> Default for MultiAssetSummary<Interval> {
    fn default() -> Self {
        Self {
            tear_sheets: FnvIndexMap::default(),
            failures: FnvIndexMap::default(),
        }
    }
}

/// Generator of [`TearSheet`]s from chronological price series.
///
/// Holds the analysis configuration (risk-free rate and variance denominator
/// policy) so repeated calls across assets are guaranteed to be comparable.
#[derive(
    Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize, Constructor,
)]
pub struct TearSheetGenerator {
    pub risk_free_rate: RiskFreeRate,
    pub ddof: Ddof,
}

impl TearSheetGenerator {
    /// Generate the [`TearSheet`] of a single price series, with all
    /// interval-tagged metrics scaled from [`Daily`] to the target
    /// [`TimeInterval`].
    ///
    /// Pipeline: validate prices -> simple returns -> dispersion ->
    /// daily metrics -> scale. Drawdown is computed over the raw price levels.
    ///
    /// # Errors
    /// Propagates [`AnalyticsError`] from return derivation and dispersion -
    /// degenerate-but-defined cases (zero volatility, no downside) are
    /// sentinel values on the sheet, never errors.
    pub fn generate<Interval>(
        &self,
        prices: &[Decimal],
        interval: Interval,
    ) -> Result<TearSheet<Interval>, AnalyticsError>
    where
        Interval: TimeInterval,
    {
        let returns = simple_returns(prices)?;
        let dispersion = Dispersion::from_sample(&returns, self.ddof)?;

        // Downside target threshold is fixed at zero: only strictly negative
        // returns contribute to downside deviation.
        let downside = returns
            .iter()
            .copied()
            .filter(|ret| *ret < Decimal::ZERO)
            .collect::<Vec<_>>();
        let downside_deviation = if downside.is_empty() {
            Decimal::ZERO
        } else {
            Dispersion::from_sample(&downside, self.ddof)?.std_dev
        };

        let risk_free_return = self.risk_free_rate.daily_rate();

        Ok(TearSheet {
            rate_of_return: RateOfReturn::calculate(dispersion.mean, Daily).scale(interval),
            volatility: Volatility::calculate(dispersion.std_dev, Daily).scale(interval),
            downside_volatility: Volatility::calculate(downside_deviation, Daily).scale(interval),
            sharpe: SharpeRatio::calculate(
                risk_free_return,
                dispersion.mean,
                dispersion.std_dev,
                Daily,
            )
            .scale(interval),
            sortino: SortinoRatio::calculate(
                risk_free_return,
                dispersion.mean,
                downside_deviation,
                Daily,
            )
            .scale(interval),
            max_drawdown: MaxDrawdown::from_prices(prices)?,
            beta: None,
            correlations: FnvIndexMap::default(),
            sample_size: returns.len(),
        })
    }

    /// Generate the [`TearSheet`] of a price series, additionally measuring
    /// correlation and beta against a benchmark over aligned return series.
    ///
    /// A pairwise failure (eg/ mismatched series lengths) is logged and
    /// leaves the pairwise fields empty - it never blocks the single-asset
    /// metrics.
    ///
    /// # Errors
    /// Propagates [`AnalyticsError`] from the single-asset battery only.
    pub fn generate_vs_benchmark<Interval>(
        &self,
        prices: &[Decimal],
        benchmark: &AssetSeries,
        interval: Interval,
    ) -> Result<TearSheet<Interval>, AnalyticsError>
    where
        Interval: TimeInterval,
    {
        let mut tear_sheet = self.generate(prices, interval)?;

        let pairwise = simple_returns(prices).and_then(|asset_returns| {
            let benchmark_returns = simple_returns(&benchmark.prices)?;
            let correlation = Correlation::calculate(&asset_returns, &benchmark_returns)?;
            let beta = Beta::calculate(&asset_returns, &benchmark_returns)?;
            Ok((correlation, beta))
        });

        match pairwise {
            Ok((correlation, beta)) => {
                tear_sheet
                    .correlations
                    .insert(benchmark.name.clone(), correlation);
                tear_sheet.beta = beta;
            }
            Err(error) => {
                warn!(
                    benchmark = %benchmark.name,
                    %error,
                    "failed to measure benchmark-relative metrics, leaving fields empty"
                );
            }
        }

        Ok(tear_sheet)
    }

    /// Generate a [`TearSheet`] per asset, filling in cross-correlations
    /// between every pair of successfully analysed assets.
    ///
    /// Per-asset isolation: one asset's failure is logged and recorded in the
    /// [`MultiAssetSummary::failures`] map without aborting its siblings.
    pub fn generate_many<Interval>(
        &self,
        assets: &[AssetSeries],
        interval: Interval,
    ) -> MultiAssetSummary<Interval>
    where
        Interval: TimeInterval,
    {
        let mut summary = MultiAssetSummary::default();
        let mut returns_by_asset = Vec::with_capacity(assets.len());

        for asset in assets {
            match self.generate(&asset.prices, interval) {
                Ok(tear_sheet) => {
                    summary.tear_sheets.insert(asset.name.clone(), tear_sheet);

                    // Validated by the successful generate call above.
                    if let Ok(returns) = simple_returns(&asset.prices) {
                        returns_by_asset.push((asset.name.clone(), returns));
                    }
                }
                Err(error) => {
                    error!(
                        asset = %asset.name,
                        %error,
                        "failed to generate TearSheet, continuing with remaining assets"
                    );
                    summary.failures.insert(asset.name.clone(), error);
                }
            }
        }

        for (index, (name_a, returns_a)) in returns_by_asset.iter().enumerate() {
            for (name_b, returns_b) in returns_by_asset.iter().skip(index + 1) {
                match Correlation::calculate(returns_a, returns_b) {
                    Ok(correlation) => {
                        if let Some(sheet) = summary.tear_sheets.get_mut(name_a) {
                            sheet
                                .correlations
                                .insert(name_b.clone(), correlation.clone());
                        }
                        if let Some(sheet) = summary.tear_sheets.get_mut(name_b) {
                            sheet.correlations.insert(name_a.clone(), correlation);
                        }
                    }
                    Err(error) => {
                        warn!(
                            asset_a = %name_a,
                            asset_b = %name_b,
                            %error,
                            "failed to measure cross-correlation, leaving pair empty"
                        );
                    }
                }
            }
        }

        summary
    }
}
