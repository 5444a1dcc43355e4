use crate::{error::AnalyticsError, summary::TearSheet, time::TimeInterval};
use derive_more::Constructor;
use itertools::Itertools;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Ordering policy used to rank [`RankedAsset`]s, best first.
///
/// The policy orders the full candidate list rather than comparing pairs, so
/// rules with list-level structure (eg/ near-tie windows) remain a total
/// order. The default [`SharpeSortinoPolicy`] ranks on risk-adjusted
/// performance, but the seam exists so callers can rank on raw return,
/// drawdown or any other blend without touching the engine.
pub trait RankingPolicy<Interval> {
    /// Order the provided assets best first.
    fn order(&self, assets: Vec<RankedAsset<Interval>>) -> Vec<RankedAsset<Interval>>;
}

/// Default [`RankingPolicy`]: Sharpe Ratio strictly descending, with
/// near-tied runs re-ordered by Sortino Ratio descending.
///
/// After the strict Sharpe sort, consecutive assets whose Sharpe lies within
/// `near_tie_epsilon` of their window's best Sharpe are considered
/// statistically indistinguishable, so the asset with the better downside
/// profile wins within that window. The tagged Sortino ordering ranks
/// `NoDownside` above every finite ratio. Windows never span a
/// beyond-epsilon Sharpe gap, so an asset can only overtake others it is
/// near-tied with.
#[derive(
    Debug, Copy, Clone, PartialEq, PartialOrd, Deserialize, Serialize, Constructor,
)]
pub struct SharpeSortinoPolicy {
    pub near_tie_epsilon: Decimal,
}

impl Default for SharpeSortinoPolicy {
    fn default() -> Self {
        Self {
            // 0.01 - annualised Sharpe deltas below this carry no signal.
            near_tie_epsilon: Decimal::new(1, 2),
        }
    }
}

impl<Interval> RankingPolicy<Interval> for SharpeSortinoPolicy
where
    Interval: TimeInterval,
{
    fn order(&self, assets: Vec<RankedAsset<Interval>>) -> Vec<RankedAsset<Interval>> {
        let mut assets = assets
            .into_iter()
            .sorted_by(|a, b| b.tear_sheet.sharpe.value.cmp(&a.tear_sheet.sharpe.value))
            .collect::<Vec<_>>();

        // Sortino re-orders within each near-tie window, anchored at the
        // window's best Sharpe. The anchor element is untouched until its
        // window closes, keeping window boundaries well defined.
        let mut window_start = 0;
        for index in 1..=assets.len() {
            let window_closed = index == assets.len()
                || assets[window_start].tear_sheet.sharpe.value
                    - assets[index].tear_sheet.sharpe.value
                    > self.near_tie_epsilon;

            if window_closed {
                assets[window_start..index]
                    .sort_by(|a, b| b.tear_sheet.sortino.value.cmp(&a.tear_sheet.sortino.value));
                window_start = index;
            }
        }

        assets
    }
}

/// A named [`TearSheet`] with its position resolved by a [`RankingPolicy`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct RankedAsset<Interval> {
    pub name: SmolStr,
    pub tear_sheet: TearSheet<Interval>,
}

/// Head-to-head deltas between the winner and the runner-up, produced only
/// when exactly two assets were ranked.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Deserialize, Serialize, Constructor)]
pub struct RankingComparison {
    /// Winner rate of return minus runner-up rate of return.
    pub return_delta: Decimal,
    /// Winner maximum drawdown minus runner-up maximum drawdown.
    pub drawdown_delta: Decimal,
}

/// Full ordering of analysed assets under a [`RankingPolicy`], best first.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ranking<Interval> {
    pub ranked: Vec<RankedAsset<Interval>>,
}

impl<Interval> Ranking<Interval>
where
    Interval: TimeInterval,
{
    /// Rank the provided named [`TearSheet`]s under the policy, best first.
    ///
    /// # Errors
    /// [`AnalyticsError::InsufficientData`] if no tear sheets are provided -
    /// there is nothing to rank, let alone a winner to select.
    pub fn generate<Sheets, Policy>(sheets: Sheets, policy: &Policy) -> Result<Self, AnalyticsError>
    where
        Sheets: IntoIterator<Item = (SmolStr, TearSheet<Interval>)>,
        Policy: RankingPolicy<Interval>,
    {
        let ranked = policy.order(
            sheets
                .into_iter()
                .map(|(name, tear_sheet)| RankedAsset::new(name, tear_sheet))
                .collect(),
        );

        if ranked.is_empty() {
            return Err(AnalyticsError::InsufficientData {
                required: 1,
                found: 0,
            });
        }

        Ok(Self { ranked })
    }

    /// The best-ranked asset.
    pub fn winner(&self) -> Option<&RankedAsset<Interval>> {
        self.ranked.first()
    }

    /// Head-to-head [`RankingComparison`] between winner and runner-up.
    ///
    /// `Some` iff exactly two assets were ranked - with more candidates a
    /// single pairwise delta would be misleading, so it is suppressed.
    pub fn comparison(&self) -> Option<RankingComparison> {
        let [winner, runner_up] = self.ranked.as_slice() else {
            return None;
        };

        Some(RankingComparison::new(
            winner.tear_sheet.rate_of_return.value - runner_up.tear_sheet.rate_of_return.value,
            winner.tear_sheet.max_drawdown.value - runner_up.tear_sheet.max_drawdown.value,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metric::{
            drawdown::MaxDrawdown,
            rate_of_return::RateOfReturn,
            sharpe::SharpeRatio,
            sortino::{SortinoRatio, SortinoValue},
        },
        time::Annual252,
    };
    use rust_decimal_macros::dec;

    fn sheet(
        sharpe: Decimal,
        sortino: SortinoValue,
        rate_of_return: Decimal,
        max_drawdown: Decimal,
    ) -> TearSheet<Annual252> {
        TearSheet {
            rate_of_return: RateOfReturn {
                value: rate_of_return,
                interval: Annual252,
            },
            sharpe: SharpeRatio {
                value: sharpe,
                interval: Annual252,
            },
            sortino: SortinoRatio {
                value: sortino,
                interval: Annual252,
            },
            max_drawdown: MaxDrawdown::new(max_drawdown),
            ..Default::default()
        }
    }

    #[test]
    fn test_ranking_sharpe_descending_when_distinguishable() {
        let sheets = vec![
            (
                SmolStr::new("low"),
                sheet(dec!(1.0), SortinoValue::NoDownside, dec!(0.1), dec!(0.1)),
            ),
            (
                SmolStr::new("high"),
                sheet(
                    dec!(2.0),
                    SortinoValue::Ratio(dec!(0.5)),
                    dec!(0.2),
                    dec!(0.3),
                ),
            ),
        ];

        let ranking = Ranking::generate(sheets, &SharpeSortinoPolicy::default()).unwrap();

        // Sharpe delta 1.0 is far beyond epsilon, so Sortino never consulted.
        assert_eq!(ranking.winner().unwrap().name.as_str(), "high");
    }

    #[test]
    fn test_ranking_near_tie_resolved_by_sortino() {
        // Sharpe delta 0.005 <= epsilon 0.01: statistically indistinguishable,
        // so the better downside profile wins despite the lower Sharpe.
        let sheets = vec![
            (
                SmolStr::new("alpha"),
                sheet(
                    dec!(1.50),
                    SortinoValue::Ratio(dec!(1.8)),
                    dec!(0.25),
                    dec!(0.2),
                ),
            ),
            (
                SmolStr::new("bravo"),
                sheet(
                    dec!(1.495),
                    SortinoValue::Ratio(dec!(2.4)),
                    dec!(0.22),
                    dec!(0.15),
                ),
            ),
        ];

        let ranking = Ranking::generate(sheets, &SharpeSortinoPolicy::default()).unwrap();

        assert_eq!(ranking.winner().unwrap().name.as_str(), "bravo");
    }

    #[test]
    fn test_ranking_no_downside_wins_near_tie() {
        let sheets = vec![
            (
                SmolStr::new("finite"),
                sheet(
                    dec!(1.0),
                    SortinoValue::Ratio(dec!(500)),
                    dec!(0.1),
                    dec!(0.1),
                ),
            ),
            (
                SmolStr::new("spotless"),
                sheet(dec!(1.0), SortinoValue::NoDownside, dec!(0.1), dec!(0.0)),
            ),
        ];

        let ranking = Ranking::generate(sheets, &SharpeSortinoPolicy::default()).unwrap();

        assert_eq!(ranking.winner().unwrap().name.as_str(), "spotless");
    }

    #[test]
    fn test_ranking_orders_full_list() {
        let sheets = vec![
            (
                SmolStr::new("mid"),
                sheet(
                    dec!(1.0),
                    SortinoValue::Ratio(dec!(1.0)),
                    dec!(0.1),
                    dec!(0.1),
                ),
            ),
            (
                SmolStr::new("best"),
                sheet(
                    dec!(2.0),
                    SortinoValue::Ratio(dec!(2.0)),
                    dec!(0.2),
                    dec!(0.1),
                ),
            ),
            (
                SmolStr::new("worst"),
                sheet(
                    dec!(-0.5),
                    SortinoValue::Ratio(dec!(-0.5)),
                    dec!(-0.1),
                    dec!(0.4),
                ),
            ),
        ];

        let ranking = Ranking::generate(sheets, &SharpeSortinoPolicy::default()).unwrap();

        let order = ranking
            .ranked
            .iter()
            .map(|asset| asset.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["best", "mid", "worst"]);
    }

    #[test]
    fn test_ranking_chained_near_ties_respect_sharpe_dominance() {
        // Sharpe steps of 0.008: each adjacent pair is within epsilon, but
        // two steps apart exceeds it. Sortino descends as Sharpe ascends, so
        // a pairwise tie-break would let the worst Sharpe bubble to the top.
        let sheets = vec![
            (
                SmolStr::new("s000"),
                sheet(
                    dec!(0.000),
                    SortinoValue::Ratio(dec!(4.0)),
                    dec!(0.1),
                    dec!(0.1),
                ),
            ),
            (
                SmolStr::new("s008"),
                sheet(
                    dec!(0.008),
                    SortinoValue::Ratio(dec!(3.0)),
                    dec!(0.1),
                    dec!(0.1),
                ),
            ),
            (
                SmolStr::new("s016"),
                sheet(
                    dec!(0.016),
                    SortinoValue::Ratio(dec!(2.0)),
                    dec!(0.1),
                    dec!(0.1),
                ),
            ),
            (
                SmolStr::new("s024"),
                sheet(
                    dec!(0.024),
                    SortinoValue::Ratio(dec!(1.0)),
                    dec!(0.1),
                    dec!(0.1),
                ),
            ),
        ];

        let ranking = Ranking::generate(sheets, &SharpeSortinoPolicy::default()).unwrap();

        // Windows anchored at the best Sharpe: {0.024, 0.016} and
        // {0.008, 0.000}, each re-ordered by Sortino.
        let order = ranking
            .ranked
            .iter()
            .map(|asset| asset.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["s016", "s024", "s000", "s008"]);

        // No asset ranks ahead of one whose Sharpe exceeds it by more than
        // epsilon.
        for (position, asset) in ranking.ranked.iter().enumerate() {
            for behind in &ranking.ranked[position + 1..] {
                assert!(
                    behind.tear_sheet.sharpe.value - asset.tear_sheet.sharpe.value <= dec!(0.01),
                    "{} ranked ahead of {} despite a beyond-epsilon Sharpe deficit",
                    asset.name,
                    behind.name,
                );
            }
        }
    }

    #[test]
    fn test_ranking_comparison_only_for_exactly_two() {
        let policy = SharpeSortinoPolicy::default();
        let pair = |names: &[&str]| {
            names
                .iter()
                .enumerate()
                .map(|(index, name)| {
                    (
                        SmolStr::new(name),
                        sheet(
                            Decimal::from(index as i64 + 1),
                            SortinoValue::Ratio(dec!(1.0)),
                            Decimal::from(index as i64) / dec!(10),
                            Decimal::from(index as i64) / dec!(20),
                        ),
                    )
                })
                .collect::<Vec<_>>()
        };

        let two = Ranking::generate(pair(&["a", "b"]), &policy).unwrap();
        let comparison = two.comparison().unwrap();
        // Winner "b": return 0.1 - 0.0, drawdown 0.05 - 0.0.
        assert_eq!(comparison.return_delta, dec!(0.1));
        assert_eq!(comparison.drawdown_delta, dec!(0.05));

        assert_eq!(
            Ranking::generate(pair(&["a"]), &policy)
                .unwrap()
                .comparison(),
            None
        );
        assert_eq!(
            Ranking::generate(pair(&["a", "b", "c"]), &policy)
                .unwrap()
                .comparison(),
            None
        );
    }

    #[test]
    fn test_ranking_empty_input_is_insufficient() {
        let actual = Ranking::<Annual252>::generate(vec![], &SharpeSortinoPolicy::default());

        assert_eq!(
            actual,
            Err(AnalyticsError::InsufficientData {
                required: 1,
                found: 0
            })
        );
    }
}
