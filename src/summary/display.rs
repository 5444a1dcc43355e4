use crate::{
    summary::{MultiAssetSummary, TearSheet},
    time::TimeInterval,
};
use prettytable::{Cell, Row, Table};
use rust_decimal::Decimal;

/// Builder of [`prettytable`] rows for a statistics type.
///
/// Display only - ranking and every other consumer read the typed values,
/// never the rendered table.
pub trait TableBuilder {
    fn titles(&self) -> Row;
    fn row(&self) -> Row;
}

impl<T> TableBuilder for &T
where
    T: TableBuilder,
{
    fn titles(&self) -> Row {
        (**self).titles()
    }

    fn row(&self) -> Row {
        (**self).row()
    }
}

impl<Interval> TableBuilder for TearSheet<Interval>
where
    Interval: TimeInterval,
{
    fn titles(&self) -> Row {
        Row::new(vec![
            Cell::new(&format!("Return ({})", self.rate_of_return.interval.name())),
            Cell::new("Volatility"),
            Cell::new("Downside Vol"),
            Cell::new("Sharpe"),
            Cell::new("Sortino"),
            Cell::new("Max Drawdown"),
            Cell::new("Beta"),
            Cell::new("Samples"),
        ])
    }

    fn row(&self) -> Row {
        Row::new(vec![
            Cell::new(&fmt_decimal(self.rate_of_return.value)),
            Cell::new(&fmt_decimal(self.volatility.value)),
            Cell::new(&fmt_decimal(self.downside_volatility.value)),
            Cell::new(&fmt_decimal(self.sharpe.value)),
            // NoDownside renders as the legacy 999 sentinel.
            Cell::new(&fmt_decimal(self.sortino.value.display_value())),
            Cell::new(&fmt_decimal(self.max_drawdown.value)),
            Cell::new(
                &self
                    .beta
                    .as_ref()
                    .map(|beta| fmt_decimal(beta.value))
                    .unwrap_or_else(|| String::from("-")),
            ),
            Cell::new(&self.sample_size.to_string()),
        ])
    }
}

impl<Interval> MultiAssetSummary<Interval>
where
    Interval: TimeInterval,
{
    /// Build a [`Table`] with one row per successfully analysed asset.
    pub fn table(&self) -> Table {
        combine(
            self.tear_sheets
                .iter()
                .map(|(name, sheet)| (name.to_string(), sheet)),
        )
    }
}

/// Combine an iterator of `(identifier, builder)` pairs into a single
/// [`Table`], with the identifier inserted as the leading cell of every row.
pub fn combine<Iter, Builder>(builders: Iter) -> Table
where
    Iter: IntoIterator<Item = (String, Builder)>,
    Builder: TableBuilder,
{
    builders
        .into_iter()
        .enumerate()
        .fold(Table::new(), |mut table, (index, (id, builder))| {
            if index == 0 {
                let mut titles = builder.titles();
                titles.insert_cell(0, Cell::new("Asset"));
                table.set_titles(titles);
            }

            let mut row = builder.row();
            row.insert_cell(0, Cell::new(&id));
            table.add_row(row);

            table
        })
}

fn fmt_decimal(value: Decimal) -> String {
    value.round_dp(4).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dispersion::Ddof,
        summary::{AssetSeries, RiskFreeRate, TearSheetGenerator},
        time::Annual252,
    };
    use rust_decimal_macros::dec;

    #[test]
    fn test_multi_asset_summary_table_smoke() {
        let generator = TearSheetGenerator::new(RiskFreeRate(dec!(4.5)), Ddof::Sample);
        let assets = vec![
            AssetSeries::new(
                "alpha",
                vec![dec!(100), dec!(120), dec!(80), dec!(110), dec!(90)],
            ),
            AssetSeries::new(
                "bravo",
                vec![dec!(50), dec!(55), dec!(45), dec!(60), dec!(52)],
            ),
        ];

        let table = generator.generate_many(&assets, Annual252).table();

        assert_eq!(table.len(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("alpha"));
        assert!(rendered.contains("bravo"));
        assert!(rendered.contains("Sharpe"));
    }

    #[test]
    fn test_no_downside_renders_legacy_sentinel() {
        let generator = TearSheetGenerator::new(RiskFreeRate(dec!(0)), Ddof::Sample);
        // Monotonically increasing prices have no downside returns.
        let sheet = generator
            .generate(&[dec!(100), dec!(105), dec!(110), dec!(120)], Annual252)
            .unwrap();

        let rendered = combine(vec![(String::from("alpha"), &sheet)]).to_string();

        assert!(rendered.contains("999"));
    }
}
