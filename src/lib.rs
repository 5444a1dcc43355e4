#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]
#![allow(clippy::type_complexity)]

//! # Tearsheet
//! Risk-adjusted performance analytics for price time series.
//!
//! Feed the engine one or more chronologically ordered price series and an
//! annual risk-free rate, and it produces a [`TearSheet`](summary::TearSheet)
//! per asset: annualised return and volatility, Sharpe and Sortino ratios,
//! downside volatility, maximum drawdown, and (pairwise) Pearson correlation
//! and beta. A [`Ranking`](rank::Ranking) then orders several tear sheets and
//! selects a winner under a pluggable comparison policy.
//!
//! All computations are synchronous, pure functions over immutable `Decimal`
//! inputs. There is no I/O, no persisted state and no configuration beyond the
//! explicit parameters - data retrieval, HTTP surfaces and presentation belong
//! to the caller.
//!
//! ## Conventions
//! * Annualisation is a [`TimeInterval`](time::TimeInterval) policy
//!   (eg/ [`Annual252`](time::Annual252) for traditional markets), never an
//!   inlined constant.
//! * The variance denominator is an explicit [`Ddof`](dispersion::Ddof)
//!   choice at every call site - population and sample conventions are both
//!   supported and neither is a hidden default.

use indexmap::IndexMap;

/// All errors produced by the analytics engine.
pub mod error;

/// Sample dispersion statistics (mean, variance, standard deviation) with an
/// explicit degrees-of-freedom policy.
pub mod dispersion;

/// Provides a default Tracing logging initialiser.
pub mod logging;

/// Financial metrics and the means to calculate them over different
/// [`TimeIntervals`](time::TimeInterval).
pub mod metric;

/// Ranking of analysed assets under a pluggable comparison policy.
pub mod rank;

/// Derivation of simple returns from a validated price series.
pub mod returns;

/// Per-asset statistical summaries - the `TearSheet` and its generator.
pub mod summary;

/// TimeInterval definitions used for financial calculations.
///
/// For example, `Annual365`, `Annual252`, `Daily`, etc.
pub mod time;

/// [`IndexMap`] keyed with the faster Fnv hashing algorithm.
pub type FnvIndexMap<K, V> = IndexMap<K, V, fnv::FnvBuildHasher>;

/// Tearsheet test utilities.
pub mod test_utils {
    use rust_decimal::Decimal;

    /// Determine if two `Decimal` values are equal within the provided
    /// tolerance.
    ///
    /// Several engine outputs involve non-terminating divisions or square
    /// roots that `Decimal` truncates at 28 significant digits, so exact
    /// equality is only asserted where the arithmetic terminates.
    pub fn decimal_is_close(actual: Decimal, expected: Decimal, tolerance: Decimal) -> bool {
        (actual - expected).abs() <= tolerance
    }
}
