use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents all errors the analytics engine can produce.
///
/// Each asset's computation is independent - an `AnalyticsError` raised for
/// one asset never aborts or corrupts the computation of its siblings (see
/// [`MultiAssetSummary`](crate::summary::MultiAssetSummary)).
///
/// Degenerate-but-defined inputs (zero volatility, no downside returns, zero
/// benchmark variance) are NOT errors - they resolve to the documented
/// sentinel or absent values on the metrics themselves.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, Error)]
pub enum AnalyticsError {
    /// A non-positive price was encountered.
    ///
    /// Prices are strictly positive in this domain, and dividing by zero or a
    /// negative price would silently poison every downstream metric, so the
    /// engine fails fast instead. `Decimal` admits no NaN or infinity, ruling
    /// out the non-finite input class at the type level.
    #[error("invalid input: price {price} at index {index} is not strictly positive")]
    InvalidInput { index: usize, price: Decimal },

    /// Fewer observations than the computation requires.
    ///
    /// For example, a single price point has no return.
    #[error("insufficient data: required {required} observations, found {found}")]
    InsufficientData { required: usize, found: usize },

    /// Two series of unequal length were passed to a pairwise computation.
    ///
    /// Alignment is the caller's responsibility. Fatal to the pairwise
    /// computation only - single-asset metrics are unaffected.
    #[error("length mismatch: series of {left} and {right} observations cannot be paired")]
    LengthMismatch { left: usize, right: usize },

    /// The variance estimator is statistically underdetermined
    /// (observations - ddof <= 0).
    #[error("degenerate sample: {count} observations cannot support ddof={ddof} variance")]
    DegenerateSample { count: usize, ddof: usize },
}
