/// Pearson correlation and beta between two aligned observation series.
pub mod correlation;

/// Maximum peak-to-trough drawdown of a price series.
pub mod drawdown;

/// Rate of return over a [`TimeInterval`](crate::time::TimeInterval)
/// (linear time scaling).
pub mod rate_of_return;

/// Sharpe Ratio over a [`TimeInterval`](crate::time::TimeInterval).
pub mod sharpe;

/// Sortino Ratio over a [`TimeInterval`](crate::time::TimeInterval).
pub mod sortino;

/// Volatility over a [`TimeInterval`](crate::time::TimeInterval)
/// (square-root time scaling).
pub mod volatility;
