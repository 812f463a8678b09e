//! Error types for the exchange.

/// Errors raised while parsing exchange inputs or configuring the feed.
///
/// The exchange operations themselves are total.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExchangeError {
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    #[error("Invalid rate: {0:?}")]
    InvalidRate(String),

    #[error("Variance must be between 0 and {max}%, got {got}%")]
    InvalidVariance { got: f64, max: f64 },
}
