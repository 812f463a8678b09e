//! Observable Currency Exchange
//!
//! A small publish/subscribe exchange: [`RateExchange`] holds the current
//! currency-to-rate table and a list of subscribers, and pushes the whole
//! table to each of them, in registration order, every time a rate is set.
//!
//! # Example
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use exchange_rates::{CurrencyCode, DecisionBot, DisplayBoard, RateExchange};
//!
//! let mut exchange = RateExchange::new();
//! let board = Rc::new(RefCell::new(DisplayBoard::default()));
//! exchange.register(board.clone());
//! exchange.register(Rc::new(RefCell::new(DecisionBot::default())));
//!
//! let usd: CurrencyCode = "USD".parse().unwrap();
//! let broadcast = exchange.set_rate(usd, 85.0);
//! assert!(broadcast.lines().any(|l| l.contains("buy USD")));
//!
//! exchange.remove(&board);
//! assert_eq!(exchange.subscriber_count(), 1);
//! ```

mod currency;
mod error;
mod exchange;
mod feed;
pub mod subscribers;
mod table;

pub use currency::CurrencyCode;
pub use error::ExchangeError;
pub use exchange::{Broadcast, Delivery, RateExchange, SharedSubscriber};
pub use feed::{MAX_VARIANCE_PERCENT, RateFeed};
pub use subscribers::{
    DecisionBot, DisplayBoard, RateSubscriber, ThresholdNotifier, TradeAction, TradingRule,
    Trigger,
};
pub use table::RateTable;

/// Parses a rate, accepting `,` as the decimal separator.
///
/// Rates must be finite and strictly positive.
pub fn parse_rate(input: &str) -> Result<f64, ExchangeError> {
    let rate: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| ExchangeError::InvalidRate(input.to_string()))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(ExchangeError::InvalidRate(input.to_string()));
    }
    Ok(rate)
}

/// Parses a `CODE=RATE` pair such as `USD=89.50`.
pub fn parse_rate_update(input: &str) -> Result<(CurrencyCode, f64), ExchangeError> {
    let (code, rate) = input
        .split_once('=')
        .ok_or_else(|| ExchangeError::InvalidRate(input.to_string()))?;
    Ok((code.parse()?, parse_rate(rate)?))
}
