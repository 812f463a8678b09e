//! Rate subscribers.
//!
//! A subscriber receives the full rate table after every change and
//! answers with the lines it wants shown. Returning no lines means the
//! update was received but was not worth reporting.

mod decision_bot;
mod display_board;
mod threshold_notifier;

pub use decision_bot::{DecisionBot, TradeAction, TradingRule, Trigger};
pub use display_board::DisplayBoard;
pub use threshold_notifier::ThresholdNotifier;

use crate::table::RateTable;

/// Capability of receiving a rate table snapshot.
pub trait RateSubscriber {
    /// Human-readable name used in exchange announcements.
    fn name(&self) -> &str;

    /// Handles one update with the exchange's complete current table.
    fn update(&mut self, rates: &RateTable) -> Vec<String>;
}
