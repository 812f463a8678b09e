//! SMS-style notifier that reports changes of one watched rate.

use crate::currency::CurrencyCode;
use crate::subscribers::RateSubscriber;
use crate::table::RateTable;

/// SMS-style notifier watching a single currency.
///
/// Fires whenever the watched rate differs from the last one it reported.
/// Before the first report nothing is remembered, so the first update
/// carrying the currency always fires.
#[derive(Debug, Clone)]
pub struct ThresholdNotifier {
    target: CurrencyCode,
    quote: Option<CurrencyCode>,
    last_rate: Option<f64>,
    name: String,
}

impl ThresholdNotifier {
    pub fn new(target: CurrencyCode) -> Self {
        let name = format!("ThresholdNotifier({})", target);
        Self {
            target,
            quote: None,
            last_rate: None,
            name,
        }
    }

    /// Appends the quote currency to notifications.
    pub fn with_quote(mut self, quote: CurrencyCode) -> Self {
        self.quote = Some(quote);
        self
    }

    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    /// Last rate this notifier reported, if any.
    pub fn last_rate(&self) -> Option<f64> {
        self.last_rate
    }
}

impl RateSubscriber for ThresholdNotifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, rates: &RateTable) -> Vec<String> {
        let Some(rate) = rates.get(&self.target) else {
            return Vec::new();
        };
        if self.last_rate == Some(rate) {
            return Vec::new();
        }

        self.last_rate = Some(rate);
        let quote = self
            .quote
            .as_ref()
            .map(|q| format!(" {}", q))
            .unwrap_or_default();
        vec![format!(
            "[SMS notice]: new {} rate - {:.4}{}",
            self.target, rate, quote
        )]
    }
}
