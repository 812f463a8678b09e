//! Display board subscriber.

use crate::currency::CurrencyCode;
use crate::subscribers::RateSubscriber;
use crate::table::RateTable;

const DEFAULT_QUOTE: &str = "RUB";

/// Bank display board listing every rate it is sent.
#[derive(Debug, Clone)]
pub struct DisplayBoard {
    quote: CurrencyCode,
}

impl DisplayBoard {
    /// Creates a board showing rates against `quote`.
    pub fn new(quote: CurrencyCode) -> Self {
        Self { quote }
    }

    pub fn quote(&self) -> &CurrencyCode {
        &self.quote
    }
}

impl Default for DisplayBoard {
    fn default() -> Self {
        Self {
            quote: CurrencyCode(DEFAULT_QUOTE.to_string()),
        }
    }
}

impl RateSubscriber for DisplayBoard {
    fn name(&self) -> &str {
        "DisplayBoard"
    }

    fn update(&mut self, rates: &RateTable) -> Vec<String> {
        let mut lines = Vec::with_capacity(rates.len() + 2);
        lines.push("--- Bank display board ---".to_string());
        lines.extend(
            rates
                .iter()
                .map(|(code, rate)| format!("  {}/{}: {:.4}", code, self.quote, rate)),
        );
        lines.push("--------------------------".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_pair() {
        let mut table = RateTable::new();
        table.insert("USD".parse().unwrap(), 89.5);
        table.insert("EUR".parse().unwrap(), 98.75);

        let lines = DisplayBoard::default().update(&table);
        assert_eq!(
            lines,
            vec![
                "--- Bank display board ---",
                "  EUR/RUB: 98.7500",
                "  USD/RUB: 89.5000",
                "--------------------------",
            ]
        );
    }

    #[test]
    fn test_custom_quote_currency() {
        let mut table = RateTable::new();
        table.insert("EUR".parse().unwrap(), 1.087);

        let mut board = DisplayBoard::new("usd".parse().unwrap());
        let lines = board.update(&table);
        assert_eq!(lines[1], "  EUR/USD: 1.0870");
    }
}
