//! Trading robot subscriber and the rules it evaluates.

use std::fmt;

use crate::currency::CurrencyCode;
use crate::subscribers::RateSubscriber;
use crate::table::RateTable;

/// Condition on a single rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Rate strictly below the threshold.
    Below(f64),
    /// Rate strictly above the threshold.
    Above(f64),
}

impl Trigger {
    fn matches(&self, rate: f64) -> bool {
        match *self {
            Trigger::Below(threshold) => rate < threshold,
            Trigger::Above(threshold) => rate > threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    Buy,
    Sell,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => f.write_str("buy"),
            TradeAction::Sell => f.write_str("sell"),
        }
    }
}

/// "When `currency` matches `trigger`, do `action`."
#[derive(Debug, Clone, PartialEq)]
pub struct TradingRule {
    pub currency: CurrencyCode,
    pub trigger: Trigger,
    pub action: TradeAction,
}

impl TradingRule {
    pub fn new(currency: CurrencyCode, trigger: Trigger, action: TradeAction) -> Self {
        Self {
            currency,
            trigger,
            action,
        }
    }

    fn decide(&self, rates: &RateTable) -> Option<String> {
        let rate = rates.get(&self.currency)?;
        self.trigger
            .matches(rate)
            .then(|| format!("  -> Decision: {} {}.", self.action, self.currency))
    }
}

/// Trading robot evaluating fixed rules on every update.
///
/// The default rule set buys USD below 90 and sells EUR above 100.
#[derive(Debug, Clone)]
pub struct DecisionBot {
    rules: Vec<TradingRule>,
}

impl DecisionBot {
    pub fn with_rules(rules: Vec<TradingRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[TradingRule] {
        &self.rules
    }
}

impl Default for DecisionBot {
    fn default() -> Self {
        Self::with_rules(vec![
            TradingRule::new(
                CurrencyCode("USD".to_string()),
                Trigger::Below(90.0),
                TradeAction::Buy,
            ),
            TradingRule::new(
                CurrencyCode("EUR".to_string()),
                Trigger::Above(100.0),
                TradeAction::Sell,
            ),
        ])
    }
}

impl RateSubscriber for DecisionBot {
    fn name(&self) -> &str {
        "DecisionBot"
    }

    fn update(&mut self, rates: &RateTable) -> Vec<String> {
        let mut lines = vec!["[Trading bot]: received new data...".to_string()];
        lines.extend(self.rules.iter().filter_map(|rule| rule.decide(rates)));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, f64)]) -> RateTable {
        let mut table = RateTable::new();
        for (code, rate) in pairs {
            table.insert(code.parse().unwrap(), *rate);
        }
        table
    }

    fn decisions(bot: &mut DecisionBot, rates: &RateTable) -> Vec<String> {
        bot.update(rates).into_iter().skip(1).collect()
    }

    #[test]
    fn test_buys_cheap_usd() {
        let mut bot = DecisionBot::default();
        assert_eq!(
            decisions(&mut bot, &table(&[("USD", 85.0)])),
            vec!["  -> Decision: buy USD."]
        );
    }

    #[test]
    fn test_sells_expensive_eur() {
        let mut bot = DecisionBot::default();
        assert_eq!(
            decisions(&mut bot, &table(&[("EUR", 105.0)])),
            vec!["  -> Decision: sell EUR."]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut bot = DecisionBot::default();
        assert!(decisions(&mut bot, &table(&[("USD", 90.0), ("EUR", 100.0)])).is_empty());
    }

    #[test]
    fn test_both_rules_fire_together() {
        let mut bot = DecisionBot::default();
        let lines = bot.update(&table(&[("USD", 89.55), ("EUR", 101.2)]));
        assert_eq!(
            lines,
            vec![
                "[Trading bot]: received new data...",
                "  -> Decision: buy USD.",
                "  -> Decision: sell EUR.",
            ]
        );
    }

    #[test]
    fn test_custom_rules() {
        let mut bot = DecisionBot::with_rules(vec![TradingRule::new(
            "GBP".parse().unwrap(),
            Trigger::Above(110.0),
            TradeAction::Buy,
        )]);
        assert_eq!(
            decisions(&mut bot, &table(&[("GBP", 115.0)])),
            vec!["  -> Decision: buy GBP."]
        );
        assert_eq!(bot.rules().len(), 1);
    }
}
