//! The observable exchange.
//!
//! `RateExchange` owns the rate table and the subscriber list. Every call
//! to [`RateExchange::set_rate`] is followed by a full broadcast of the
//! table to all subscribers in registration order.

use std::cell::RefCell;
use std::rc::Rc;

use crate::currency::CurrencyCode;
use crate::subscribers::RateSubscriber;
use crate::table::RateTable;

/// Shared handle to a subscriber.
///
/// Membership is decided by identity: two handles are the same subscriber
/// only when they point at the same allocation.
pub type SharedSubscriber = Rc<RefCell<dyn RateSubscriber>>;

/// Output produced by one subscriber for one update.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    /// Name of the subscriber that received the update.
    pub subscriber: String,
    /// Lines it emitted; empty when it chose to stay silent.
    pub lines: Vec<String>,
}

/// Everything a notification round produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Broadcast {
    /// Lines emitted by the exchange itself.
    pub announcements: Vec<String>,
    /// One entry per registered subscriber, in delivery order.
    pub deliveries: Vec<Delivery>,
}

impl Broadcast {
    /// All lines in the order they were produced.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.announcements.iter().map(String::as_str).chain(
            self.deliveries
                .iter()
                .flat_map(|d| d.lines.iter().map(String::as_str)),
        )
    }

    /// Number of deliveries that went to subscribers named `subscriber`.
    ///
    /// Counts by display name, not identity: distinct subscribers sharing a
    /// name (two `DisplayBoard`s, say) are counted together. Use the order of
    /// [`Broadcast::deliveries`], which matches registration order, to tell
    /// them apart.
    pub fn deliveries_to(&self, subscriber: &str) -> usize {
        self.deliveries
            .iter()
            .filter(|d| d.subscriber == subscriber)
            .count()
    }
}

fn address<S: RateSubscriber + ?Sized>(subscriber: &Rc<RefCell<S>>) -> *const () {
    Rc::as_ptr(subscriber) as *const ()
}

/// Currency exchange publishing rate changes to its subscribers.
#[derive(Default)]
pub struct RateExchange {
    subscribers: Vec<SharedSubscriber>,
    rates: RateTable,
}

impl RateExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns true if this exact subscriber is registered.
    pub fn is_registered<S: RateSubscriber + ?Sized>(&self, subscriber: &Rc<RefCell<S>>) -> bool {
        self.position(subscriber).is_some()
    }

    fn position<S: RateSubscriber + ?Sized>(&self, subscriber: &Rc<RefCell<S>>) -> Option<usize> {
        let target = address(subscriber);
        self.subscribers.iter().position(|s| address(s) == target)
    }

    /// Adds a subscriber at the end of the list.
    ///
    /// Re-registering a subscriber that is already present is a no-op and
    /// returns `None`; otherwise the exchange's announcement is returned.
    pub fn register(&mut self, subscriber: SharedSubscriber) -> Option<String> {
        if self.is_registered(&subscriber) {
            tracing::debug!(
                subscriber = subscriber.borrow().name(),
                "subscriber already registered"
            );
            return None;
        }

        let name = subscriber.borrow().name().to_string();
        tracing::debug!(subscriber = %name, "subscriber registered");
        self.subscribers.push(subscriber);
        Some(format!("[Exchange]: subscriber {} added.", name))
    }

    /// Removes a subscriber; removing an absent one is a no-op.
    pub fn remove<S: RateSubscriber + ?Sized>(
        &mut self,
        subscriber: &Rc<RefCell<S>>,
    ) -> Option<String> {
        let index = self.position(subscriber)?;
        let removed = self.subscribers.remove(index);
        let name = removed.borrow().name().to_string();
        tracing::debug!(subscriber = %name, "subscriber removed");
        Some(format!("[Exchange]: subscriber {} removed.", name))
    }

    /// Delivers the full rate table to every subscriber.
    ///
    /// Subscribers are updated one after another in registration order.
    pub fn notify(&self) -> Broadcast {
        let deliveries = self
            .subscribers
            .iter()
            .map(|subscriber| {
                let mut subscriber = subscriber.borrow_mut();
                let lines = subscriber.update(&self.rates);
                Delivery {
                    subscriber: subscriber.name().to_string(),
                    lines,
                }
            })
            .collect();

        Broadcast {
            announcements: vec!["[Exchange]: notifying all subscribers...".to_string()],
            deliveries,
        }
    }

    /// Sets the rate for `currency` and broadcasts the new table.
    ///
    /// The broadcast happens even when the rate did not change.
    #[tracing::instrument(skip(self, currency), fields(currency = %currency))]
    pub fn set_rate(&mut self, currency: CurrencyCode, rate: f64) -> Broadcast {
        let announcement = format!("[Exchange]: rate {} changed to {:.4}", currency, rate);
        let previous = self.rates.insert(currency, rate);
        tracing::debug!(?previous, "rate updated");

        let mut broadcast = self.notify();
        broadcast.announcements.insert(0, announcement);
        broadcast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscribers::{DecisionBot, DisplayBoard, ThresholdNotifier};

    /// Subscriber that records every table it receives.
    struct Recorder {
        name: String,
        seen: Vec<RateTable>,
    }

    impl Recorder {
        fn shared(name: &str) -> Rc<RefCell<Recorder>> {
            Rc::new(RefCell::new(Recorder {
                name: name.to_string(),
                seen: Vec::new(),
            }))
        }
    }

    impl RateSubscriber for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn update(&mut self, rates: &RateTable) -> Vec<String> {
            self.seen.push(rates.clone());
            Vec::new()
        }
    }

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut exchange = RateExchange::new();
        let recorder = Recorder::shared("recorder");

        assert!(exchange.register(recorder.clone()).is_some());
        assert!(exchange.register(recorder.clone()).is_none());
        assert_eq!(exchange.subscriber_count(), 1);

        let broadcast = exchange.notify();
        assert_eq!(broadcast.deliveries_to("recorder"), 1);
        assert_eq!(recorder.borrow().seen.len(), 1);
    }

    #[test]
    fn test_identity_not_equality_decides_membership() {
        let mut exchange = RateExchange::new();
        let first = Recorder::shared("twin");
        let second = Recorder::shared("twin");

        exchange.register(first.clone());
        exchange.register(second.clone());
        assert_eq!(exchange.subscriber_count(), 2);

        exchange.remove(&first);
        assert!(!exchange.is_registered(&first));
        assert!(exchange.is_registered(&second));
    }

    #[test]
    fn test_removed_subscriber_gets_no_updates() {
        let mut exchange = RateExchange::new();
        let recorder = Recorder::shared("recorder");
        exchange.register(recorder.clone());

        exchange.set_rate(code("USD"), 89.5);
        assert_eq!(
            exchange.remove(&recorder).as_deref(),
            Some("[Exchange]: subscriber recorder removed.")
        );

        let broadcast = exchange.set_rate(code("USD"), 90.0);
        assert_eq!(broadcast.deliveries_to("recorder"), 0);
        assert_eq!(recorder.borrow().seen.len(), 1);
    }

    #[test]
    fn test_removing_absent_subscriber_is_noop() {
        let mut exchange = RateExchange::new();
        let recorder = Recorder::shared("recorder");
        assert!(exchange.remove(&recorder).is_none());
        assert_eq!(exchange.subscriber_count(), 0);
    }

    #[test]
    fn test_deliveries_follow_registration_order() {
        let mut exchange = RateExchange::new();
        for name in ["a", "b", "c"] {
            exchange.register(Recorder::shared(name));
        }

        let broadcast = exchange.set_rate(code("EUR"), 98.75);
        let order: Vec<&str> = broadcast
            .deliveries
            .iter()
            .map(|d| d.subscriber.as_str())
            .collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_subscribers_see_full_table() {
        let mut exchange = RateExchange::new();
        let recorder = Recorder::shared("recorder");
        exchange.register(recorder.clone());

        exchange.set_rate(code("USD"), 89.5);
        exchange.set_rate(code("EUR"), 98.75);

        let recorder = recorder.borrow();
        let last = recorder.seen.last().unwrap();
        assert_eq!(last, exchange.rates());
        assert_eq!(last.get(&code("USD")), Some(89.5));
        assert_eq!(last.get(&code("EUR")), Some(98.75));
    }

    #[test]
    fn test_unchanged_rate_still_broadcasts() {
        let mut exchange = RateExchange::new();
        let board = Rc::new(RefCell::new(DisplayBoard::default()));
        let sms = Rc::new(RefCell::new(ThresholdNotifier::new(code("USD"))));
        exchange.register(board.clone());
        exchange.register(sms.clone());

        let first = exchange.set_rate(code("USD"), 89.50);
        let second = exchange.set_rate(code("USD"), 89.50);

        for broadcast in [&first, &second] {
            assert_eq!(broadcast.deliveries_to("DisplayBoard"), 1);
            assert!(broadcast.lines().any(|l| l.contains("USD/RUB: 89.5000")));
        }

        let sms_lines = |b: &Broadcast| {
            b.deliveries
                .iter()
                .find(|d| d.subscriber == "ThresholdNotifier(USD)")
                .map(|d| d.lines.len())
                .unwrap()
        };
        assert_eq!(sms_lines(&first), 1);
        assert_eq!(sms_lines(&second), 0);
    }

    #[test]
    fn test_decision_bot_scenario() {
        let mut exchange = RateExchange::new();
        exchange.register(Rc::new(RefCell::new(DecisionBot::default())));

        let usd = exchange.set_rate(code("USD"), 85.0);
        assert!(usd.lines().any(|l| l.contains("buy USD")));

        let eur = exchange.set_rate(code("EUR"), 105.0);
        let decisions: Vec<&str> = eur.lines().filter(|l| l.contains("Decision")).collect();
        assert_eq!(decisions.len(), 2);
        assert!(decisions.iter().any(|l| l.contains("sell EUR")));
    }

    #[test]
    fn test_set_rate_announcements() {
        let mut exchange = RateExchange::new();
        let broadcast = exchange.set_rate(code("USD"), 89.5);
        assert_eq!(
            broadcast.announcements,
            vec![
                "[Exchange]: rate USD changed to 89.5000".to_string(),
                "[Exchange]: notifying all subscribers...".to_string(),
            ]
        );
        assert!(broadcast.deliveries.is_empty());
    }

    #[test]
    fn test_deliveries_to_counts_same_named_subscribers_together() {
        let mut exchange = RateExchange::new();
        let lobby = Rc::new(RefCell::new(DisplayBoard::default()));
        let street = Rc::new(RefCell::new(DisplayBoard::new(code("USD"))));
        exchange.register(lobby.clone());
        exchange.register(street.clone());

        let broadcast = exchange.set_rate(code("EUR"), 98.75);
        assert_eq!(broadcast.deliveries_to("DisplayBoard"), 2);
        assert_eq!(broadcast.deliveries[0].lines[1], "  EUR/RUB: 98.7500");
        assert_eq!(broadcast.deliveries[1].lines[1], "  EUR/USD: 98.7500");

        exchange.remove(&lobby);
        let broadcast = exchange.set_rate(code("EUR"), 99.0);
        assert_eq!(broadcast.deliveries_to("DisplayBoard"), 1);
        assert_eq!(broadcast.deliveries[0].lines[1], "  EUR/USD: 99.0000");
    }
}
