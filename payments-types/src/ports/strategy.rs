//! Payment strategy port.
//!
//! Every payment method implements this trait. The selector in the
//! application layer only ever talks to a method through it.

use crate::domain::{Money, PaymentMethodKind};

/// A way of paying.
///
/// `pay` is pure narration of a simulated payment: it never fails for a
/// valid amount and never reveals full card numbers or wallet addresses.
pub trait PaymentStrategy {
    /// Which kind of method this is.
    fn kind(&self) -> PaymentMethodKind;

    /// Describes, line by line, the steps of paying `amount`.
    fn pay(&self, amount: &Money) -> Vec<String>;
}
