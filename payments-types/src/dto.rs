//! Data Transfer Objects for the console boundary.

use serde::Serialize;

use crate::domain::{Money, PaymentMethodKind};

/// Outcome of a simulated payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    /// Method that carried out the payment
    pub method: PaymentMethodKind,
    /// Amount paid
    pub amount: Money,
    /// Progress narration, in order
    pub narration: Vec<String>,
}

impl PaymentReceipt {
    /// Narration framed the way it is printed on the console.
    pub fn framed(&self) -> Vec<String> {
        let separator = "-".repeat(30);
        let mut lines = Vec::with_capacity(self.narration.len() + 2);
        lines.push(separator.clone());
        lines.extend(self.narration.iter().cloned());
        lines.push(separator);
        lines
    }
}
