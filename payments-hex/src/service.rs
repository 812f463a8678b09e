//! Payment Selector Service
//!
//! Holds the currently selected payment method and runs payments through
//! it. Contains no console logic - input is validated before it gets here.

use payments_types::{AppError, Money, PaymentMethod, PaymentReceipt, PaymentStrategy};

/// Application service that delegates payments to a swappable method.
///
/// Starts empty; a method must be selected before a payment can run.
#[derive(Debug, Default)]
pub struct PaymentSelector {
    method: Option<PaymentMethod>,
}

impl PaymentSelector {
    /// Creates a selector with no method chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected method, if any.
    pub fn method(&self) -> Option<&PaymentMethod> {
        self.method.as_ref()
    }

    /// Selects the method used for subsequent payments.
    ///
    /// Any previously selected method is replaced.
    pub fn set_method(&mut self, method: impl Into<PaymentMethod>) {
        let method = method.into();
        tracing::debug!(kind = ?method.kind(), "payment method selected");
        self.method = Some(method);
    }

    /// Runs a simulated payment with the selected method.
    #[tracing::instrument(skip(self, amount), fields(amount = %amount))]
    pub fn execute_payment(&self, amount: &Money) -> Result<PaymentReceipt, AppError> {
        let method = self
            .method
            .as_ref()
            .ok_or_else(|| AppError::InvalidState("no payment method selected".into()))?;

        let narration = method.pay(amount);
        tracing::info!(kind = ?method.kind(), "payment executed");

        Ok(PaymentReceipt {
            method: method.kind(),
            amount: amount.clone(),
            narration,
        })
    }
}
