//! # Payments Hex
//!
//! Application service layer for the payment selector.
//!
//! ## Architecture
//!
//! - `service/` - `PaymentSelector`, which delegates to whichever
//!   `PaymentStrategy` is currently selected
//!
//! Console input lives in `payments-cli`; this crate only sees validated
//! domain values.

pub mod service;


pub use service::PaymentSelector;
