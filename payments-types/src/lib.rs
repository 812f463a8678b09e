//! # Payments Types
//!
//! Domain types and port traits for the payment selector.
//! This crate has no IO at all - only data structures, validation rules
//! and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Money and the concrete payment methods
//! - `ports/` - The `PaymentStrategy` trait every method implements
//! - `dto/` - Receipt handed back to the console
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CardPayment, CryptoPayment, Money, PaymentMethod, PaymentMethodKind, WalletPayment,
};
pub use dto::PaymentReceipt;
pub use error::{AppError, DomainError};
pub use exchange_rates::CurrencyCode;
pub use ports::PaymentStrategy;
