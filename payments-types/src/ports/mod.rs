//! Port traits (interfaces for adapters).

mod strategy;

pub use strategy::PaymentStrategy;
