//! Error types for the payment selector.

/// Domain-level errors (invalid values supplied by the user).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid amount format: {0:?}")]
    InvalidAmountFormat(String),

    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Unknown payment method: {0:?}")]
    UnknownMethod(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),
}

/// Application-level errors surfaced to the console.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<exchange_rates::ExchangeError> for DomainError {
    fn from(err: exchange_rates::ExchangeError) -> Self {
        DomainError::InvalidCurrency(err.to_string())
    }
}
