//! Configuration from command-line flags with environment fallbacks.

use clap::Args;

use payments_types::CurrencyCode;

/// Console configuration.
///
/// Each setting is read from its flag, then its environment variable (a
/// `.env` file is loaded first), then the default.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct Config {
    /// Currency payments are made in
    #[arg(
        long = "currency",
        global = true,
        env = "PAYMENTS_CURRENCY",
        default_value = "RUB"
    )]
    pub payment_currency: CurrencyCode,

    /// Currency rates are quoted in
    #[arg(
        long,
        global = true,
        env = "PAYMENTS_QUOTE_CURRENCY",
        default_value = "RUB"
    )]
    pub quote_currency: CurrencyCode,
}
