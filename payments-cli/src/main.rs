//! Payments CLI
//!
//! Console front end for the payment selector and the rate exchange.

mod config;
mod console;
mod pay;
mod rates;

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use exchange_rates::{CurrencyCode, RateFeed};

use crate::config::Config;
use crate::console::Console;

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payment method selector and currency exchange demo", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pay interactively with a card, PayPal or crypto
    Pay {
        /// Print the receipt as JSON
        #[arg(long)]
        json: bool,
    },
    /// Currency exchange operations
    Exchange {
        #[command(subcommand)]
        action: ExchangeCommands,
    },
}

#[derive(Subcommand)]
enum ExchangeCommands {
    /// Replay the scripted exchange scenario
    Demo,
    /// Apply rate updates in order, e.g. `USD=89.50 EUR=98.75`
    Set {
        /// Updates as CODE=RATE
        #[arg(required = true)]
        updates: Vec<String>,
        /// Currency watched by the SMS notifier
        #[arg(long, default_value = "USD")]
        watch: CurrencyCode,
    },
    /// Stream simulated rates through the exchange
    Simulate {
        /// Number of rounds; each round updates every currency
        #[arg(long, default_value_t = 5)]
        ticks: usize,
        /// Seed for the rate generator
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Maximum deviation from the base rate, in percent (at most 50)
        #[arg(long, default_value_t = 1.0)]
        variance: f64,
        /// Currency watched by the SMS notifier
        #[arg(long, default_value = "USD")]
        watch: CurrencyCode,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config;
    tracing::debug!(?config, "configuration loaded");

    let stdout = io::stdout();

    match cli.command {
        Commands::Pay { json } => {
            let output = if json { pay::Output::Json } else { pay::Output::Text };
            let mut console = Console::new(io::stdin().lock(), stdout.lock());
            pay::run(&mut console, &config.payment_currency, output)?;
        }

        Commands::Exchange { action } => {
            let mut out = stdout.lock();
            match action {
                ExchangeCommands::Demo => rates::run_demo(&mut out, &config.quote_currency)?,
                ExchangeCommands::Set { updates, watch } => {
                    let parsed: Result<Vec<_>, _> = updates
                        .iter()
                        .map(|u| exchange_rates::parse_rate_update(u))
                        .collect();
                    match parsed {
                        Ok(updates) => {
                            rates::run_updates(&mut out, &config.quote_currency, watch, updates)?
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "rejected rate update");
                            writeln!(out, "Invalid input: {}.", err)?;
                        }
                    }
                }
                ExchangeCommands::Simulate {
                    ticks,
                    seed,
                    variance,
                    watch,
                } => {
                    match RateFeed::new(RateFeed::default_base_rates(), variance, seed) {
                        Ok(feed) => rates::run_simulation(
                            &mut out,
                            &config.quote_currency,
                            watch,
                            feed,
                            ticks,
                        )?,
                        Err(err) => {
                            tracing::warn!(error = %err, "rejected feed settings");
                            writeln!(out, "Invalid input: {}.", err)?;
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
