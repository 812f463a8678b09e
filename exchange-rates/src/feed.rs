//! Simulated rate feed.
//!
//! Produces rates that wander around fixed base values, for driving the
//! exchange without any real market connection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::currency::CurrencyCode;
use crate::error::ExchangeError;

/// Largest accepted deviation from the base rate, in percent.
///
/// Keeps every generated rate at least half its base, so rates stay positive.
pub const MAX_VARIANCE_PERCENT: f64 = 50.0;

/// Generator of fluctuating rates around fixed base values.
pub struct RateFeed {
    base_rates: Vec<(CurrencyCode, f64)>,
    max_variance_percent: f64,
    rng: StdRng,
}

impl RateFeed {
    /// Creates a feed with a fixed seed so runs are reproducible.
    ///
    /// `max_variance_percent` must lie in `0..=MAX_VARIANCE_PERCENT`.
    pub fn new(
        base_rates: Vec<(CurrencyCode, f64)>,
        max_variance_percent: f64,
        seed: u64,
    ) -> Result<Self, ExchangeError> {
        if !(0.0..=MAX_VARIANCE_PERCENT).contains(&max_variance_percent) {
            return Err(ExchangeError::InvalidVariance {
                got: max_variance_percent,
                max: MAX_VARIANCE_PERCENT,
            });
        }

        Ok(Self {
            base_rates,
            max_variance_percent,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Base rates used by the demo: USD and EUR quoted in roubles.
    pub fn default_base_rates() -> Vec<(CurrencyCode, f64)> {
        vec![
            (CurrencyCode("USD".to_string()), 89.50),
            (CurrencyCode("EUR".to_string()), 98.75),
        ]
    }

    pub fn base_rates(&self) -> &[(CurrencyCode, f64)] {
        &self.base_rates
    }

    /// Draws one new rate per currency, each within `base ± variance%`.
    pub fn tick(&mut self) -> Vec<(CurrencyCode, f64)> {
        let variance = self.max_variance_percent / 100.0;
        let mut ticks = Vec::with_capacity(self.base_rates.len());
        for (code, base) in &self.base_rates {
            let factor: f64 = if variance > 0.0 {
                self.rng.random_range(-1.0..=1.0)
            } else {
                0.0
            };
            let rate = base + base * variance * factor;
            // Keep the printed precision so repeated values compare equal.
            let rate = (rate * 10_000.0).round() / 10_000.0;
            ticks.push((code.clone(), rate));
        }
        ticks
    }
}
