//! The currency-to-rate mapping broadcast to subscribers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

/// Full rate table, keyed by currency code.
///
/// Iteration is ordered by code so displays are deterministic. Only the
/// exchange mutates a table; subscribers see it by shared reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<CurrencyCode, f64>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rate for `currency`, if one has been set.
    pub fn get(&self, currency: &CurrencyCode) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    /// Looks a rate up by its textual code.
    pub fn get_by_code(&self, code: &str) -> Option<f64> {
        CurrencyCode::new(code).ok().and_then(|c| self.get(&c))
    }

    pub fn contains(&self, currency: &CurrencyCode) -> bool {
        self.rates.contains_key(currency)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, f64)> {
        self.rates.iter().map(|(code, rate)| (code, *rate))
    }

    /// Inserts or overwrites a rate, returning the previous one.
    pub(crate) fn insert(&mut self, currency: CurrencyCode, rate: f64) -> Option<f64> {
        self.rates.insert(currency, rate)
    }
}
