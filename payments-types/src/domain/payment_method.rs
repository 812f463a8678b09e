//! Concrete payment methods.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::DomainError;
use crate::ports::PaymentStrategy;

const CARD_VISIBLE_DIGITS: usize = 4;
const WALLET_MAX_PREFIX: usize = 10;
const COMPLETED: &str = "Payment completed successfully.";

fn required(value: &str, field: &'static str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::EmptyField(field));
    }
    Ok(value.to_string())
}

/// Replaces all but the last four characters with `*`.
///
/// Values of four characters or fewer are masked entirely.
pub fn mask_card_number(number: &str) -> String {
    let len = number.chars().count();
    if len <= CARD_VISIBLE_DIGITS {
        return "*".repeat(len);
    }
    let visible: String = number.chars().skip(len - CARD_VISIBLE_DIGITS).collect();
    format!("{}{}", "*".repeat(len - CARD_VISIBLE_DIGITS), visible)
}

/// Short prefix of a wallet address: at most ten characters and never more
/// than half of the address.
pub fn wallet_prefix(address: &str) -> String {
    let len = address.chars().count();
    address
        .chars()
        .take(WALLET_MAX_PREFIX.min(len / 2))
        .collect()
}

/// Kinds of payment offered by the console menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodKind {
    Card,
    Wallet,
    Crypto,
}

impl PaymentMethodKind {
    /// Menu entries in display order.
    pub fn all() -> &'static [PaymentMethodKind] {
        &[
            PaymentMethodKind::Card,
            PaymentMethodKind::Wallet,
            PaymentMethodKind::Crypto,
        ]
    }

    /// Number shown next to this kind in the menu.
    pub fn menu_number(&self) -> u8 {
        match self {
            PaymentMethodKind::Card => 1,
            PaymentMethodKind::Wallet => 2,
            PaymentMethodKind::Crypto => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethodKind::Card => "Bank card",
            PaymentMethodKind::Wallet => "PayPal",
            PaymentMethodKind::Crypto => "Cryptocurrency",
        }
    }

    /// Resolves a menu choice such as `"2"`.
    pub fn from_menu_choice(choice: &str) -> Result<Self, DomainError> {
        let choice = choice.trim();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.menu_number().to_string() == choice)
            .ok_or_else(|| DomainError::UnknownMethod(choice.to_string()))
    }
}

impl fmt::Display for PaymentMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payment by bank card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPayment {
    card_number: String,
    owner_name: String,
}

impl CardPayment {
    /// Spaces and dashes inside the number are dropped.
    pub fn new(card_number: &str, owner_name: &str) -> Result<Self, DomainError> {
        let card_number: String = card_number
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        Ok(Self {
            card_number: required(&card_number, "Card number")?,
            owner_name: required(owner_name, "Owner name")?,
        })
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn masked_number(&self) -> String {
        mask_card_number(&self.card_number)
    }
}

impl PaymentStrategy for CardPayment {
    fn kind(&self) -> PaymentMethodKind {
        PaymentMethodKind::Card
    }

    fn pay(&self, amount: &Money) -> Vec<String> {
        vec![
            format!("Paying {} with bank card {}.", amount, self.masked_number()),
            "Verifying cardholder details and sending the request to the bank...".to_string(),
            COMPLETED.to_string(),
        ]
    }
}

/// Payment through a PayPal account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletPayment {
    email: String,
}

impl WalletPayment {
    pub fn new(email: &str) -> Result<Self, DomainError> {
        Ok(Self {
            email: required(email, "E-mail")?,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PaymentStrategy for WalletPayment {
    fn kind(&self) -> PaymentMethodKind {
        PaymentMethodKind::Wallet
    }

    fn pay(&self, amount: &Money) -> Vec<String> {
        vec![
            format!("Paying {} via PayPal.", amount),
            format!(
                "Redirecting to the PayPal login page for user {}...",
                self.email
            ),
            "Confirming payment...".to_string(),
            COMPLETED.to_string(),
        ]
    }
}

/// Payment from a crypto wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoPayment {
    wallet_address: String,
}

impl CryptoPayment {
    pub fn new(wallet_address: &str) -> Result<Self, DomainError> {
        Ok(Self {
            wallet_address: required(wallet_address, "Wallet address")?,
        })
    }

    pub fn address_prefix(&self) -> String {
        wallet_prefix(&self.wallet_address)
    }
}

impl PaymentStrategy for CryptoPayment {
    fn kind(&self) -> PaymentMethodKind {
        PaymentMethodKind::Crypto
    }

    fn pay(&self, amount: &Money) -> Vec<String> {
        vec![
            format!("Paying {} with cryptocurrency.", amount),
            format!(
                "Creating transaction for wallet {}...",
                self.address_prefix()
            ),
            "Waiting for blockchain confirmation...".to_string(),
            COMPLETED.to_string(),
        ]
    }
}

/// The closed set of payment methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    Card(CardPayment),
    Wallet(WalletPayment),
    Crypto(CryptoPayment),
}

impl PaymentMethod {
    fn strategy(&self) -> &dyn PaymentStrategy {
        match self {
            PaymentMethod::Card(card) => card,
            PaymentMethod::Wallet(wallet) => wallet,
            PaymentMethod::Crypto(crypto) => crypto,
        }
    }
}

impl PaymentStrategy for PaymentMethod {
    fn kind(&self) -> PaymentMethodKind {
        self.strategy().kind()
    }

    fn pay(&self, amount: &Money) -> Vec<String> {
        self.strategy().pay(amount)
    }
}

impl From<CardPayment> for PaymentMethod {
    fn from(card: CardPayment) -> Self {
        PaymentMethod::Card(card)
    }
}

impl From<WalletPayment> for PaymentMethod {
    fn from(wallet: WalletPayment) -> Self {
        PaymentMethod::Wallet(wallet)
    }
}

impl From<CryptoPayment> for PaymentMethod {
    fn from(crypto: CryptoPayment) -> Self {
        PaymentMethod::Crypto(crypto)
    }
}
