//! Domain models for the payment selector.

pub mod money;
pub mod payment_method;

pub use money::Money;
pub use payment_method::{
    CardPayment, CryptoPayment, PaymentMethod, PaymentMethodKind, WalletPayment,
    mask_card_number, wallet_prefix,
};
