//! Interactive `pay` command.
//!
//! Collects an amount and a payment method from the console, hands them to
//! the `PaymentSelector`, and prints what it narrates.

use std::io::{BufRead, Write};

use payments_hex::PaymentSelector;
use payments_types::{
    AppError, CardPayment, CryptoPayment, CurrencyCode, Money, PaymentMethod,
    PaymentMethodKind, WalletPayment,
};

use crate::console::{Console, ConsoleError};

/// How the receipt is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

fn user_message(err: &AppError) -> String {
    match err {
        AppError::InvalidState(msg) => format!("Error: {}.", msg),
        AppError::InvalidInput(msg) => format!("{}.", msg),
    }
}

fn read_amount<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    currency: &CurrencyCode,
) -> Result<Money, ConsoleError> {
    let input = console.prompt("Enter amount to pay: ")?;
    Ok(Money::parse(&input, currency.clone())?)
}

fn read_method<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<PaymentMethod, ConsoleError> {
    console.say("")?;
    console.say("Choose a payment method:")?;
    for kind in PaymentMethodKind::all() {
        console.say(format!("{} - {}", kind.menu_number(), kind.label()))?;
    }

    let choice = console.prompt("Your choice: ")?;
    let method: PaymentMethod = match PaymentMethodKind::from_menu_choice(&choice)? {
        PaymentMethodKind::Card => {
            let number = console.prompt("Enter card number: ")?;
            let owner = console.prompt("Enter cardholder name: ")?;
            CardPayment::new(&number, &owner)?.into()
        }
        PaymentMethodKind::Wallet => {
            let email = console.prompt("Enter your PayPal e-mail: ")?;
            WalletPayment::new(&email)?.into()
        }
        PaymentMethodKind::Crypto => {
            let address = console.prompt("Enter your crypto wallet address: ")?;
            CryptoPayment::new(&address)?.into()
        }
    };
    Ok(method)
}

fn pay<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    currency: &CurrencyCode,
    output: Output,
) -> Result<(), ConsoleError> {
    let amount = read_amount(console, currency)?;
    let method = read_method(console)?;

    let mut selector = PaymentSelector::new();
    selector.set_method(method);
    let receipt = selector.execute_payment(&amount)?;

    match output {
        Output::Text => console.say_all(receipt.framed())?,
        Output::Json => {
            let json = serde_json::to_string_pretty(&receipt)
                .map_err(|e| ConsoleError::Io(e.into()))?;
            console.say(json)?;
        }
    }
    Ok(())
}

/// Runs one interactive payment.
///
/// Invalid input ends the run with a printed message rather than an error;
/// only console I/O failures are returned.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    currency: &CurrencyCode,
    output: Output,
) -> std::io::Result<()> {
    match pay(console, currency, output) {
        Ok(()) => Ok(()),
        Err(ConsoleError::App(err)) => {
            tracing::warn!(error = %err, "payment aborted");
            console.say(user_message(&err))
        }
        Err(ConsoleError::Io(err)) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(input: &str, output: Output) -> String {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        run(&mut console, &"RUB".parse().unwrap(), output).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_card_payment_flow() {
        let out = run_with("1500,5\n1\n4111 1111 1111 1111\nIvan Petrov\n", Output::Text);
        assert!(out.contains("1 - Bank card"));
        assert!(out.contains("Paying 1500.50 RUB with bank card ************1111."));
        assert!(out.contains("Payment completed successfully."));
        assert!(!out.contains("4111111111111111"));
    }

    #[test]
    fn test_paypal_flow() {
        let out = run_with("20\n2\nuser@example.com\n", Output::Text);
        assert!(out.contains("Paying 20.00 RUB via PayPal."));
        assert!(out.contains("user@example.com"));
    }

    #[test]
    fn test_crypto_flow_as_json() {
        let out = run_with("3\n3\n0x52908400098527886E0F7030069857D2E4169EE7\n", Output::Json);
        assert!(out.contains("\"method\": \"crypto\""));
        assert!(out.contains("0x52908400..."));
        assert!(!out.contains("0x52908400098527886E0F7030069857D2E4169EE7"));
    }

    #[test]
    fn test_invalid_amount_aborts_before_menu() {
        let out = run_with("abc\n", Output::Text);
        assert!(out.contains("Invalid amount format"));
        assert!(!out.contains("Choose a payment method"));
    }

    #[test]
    fn test_non_positive_amount_aborts() {
        let out = run_with("-5\n", Output::Text);
        assert!(out.contains("Amount must be positive"));
    }

    #[test]
    fn test_unknown_choice_aborts() {
        let out = run_with("10\n7\n", Output::Text);
        assert!(out.contains("Unknown payment method: \"7\""));
        assert!(!out.contains("Payment completed"));
    }
}
