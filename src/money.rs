//! Amounts
//!
//! Every monetary value in the inventory is a [`Decimal`] held at two decimal places. Amounts
//! are written to disk as plain numbers and only gain a currency symbol when displayed.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

/// Currency used for display.
pub const CURRENCY: &Currency = iso::USD;

/// Number of decimal places kept for every amount.
pub const SCALE: u32 = 2;

const SYMBOL: char = '$';

/// Largest amount accepted. Any four accepted amounts can be combined into a profit without
/// overflowing.
// 1_000_000_000_000 with scale 0; `Decimal::new` is not `const`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Errors parsing a monetary amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Nothing was entered.
    #[error("amount is empty")]
    Empty,

    /// The text is not a number.
    #[error("'{0}' is not a valid amount")]
    Invalid(String),

    /// Amounts entered for an item may not be negative.
    #[error("'{0}' is negative")]
    Negative(String),

    /// The amount is above [`MAX_AMOUNT`].
    #[error("'{0}' is too large")]
    TooLarge(String),
}

/// Parse an amount as entered by a user or found in an inventory file.
///
/// Accepts bare numbers (`12.34`), currency-prefixed values (`$12.34`) and thousands
/// separators (`$1,204.50`). The result is rounded half away from zero to two places.
///
/// # Errors
///
/// Returns an [`AmountError`] if the input is empty, not numeric, negative, or larger than
/// [`MAX_AMOUNT`].
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };

    let unsigned = unsigned.strip_prefix(SYMBOL).unwrap_or(unsigned);
    let digits: String = unsigned.chars().filter(|ch| *ch != ',').collect();

    let amount =
        Decimal::from_str(&digits).map_err(|_err| AmountError::Invalid(input.to_string()))?;

    if !amount.is_zero() && (negative || amount.is_sign_negative()) {
        return Err(AmountError::Negative(input.to_string()));
    }

    if amount > MAX_AMOUNT {
        return Err(AmountError::TooLarge(input.to_string()));
    }

    // `-0` parses as a signed zero.
    Ok(round(amount.abs()))
}

/// Round an amount to the stored precision.
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Canonical on-disk form: a plain number with two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round(amount))
}

/// Human readable form with the currency symbol, e.g. `$1,204.50`.
pub fn display_amount(amount: Decimal) -> String {
    round(amount)
        .checked_mul(Decimal::new(100, 0))
        .and_then(|minor| minor.to_i64())
        .map_or_else(
            || format!("{SYMBOL}{amount:.2}"),
            |minor| Money::from_minor(minor, CURRENCY).to_string(),
        )
}
