//! Integer-cent money and its presentation boundary.
//!
//! Every amount in the crate is a whole number of cents; decimal currency
//! strings exist only at the edges, where user input is parsed and summaries
//! are rendered.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A signed amount of money in integer cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub fn abs(self) -> Cents {
        Cents(self.0.abs())
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Floors the amount at zero, for display-side "remaining" figures.
    pub fn clamp_non_negative(self) -> Cents {
        Cents(self.0.max(0))
    }
}

impl Add for Cents {
    type Output = Cents;
    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl Sub for Cents {
    type Output = Cents;
    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0 - rhs.0)
    }
}

impl Neg for Cents {
    type Output = Cents;
    fn neg(self) -> Cents {
        Cents(-self.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Cents {
    fn sub_assign(&mut self, rhs: Cents) {
        self.0 -= rhs.0;
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cents(*self))
    }
}

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses a 3-letter currency code, normalizing to upper case.
    pub fn parse(field: &str, code: &str) -> Result<Self, ValidationError> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::new(
                field,
                format!("expected a 3-letter currency code, got {code:?}"),
            ));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self("MXN".into())
    }
}

/// Converts a decimal currency string (e.g. `"25.50"`) into cents, rounding
/// to the nearest cent. Raw decimals never enter the record model.
pub fn parse_decimal_cents(field: &str, input: &str) -> Result<Cents, ValidationError> {
    let value = Decimal::from_str(input.trim())
        .map_err(|_| ValidationError::new(field, format!("not a decimal amount: {input:?}")))?;
    let cents = (value * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    cents
        .to_i64()
        .map(Cents)
        .ok_or_else(|| ValidationError::new(field, format!("amount out of range: {input:?}")))
}

/// Renders cents as a plain two-decimal string, e.g. `-30000` → `"-300.00"`.
pub fn format_cents(amount: Cents) -> String {
    let sign = if amount.0 < 0 { "-" } else { "" };
    let abs = amount.0.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

pub fn symbol_for(code: &CurrencyCode) -> &'static str {
    match code.as_str() {
        "MXN" | "USD" | "CAD" | "AUD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => "",
    }
}

/// Renders an amount with its currency symbol for user-facing text.
pub fn format_currency(amount: Cents, code: &CurrencyCode) -> String {
    let symbol = symbol_for(code);
    if symbol.is_empty() {
        format!("{} {}", format_cents(amount), code.as_str())
    } else if amount.is_negative() {
        format!("-{}{}", symbol, format_cents(amount.abs()))
    } else {
        format!("{}{}", symbol, format_cents(amount))
    }
}
