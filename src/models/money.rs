// 💵 Money - value object
//
// Compared by value, never mutated. Arithmetic returns a new instance.

use crate::error::{ModelError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    /// Amount must be non-negative; currency is trimmed and upper-cased
    pub fn new(amount: Decimal, currency: &str) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(ModelError::range("amount", amount, "amount cannot be negative"));
        }

        let currency = currency.trim();
        if currency.is_empty() {
            return Err(ModelError::argument("currency", "currency cannot be empty"));
        }

        Ok(Money {
            // clears the sign bit of a negative zero
            amount: amount.abs(),
            currency: currency.to_uppercase(),
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Sum of two amounts in the same currency
    pub fn add(&self, other: &Money) -> Result<Money> {
        if self.currency != other.currency {
            return Err(ModelError::invalid_operation(
                "currency",
                format!("cannot add {} to {}", other.currency, self.currency),
            ));
        }

        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| ModelError::range("amount", self.amount, "sum overflows"))?;

        Ok(Money {
            amount,
            currency: self.currency.clone(),
        })
    }
}

impl fmt::Display for Money {
    /// "1,234.50 USD"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_amount(self.amount), self.currency)
    }
}

/// Two decimals, midpoint away from zero, comma thousands separators
fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let text = rounded.to_string();

    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // rescale stops short of 2 places when the mantissa is near its limit
    format!("{}.{:0<2}", grouped, frac_part)
}
