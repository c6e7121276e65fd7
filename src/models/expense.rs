use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Expense {
    pub(crate) id: String,
    /// Format: "YYYY-MM-DD"
    pub(crate) date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub(crate) amount: Decimal,
    pub(crate) category: Category,
    #[serde(default)]
    pub(crate) note: String,
}

/// Raw form values, exactly as typed.
#[derive(Debug, Clone, Default)]
pub(crate) struct EntryInput {
    pub(crate) date: String,
    pub(crate) amount: String,
    pub(crate) category: Category,
    pub(crate) note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum EntryError {
    #[error("date is required")]
    MissingDate,
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("date {0} is in the future")]
    FutureDate(String),
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
}

impl Expense {
    /// Validate form input and build a new entry with a fresh id.
    /// `today` bounds the date from above.
    pub(crate) fn from_input(input: &EntryInput, today: NaiveDate) -> Result<Self, EntryError> {
        let date_str = input.date.trim();
        if date_str.is_empty() {
            return Err(EntryError::MissingDate);
        }
        let date = crate::period::parse_iso_date(date_str)
            .ok_or_else(|| EntryError::InvalidDate(date_str.to_string()))?;
        if date > today {
            return Err(EntryError::FutureDate(date_str.to_string()));
        }

        let amount = parse_amount(&input.amount)?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            amount,
            category: input.category,
            note: input.note.trim().to_string(),
        })
    }
}

/// Largest single amount accepted: $999,999,999,999.99. Sums over any
/// realistic collection stay far inside `Decimal`'s range.
pub(crate) fn max_amount() -> Decimal {
    Decimal::new(99_999_999_999_999, 2)
}

/// Parse a positive amount and round it to cents, midpoint away from zero.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal, EntryError> {
    let trimmed = s.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| EntryError::InvalidAmount(trimmed.to_string()))?;
    let rounded = round_cents(value);
    if rounded <= Decimal::ZERO {
        return Err(EntryError::NonPositiveAmount);
    }
    if rounded > max_amount() {
        return Err(EntryError::InvalidAmount(trimmed.to_string()));
    }
    Ok(rounded)
}

/// Whether a stored amount is one `parse_amount` could have produced.
pub(crate) fn amount_in_range(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount <= max_amount()
}

pub(crate) fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
