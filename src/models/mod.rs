mod category;
mod expense;

pub(crate) use category::Category;
pub(crate) use expense::{amount_in_range, max_amount, parse_amount, round_cents, EntryError, EntryInput, Expense};
