mod persist;
mod summary;

use chrono::NaiveDate;

use crate::models::{EntryError, EntryInput, Expense};
use crate::storage::KeyValueStore;

pub(crate) use summary::MonthSummary;

/// The expense collection, newest insertion first, mirrored to storage after
/// every change.
pub(crate) struct ExpenseStore {
    expenses: Vec<Expense>,
    storage: Box<dyn KeyValueStore>,
}

impl ExpenseStore {
    pub(crate) fn open(storage: Box<dyn KeyValueStore>) -> Self {
        let expenses = persist::load(storage.as_ref());
        Self { expenses, storage }
    }

    pub(crate) fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Validate and prepend a new entry. Invalid input leaves the collection
    /// untouched.
    pub(crate) fn add(&mut self, input: &EntryInput) -> Result<&Expense, EntryError> {
        self.add_as_of(input, crate::period::today())
    }

    pub(crate) fn add_as_of(
        &mut self,
        input: &EntryInput,
        today: NaiveDate,
    ) -> Result<&Expense, EntryError> {
        let expense = Expense::from_input(input, today)?;
        tracing::info!(
            id = %expense.id,
            date = %expense.date,
            amount = %expense.amount,
            category = %expense.category,
            "added expense"
        );
        self.expenses.insert(0, expense);
        persist::save(self.storage.as_mut(), &self.expenses);
        Ok(&self.expenses[0])
    }

    /// Returns whether anything was removed.
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            tracing::debug!(id, "remove: no such expense");
            return false;
        }
        tracing::info!(id, "removed expense");
        persist::save(self.storage.as_mut(), &self.expenses);
        true
    }

    pub(crate) fn months_available(&self, current_month: &str) -> Vec<String> {
        summary::months_available(&self.expenses, current_month)
    }

    pub(crate) fn summary(&self, month: &str) -> MonthSummary {
        MonthSummary::compute(&self.expenses, month)
    }
}

#[cfg(test)]
mod tests;
