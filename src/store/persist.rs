use crate::models::{amount_in_range, round_cents, Expense};
use crate::storage::KeyValueStore;

/// The single slot holding the serialized collection.
pub(crate) const STORAGE_KEY: &str = "spendtui.expenses";

/// Read the collection from its slot. Absent, unreadable or malformed data
/// all come back as an empty collection.
pub(crate) fn load(storage: &dyn KeyValueStore) -> Vec<Expense> {
    let raw = match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read saved expenses; starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Expense>>(&raw) {
        Ok(mut expenses) => {
            for e in &mut expenses {
                e.amount = round_cents(e.amount);
            }
            let before = expenses.len();
            expenses.retain(|e| amount_in_range(e.amount));
            if expenses.len() < before {
                tracing::warn!(
                    dropped = before - expenses.len(),
                    "saved expenses with out-of-range amounts; discarding"
                );
            }
            tracing::info!(count = expenses.len(), "loaded expenses");
            expenses
        }
        Err(e) => {
            tracing::warn!(error = %e, "saved expenses are corrupt; discarding");
            Vec::new()
        }
    }
}

/// Write the full collection to its slot. Failures are logged and dropped.
pub(crate) fn save(storage: &mut dyn KeyValueStore, expenses: &[Expense]) {
    let json = match serde_json::to_string(expenses) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "could not serialize expenses");
            return;
        }
    };
    if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
        tracing::warn!(error = %e, "could not save expenses; changes kept in memory only");
    }
}
