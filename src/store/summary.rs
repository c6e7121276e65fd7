use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Category, Expense};
use crate::period::month_key;

/// Entries dated in `month` (`YYYY-MM`), in collection order.
pub(crate) fn filtered_by_month<'a>(expenses: &'a [Expense], month: &str) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| month_key(&e.date).as_deref() == Some(month))
        .collect()
}

/// Total and per-category sums over a set of entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Aggregate {
    pub(crate) total: Decimal,
    /// In first-encounter order. Categories with no entries are absent.
    pub(crate) by_category: Vec<(Category, Decimal)>,
}

pub(crate) fn aggregate(filtered: &[&Expense]) -> Aggregate {
    let mut agg = Aggregate::default();
    for e in filtered {
        agg.total = saturating_add(agg.total, e.amount);
        match agg.by_category.iter_mut().find(|(c, _)| *c == e.category) {
            Some((_, sum)) => *sum = saturating_add(*sum, e.amount),
            None => agg.by_category.push((e.category, e.amount)),
        }
    }
    agg
}

fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::MAX)
}

impl Aggregate {
    pub(crate) fn amount_for(&self, category: Category) -> Decimal {
        self.by_category
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, sum)| *sum)
            .unwrap_or(Decimal::ZERO)
    }

    /// Largest first. The sort is stable, so equal sums keep the order in
    /// which their categories were first encountered.
    pub(crate) fn ranked(&self) -> Vec<(Category, Decimal)> {
        let mut ranked = self.by_category.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub(crate) fn top_category(&self) -> Option<(Category, Decimal)> {
        self.ranked().into_iter().next()
    }

    /// Share of the total in percent, one decimal place. Zero when there is
    /// nothing to divide.
    pub(crate) fn share_percent(&self, category: Category) -> Decimal {
        if self.total.is_zero() {
            return Decimal::ZERO;
        }
        // Divide first: amount <= total, so the quotient never exceeds one
        self.amount_for(category)
            .checked_div(self.total)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|pct| pct.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
            .unwrap_or(Decimal::ZERO)
    }
}

/// Distinct month keys across all entries, newest first. An empty
/// collection still offers `current_month`.
pub(crate) fn months_available(expenses: &[Expense], current_month: &str) -> Vec<String> {
    let mut months: Vec<String> = expenses.iter().filter_map(|e| month_key(&e.date)).collect();
    months.sort_unstable_by(|a, b| b.cmp(a));
    months.dedup();
    if months.is_empty() {
        months.push(current_month.to_string());
    }
    months
}

/// Everything the screen shows for one month.
#[derive(Debug, Clone, Default)]
pub(crate) struct MonthSummary {
    pub(crate) month: String,
    pub(crate) entries: Vec<Expense>,
    pub(crate) aggregate: Aggregate,
}

impl MonthSummary {
    pub(crate) fn compute(expenses: &[Expense], month: &str) -> Self {
        let filtered = filtered_by_month(expenses, month);
        let aggregate = aggregate(&filtered);
        Self {
            month: month.to_string(),
            entries: filtered.into_iter().cloned().collect(),
            aggregate,
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.entries.len()
    }
}
