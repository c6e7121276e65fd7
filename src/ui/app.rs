use chrono::{Datelike, Days, NaiveDate};

use crate::period::{parse_iso_date, shift_month, start_of_month_iso};

use crate::models::{EntryInput, Expense};
use crate::store::{ExpenseStore, MonthSummary};
use crate::ui::util::{clamp_cursor, scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Form,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Form => write!(f, "ENTRY"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Date,
    Amount,
    Category,
    Note,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Date, Self::Amount, Self::Category, Self::Note]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Note => "Note",
        }
    }

    pub(crate) fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        if idx == 0 {
            all[all.len() - 1]
        } else {
            all[idx - 1]
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) today: NaiveDate,

    // Month filter
    pub(crate) filter_month: String,
    pub(crate) months_available: Vec<String>,

    // Derived for `filter_month`, rebuilt by `refresh`
    pub(crate) summary: MonthSummary,
    pub(crate) total_entries: usize,

    // Entry form
    pub(crate) form: EntryInput,
    pub(crate) form_field: FormField,

    // Entries table
    pub(crate) entry_index: usize,
    pub(crate) entry_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            today,

            filter_month: today.format("%Y-%m").to_string(),
            months_available: Vec::new(),

            summary: MonthSummary::default(),
            total_entries: 0,

            form: EntryInput {
                date: today.format("%Y-%m-%d").to_string(),
                ..EntryInput::default()
            },
            form_field: FormField::Date,

            entry_index: 0,
            entry_scroll: 0,

            visible_rows: 20,
        }
    }

    /// Follow the wall clock across midnight. The filter and the typed
    /// form date stay as they are; only the bound and the selector move.
    pub(crate) fn set_today(&mut self, today: NaiveDate, store: &ExpenseStore) {
        if today == self.today {
            return;
        }
        tracing::debug!(%today, "date changed");
        self.today = today;
        self.refresh(store);
    }

    pub(crate) fn current_month(&self) -> String {
        self.today.format("%Y-%m").to_string()
    }

    /// Recompute everything derived from the collection and the filter.
    pub(crate) fn refresh(&mut self, store: &ExpenseStore) {
        self.months_available = store.months_available(&self.current_month());
        self.summary = store.summary(&self.filter_month);
        self.total_entries = store.expenses().len();
        clamp_cursor(
            &mut self.entry_index,
            &mut self.entry_scroll,
            self.summary.count(),
        );
    }

    /// Months the selector offers: every month with entries, plus the
    /// current month and the one being shown even when they have none.
    /// Newest first.
    pub(crate) fn month_options(&self) -> Vec<String> {
        let mut options = self.months_available.clone();
        for extra in [self.current_month(), self.filter_month.clone()] {
            if !options.contains(&extra) {
                options.push(extra);
            }
        }
        options.sort_unstable_by(|a, b| b.cmp(a));
        options
    }

    pub(crate) fn set_filter_month(&mut self, month: String, store: &ExpenseStore) {
        if month != self.filter_month {
            self.entry_index = 0;
            self.entry_scroll = 0;
        }
        self.filter_month = month;
        self.refresh(store);
    }

    /// Move through the selector. Positive `delta` goes to newer months.
    pub(crate) fn step_month(&mut self, delta: i32, store: &ExpenseStore) -> bool {
        let options = self.month_options();
        let idx = options
            .iter()
            .position(|m| *m == self.filter_month)
            .unwrap_or(0);
        // Options are newest first
        let target = if delta > 0 {
            idx.checked_sub(1)
        } else {
            Some(idx + 1).filter(|i| *i < options.len())
        };
        match target.and_then(|i| options.get(i)).cloned() {
            Some(month) => {
                self.set_filter_month(month, store);
                true
            }
            None => false,
        }
    }

    pub(crate) fn selected_entry(&self) -> Option<&Expense> {
        self.summary.entries.get(self.entry_index)
    }

    /// Add the form contents. On success the amount and note are cleared;
    /// date and category stay for the next entry. Invalid input is a no-op.
    pub(crate) fn submit_form(&mut self, store: &mut ExpenseStore) -> bool {
        let result = store.add_as_of(&self.form, self.today).map(|_| ());
        match result {
            Ok(()) => {
                self.form.amount.clear();
                self.form.note.clear();
                self.entry_index = 0;
                self.entry_scroll = 0;
                self.refresh(store);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "entry form rejected");
                false
            }
        }
    }

    /// Remove the highlighted row. No confirmation.
    pub(crate) fn delete_selected(&mut self, store: &mut ExpenseStore) -> Option<Expense> {
        let entry = self.selected_entry().cloned()?;
        if !store.remove(&entry.id) {
            return None;
        }
        self.refresh(store);
        Some(entry)
    }

    // ── Form editing ─────────────────────────────────────────

    pub(crate) fn form_push(&mut self, c: char) {
        match self.form_field {
            FormField::Date => {
                if (c.is_ascii_digit() || c == '-') && self.form.date.len() < 10 {
                    self.form.date.push(c);
                }
            }
            FormField::Amount => {
                let is_dot = c == '.';
                if c.is_ascii_digit() || (is_dot && !self.form.amount.contains('.')) {
                    self.form.amount.push(c);
                }
            }
            FormField::Category => match c {
                '+' | '=' | 'l' => self.form.category = self.form.category.next(),
                '-' | 'h' => self.form.category = self.form.category.prev(),
                _ => {}
            },
            FormField::Note => self.form.note.push(c),
        }
    }

    pub(crate) fn form_pop(&mut self) {
        match self.form_field {
            FormField::Date => {
                self.form.date.pop();
            }
            FormField::Amount => {
                self.form.amount.pop();
            }
            FormField::Note => {
                self.form.note.pop();
            }
            FormField::Category => {}
        }
    }

    /// Up/Down on the date or category field. Dates never pass today.
    pub(crate) fn form_step(&mut self, delta: i32) {
        match self.form_field {
            FormField::Date => {
                let current = parse_iso_date(&self.form.date).unwrap_or(self.today);
                let stepped = if delta >= 0 {
                    current.checked_add_days(Days::new(u64::from(delta.unsigned_abs())))
                } else {
                    current.checked_sub_days(Days::new(u64::from(delta.unsigned_abs())))
                }
                .unwrap_or(current)
                .min(self.today);
                self.form.date = stepped.format("%Y-%m-%d").to_string();
            }
            FormField::Category => {
                self.form.category = if delta >= 0 {
                    self.form.category.next()
                } else {
                    self.form.category.prev()
                };
            }
            FormField::Amount | FormField::Note => {}
        }
    }

    /// PageUp/PageDown on the date field. Back goes to the first of the
    /// month, then to the first of the month before; forward stops at today.
    pub(crate) fn form_jump_month(&mut self, delta: i32) {
        if self.form_field != FormField::Date {
            return;
        }
        let current = parse_iso_date(&self.form.date).unwrap_or(self.today);
        if delta < 0 && current.day() != 1 {
            self.form.date = start_of_month_iso(current);
            return;
        }
        let month = current.format("%Y-%m").to_string();
        let Some(target) = shift_month(&month, delta.signum())
            .and_then(|m| parse_iso_date(&format!("{m}-01")))
        else {
            return;
        };
        self.form.date = if target > self.today {
            self.today.format("%Y-%m-%d").to_string()
        } else {
            start_of_month_iso(target)
        };
    }

    // ── Table navigation ─────────────────────────────────────

    pub(crate) fn move_down(&mut self) {
        let len = self.summary.count();
        let page = self.visible_rows.max(1);
        scroll_down(&mut self.entry_index, &mut self.entry_scroll, len, page);
    }

    pub(crate) fn move_up(&mut self) {
        scroll_up(&mut self.entry_index, &mut self.entry_scroll);
    }

    pub(crate) fn goto_top(&mut self) {
        scroll_to_top(&mut self.entry_index, &mut self.entry_scroll);
    }

    pub(crate) fn goto_bottom(&mut self) {
        let len = self.summary.count();
        let page = self.visible_rows.max(1);
        scroll_to_bottom(&mut self.entry_index, &mut self.entry_scroll, len, page);
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
