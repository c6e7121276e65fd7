use chrono::Datelike;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode};
use crate::models::{Category, EntryInput};
use crate::store::ExpenseStore;
use crate::ui::util::format_currency;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut ExpenseStore) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SpendTUI", cmd_quit, r);
    register_command!("quit", "Quit SpendTUI", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "month",
        "Show a month (e.g. :month 2024-01, no argument = this month)",
        cmd_month,
        r
    );
    register_command!("m", "Show a month (e.g. :m 01)", cmd_month, r);
    register_command!("next-month", "Go to the next month in the selector", cmd_next_month, r);
    register_command!("prev-month", "Go to the previous month in the selector", cmd_prev_month, r);
    register_command!(
        "add",
        "Add expense (e.g. :add 2024-01-15 12.50 Dining lunch)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add expense (e.g. :a today 4.50 Dining)",
        cmd_add,
        r
    );
    register_command!("delete", "Delete selected expense", cmd_delete, r);
    register_command!("del", "Delete selected expense", cmd_delete, r);
    register_command!("entry", "Focus the entry form", cmd_entry, r);
    register_command!("e", "Focus the entry form", cmd_entry, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    store: &mut ExpenseStore,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_entry(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.input_mode = InputMode::Form;
    Ok(())
}

fn cmd_month(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    if args.is_empty() {
        let month = app.current_month();
        app.set_filter_month(month.clone(), store);
        app.set_status(format!("Month: {month}"));
        return Ok(());
    }

    let year = app
        .filter_month
        .get(..4)
        .and_then(|y| y.parse::<i32>().ok())
        .unwrap_or_else(|| app.today.year());
    match crate::period::parse_month(args, year) {
        Some(month) => {
            app.set_status(format!("Month: {month}"));
            app.set_filter_month(month, store);
        }
        None => app.set_status("Invalid month format. Use YYYY-MM (e.g. 2024-01)"),
    }
    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    advance_month(app, store, 1);
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    advance_month(app, store, -1);
    Ok(())
}

fn advance_month(app: &mut App, store: &ExpenseStore, delta: i32) {
    if app.step_month(delta, store) {
        let month = app.filter_month.clone();
        app.set_status(format!("Month: {month}"));
    } else if delta > 0 {
        app.set_status("Already at the newest month");
    } else {
        app.set_status("Already at the oldest month");
    }
}

fn cmd_add(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    const USAGE: &str = "Usage: :add <date|today> <amount> <category> [note]";
    let mut words = args.split_whitespace();
    let (Some(date), Some(amount), Some(category)) = (words.next(), words.next(), words.next())
    else {
        app.set_status(USAGE);
        return Ok(());
    };
    let note = words.collect::<Vec<_>>().join(" ");

    let Some(category) = Category::from_name(category) else {
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        app.set_status(format!(
            "Unknown category '{category}'. Choose one of: {}",
            names.join(", ")
        ));
        return Ok(());
    };

    let date = if date.eq_ignore_ascii_case("today") {
        app.today.format("%Y-%m-%d").to_string()
    } else {
        date.to_string()
    };

    let input = EntryInput {
        date,
        amount: amount.to_string(),
        category,
        note,
    };

    let added = store
        .add_as_of(&input, app.today)
        .map(|e| (e.amount, e.category, e.date.clone()));
    match added {
        Ok((amount, category, date)) => {
            app.refresh(store);
            app.set_status(format!(
                "Added {} {category} on {date}",
                format_currency(amount)
            ));
        }
        Err(e) => app.set_status(format!("Not added: {e}")),
    }
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    match app.delete_selected(store) {
        Some(entry) => app.set_status(format!(
            "Deleted {} {} on {}",
            format_currency(entry.amount),
            entry.category,
            entry.date
        )),
        None => app.set_status("No expense selected"),
    }
    Ok(())
}
