use anyhow::Result;
use chrono::Datelike;

use crate::models::{Category, EntryInput};
use crate::period;
use crate::store::{ExpenseStore, MonthSummary};
use crate::ui::util::{format_currency, truncate};

pub(crate) fn as_cli(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], store),
        "list" | "ls" => cli_list(&args[2..], store),
        "summary" | "s" => cli_summary(&args[2..], store),
        "months" => cli_months(store),
        "delete" | "rm" => cli_delete(&args[2..], store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendtui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendTUI: local-only monthly expense tracker");
    println!();
    println!("Usage: spendtui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                                  Launch interactive TUI");
    println!("  add <date|today> <amount> <category> [note...]");
    println!("                                          Record an expense");
    println!("  list [YYYY-MM]                          List expenses for a month (default: current)");
    println!("  summary [YYYY-MM]                       Print total, count and category breakdown");
    println!("  months                                  List months that have expenses");
    println!("  delete <id>                             Delete an expense by id");
    println!("  --help, -h                              Show this help");
    println!("  --version, -V                           Show version");
    println!();
    println!(
        "Categories: {}",
        Category::all()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

/// `list` and `summary` take an optional month; anything not a month is an
/// error rather than a silent fallback.
fn month_arg(args: &[String]) -> Result<String> {
    match args.first().filter(|a| !a.starts_with('-')) {
        Some(raw) => period::parse_month(raw, period::today().year())
            .ok_or_else(|| anyhow::anyhow!("Invalid month '{raw}', expected YYYY-MM")),
        None => Ok(period::current_month()),
    }
}

fn cli_add(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    let [date, amount, category, note @ ..] = args else {
        anyhow::bail!("Usage: spendtui add <date|today> <amount> <category> [note...]");
    };

    let category = Category::from_name(category).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown category '{category}'. Choose one of: {}",
            Category::all()
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    let date = if date.eq_ignore_ascii_case("today") {
        period::today().format("%Y-%m-%d").to_string()
    } else {
        date.clone()
    };

    let input = EntryInput {
        date,
        amount: amount.clone(),
        category,
        note: note.join(" "),
    };

    let entry = store
        .add(&input)
        .map_err(|e| anyhow::anyhow!("Not added: {e}"))?;
    println!(
        "Added {} {} on {} ({})",
        format_currency(entry.amount),
        entry.category,
        entry.date,
        entry.id
    );
    Ok(())
}

fn cli_list(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    let month = month_arg(args)?;
    let summary = store.summary(&month);
    if summary.entries.is_empty() {
        println!("No expenses for {month}");
        return Ok(());
    }

    println!(
        "{:<36}  {:<10}  {:<13}  {:>12}  Note",
        "ID", "Date", "Category", "Amount"
    );
    println!("{}", "─".repeat(100));
    for e in &summary.entries {
        println!(
            "{:<36}  {:<10}  {:<13}  {:>12}  {}",
            e.id,
            e.date,
            e.category.as_str(),
            format_currency(e.amount),
            truncate(&e.note, 30),
        );
    }
    println!("{}", "─".repeat(100));
    println!(
        "{} expenses, {} total",
        summary.count(),
        format_currency(summary.aggregate.total)
    );
    Ok(())
}

fn cli_summary(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    let month = month_arg(args)?;
    print_summary(&store.summary(&month));
    Ok(())
}

fn print_summary(summary: &MonthSummary) {
    let agg = &summary.aggregate;

    println!("SpendTUI: {}", summary.month);
    println!("{}", "─".repeat(40));
    println!("  Total Spent:   {}", format_currency(agg.total));
    println!("  Transactions:  {}", summary.count());
    match agg.top_category() {
        Some((category, amount)) => println!(
            "  Top Category:  {category} ({}, {}%)",
            format_currency(amount),
            agg.share_percent(category)
        ),
        None => println!("  Top Category:  —"),
    }

    let ranked = agg.ranked();
    if !ranked.is_empty() {
        println!();
        println!("Spending by Category:");
        for (category, amount) in &ranked {
            println!(
                "  {:<14} {:>12}  {:>5}%",
                category.as_str(),
                format_currency(*amount),
                agg.share_percent(*category).to_string()
            );
        }
    }
}

fn cli_months(store: &mut ExpenseStore) -> Result<()> {
    for month in store.months_available(&period::current_month()) {
        let summary = store.summary(&month);
        println!(
            "{month}  {:>4} expenses  {:>12}",
            summary.count(),
            format_currency(summary.aggregate.total)
        );
    }
    Ok(())
}

fn cli_delete(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    let Some(id) = args.first() else {
        anyhow::bail!("Usage: spendtui delete <id>");
    };

    let Some(entry) = store.get(id).cloned() else {
        anyhow::bail!("No expense with id {id}");
    };
    store.remove(id);
    println!(
        "Deleted {} {} on {}",
        format_currency(entry.amount),
        entry.category,
        entry.date
    );
    Ok(())
}
