use chrono::{Datelike, Local, Months, NaiveDate};

/// Parse a strict ISO `YYYY-MM-DD` calendar date.
pub(crate) fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // chrono accepts unpadded fields; the stored format does not
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// `"2024-03-09"` → `"2024-03"`. `None` when `date` is not a valid ISO date.
pub(crate) fn month_key(date: &str) -> Option<String> {
    parse_iso_date(date).map(|d| d.format("%Y-%m").to_string())
}

/// ISO date of the first day of `date`'s month.
pub(crate) fn start_of_month_iso(date: NaiveDate) -> String {
    date.with_day(1)
        .unwrap_or(date)
        .format("%Y-%m-%d")
        .to_string()
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn current_month() -> String {
    today().format("%Y-%m").to_string()
}

/// Step a `YYYY-MM` key by `delta` months.
pub(crate) fn shift_month(month: &str, delta: i32) -> Option<String> {
    let first = NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").ok()?;
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    }?;
    Some(shifted.format("%Y-%m").to_string())
}

/// Accepts `2024-01`, `2024-1`, `01` or `1`. Bare months take `default_year`.
pub(crate) fn parse_month(input: &str, default_year: i32) -> Option<String> {
    let input = input.trim();
    let (year, month) = match input.split_once('-') {
        Some((y, m)) => (y.parse::<i32>().ok()?, m.parse::<u32>().ok()?),
        None if input.len() <= 2 => (default_year, input.parse::<u32>().ok()?),
        None => return None,
    };
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(date.format("%Y-%m").to_string())
}

#[cfg(test)]
#[path = "period_tests.rs"]
mod period_tests;
