use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Format a decimal amount as dollars with thousand separators.
/// e.g. `1234567.891` → `"$1,234,567.89"`
pub(crate) fn format_currency(val: Decimal) -> String {
    let rounded = crate::models::round_cents(val);
    let abs = rounded.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if rounded < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Format typed text as currency. Anything that is not a number shows as zero.
pub(crate) fn format_currency_text(s: &str) -> String {
    let val = Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO);
    format_currency(val)
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// A horizontal bar `width` cells wide, filled to `percent`.
pub(crate) fn bar(percent: Decimal, width: usize) -> String {
    let clamped = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (clamped * Decimal::from(width) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page.saturating_sub(1));
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}

/// Pull the cursor back inside a list that may have shrunk.
pub(crate) fn clamp_cursor(index: &mut usize, scroll: &mut usize, len: usize) {
    if len == 0 {
        *index = 0;
        *scroll = 0;
        return;
    }
    if *index >= len {
        *index = len - 1;
    }
    if *scroll > *index {
        *scroll = *index;
    }
}
