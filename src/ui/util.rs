use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with a currency symbol and thousand separators.
/// At most two decimal places are shown and trailing zeros are dropped.
/// e.g. `1234567.5` → `"₹1,234,567.5"`, `150.00` → `"₹150"`
pub(crate) fn format_amount(val: Decimal, symbol: &str) -> String {
    let abs = val
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let formatted = abs.to_string();
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next();

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if val < Decimal::ZERO && !abs.is_zero() {
        "-"
    } else {
        ""
    };
    match dec_part {
        Some(d) => format!("{sign}{symbol}{with_commas}.{d}"),
        None => format!("{sign}{symbol}{with_commas}"),
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
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

/// Keep a cursor inside a list that may have shrunk.
pub(crate) fn clamp_index(index: &mut usize, scroll: &mut usize, len: usize) {
    if *index >= len {
        *index = len.saturating_sub(1);
    }
    if *scroll > *index {
        *scroll = *index;
    }
}

/// Proportional bar of `width` cells for `value / total`.
pub(crate) fn share_bar(value: Decimal, total: Decimal, width: usize) -> String {
    let ratio = if total > Decimal::ZERO {
        (value / total).to_f64().unwrap_or(0.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled.min(width)))
}
