//! Donation amount parsing and display.
//!
//! Form input is parsed into integer cents; server aggregates arrive as
//! floating-point rupees and are shown in en-IN style (`₹1,23,456.50`).

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

/// Parse a non-negative decimal amount with at most two fraction digits
/// into cents. Signs, exponents and other characters are rejected.
#[must_use]
pub fn parse_amount_cents(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let (whole, frac) = raw.split_once('.').unwrap_or((raw, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if frac.len() > 2 || !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac_cents: u64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac_cents)
}

/// Cents as a decimal in major units.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cents_to_major(cents: u64) -> f64 {
    cents as f64 / 100.0
}

/// Cents as `12.50`.
#[must_use]
pub fn format_amount(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Rupees with Indian digit grouping, e.g. `₹1,23,456.50`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0.00".to_owned();
    }
    let paise = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && paise > 0 { "-" } else { "" };
    format!("{sign}₹{}.{:02}", group_indian(paise / 100), paise % 100)
}

/// Counts with Indian digit grouping, e.g. `12,34,567`.
#[must_use]
pub fn format_count(count: u64) -> String {
    group_indian(count)
}

fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
