//! Display formatting for money and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Format an amount as dollars with thousands separators: `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_owned();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${whole}.{:02}", cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts.date());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

/// Long-form date such as `March 5, 2024`; unparsable input is returned as-is.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!("{} {}, {}", date.month(), date.day(), date.year()),
        None => raw.to_owned(),
    }
}

/// Compact `YYYYMMDD` stamp used in invoice numbers.
pub fn date_stamp(raw: &str) -> Option<String> {
    let date = parse_date(raw)?;
    Some(format!("{:04}{:02}{:02}", date.year(), u8::from(date.month()), date.day()))
}
