//! Locale-keyed display formatting.
//!
//! The same code runs during server rendering and in the browser so hydrated
//! text matches byte for byte; it does not consult `Intl`. Locales are reduced
//! to two conventions: decimal comma (Spanish, Portuguese, German, Italian,
//! Dutch, ...) versus decimal point, and month-first dates for `en-US` only.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Placeholder for missing values.
pub const MISSING: &str = "N/A";

const DECIMAL_COMMA_LANGS: &[&str] = &["es", "pt", "de", "it", "nl", "id", "da", "tr"];

const NAIVE_T: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const NAIVE_T_FRACTION: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
const NAIVE_SPACE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const NAIVE_SPACE_FRACTION: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]");
const TIME_OF_DAY: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute] [period]");
const CLOCK: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

/// Parse a backend timestamp. Offsets are dropped: the wall-clock value is
/// shown as the backend reported it.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(with_offset.date(), with_offset.time()));
    }
    [NAIVE_T, NAIVE_T_FRACTION, NAIVE_SPACE, NAIVE_SPACE_FRACTION]
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(raw, *format).ok())
}

/// Card time format: 24-hour clock followed by the AM/PM marker.
///
/// Missing values render [`MISSING`]; unparseable values are shown verbatim.
#[must_use]
pub fn time_of_day(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return MISSING.to_owned();
    };
    parse_timestamp(raw)
        .and_then(|ts| ts.format(TIME_OF_DAY).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Short date (`d/m/yyyy`, or `m/d/yyyy` for `en-US`).
#[must_use]
pub fn date(raw: &str, locale: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => short_date(ts, locale),
        None => raw.to_owned(),
    }
}

/// Short date plus wall-clock time.
#[must_use]
pub fn datetime(raw: &str, locale: &str) -> String {
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let clock = ts.format(CLOCK).unwrap_or_default();
    format!("{}, {clock}", short_date(ts, locale))
}

fn short_date(ts: PrimitiveDateTime, locale: &str) -> String {
    let (day, month, year) = (ts.day(), u8::from(ts.month()), ts.year());
    if locale.eq_ignore_ascii_case("en-US") {
        format!("{month}/{day}/{year}")
    } else {
        format!("{day}/{month}/{year}")
    }
}

/// Integer with locale digit grouping.
#[must_use]
pub fn number(value: i64, locale: &str) -> String {
    let (group, _) = separators(locale);
    let digits = group_digits(value.unsigned_abs(), group);
    if value < 0 { format!("-{digits}") } else { digits }
}

/// Amount with two decimals, grouped, prefixed by the currency code.
#[must_use]
pub fn currency(value: f64, code: &str, locale: &str) -> String {
    let (group, decimal) = separators(locale);
    #[allow(clippy::cast_possible_truncation)]
    let cents = (value * 100.0).round() as i64;
    let abs = cents.unsigned_abs();
    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}{code} {}{decimal}{:02}", group_digits(abs / 100, group), abs % 100)
}

fn separators(locale: &str) -> (char, char) {
    let lang = locale.split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
    if DECIMAL_COMMA_LANGS.contains(&lang.as_str()) { ('.', ',') } else { (',', '.') }
}

fn group_digits(value: u64, separator: char) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
