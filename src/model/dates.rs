// File: ./src/model/dates.rs
// Event dates arrive in whatever format the source felt like that day.
// Parsing is day-first: "03/04/2025" is the 3rd of April, never March 4th.
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

/// Machine-sortable form used for list ordering.
pub const SORTABLE_FORMAT: &str = "%Y-%m-%d";
/// Default human form, e.g. "02 Jun. 2025".
pub const DISPLAY_FORMAT: &str = "%d %b. %Y";
pub const UNKNOWN_LABEL: &str = "Unknown date";

const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b. %Y",
    "%d %b %Y",
];

/// Tries the supported source formats in order. Returns None for anything
/// unparseable; callers treat that as "no date" rather than an error.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

pub fn sortable(date: NaiveDate) -> String {
    date.format(SORTABLE_FORMAT).to_string()
}

/// Formats a date with a user-configurable strftime string. A format string
/// that is malformed, or that asks for fields a date does not have (%H and
/// friends), falls back to the default instead of panicking mid-draw.
pub fn display(date: NaiveDate, format: &str) -> String {
    use std::fmt::Write;

    let items: Vec<Item> = StrftimeItems::new(format).collect();
    if items.iter().any(|i| matches!(i, Item::Error)) {
        return date.format(DISPLAY_FORMAT).to_string();
    }
    let mut out = String::new();
    if write!(out, "{}", date.format_with_items(items.into_iter())).is_err() {
        return date.format(DISPLAY_FORMAT).to_string();
    }
    out
}
