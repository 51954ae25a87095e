//! Formatting helpers applied to records before they are handed out.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Layout produced by the `datetime` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    #[default]
    Medium,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

const FORM_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// Splits a stored genre string into its entries.
///
/// Rows written by older clients wrap the list in braces (`{Jazz,Rock}`),
/// so braces are dropped before splitting.
pub fn parse_genres(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_start_matches('{')
        .trim_end_matches('}')
        .split(',')
        .map(|genre| genre.trim().trim_matches('"'))
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_genres<S: AsRef<str>>(genres: &[S]) -> String {
    genres
        .iter()
        .map(|genre| genre.as_ref().trim())
        .filter(|genre| !genre.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn format_datetime(value: &DateTime<Utc>, format: DateFormat) -> String {
    value.format(format.pattern()).to_string()
}

/// Accepts RFC 3339 or the form layout `YYYY-MM-DD HH:MM:SS` (read as UTC).
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, FORM_DATETIME)
        .ok()
        .map(|naive| naive.and_utc())
}
