//! Custom `validator` rules for fields the built-in checks don't cover.

use std::borrow::Cow;

use validator::ValidationError;

use super::choices::{GENRES, STATES};
use crate::filters::parse_genres;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "This field is required."));
    }
    Ok(())
}

pub fn valid_state(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if !STATES.contains(&value) {
        return Err(invalid("choice", "Not a valid choice."));
    }
    Ok(())
}

/// Every entry of a stored genre string must be one of the listed genres.
pub fn valid_genres(value: &str) -> Result<(), ValidationError> {
    let genres = parse_genres(value);
    if genres.is_empty() {
        return Err(invalid("required", "This field is required."));
    }
    if genres.iter().any(|genre| !GENRES.contains(&genre.as_str())) {
        return Err(invalid("choice", "Not a valid choice."));
    }
    Ok(())
}

/// Digits plus `-`, `.`, space, parentheses and `+`, with 7 to 15 digits.
pub fn valid_phone(value: &str) -> Result<(), ValidationError> {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | ' ' | '(' | ')' | '+'));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !allowed || !(7..=15).contains(&digits) {
        return Err(invalid("phone", "Invalid phone number."));
    }
    Ok(())
}
