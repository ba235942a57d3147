//! Field validation rules
//!
//! Each rule is a pure function of the field text. Checks run in order and
//! the first failing one produces the message.

use super::field::FieldId;
use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

// `\x{FEFF}` (byte order mark) counts as whitespace alongside `\s`
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s\x{FEFF}]+$").expect("name pattern is valid"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));

/// Minimum length (in UTF-16 code units) for name and organization
const MIN_TEXT_LEN: usize = 2;

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Strip leading and trailing whitespace, byte order marks included
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(is_blank)
}

/// Text length in UTF-16 code units, so "😀" is two long
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate `value` as the content of `field`
pub fn validate(field: FieldId, value: &str) -> Result<(), ValidationError> {
    let message = match field {
        FieldId::Name => check_name(value),
        FieldId::Email => check_email(value),
        FieldId::Phone => check_phone(value),
        FieldId::Organization => check_organization(value),
    };

    match message {
        Some(message) => Err(ValidationError::new(field, message)),
        None => Ok(()),
    }
}

fn check_name(value: &str) -> Option<&'static str> {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        return Some("Full name is required");
    }
    if text_len(trimmed) < MIN_TEXT_LEN {
        return Some("Name must be at least 2 characters");
    }
    if !NAME_PATTERN.is_match(value) {
        return Some("Name can only contain letters and spaces");
    }
    None
}

fn check_email(value: &str) -> Option<&'static str> {
    if trim_input(value).is_empty() {
        return Some("Email is required");
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some("Please enter a valid email address");
    }
    None
}

fn check_phone(value: &str) -> Option<&'static str> {
    if trim_input(value).is_empty() {
        return Some("Phone number is required");
    }
    if !PHONE_PATTERN.is_match(&strip_phone_separators(value)) {
        return Some("Please enter a valid phone number");
    }
    None
}

fn check_organization(value: &str) -> Option<&'static str> {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        return Some("Company/Organization is required");
    }
    if text_len(trimmed) < MIN_TEXT_LEN {
        return Some("Company name must be at least 2 characters");
    }
    None
}

/// Drop whitespace, hyphens and parentheses so "(555) 123-4567" reads as digits
fn strip_phone_separators(value: &str) -> String {
    value
        .chars()
        .filter(|&c| !is_blank(c) && !matches!(c, '-' | '(' | ')'))
        .collect()
}
