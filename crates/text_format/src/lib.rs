//! Display-side text helpers: first-character casing and locale-aware date
//! strings.
//!
//! Date formatting defines no rules of its own; it hands the parsed date to
//! chrono's locale database and returns whatever the locale's preferred date
//! representation (`%x`) is.

#![forbid(unsafe_code)]

use chrono::{DateTime, Locale, NaiveDate};
use std::borrow::Cow;
use thiserror::Error;

mod casing;

pub use casing::{capitalize, uncapitalize};

/// Locale used when the caller does not pick one.
pub const DEFAULT_LOCALE: Locale = Locale::en_US;

// Date shapes the presentation layer actually feeds us, tried in order
// after RFC 3339.
const CALENDAR_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DateFormatError {
    /// The input matched none of the accepted date shapes.
    #[error("unrecognised date string {0:?}")]
    InvalidDate(String),
    /// The culture identifier is not in the locale database.
    #[error("unknown locale {0:?}")]
    UnknownLocale(String),
}

/// Format `date` for display under `locale`.
///
/// `date` is accepted as RFC 3339 (time and offset ignored for display) or a
/// plain calendar date (`2024-03-09` or `03/09/2024`). `locale` accepts both
/// BCP-47 (`en-US`) and POSIX (`en_US`) spellings.
///
/// # Errors
/// [`DateFormatError::InvalidDate`] when the date string parses under no
/// accepted shape, [`DateFormatError::UnknownLocale`] when the locale
/// identifier is not recognised. No validation happens beyond parsing.
pub fn locale_date_string(date: &str, locale: &str) -> Result<String, DateFormatError> {
    let parsed = parse_date(date)?;
    let locale = resolve_locale(locale)?;
    Ok(parsed.format_localized("%x", locale).to_string())
}

/// [`locale_date_string`] with the default English locale.
///
/// # Errors
/// [`DateFormatError::InvalidDate`] when the date string parses under no
/// accepted shape.
pub fn locale_date_string_default(date: &str) -> Result<String, DateFormatError> {
    let parsed = parse_date(date)?;
    Ok(parsed.format_localized("%x", DEFAULT_LOCALE).to_string())
}

fn parse_date(date: &str) -> Result<NaiveDate, DateFormatError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return Ok(timestamp.date_naive());
    }
    CALENDAR_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
        .ok_or_else(|| DateFormatError::InvalidDate(date.to_owned()))
}

fn resolve_locale(identifier: &str) -> Result<Locale, DateFormatError> {
    let posix: Cow<'_, str> = if identifier.contains('-') {
        Cow::Owned(identifier.replace('-', "_"))
    } else {
        Cow::Borrowed(identifier)
    };
    Locale::try_from(posix.as_ref())
        .map_err(|_| DateFormatError::UnknownLocale(identifier.to_owned()))
}
