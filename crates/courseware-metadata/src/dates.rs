// crates/courseware-metadata/src/dates.rs
// ============================================================================
// Module: Localized Date Rendering
// Description: Named date formats, strftime-style rendering, and date parsing.
// Purpose: Render course start/end dates with locale-aware calendar names.
// Dependencies: crate::i18n, serde, time
// ============================================================================

//! ## Overview
//! Dates are rendered from strftime-style patterns. Four named formats
//! (`SHORT_DATE`, `LONG_DATE`, `DATE_TIME`, `TIME`) resolve through the
//! locale catalog; any other format string is used as a raw pattern. Weekday
//! and month names plus the AM/PM marker are looked up in the catalog so the
//! same pattern renders correctly in every supported locale.
//!
//! Values are always rendered in UTC.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::fmt::Write;

use serde::Deserialize;
use serde::Serialize;
use time::Date;
use time::OffsetDateTime;
use time::PrimitiveDateTime;
use time::Time;
use time::UtcOffset;
use time::format_description::well_known::Rfc3339;

use crate::i18n::Catalog;
use crate::i18n::DateTimeFormatter;

// ============================================================================
// SECTION: Named Formats
// ============================================================================

/// Date format selector.
///
/// # Invariants
/// - Named variants serialize to their upper-case labels; any other label is
///   carried verbatim as a raw pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateFormat {
    /// Short date, for example `Feb 06, 1945`.
    ShortDate,
    /// Long date, for example `Tuesday, February 06, 1945`.
    LongDate,
    /// Date and time, for example `Feb 06, 1945 at 04:20`.
    DateTime,
    /// Time of day, for example `04:20:00`.
    Time,
    /// Raw strftime-style pattern.
    Pattern(String),
}

impl DateFormat {
    /// Parses a format label; unknown labels become raw patterns.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "SHORT_DATE" => Self::ShortDate,
            "LONG_DATE" => Self::LongDate,
            "DATE_TIME" => Self::DateTime,
            "TIME" => Self::Time,
            other => Self::Pattern(other.to_string()),
        }
    }

    /// Returns the format label or raw pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ShortDate => "SHORT_DATE",
            Self::LongDate => "LONG_DATE",
            Self::DateTime => "DATE_TIME",
            Self::Time => "TIME",
            Self::Pattern(pattern) => pattern,
        }
    }

    /// Returns the catalog key holding the localized pattern for named formats.
    const fn catalog_key(&self) -> Option<&'static str> {
        match self {
            Self::ShortDate => Some("strftime.SHORT_DATE_FORMAT"),
            Self::LongDate => Some("strftime.LONG_DATE_FORMAT"),
            Self::DateTime => Some("strftime.DATE_TIME_FORMAT"),
            Self::Time => Some("strftime.TIME_FORMAT"),
            Self::Pattern(_) => None,
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DateFormat {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for DateFormat {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<DateFormat> for String {
    fn from(value: DateFormat) -> Self {
        value.as_str().to_string()
    }
}

// ============================================================================
// SECTION: Formatter
// ============================================================================

impl DateTimeFormatter for Catalog {
    fn strftime_localized(&self, value: OffsetDateTime, format: &str) -> String {
        let value = value.to_offset(UtcOffset::UTC);
        let format = DateFormat::parse(format);
        let pattern = format
            .catalog_key()
            .and_then(|key| self.lookup(key))
            .unwrap_or_else(|| format.as_str());
        let mut out = String::with_capacity(pattern.len() + 16);
        render_pattern(self, value, pattern, true, &mut out);
        out
    }
}

/// Renders `pattern` into `out`; `expand` permits one level of `%x`/`%X`.
fn render_pattern(
    catalog: &Catalog,
    value: OffsetDateTime,
    pattern: &str,
    expand: bool,
    out: &mut String,
) {
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        let Some(mut code) = chars.next() else {
            out.push('%');
            break;
        };
        let mut pad = true;
        if code == '-' {
            let Some(next) = chars.next() else {
                out.push_str("%-");
                break;
            };
            code = next;
            pad = false;
        }
        render_directive(catalog, value, code, pad, expand, out);
    }
}

/// Renders a single directive.
fn render_directive(
    catalog: &Catalog,
    value: OffsetDateTime,
    code: char,
    pad: bool,
    expand: bool,
    out: &mut String,
) {
    let weekday = value.weekday().number_days_from_monday();
    let month = u8::from(value.month());
    let hour = value.hour();
    match code {
        '%' => out.push('%'),
        'a' => push_name(catalog, &format!("weekday.abbr.{weekday}"), out),
        'A' => push_name(catalog, &format!("weekday.full.{weekday}"), out),
        'b' | 'h' => push_name(catalog, &format!("month.abbr.{month}"), out),
        'B' => push_name(catalog, &format!("month.full.{month}"), out),
        'p' => push_name(catalog, if hour < 12 { "strftime.am" } else { "strftime.pm" }, out),
        'x' | 'X' if expand => {
            let key = if code == 'x' {
                "strftime.SHORT_DATE_FORMAT"
            } else {
                "strftime.TIME_FORMAT"
            };
            if let Some(pattern) = catalog.lookup(key) {
                render_pattern(catalog, value, pattern, false, out);
            }
        }
        'd' => push_number(out, u32::from(value.day()), 2, pad),
        'm' => push_number(out, u32::from(month), 2, pad),
        'H' => push_number(out, u32::from(hour), 2, pad),
        'I' => push_number(out, u32::from(twelve_hour(hour)), 2, pad),
        'M' => push_number(out, u32::from(value.minute()), 2, pad),
        'S' => push_number(out, u32::from(value.second()), 2, pad),
        'j' => push_number(out, u32::from(value.ordinal()), 3, pad),
        'y' => push_number(out, value.year().rem_euclid(100).unsigned_abs(), 2, pad),
        'Y' => {
            let _ = write!(out, "{}", value.year());
        }
        'Z' => out.push_str("UTC"),
        other => {
            out.push('%');
            if !pad {
                out.push('-');
            }
            out.push(other);
        }
    }
}

/// Appends a catalog name, falling back to the key when missing.
fn push_name(catalog: &Catalog, key: &str, out: &mut String) {
    out.push_str(catalog.lookup(key).unwrap_or(key));
}

/// Appends a number, zero-padded to `width` when `pad` is set.
fn push_number(out: &mut String, value: u32, width: usize, pad: bool) {
    let _ = if pad { write!(out, "{value:0width$}") } else { write!(out, "{value}") };
}

/// Converts a 24-hour clock value to the 12-hour clock.
const fn twelve_hour(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        other => other,
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// English month names accepted in written-out advertised dates.
const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parses an advertised start string into a UTC timestamp.
///
/// Accepts RFC 3339, the numeric forms `YYYY-MM-DD[( |T)HH:MM[:SS[.fff]]]`,
/// and written-out dates such as `Jan 19, 2038` or `January 19 2038 03:14`.
/// A trailing `UTC` or `Z` designator is ignored and all values other than
/// RFC 3339 are taken as UTC. Returns `None` for empty, partial, or free-text
/// values.
#[must_use]
pub fn parse_advertised_start(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(parsed.to_offset(UtcOffset::UTC));
    }
    let value = strip_utc_designator(value);
    let parsed = parse_numeric_datetime(value).or_else(|| parse_written_datetime(value))?;
    Some(parsed.assume_utc())
}

/// Removes a trailing `UTC` (any case) or `Z` designator.
fn strip_utc_designator(value: &str) -> &str {
    let split = value.len().saturating_sub(3);
    let stripped = match value.get(split ..) {
        Some(suffix) if suffix.eq_ignore_ascii_case("utc") => value.get(.. split).unwrap_or(value),
        _ => value.strip_suffix('Z').unwrap_or(value),
    };
    stripped.trim_end()
}

/// Parses `YYYY-MM-DD` with an optional clock after a space or `T`.
fn parse_numeric_datetime(value: &str) -> Option<PrimitiveDateTime> {
    let (date_part, time_part) = match value.split_once(['T', ' ']) {
        Some((date, time)) => (date, Some(time.trim())),
        None => (value, None),
    };
    let date = parse_calendar_date(date_part)?;
    let time = time_part.map_or(Some(Time::MIDNIGHT), parse_clock)?;
    Some(PrimitiveDateTime::new(date, time))
}

/// Parses `Month DD[,] YYYY` with an optional trailing clock.
fn parse_written_datetime(value: &str) -> Option<PrimitiveDateTime> {
    let normalized = value.replace(',', " ");
    let mut tokens = normalized.split_whitespace();
    let month = parse_month_name(tokens.next()?)?;
    let day: u8 = tokens.next()?.parse().ok()?;
    let year_text = tokens.next()?;
    if year_text.len() != 4 {
        return None;
    }
    let year: i32 = year_text.parse().ok()?;
    let time = tokens.next().map_or(Some(Time::MIDNIGHT), parse_clock)?;
    if tokens.next().is_some() {
        return None;
    }
    let date = Date::from_calendar_date(year, month, day).ok()?;
    Some(PrimitiveDateTime::new(date, time))
}

/// Matches a full or three-letter English month name, ignoring case.
fn parse_month_name(value: &str) -> Option<time::Month> {
    let lower = value.trim_end_matches('.').to_ascii_lowercase();
    if lower.len() < 3 {
        return None;
    }
    let position = MONTH_NAMES
        .iter()
        .position(|name| *name == lower || (lower.len() == 3 && name.starts_with(&lower)))?;
    let number = u8::try_from(position).ok()?.checked_add(1)?;
    time::Month::try_from(number).ok()
}

/// Parses a `YYYY-MM-DD` calendar date.
fn parse_calendar_date(value: &str) -> Option<Date> {
    let mut parts = value.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month = time::Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Parses an `HH:MM`, `HH:MM:SS`, or `HH:MM:SS.fff` clock value.
fn parse_clock(value: &str) -> Option<Time> {
    let mut parts = value.split(':');
    let hour: u8 = parts.next()?.parse().ok()?;
    let minute: u8 = parts.next()?.parse().ok()?;
    let (second, nanosecond) = match parts.next() {
        Some(text) => parse_seconds(text)?,
        None => (0, 0),
    };
    if parts.next().is_some() {
        return None;
    }
    Time::from_hms_nano(hour, minute, second, nanosecond).ok()
}

/// Parses whole seconds with an optional fraction of up to nine digits.
fn parse_seconds(value: &str) -> Option<(u8, u32)> {
    let Some((whole, fraction)) = value.split_once('.') else {
        return Some((value.parse().ok()?, 0));
    };
    if fraction.is_empty() || !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let padding = u32::try_from(9_usize.checked_sub(fraction.len())?).ok()?;
    let nanosecond = fraction.parse::<u32>().ok()?.checked_mul(10_u32.checked_pow(padding)?)?;
    Some((whole.parse().ok()?, nanosecond))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::parse_advertised_start;
    use super::twelve_hour;

    #[test]
    fn twelve_hour_clock_wraps_midnight_and_noon() {
        assert_eq!(twelve_hour(0), 12);
        assert_eq!(twelve_hour(12), 12);
        assert_eq!(twelve_hour(13), 1);
        assert_eq!(twelve_hour(23), 11);
    }

    #[test]
    fn parses_naive_and_offset_forms() {
        assert_eq!(
            parse_advertised_start("2038-01-19 03:14:07"),
            Some(datetime!(2038-01-19 03:14:07 UTC))
        );
        assert_eq!(
            parse_advertised_start("2038-01-19T03:14"),
            Some(datetime!(2038-01-19 03:14:00 UTC))
        );
        assert_eq!(parse_advertised_start("2038-01-19"), Some(datetime!(2038-01-19 00:00 UTC)));
        assert_eq!(
            parse_advertised_start("2038-01-19T05:14:07+02:00"),
            Some(datetime!(2038-01-19 03:14:07 UTC))
        );
    }

    #[test]
    fn rejects_partial_or_free_text() {
        assert_eq!(parse_advertised_start(""), None);
        assert_eq!(parse_advertised_start("2038-01"), None);
        assert_eq!(parse_advertised_start("Fall 2014"), None);
        assert_eq!(parse_advertised_start("2038-02-30"), None);
        assert_eq!(parse_advertised_start("2038-01-19 25:00"), None);
        assert_eq!(parse_advertised_start("UTC"), None);
        assert_eq!(parse_advertised_start("Ma 19, 2038"), None);
        assert_eq!(parse_advertised_start("Jan 19, 38"), None);
        assert_eq!(parse_advertised_start("Jan 19, 2038 soon"), None);
        assert_eq!(parse_advertised_start("2038-01-19 03:14:07."), None);
    }

    #[test]
    fn accepts_utc_designators_and_fractions() {
        let expected = datetime!(2038-01-19 03:14:07 UTC);
        assert_eq!(parse_advertised_start("2038-01-19 03:14:07 UTC"), Some(expected));
        assert_eq!(parse_advertised_start("2038-01-19 03:14:07utc"), Some(expected));
        assert_eq!(parse_advertised_start("2038-01-19 03:14:07Z"), Some(expected));
        assert_eq!(
            parse_advertised_start("2038-01-19 03:14:07.25"),
            Some(datetime!(2038-01-19 03:14:07.25 UTC))
        );
    }

    #[test]
    fn accepts_written_out_months() {
        assert_eq!(parse_advertised_start("Jan 19, 2038"), Some(datetime!(2038-01-19 00:00 UTC)));
        assert_eq!(
            parse_advertised_start("january 19 2038 03:14"),
            Some(datetime!(2038-01-19 03:14 UTC))
        );
        assert_eq!(
            parse_advertised_start("Feb. 06, 1945 04:20:00 UTC"),
            Some(datetime!(1945-02-06 04:20 UTC))
        );
        assert_eq!(parse_advertised_start("Feb 30, 1945"), None);
    }
}
