// crates/courseware-metadata/src/metadata.rs
// ============================================================================
// Module: Course Metadata Helpers
// Description: Stateless predicates and formatters over course fields.
// Purpose: Compute course display strings and started/ended/certify states.
// Dependencies: crate::{course, dates, encoding, i18n, keys}, time
// ============================================================================

//! ## Overview
//! Every helper here is a pure function of its arguments, with one exception:
//! [`has_course_started`] and [`has_course_ended`] read the UTC wall clock.
//! Their `_at` variants take the comparison time explicitly.
//!
//! Missing dates never fail; they degrade to the "TBD" placeholder for start
//! text and to an empty string for end text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::OffsetDateTime;
use time::macros::datetime;

use crate::course::CertificatesDisplayBehavior;
use crate::course::CourseSummary;
use crate::dates::DateFormat;
use crate::dates::parse_advertised_start;
use crate::encoding::BASE32_PADDING;
use crate::encoding::base32_encode;
use crate::i18n::DateTimeFormatter;
use crate::i18n::KEY_START_TBD;
use crate::i18n::Translator;
use crate::keys::CourseKey;
use crate::keys::CourseLocation;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Placeholder start assigned to courses without an announced start.
pub const DEFAULT_START_DATE: OffsetDateTime = datetime!(2030-01-01 00:00 UTC);
/// Prefix of sanitized course identifiers.
const CLEAN_KEY_PREFIX: &str = "course_";
/// Suffix appended to `DATE_TIME` renderings.
const UTC_SUFFIX: &str = " UTC";

// ============================================================================
// SECTION: Identifiers
// ============================================================================

/// Returns a CSS/HTML-safe identifier for `key`.
///
/// The key's display form is base32 encoded and each `=` padding character is
/// replaced with `padding_char`.
#[must_use]
pub fn clean_course_key(key: &CourseKey, padding_char: char) -> String {
    let encoded = base32_encode(key.to_string().as_bytes());
    let mut out = String::with_capacity(CLEAN_KEY_PREFIX.len() + encoded.len());
    out.push_str(CLEAN_KEY_PREFIX);
    out.extend(encoded.chars().map(|ch| if ch == BASE32_PADDING { padding_char } else { ch }));
    out
}

/// Returns the URL name of a course location.
#[must_use]
pub fn url_name_for_course_location(location: &CourseLocation) -> &str {
    location.name()
}

/// Returns the display name, or the URL name with underscores as spaces.
///
/// Angle brackets are escaped in both cases.
#[must_use]
pub fn display_name_with_default(course: &CourseSummary) -> String {
    let raw = course.display_name.as_ref().map_or_else(
        || url_name_for_course_location(&course.location).replace('_', " "),
        Clone::clone,
    );
    raw.replace('<', "&lt;").replace('>', "&gt;")
}

// ============================================================================
// SECTION: Schedule Predicates
// ============================================================================

/// Returns true when `start` is in the past.
#[must_use]
pub fn has_course_started(start: OffsetDateTime) -> bool {
    has_course_started_at(start, OffsetDateTime::now_utc())
}

/// Returns true when `start` is strictly before `now`.
#[must_use]
pub fn has_course_started_at(start: OffsetDateTime, now: OffsetDateTime) -> bool {
    now > start
}

/// Returns true when `end` is set and in the past.
#[must_use]
pub fn has_course_ended(end: Option<OffsetDateTime>) -> bool {
    has_course_ended_at(end, OffsetDateTime::now_utc())
}

/// Returns true when `end` is set and strictly before `now`.
#[must_use]
pub fn has_course_ended_at(end: Option<OffsetDateTime>, now: OffsetDateTime) -> bool {
    end.is_some_and(|end| now > end)
}

/// Returns true when neither a real nor an advertised start was announced.
#[must_use]
pub fn course_start_date_is_default(start: OffsetDateTime, advertised_start: Option<&str>) -> bool {
    advertised_start.is_none() && start == DEFAULT_START_DATE
}

// ============================================================================
// SECTION: Date Text
// ============================================================================

/// Returns the localized start text for a course.
///
/// An advertised start wins over `start`: it is rendered as a date when it
/// parses as one and is otherwise shown title-cased. Without an advertised
/// start, a non-default `start` is rendered; a default start yields "TBD".
#[must_use]
pub fn course_start_datetime_text(
    start: OffsetDateTime,
    advertised_start: Option<&str>,
    format: &DateFormat,
    translator: &dyn Translator,
    formatter: &dyn DateTimeFormatter,
) -> String {
    if let Some(advertised) = advertised_start {
        return parse_advertised_start(advertised).map_or_else(
            || title_case(advertised),
            |parsed| datetime_to_string(parsed, format, formatter),
        );
    }
    if start != DEFAULT_START_DATE {
        return datetime_to_string(start, format, formatter);
    }
    translator.translate(KEY_START_TBD)
}

/// Returns the localized end text, or an empty string when `end` is unset.
#[must_use]
pub fn course_end_datetime_text(
    end: Option<OffsetDateTime>,
    format: &DateFormat,
    formatter: &dyn DateTimeFormatter,
) -> String {
    end.map_or_else(String::new, |end| datetime_to_string(end, format, formatter))
}

/// Renders a date, appending the UTC suffix when the label is `DATE_TIME`.
fn datetime_to_string(
    value: OffsetDateTime,
    format: &DateFormat,
    formatter: &dyn DateTimeFormatter,
) -> String {
    let label = format.as_str();
    let mut result = formatter.strftime_localized(value, label);
    if label == DateFormat::DateTime.as_str() {
        result.push_str(UTC_SUFFIX);
    }
    result
}

/// Upper-cases the first letter of each word and lower-cases the rest.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_cased = false;
    for ch in value.chars() {
        if previous_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        previous_cased = ch.is_alphabetic();
    }
    out
}

// ============================================================================
// SECTION: Certificates
// ============================================================================

/// Returns true when certificates may be issued for a course.
#[must_use]
pub const fn may_certify_for_course(
    display_behavior: CertificatesDisplayBehavior,
    show_before_end: bool,
    has_ended: bool,
) -> bool {
    display_behavior.shows_early() || show_before_end || has_ended
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("fall 2014"), "Fall 2014");
        assert_eq!(title_case("SPRING term"), "Spring Term");
        assert_eq!(title_case("mid-year 2015b"), "Mid-Year 2015B");
        assert_eq!(title_case(""), "");
    }
}
