// crates/courseware-metadata/src/lib.rs
// ============================================================================
// Module: Courseware Metadata Library
// Description: Public API surface for course metadata helpers.
// Purpose: Expose course keys, summaries, metadata predicates, and localized dates.
// Dependencies: crate::{course, dates, encoding, i18n, keys, metadata}
// ============================================================================

//! ## Overview
//! Courseware metadata provides the small, stateless helpers a course catalog
//! uses to present a course: sanitized identifiers, escaped display names,
//! started/ended predicates, localized start/end text, and certificate gating.
//! Wall-clock reads are confined to the `has_course_*` convenience wrappers;
//! every predicate also has an explicit-time variant for replayable callers.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod course;
pub mod dates;
pub mod encoding;
pub mod i18n;
pub mod keys;
pub mod metadata;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use course::CertificatesDisplayBehavior;
pub use course::CourseSummary;
pub use dates::DateFormat;
pub use dates::parse_advertised_start;
pub use i18n::Catalog;
pub use i18n::DateTimeFormatter;
pub use i18n::KEY_ENDED_ON;
pub use i18n::KEY_START_TBD;
pub use i18n::KEY_STARTS_ON;
pub use i18n::Locale;
pub use i18n::MessageArg;
pub use i18n::SUPPORTED_LOCALES;
pub use i18n::Translator;
pub use keys::CourseKey;
pub use keys::CourseKeyError;
pub use keys::CourseLocation;
pub use metadata::DEFAULT_START_DATE;
pub use metadata::clean_course_key;
pub use metadata::course_end_datetime_text;
pub use metadata::course_start_date_is_default;
pub use metadata::course_start_datetime_text;
pub use metadata::display_name_with_default;
pub use metadata::has_course_ended;
pub use metadata::has_course_ended_at;
pub use metadata::has_course_started;
pub use metadata::has_course_started_at;
pub use metadata::may_certify_for_course;
pub use metadata::url_name_for_course_location;
