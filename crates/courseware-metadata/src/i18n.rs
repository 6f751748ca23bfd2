// crates/courseware-metadata/src/i18n.rs
// ============================================================================
// Module: Courseware Internationalization Helpers
// Description: Message catalogs and localization seams for course text.
// Purpose: Supply translated placeholders and calendar names to the formatters.
// Dependencies: serde, std::collections, std::sync::OnceLock, time
// ============================================================================

//! ## Overview
//! Course metadata text is localized through two seams: a [`Translator`] for
//! plain messages (for example the "TBD" start placeholder) and a
//! [`DateTimeFormatter`] for rendering dates. [`Catalog`] implements both for
//! a single [`Locale`] from static, read-only message tables.
//!
//! ## Invariants
//! - Catalog tables are initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Locale selection is explicit per catalog; there is no global locale.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported locales.
///
/// # Invariants
/// - Variants are stable for config parsing and catalog lookup.
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Catalan.
    Ca,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "ca" => Some(Self::Ca),
            _ => None,
        }
    }
}

/// Ordered list of supported locales.
///
/// # Invariants
/// - Ordering is stable for deterministic presentation.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ca];

// ============================================================================
// SECTION: Seams
// ============================================================================

/// A named argument substituted into `{name}` placeholders.
///
/// # Invariants
/// - `key` is the placeholder name without braces (for example, `date`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArg {
    /// Placeholder name.
    pub key: &'static str,
    /// Preformatted replacement text.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Translates catalog keys into user-facing text.
pub trait Translator {
    /// Returns the translation for `key`.
    fn translate(&self, key: &str) -> String;

    /// Returns the translation for `key` with `{name}` placeholders replaced.
    ///
    /// Placeholders without a matching argument are left as-is.
    fn translate_with(&self, key: &str, args: &[MessageArg]) -> String {
        substitute_args(self.translate(key), args)
    }
}

/// Replaces each `{key}` placeholder in `template` with its argument value.
fn substitute_args(template: String, args: &[MessageArg]) -> String {
    let mut result = template;
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

/// Renders dates using a named or raw strftime-style format.
pub trait DateTimeFormatter {
    /// Formats `value` according to `format`.
    ///
    /// Named formats (`SHORT_DATE`, `LONG_DATE`, `DATE_TIME`, `TIME`) resolve
    /// to locale-specific patterns; anything else is a raw pattern.
    fn strftime_localized(&self, value: OffsetDateTime, format: &str) -> String;
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Catalog key for the "to be determined" start date placeholder.
pub const KEY_START_TBD: &str = "course.start.tbd";
/// Catalog key for the "starts on" banner; takes a `{date}` argument.
pub const KEY_STARTS_ON: &str = "course.start.starts_on";
/// Catalog key for the "ended on" banner; takes a `{date}` argument.
pub const KEY_ENDED_ON: &str = "course.end.ended_on";

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    // TBD stands for "To Be Determined"; shown when a course has no announced start.
    (KEY_START_TBD, "TBD"),
    (KEY_STARTS_ON, "Starts: {date}"),
    (KEY_ENDED_ON, "Ended: {date}"),
    ("strftime.SHORT_DATE_FORMAT", "%b %d, %Y"),
    ("strftime.LONG_DATE_FORMAT", "%A, %B %d, %Y"),
    ("strftime.DATE_TIME_FORMAT", "%b %d, %Y at %H:%M"),
    ("strftime.TIME_FORMAT", "%H:%M:%S"),
    ("strftime.am", "AM"),
    ("strftime.pm", "PM"),
    ("month.abbr.1", "Jan"),
    ("month.abbr.2", "Feb"),
    ("month.abbr.3", "Mar"),
    ("month.abbr.4", "Apr"),
    ("month.abbr.5", "May"),
    ("month.abbr.6", "Jun"),
    ("month.abbr.7", "Jul"),
    ("month.abbr.8", "Aug"),
    ("month.abbr.9", "Sep"),
    ("month.abbr.10", "Oct"),
    ("month.abbr.11", "Nov"),
    ("month.abbr.12", "Dec"),
    ("month.full.1", "January"),
    ("month.full.2", "February"),
    ("month.full.3", "March"),
    ("month.full.4", "April"),
    ("month.full.5", "May"),
    ("month.full.6", "June"),
    ("month.full.7", "July"),
    ("month.full.8", "August"),
    ("month.full.9", "September"),
    ("month.full.10", "October"),
    ("month.full.11", "November"),
    ("month.full.12", "December"),
    ("weekday.abbr.0", "Mon"),
    ("weekday.abbr.1", "Tue"),
    ("weekday.abbr.2", "Wed"),
    ("weekday.abbr.3", "Thu"),
    ("weekday.abbr.4", "Fri"),
    ("weekday.abbr.5", "Sat"),
    ("weekday.abbr.6", "Sun"),
    ("weekday.full.0", "Monday"),
    ("weekday.full.1", "Tuesday"),
    ("weekday.full.2", "Wednesday"),
    ("weekday.full.3", "Thursday"),
    ("weekday.full.4", "Friday"),
    ("weekday.full.5", "Saturday"),
    ("weekday.full.6", "Sunday"),
];

/// Static Catalan catalog entries.
const CATALOG_CA: &[(&str, &str)] = &[
    (KEY_START_TBD, "Per determinar"),
    (KEY_STARTS_ON, "Comença: {date}"),
    (KEY_ENDED_ON, "Va acabar: {date}"),
    ("strftime.SHORT_DATE_FORMAT", "%d %b %Y"),
    ("strftime.LONG_DATE_FORMAT", "%A, %d de %B de %Y"),
    ("strftime.DATE_TIME_FORMAT", "%d %b %Y a les %H:%M"),
    ("month.abbr.1", "gen."),
    ("month.abbr.2", "febr."),
    ("month.abbr.3", "març"),
    ("month.abbr.4", "abr."),
    ("month.abbr.5", "maig"),
    ("month.abbr.6", "juny"),
    ("month.abbr.7", "jul."),
    ("month.abbr.8", "ag."),
    ("month.abbr.9", "set."),
    ("month.abbr.10", "oct."),
    ("month.abbr.11", "nov."),
    ("month.abbr.12", "des."),
    ("month.full.1", "gener"),
    ("month.full.2", "febrer"),
    ("month.full.3", "març"),
    ("month.full.4", "abril"),
    ("month.full.5", "maig"),
    ("month.full.6", "juny"),
    ("month.full.7", "juliol"),
    ("month.full.8", "agost"),
    ("month.full.9", "setembre"),
    ("month.full.10", "octubre"),
    ("month.full.11", "novembre"),
    ("month.full.12", "desembre"),
    ("weekday.abbr.0", "dl."),
    ("weekday.abbr.1", "dt."),
    ("weekday.abbr.2", "dc."),
    ("weekday.abbr.3", "dj."),
    ("weekday.abbr.4", "dv."),
    ("weekday.abbr.5", "ds."),
    ("weekday.abbr.6", "dg."),
    ("weekday.full.0", "dilluns"),
    ("weekday.full.1", "dimarts"),
    ("weekday.full.2", "dimecres"),
    ("weekday.full.3", "dijous"),
    ("weekday.full.4", "divendres"),
    ("weekday.full.5", "dissabte"),
    ("weekday.full.6", "diumenge"),
];

/// Returns the message table for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_CA_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Ca => CATALOG_CA_MAP.get_or_init(|| CATALOG_CA.iter().copied().collect()),
    }
}

/// Locale-bound message catalog.
///
/// # Invariants
/// - Lookups never fail; unknown keys resolve to the key text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Locale used for lookups.
    locale: Locale,
}

impl Catalog {
    /// Creates a catalog for the given locale.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
        }
    }

    /// Returns the catalog locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Looks up `key`, falling back to English.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        catalog_for(self.locale)
            .get(key)
            .copied()
            .or_else(|| catalog_for(Locale::En).get(key).copied())
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        self.lookup(key).map_or_else(|| key.to_string(), str::to_string)
    }
}
