// crates/courseware-metadata/src/course.rs
// ============================================================================
// Module: Course Summary
// Description: Caller-supplied course value object and certificate settings.
// Purpose: Bundle the course fields consumed by the metadata helpers.
// Dependencies: crate::{dates, i18n, keys, metadata}, serde, time
// ============================================================================

//! ## Overview
//! [`CourseSummary`] carries exactly the course fields the metadata helpers
//! read. It is a transient value owned by the caller; nothing here persists
//! or mutates it. The convenience methods delegate to the free functions in
//! [`crate::metadata`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::dates::DateFormat;
use crate::i18n::DateTimeFormatter;
use crate::i18n::Translator;
use crate::keys::CourseKey;
use crate::keys::CourseLocation;
use crate::metadata;

// ============================================================================
// SECTION: Certificate Display Behavior
// ============================================================================

/// When certificates become visible to learners.
///
/// # Invariants
/// - Unknown labels map to [`CertificatesDisplayBehavior::End`], including
///   when deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CertificatesDisplayBehavior {
    /// Show certificates early, including certificate information.
    EarlyWithInfo,
    /// Show certificates early, without certificate information.
    EarlyNoInfo,
    /// Show certificates once the course has ended.
    #[default]
    End,
}

impl CertificatesDisplayBehavior {
    /// Parses a behavior label, defaulting to `End` for unknown labels.
    #[must_use]
    pub fn from_label(value: &str) -> Self {
        match value {
            "early_with_info" => Self::EarlyWithInfo,
            "early_no_info" => Self::EarlyNoInfo,
            _ => Self::End,
        }
    }

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EarlyWithInfo => "early_with_info",
            Self::EarlyNoInfo => "early_no_info",
            Self::End => "end",
        }
    }

    /// Returns true when certificates are shown before the course ends.
    #[must_use]
    pub const fn shows_early(self) -> bool {
        matches!(self, Self::EarlyWithInfo | Self::EarlyNoInfo)
    }
}

impl From<String> for CertificatesDisplayBehavior {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<CertificatesDisplayBehavior> for String {
    fn from(value: CertificatesDisplayBehavior) -> Self {
        value.as_str().to_string()
    }
}

// ============================================================================
// SECTION: Course Summary
// ============================================================================

/// Course fields consumed by the metadata helpers.
///
/// # Invariants
/// - `location` is the root block location of `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    /// Course key.
    pub id: CourseKey,
    /// Root block location.
    pub location: CourseLocation,
    /// Display name, when one was set.
    pub display_name: Option<String>,
    /// Scheduled start.
    pub start: OffsetDateTime,
    /// Scheduled end, when one was set.
    pub end: Option<OffsetDateTime>,
    /// Human-readable placeholder start.
    pub advertised_start: Option<String>,
    /// Certificate display behavior.
    pub certificates_display_behavior: CertificatesDisplayBehavior,
    /// Show certificates before the course ends regardless of behavior.
    pub certificates_show_before_end: bool,
}

impl CourseSummary {
    /// Creates a summary with the default start date and no optional fields.
    #[must_use]
    pub fn new(id: CourseKey) -> Self {
        let location = id.course_location();
        Self {
            id,
            location,
            display_name: None,
            start: metadata::DEFAULT_START_DATE,
            end: None,
            advertised_start: None,
            certificates_display_behavior: CertificatesDisplayBehavior::default(),
            certificates_show_before_end: false,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the scheduled start.
    #[must_use]
    pub fn with_start(mut self, start: OffsetDateTime) -> Self {
        self.start = start;
        self
    }

    /// Sets the scheduled end.
    #[must_use]
    pub fn with_end(mut self, end: OffsetDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the advertised start.
    #[must_use]
    pub fn with_advertised_start(mut self, advertised_start: impl Into<String>) -> Self {
        self.advertised_start = Some(advertised_start.into());
        self
    }

    /// Sets certificate display options.
    #[must_use]
    pub fn with_certificates(
        mut self,
        behavior: CertificatesDisplayBehavior,
        show_before_end: bool,
    ) -> Self {
        self.certificates_display_behavior = behavior;
        self.certificates_show_before_end = show_before_end;
        self
    }

    /// Returns the CSS/HTML-safe course identifier.
    #[must_use]
    pub fn clean_id(&self, padding_char: char) -> String {
        metadata::clean_course_key(&self.id, padding_char)
    }

    /// Returns the URL name of the course root block.
    #[must_use]
    pub fn url_name(&self) -> &str {
        metadata::url_name_for_course_location(&self.location)
    }

    /// Returns the escaped display name or its fallback.
    #[must_use]
    pub fn display_name_with_default(&self) -> String {
        metadata::display_name_with_default(self)
    }

    /// Returns true when the course has started as of now.
    #[must_use]
    pub fn has_started(&self) -> bool {
        metadata::has_course_started(self.start)
    }

    /// Returns true when the course has ended as of now.
    #[must_use]
    pub fn has_ended(&self) -> bool {
        metadata::has_course_ended(self.end)
    }

    /// Returns true when no real or advertised start has been announced.
    #[must_use]
    pub fn start_date_is_still_default(&self) -> bool {
        metadata::course_start_date_is_default(self.start, self.advertised_start.as_deref())
    }

    /// Returns the localized start text.
    #[must_use]
    pub fn start_datetime_text(
        &self,
        format: &DateFormat,
        translator: &dyn Translator,
        formatter: &dyn DateTimeFormatter,
    ) -> String {
        metadata::course_start_datetime_text(
            self.start,
            self.advertised_start.as_deref(),
            format,
            translator,
            formatter,
        )
    }

    /// Returns the localized end text, or an empty string without an end.
    #[must_use]
    pub fn end_datetime_text(&self, format: &DateFormat, formatter: &dyn DateTimeFormatter) -> String {
        metadata::course_end_datetime_text(self.end, format, formatter)
    }

    /// Returns true when certificates may be issued as of now.
    #[must_use]
    pub fn may_certify(&self) -> bool {
        metadata::may_certify_for_course(
            self.certificates_display_behavior,
            self.certificates_show_before_end,
            self.has_ended(),
        )
    }
}
