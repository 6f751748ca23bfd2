// crates/courseware-metadata/src/keys.rs
// ============================================================================
// Module: Course Keys
// Description: Composite course identifiers and course root locations.
// Purpose: Parse and render course keys in both deprecated and current forms.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A course is identified by `(org, course, run)`. Two serializations exist:
//! the deprecated slash form `org/course/run` and the current form
//! `course-v1:org+course+run`. A parsed key remembers its form so it renders
//! back exactly as it was read, which keeps derived identifiers such as
//! [`crate::clean_course_key`] stable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Prefix of the current course key serialization.
const COURSE_KEY_PREFIX: &str = "course-v1:";
/// Separator between components of the current serialization.
const COURSE_KEY_SEPARATOR: char = '+';
/// Separator between components of the deprecated serialization.
const DEPRECATED_SEPARATOR: char = '/';
/// Block type of the course root block.
const COURSE_BLOCK_TYPE: &str = "course";
/// Block id of the course root block under current keys.
const COURSE_BLOCK_ID: &str = "course";
/// Maximum length of a single key component.
const MAX_COMPONENT_LENGTH: usize = 255;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while parsing a course key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseKeyError {
    /// The key did not have exactly three components.
    #[error("course key must have org, course, and run components: {0}")]
    Malformed(String),
    /// A component was empty.
    #[error("course key component {0} must be non-empty")]
    EmptyComponent(&'static str),
    /// A component exceeded the length limit.
    #[error("course key component {0} exceeds max length")]
    ComponentTooLong(&'static str),
    /// A component contained a character outside the allowed set.
    #[error("course key component {component} contains invalid character {found:?}")]
    InvalidCharacter {
        /// Component name.
        component: &'static str,
        /// Offending character.
        found: char,
    },
}

// ============================================================================
// SECTION: Course Key
// ============================================================================

/// Composite course identifier.
///
/// # Invariants
/// - `org`, `course`, and `run` are non-empty and contain only
///   alphanumerics, `_`, `-`, `~`, `.`, or `:`.
/// - `deprecated` selects the slash serialization for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseKey {
    /// Owning organization.
    org: String,
    /// Course code.
    course: String,
    /// Course run.
    run: String,
    /// Whether the key uses the deprecated slash serialization.
    deprecated: bool,
}

impl CourseKey {
    /// Builds a key in the current `course-v1:` form.
    ///
    /// # Errors
    ///
    /// Returns [`CourseKeyError`] when a component is empty or malformed.
    pub fn new(
        org: impl Into<String>,
        course: impl Into<String>,
        run: impl Into<String>,
    ) -> Result<Self, CourseKeyError> {
        Self::build(org.into(), course.into(), run.into(), false)
    }

    /// Builds a key in the deprecated `org/course/run` form.
    ///
    /// # Errors
    ///
    /// Returns [`CourseKeyError`] when a component is empty or malformed.
    pub fn deprecated(
        org: impl Into<String>,
        course: impl Into<String>,
        run: impl Into<String>,
    ) -> Result<Self, CourseKeyError> {
        Self::build(org.into(), course.into(), run.into(), true)
    }

    /// Validates components and assembles the key.
    fn build(
        org: String,
        course: String,
        run: String,
        deprecated: bool,
    ) -> Result<Self, CourseKeyError> {
        validate_component("org", &org)?;
        validate_component("course", &course)?;
        validate_component("run", &run)?;
        Ok(Self {
            org,
            course,
            run,
            deprecated,
        })
    }

    /// Returns the organization component.
    #[must_use]
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Returns the course code component.
    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    /// Returns the run component.
    #[must_use]
    pub fn run(&self) -> &str {
        &self.run
    }

    /// Returns true when the key renders in the deprecated slash form.
    #[must_use]
    pub const fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Returns the location of this course's root block.
    #[must_use]
    pub fn course_location(&self) -> CourseLocation {
        CourseLocation::for_course(self.clone())
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.deprecated {
            write!(f, "{}/{}/{}", self.org, self.course, self.run)
        } else {
            write!(f, "{COURSE_KEY_PREFIX}{}+{}+{}", self.org, self.course, self.run)
        }
    }
}

impl FromStr for CourseKey {
    type Err = CourseKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (body, separator, deprecated) = value.strip_prefix(COURSE_KEY_PREFIX).map_or(
            (value, DEPRECATED_SEPARATOR, true),
            |rest| (rest, COURSE_KEY_SEPARATOR, false),
        );
        let mut parts = body.split(separator);
        let (Some(org), Some(course), Some(run), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(CourseKeyError::Malformed(value.to_string()));
        };
        Self::build(org.to_string(), course.to_string(), run.to_string(), deprecated)
    }
}

impl TryFrom<String> for CourseKey {
    type Error = CourseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CourseKey> for String {
    fn from(value: CourseKey) -> Self {
        value.to_string()
    }
}

// ============================================================================
// SECTION: Course Location
// ============================================================================

/// Usage location of a course root block.
///
/// # Invariants
/// - `name` is the run for deprecated keys and `course` for current keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseLocation {
    /// Key of the owning course.
    course_key: CourseKey,
    /// Block type (always `course` for root locations).
    block_type: String,
    /// Block name used as the URL name.
    name: String,
}

impl CourseLocation {
    /// Returns the root block location for a course key.
    #[must_use]
    pub fn for_course(course_key: CourseKey) -> Self {
        let name = if course_key.is_deprecated() {
            course_key.run().to_string()
        } else {
            COURSE_BLOCK_ID.to_string()
        };
        Self {
            course_key,
            block_type: COURSE_BLOCK_TYPE.to_string(),
            name,
        }
    }

    /// Returns the owning course key.
    #[must_use]
    pub const fn course_key(&self) -> &CourseKey {
        &self.course_key
    }

    /// Returns the block type.
    #[must_use]
    pub fn block_type(&self) -> &str {
        &self.block_type
    }

    /// Returns the block name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CourseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = &self.course_key;
        if key.is_deprecated() {
            write!(f, "i4x://{}/{}/{}/{}", key.org(), key.course(), self.block_type, self.name)
        } else {
            write!(
                f,
                "block-v1:{}+{}+{}+type@{}+block@{}",
                key.org(),
                key.course(),
                key.run(),
                self.block_type,
                self.name
            )
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates a single key component.
fn validate_component(component: &'static str, value: &str) -> Result<(), CourseKeyError> {
    if value.is_empty() {
        return Err(CourseKeyError::EmptyComponent(component));
    }
    if value.len() > MAX_COMPONENT_LENGTH {
        return Err(CourseKeyError::ComponentTooLong(component));
    }
    if let Some(found) = value.chars().find(|ch| !is_allowed_char(*ch)) {
        return Err(CourseKeyError::InvalidCharacter {
            component,
            found,
        });
    }
    Ok(())
}

/// Returns true for characters permitted inside key components.
fn is_allowed_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '-' | '~' | '.' | ':')
}
