// crates/courseware-config/src/config.rs
// ============================================================================
// Module: Courseware Configuration
// Description: Configuration loading and validation for courseware hosts.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: courseware-discussion, courseware-metadata, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! It selects the locale used for course text, the default date format, and
//! the audit sink for discussion permission decisions. Missing sections take
//! defaults; invalid values fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use courseware_discussion::FileAuditSink;
use courseware_discussion::NoopAuditSink;
use courseware_discussion::PermissionAuditSink;
use courseware_discussion::StderrAuditSink;
use courseware_metadata::Catalog;
use courseware_metadata::DateFormat;
use courseware_metadata::Locale;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "courseware.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "COURSEWARE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a date format pattern.
pub(crate) const MAX_DATE_FORMAT_LENGTH: usize = 128;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Courseware host configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoursewareConfig {
    /// Localization configuration.
    #[serde(default)]
    pub i18n: I18nConfig,
    /// Date rendering configuration.
    #[serde(default)]
    pub dates: DatesConfig,
    /// Permission audit configuration.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl CoursewareConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path);
        check_path_limits("config path", &resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.i18n.validate()?;
        self.dates.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Returns the message catalog for the configured locale.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.i18n.locale())
    }
}

/// Localization configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct I18nConfig {
    /// Locale tag (for example `en`, `en-US`, or `ca`).
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

impl I18nConfig {
    /// Returns the parsed locale, falling back to English.
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::parse(&self.locale).unwrap_or_default()
    }

    /// Validates the locale tag.
    fn validate(&self) -> Result<(), ConfigError> {
        if Locale::parse(&self.locale).is_none() {
            return Err(ConfigError::Invalid(format!(
                "i18n.locale {} is not supported",
                self.locale.trim()
            )));
        }
        Ok(())
    }
}

/// Date rendering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatesConfig {
    /// Default format for course start/end text.
    #[serde(default = "default_date_format")]
    pub default_format: DateFormat,
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            default_format: default_date_format(),
        }
    }
}

impl DatesConfig {
    /// Validates the default format.
    fn validate(&self) -> Result<(), ConfigError> {
        let DateFormat::Pattern(pattern) = &self.default_format else {
            return Ok(());
        };
        if pattern.trim().is_empty() {
            return Err(ConfigError::Invalid("dates.default_format must be non-empty".to_string()));
        }
        if pattern.len() > MAX_DATE_FORMAT_LENGTH {
            return Err(ConfigError::Invalid("dates.default_format exceeds max length".to_string()));
        }
        if pattern.chars().any(char::is_control) {
            return Err(ConfigError::Invalid(
                "dates.default_format must not contain control characters".to_string(),
            ));
        }
        Ok(())
    }
}

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Discard audit events.
    #[default]
    None,
    /// JSON lines on stderr.
    Stderr,
    /// JSON lines appended to a file.
    File,
}

/// Permission audit configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    /// Sink selection.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Log file path (file sink only).
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditConfig {
    /// Validates sink settings.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (AuditSinkKind::File, Some(path)) => check_audit_path(path),
            (AuditSinkKind::File, None) => {
                Err(ConfigError::Invalid("audit.path is required for the file sink".to_string()))
            }
            (_, Some(_)) => {
                Err(ConfigError::Invalid("audit.path is only valid for the file sink".to_string()))
            }
            (_, None) => Ok(()),
        }
    }

    /// Builds the configured audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the sink cannot be opened.
    pub fn build_sink(&self) -> Result<Arc<dyn PermissionAuditSink>, ConfigError> {
        match self.sink {
            AuditSinkKind::None => Ok(Arc::new(NoopAuditSink)),
            AuditSinkKind::Stderr => Ok(Arc::new(StderrAuditSink)),
            AuditSinkKind::File => {
                let path = self.path.as_deref().ok_or_else(|| {
                    ConfigError::Invalid("audit.path is required for the file sink".to_string())
                })?;
                let sink = FileAuditSink::new(Path::new(path.trim()))
                    .map_err(|err| ConfigError::Io(err.to_string()))?;
                Ok(Arc::new(sink))
            }
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default locale tag.
fn default_locale() -> String {
    Locale::En.as_str().to_string()
}

/// Default date format for course text.
const fn default_date_format() -> DateFormat {
    DateFormat::DateTime
}

/// Picks the config path: explicit argument, then environment, then default.
fn resolve_path(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Rejects paths over the total or per-component length limits.
fn check_path_limits(label: &str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{label} exceeds max length")));
    }
    let oversized =
        path.components().any(|part| part.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH);
    if oversized {
        return Err(ConfigError::Invalid(format!("{label} component too long")));
    }
    Ok(())
}

/// Validates the audit log path string.
fn check_audit_path(value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid("audit.path must be non-empty".to_string()));
    }
    check_path_limits("audit.path", Path::new(trimmed))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use std::path::Path;

    use super::MAX_PATH_COMPONENT_LENGTH;
    use super::MAX_TOTAL_PATH_LENGTH;
    use super::check_audit_path;
    use super::check_path_limits;
    use super::resolve_path;

    #[test]
    fn audit_path_accepts_relative_log_file() {
        assert!(check_audit_path("./logs/permissions.log").is_ok());
    }

    #[test]
    fn audit_path_rejects_blank_value() {
        let err = check_audit_path("   ").unwrap_err();
        assert_eq!(err.to_string(), "invalid config: audit.path must be non-empty");
    }

    #[test]
    fn audit_path_rejects_overlong_value() {
        let long_path = "a/".repeat(MAX_TOTAL_PATH_LENGTH / 2 + 1);
        let err = check_audit_path(&long_path).unwrap_err();
        assert_eq!(err.to_string(), "invalid config: audit.path exceeds max length");
    }

    #[test]
    fn path_limits_reject_long_component() {
        let component = "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1);
        let err = check_path_limits("config path", Path::new(&component)).unwrap_err();
        assert_eq!(err.to_string(), "invalid config: config path component too long");
    }

    #[test]
    fn explicit_path_wins_over_defaults() {
        assert_eq!(resolve_path(Some(Path::new("custom.toml"))), Path::new("custom.toml"));
    }
}
