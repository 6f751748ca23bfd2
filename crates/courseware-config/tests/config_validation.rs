// crates/courseware-config/tests/config_validation.rs
// =============================================================================
// Module: Config Validation Tests
// Description: Validate locale, date format, and audit sink rules.
// Purpose: Ensure invalid configuration fails closed.
// =============================================================================

//! Field validation tests for courseware-config.

#![allow(
    clippy::use_debug,
    reason = "Test-only debug formatting in failure messages is permitted."
)]

mod common;

use courseware_config::AuditSinkKind;
use courseware_config::ConfigError;
use courseware_config::CoursewareConfig;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<CoursewareConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

fn validated(config: CoursewareConfig) -> Result<CoursewareConfig, ConfigError> {
    config.validate()?;
    Ok(config)
}

#[test]
fn unsupported_locale_rejected() -> TestResult {
    assert_invalid(
        CoursewareConfig::from_toml("[i18n]\nlocale = \"fr\"\n"),
        "i18n.locale fr is not supported",
    )
}

#[test]
fn empty_locale_rejected() -> TestResult {
    assert_invalid(CoursewareConfig::from_toml("[i18n]\nlocale = \"  \"\n"), "is not supported")
}

#[test]
fn blank_date_format_rejected() -> TestResult {
    assert_invalid(
        CoursewareConfig::from_toml("[dates]\ndefault_format = \" \"\n"),
        "dates.default_format must be non-empty",
    )
}

#[test]
fn oversized_date_format_rejected() -> TestResult {
    let toml = format!("[dates]\ndefault_format = \"{}\"\n", "%Y".repeat(100));
    assert_invalid(CoursewareConfig::from_toml(&toml), "dates.default_format exceeds max length")
}

#[test]
fn control_characters_in_date_format_rejected() -> TestResult {
    assert_invalid(
        CoursewareConfig::from_toml("[dates]\ndefault_format = \"%Y\\n%m\"\n"),
        "must not contain control characters",
    )
}

#[test]
fn file_sink_requires_path() -> TestResult {
    let config = common::config_with_audit(AuditSinkKind::File, None).map_err(|e| e.to_string())?;
    assert_invalid(validated(config), "audit.path is required for the file sink")
}

#[test]
fn path_forbidden_for_stderr_sink() -> TestResult {
    let config = common::config_with_audit(AuditSinkKind::Stderr, Some("audit.log"))
        .map_err(|e| e.to_string())?;
    assert_invalid(validated(config), "audit.path is only valid for the file sink")
}

#[test]
fn unknown_sink_is_parse_error() -> TestResult {
    match CoursewareConfig::from_toml("[audit]\nsink = \"syslog\"\n") {
        Err(ConfigError::Parse(_)) => Ok(()),
        other => Err(format!("expected parse error, got {other:?}")),
    }
}

#[test]
fn malformed_toml_is_parse_error() -> TestResult {
    match CoursewareConfig::from_toml("[i18n\nlocale = ") {
        Err(ConfigError::Parse(message)) if !message.is_empty() => Ok(()),
        other => Err(format!("expected parse error, got {other:?}")),
    }
}
