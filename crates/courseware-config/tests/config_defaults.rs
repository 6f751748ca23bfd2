// crates/courseware-config/tests/config_defaults.rs
// =============================================================================
// Module: Config Default Tests
// Description: Validate defaults applied to empty and partial configs.
// Purpose: Ensure omitted sections resolve to documented defaults.
// =============================================================================

//! Default value tests for courseware-config.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use courseware_config::AuditSinkKind;
use courseware_config::CoursewareConfig;
use courseware_metadata::DateFormat;
use courseware_metadata::Locale;
use courseware_metadata::Translator;

#[test]
fn empty_config_uses_defaults() {
    let config = common::minimal_config().expect("parse");
    config.validate().expect("defaults are valid");
    assert_eq!(config.i18n.locale, "en");
    assert_eq!(config.i18n.locale(), Locale::En);
    assert_eq!(config.dates.default_format, DateFormat::DateTime);
    assert_eq!(config.audit.sink, AuditSinkKind::None);
    assert!(config.audit.path.is_none());
}

#[test]
fn catalog_follows_configured_locale() {
    let config = CoursewareConfig::from_toml("[i18n]\nlocale = \"ca-ES\"\n").expect("config");
    let catalog = config.catalog();
    assert_eq!(catalog.locale(), Locale::Ca);
    assert_eq!(catalog.translate("course.start.tbd"), "Per determinar");
}

#[test]
fn named_and_raw_date_formats_parse() {
    let named =
        CoursewareConfig::from_toml("[dates]\ndefault_format = \"SHORT_DATE\"\n").expect("named");
    assert_eq!(named.dates.default_format, DateFormat::ShortDate);
    let raw = CoursewareConfig::from_toml("[dates]\ndefault_format = \"%Y/%m/%d\"\n").expect("raw");
    assert_eq!(raw.dates.default_format, DateFormat::Pattern("%Y/%m/%d".to_string()));
}

#[test]
fn none_sink_builds_without_path() {
    let config = common::config_with_audit(AuditSinkKind::None, None).expect("config");
    assert!(config.audit.build_sink().is_ok());
}
