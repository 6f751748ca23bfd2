// crates/courseware-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for courseware-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use courseware_config::AuditSinkKind;
use courseware_config::CoursewareConfig;

/// Parses a TOML string into a `CoursewareConfig` without validation.
pub fn config_from_toml(toml_str: &str) -> Result<CoursewareConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<CoursewareConfig, toml::de::Error> {
    config_from_toml("")
}

/// Returns a minimal config with the provided audit sink settings.
pub fn config_with_audit(
    sink: AuditSinkKind,
    path: Option<&str>,
) -> Result<CoursewareConfig, toml::de::Error> {
    let mut config = minimal_config()?;
    config.audit.sink = sink;
    config.audit.path = path.map(ToString::to_string);
    Ok(config)
}
