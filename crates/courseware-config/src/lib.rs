// crates/courseware-config/src/lib.rs
// ============================================================================
// Module: Courseware Config Library
// Description: Canonical config model and validation for courseware hosts.
// Purpose: Single source of truth for courseware.toml semantics.
// Dependencies: courseware-discussion, courseware-metadata, serde, toml
// ============================================================================

//! ## Overview
//! `courseware-config` defines the configuration model for hosts embedding the
//! courseware helpers. It provides strict, fail-closed validation and wiring
//! helpers that turn configuration into a message catalog and an audit sink.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
