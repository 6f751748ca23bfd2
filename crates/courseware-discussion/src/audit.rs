// crates/courseware-discussion/src/audit.rs
// ============================================================================
// Module: Discussion Permission Audit Logging
// Description: Structured audit events for discussion permission decisions.
// Purpose: Emit JSON-line audit logs without hard dependencies.
// Dependencies: crate::content, serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines the audit event payload for permission decisions and
//! the sinks that persist it. Sinks are deliberately small so hosts can route
//! events into their own logging pipeline.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Deserialize;
use serde::Serialize;

use crate::content::ContentKind;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Permission decision being audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    /// Editable-field computation.
    EditableFields,
    /// Delete authorization.
    Delete,
    /// Update field validation.
    Update,
}

/// Permission audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionAuditEvent {
    /// Event identifier.
    pub event: String,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Decision being audited.
    pub action: PermissionAction,
    /// Kind of content the decision concerns.
    pub content_kind: ContentKind,
    /// Content identifier.
    pub content_id: String,
    /// Requesting user.
    pub requester_id: String,
    /// Whether the requester was privileged.
    pub privileged: bool,
    /// Whether the request was allowed.
    pub allowed: bool,
    /// Fields granted (editable fields) or rejected (update), in stable order.
    pub fields: Vec<String>,
}

/// Inputs required to construct a permission audit event.
pub struct PermissionAuditEventParams {
    /// Decision being audited.
    pub action: PermissionAction,
    /// Kind of content the decision concerns.
    pub content_kind: ContentKind,
    /// Content identifier.
    pub content_id: String,
    /// Requesting user.
    pub requester_id: String,
    /// Whether the requester was privileged.
    pub privileged: bool,
    /// Whether the request was allowed.
    pub allowed: bool,
    /// Fields granted or rejected.
    pub fields: Vec<String>,
}

impl PermissionAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: PermissionAuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "discussion_permission".to_string(),
            timestamp_ms,
            action: params.action,
            content_kind: params.content_kind,
            content_id: params.content_id,
            requester_id: params.requester_id,
            privileged: params.privileged,
            allowed: params.allowed,
            fields: params.fields,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for permission decisions.
pub trait PermissionAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &PermissionAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl PermissionAuditSink for StderrAuditSink {
    fn record(&self, event: &PermissionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl PermissionAuditSink for FileAuditSink {
    fn record(&self, event: &PermissionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl PermissionAuditSink for NoopAuditSink {
    fn record(&self, _event: &PermissionAuditEvent) {}
}

/// Audit sink that retains events in memory.
#[derive(Default)]
pub struct MemoryAuditSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<PermissionAuditEvent>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<PermissionAuditEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl PermissionAuditSink for MemoryAuditSink {
    fn record(&self, event: &PermissionAuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
