// crates/courseware-discussion/src/authorizer.rs
// ============================================================================
// Module: Discussion Authorizer
// Description: Audited front door for discussion permission checks.
// Purpose: Pair each permission decision with exactly one audit event.
// Dependencies: crate::{audit, content, permissions}
// ============================================================================

//! ## Overview
//! [`DiscussionAuthorizer`] calls the pure predicates in
//! [`crate::permissions`] and records the outcome through a shared
//! [`PermissionAuditSink`]. Results are identical to calling the predicates
//! directly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::audit::NoopAuditSink;
use crate::audit::PermissionAction;
use crate::audit::PermissionAuditEvent;
use crate::audit::PermissionAuditEventParams;
use crate::audit::PermissionAuditSink;
use crate::content::ContentRef;
use crate::content::RequestContext;
use crate::permissions;
use crate::permissions::EditableFields;
use crate::permissions::PermissionError;

// ============================================================================
// SECTION: Authorizer
// ============================================================================

/// Permission checks with audit logging.
///
/// # Invariants
/// - Every public check records exactly one audit event.
#[derive(Clone)]
pub struct DiscussionAuthorizer {
    /// Sink receiving one event per decision.
    sink: Arc<dyn PermissionAuditSink>,
}

impl Default for DiscussionAuthorizer {
    fn default() -> Self {
        Self::new(Arc::new(NoopAuditSink))
    }
}

impl DiscussionAuthorizer {
    /// Creates an authorizer that records to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn PermissionAuditSink>) -> Self {
        Self {
            sink,
        }
    }

    /// Returns the editable fields and records the granted set.
    #[must_use]
    pub fn editable_fields(&self, content: ContentRef<'_>, ctx: &RequestContext) -> EditableFields {
        let fields = permissions::get_editable_fields(content, ctx);
        let names = fields.iter().map(|field| field.as_str().to_string()).collect();
        self.record(PermissionAction::EditableFields, content, ctx, true, names);
        fields
    }

    /// Returns whether deletion is allowed and records the decision.
    #[must_use]
    pub fn can_delete(&self, content: ContentRef<'_>, ctx: &RequestContext) -> bool {
        let allowed = permissions::can_delete(content, ctx);
        self.record(PermissionAction::Delete, content, ctx, allowed, Vec::new());
        allowed
    }

    /// Validates an update and records the rejected fields, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PermissionError`] when any requested field is rejected.
    pub fn validate_update<S: AsRef<str>>(
        &self,
        content: ContentRef<'_>,
        ctx: &RequestContext,
        requested_fields: &[S],
    ) -> Result<(), PermissionError> {
        let result = permissions::validate_update(content, ctx, requested_fields);
        let rejected = result.as_ref().err().map_or_else(Vec::new, |err| {
            err.rejections().iter().map(|rejection| rejection.field.clone()).collect()
        });
        self.record(PermissionAction::Update, content, ctx, result.is_ok(), rejected);
        result
    }

    /// Builds and records an audit event.
    fn record(
        &self,
        action: PermissionAction,
        content: ContentRef<'_>,
        ctx: &RequestContext,
        allowed: bool,
        fields: Vec<String>,
    ) {
        let event = PermissionAuditEvent::new(PermissionAuditEventParams {
            action,
            content_kind: content.kind(),
            content_id: content.id_str().to_string(),
            requester_id: ctx.requester_id.as_str().to_string(),
            privileged: ctx.is_requester_privileged,
            allowed,
            fields,
        });
        self.sink.record(&event);
    }
}
