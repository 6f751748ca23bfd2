// crates/courseware-discussion/src/lib.rs
// ============================================================================
// Module: Courseware Discussion Library
// Description: Public API surface for discussion forum permissions.
// Purpose: Expose content types, permission predicates, and audit sinks.
// Dependencies: crate::{audit, authorizer, content, identifiers, permissions}
// ============================================================================

//! ## Overview
//! Discussion permissions decide which fields a requester may edit on a
//! thread or comment and whether they may delete it. Decisions depend only on
//! authorship and a privilege flag; the predicates are pure and can be called
//! directly. [`DiscussionAuthorizer`] wraps them and records an audit event
//! per decision.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod authorizer;
pub mod content;
pub mod identifiers;
pub mod permissions;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::FileAuditSink;
pub use audit::MemoryAuditSink;
pub use audit::NoopAuditSink;
pub use audit::PermissionAction;
pub use audit::PermissionAuditEvent;
pub use audit::PermissionAuditEventParams;
pub use audit::PermissionAuditSink;
pub use audit::StderrAuditSink;
pub use authorizer::DiscussionAuthorizer;
pub use content::Comment;
pub use content::ContentKind;
pub use content::ContentRef;
pub use content::RequestContext;
pub use content::Thread;
pub use content::ThreadType;
pub use identifiers::CommentId;
pub use identifiers::ThreadId;
pub use identifiers::UserId;
pub use permissions::EditableField;
pub use permissions::EditableFields;
pub use permissions::FieldRejection;
pub use permissions::NON_UPDATABLE_COMMENT_FIELDS;
pub use permissions::NON_UPDATABLE_THREAD_FIELDS;
pub use permissions::PermissionError;
pub use permissions::RejectionReason;
pub use permissions::can_delete;
pub use permissions::get_comment_editable_fields;
pub use permissions::get_editable_fields;
pub use permissions::get_thread_editable_fields;
pub use permissions::validate_update;
