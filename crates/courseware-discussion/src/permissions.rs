// crates/courseware-discussion/src/permissions.rs
// ============================================================================
// Module: Discussion Permissions
// Description: Editable-field, delete, and update checks for forum content.
// Purpose: Decide what a requester may change on a thread or comment.
// Dependencies: crate::content, serde, thiserror
// ============================================================================

//! ## Overview
//! Permissions derive from two facts: whether the requester authored the
//! content (or, for endorsement, the parent thread) and whether the requester
//! is privileged. Voting and following are open to everyone; content fields
//! are restricted to the author; endorsement is restricted to the thread
//! author. Privileged requesters may do all of it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::content::Comment;
use crate::content::ContentRef;
use crate::content::RequestContext;
use crate::content::Thread;

// ============================================================================
// SECTION: Fields
// ============================================================================

/// Editable content field.
///
/// # Invariants
/// - Ordering is stable; [`EditableFields`] iterates in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditableField {
    /// Follow state of a thread.
    Following,
    /// Vote state of a thread or comment.
    Voted,
    /// Discussion topic of a thread.
    TopicId,
    /// Thread type.
    Type,
    /// Thread title.
    Title,
    /// Body text.
    RawBody,
    /// Endorsement state of a comment.
    Endorsed,
}

impl EditableField {
    /// Every editable field, in stable order.
    pub const ALL: [Self; 7] = [
        Self::Following,
        Self::Voted,
        Self::TopicId,
        Self::Type,
        Self::Title,
        Self::RawBody,
        Self::Endorsed,
    ];

    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Following => "following",
            Self::Voted => "voted",
            Self::TopicId => "topic_id",
            Self::Type => "type",
            Self::Title => "title",
            Self::RawBody => "raw_body",
            Self::Endorsed => "endorsed",
        }
    }

    /// Parses a wire field name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of fields a requester may edit.
pub type EditableFields = BTreeSet<EditableField>;

/// Thread fields that can never be changed through an update.
pub const NON_UPDATABLE_THREAD_FIELDS: &[&str] = &["course_id"];
/// Comment fields that can never be changed through an update.
pub const NON_UPDATABLE_COMMENT_FIELDS: &[&str] = &["thread_id", "parent_id"];

/// Thread fields open to every requester.
const THREAD_OPEN_FIELDS: &[EditableField] = &[EditableField::Following, EditableField::Voted];
/// Thread fields restricted to the author or privileged requesters.
const THREAD_AUTHOR_FIELDS: &[EditableField] = &[
    EditableField::TopicId,
    EditableField::Type,
    EditableField::Title,
    EditableField::RawBody,
];
/// Comment fields open to every requester.
const COMMENT_OPEN_FIELDS: &[EditableField] = &[EditableField::Voted];
/// Comment fields restricted to the author or privileged requesters.
const COMMENT_AUTHOR_FIELDS: &[EditableField] = &[EditableField::RawBody];
/// Comment fields restricted to the thread author or privileged requesters.
const COMMENT_THREAD_AUTHOR_FIELDS: &[EditableField] = &[EditableField::Endorsed];

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Why a requested update field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The field can never be updated.
    NotUpdatable,
    /// The field is not a known content field.
    Unknown,
    /// The requester may not edit the field.
    NotEditable,
}

impl RejectionReason {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotUpdatable => "not_updatable",
            Self::Unknown => "unknown",
            Self::NotEditable => "not_editable",
        }
    }
}

/// A rejected update field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRejection {
    /// Requested field name.
    pub field: String,
    /// Rejection reason.
    pub reason: RejectionReason,
}

/// Errors raised by permission checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// One or more requested update fields were rejected.
    #[error("update rejected: {}", describe_rejections(.0))]
    UpdateRejected(Vec<FieldRejection>),
}

impl PermissionError {
    /// Returns the rejected fields in field-name order.
    #[must_use]
    pub fn rejections(&self) -> &[FieldRejection] {
        match self {
            Self::UpdateRejected(rejections) => rejections,
        }
    }
}

/// Renders rejections as `field (reason)` pairs.
fn describe_rejections(rejections: &[FieldRejection]) -> String {
    rejections
        .iter()
        .map(|rejection| format!("{} ({})", rejection.field, rejection.reason.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Returns true when the requester authored the content or is privileged.
fn is_author_or_privileged(content: ContentRef<'_>, ctx: &RequestContext) -> bool {
    ctx.is_requester_privileged || ctx.is_author(content.author_id())
}

/// Returns the fields the requester may edit on a thread.
#[must_use]
pub fn get_thread_editable_fields(thread: &Thread, ctx: &RequestContext) -> EditableFields {
    let mut fields: EditableFields = THREAD_OPEN_FIELDS.iter().copied().collect();
    if is_author_or_privileged(ContentRef::Thread(thread), ctx) {
        fields.extend(THREAD_AUTHOR_FIELDS.iter().copied());
    }
    fields
}

/// Returns the fields the requester may edit on a comment.
///
/// Endorsement requires authorship of the context thread; without a context
/// thread only privileged requesters may endorse.
#[must_use]
pub fn get_comment_editable_fields(comment: &Comment, ctx: &RequestContext) -> EditableFields {
    let mut fields: EditableFields = COMMENT_OPEN_FIELDS.iter().copied().collect();
    if is_author_or_privileged(ContentRef::Comment(comment), ctx) {
        fields.extend(COMMENT_AUTHOR_FIELDS.iter().copied());
    }
    if ctx.is_requester_privileged || ctx.is_thread_author() {
        fields.extend(COMMENT_THREAD_AUTHOR_FIELDS.iter().copied());
    }
    fields
}

/// Returns the fields the requester may edit on a thread or comment.
#[must_use]
pub fn get_editable_fields(content: ContentRef<'_>, ctx: &RequestContext) -> EditableFields {
    match content {
        ContentRef::Thread(thread) => get_thread_editable_fields(thread, ctx),
        ContentRef::Comment(comment) => get_comment_editable_fields(comment, ctx),
    }
}

/// Returns true when the requester may delete the content.
///
/// Thread authorship does not grant deletion of other users' comments.
#[must_use]
pub fn can_delete(content: ContentRef<'_>, ctx: &RequestContext) -> bool {
    is_author_or_privileged(content, ctx)
}

/// Validates that every requested update field may be changed.
///
/// # Errors
///
/// Returns [`PermissionError::UpdateRejected`] listing every offending field,
/// sorted by name, when any field is not updatable, unknown, or not editable
/// by the requester.
pub fn validate_update<S: AsRef<str>>(
    content: ContentRef<'_>,
    ctx: &RequestContext,
    requested_fields: &[S],
) -> Result<(), PermissionError> {
    let non_updatable = match content {
        ContentRef::Thread(_) => NON_UPDATABLE_THREAD_FIELDS,
        ContentRef::Comment(_) => NON_UPDATABLE_COMMENT_FIELDS,
    };
    let editable = get_editable_fields(content, ctx);
    let mut rejected: BTreeMap<&str, RejectionReason> = BTreeMap::new();
    for field in requested_fields {
        let field = field.as_ref();
        let reason = if non_updatable.contains(&field) {
            RejectionReason::NotUpdatable
        } else {
            match EditableField::parse(field) {
                None => RejectionReason::Unknown,
                Some(parsed) if !editable.contains(&parsed) => RejectionReason::NotEditable,
                Some(_) => continue,
            }
        };
        rejected.insert(field, reason);
    }
    if rejected.is_empty() {
        return Ok(());
    }
    Err(PermissionError::UpdateRejected(
        rejected
            .into_iter()
            .map(|(field, reason)| FieldRejection {
                field: field.to_string(),
                reason,
            })
            .collect(),
    ))
}
