// crates/courseware-discussion/src/content.rs
// ============================================================================
// Module: Discussion Content
// Description: Thread and comment value objects plus the requester context.
// Purpose: Carry the authorship data permission decisions depend on.
// Dependencies: crate::identifiers, serde
// ============================================================================

//! ## Overview
//! Threads and comments are caller-supplied snapshots of comment service
//! records, reduced to the fields permission checks read. A comment refers to
//! its thread by id; the thread record itself travels in the
//! [`RequestContext`] so thread-author decisions (endorsement) can be made.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::identifiers::CommentId;
use crate::identifiers::ThreadId;
use crate::identifiers::UserId;

// ============================================================================
// SECTION: Content Types
// ============================================================================

/// Discussion thread type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadType {
    /// Open-ended discussion.
    #[default]
    Discussion,
    /// Question expecting an endorsed answer.
    Question,
}

/// Discussion thread snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    /// Thread identifier.
    pub id: ThreadId,
    /// Author of the thread.
    pub author_id: UserId,
    /// Thread type.
    #[serde(default)]
    pub thread_type: ThreadType,
}

impl Thread {
    /// Creates a discussion-type thread.
    #[must_use]
    pub fn new(id: impl Into<ThreadId>, author_id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            author_id: author_id.into(),
            thread_type: ThreadType::Discussion,
        }
    }

    /// Sets the thread type.
    #[must_use]
    pub const fn with_type(mut self, thread_type: ThreadType) -> Self {
        self.thread_type = thread_type;
        self
    }
}

/// Discussion comment snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier.
    pub id: CommentId,
    /// Author of the comment.
    pub author_id: UserId,
    /// Parent thread identifier.
    pub thread_id: ThreadId,
}

impl Comment {
    /// Creates a comment on the given thread.
    #[must_use]
    pub fn new(
        id: impl Into<CommentId>,
        author_id: impl Into<UserId>,
        thread_id: impl Into<ThreadId>,
    ) -> Self {
        Self {
            id: id.into(),
            author_id: author_id.into(),
            thread_id: thread_id.into(),
        }
    }
}

// ============================================================================
// SECTION: Content Reference
// ============================================================================

/// Content kind label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// A thread.
    Thread,
    /// A comment or response.
    Comment,
}

impl ContentKind {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thread => "thread",
            Self::Comment => "comment",
        }
    }
}

/// Borrowed thread or comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRef<'a> {
    /// A thread.
    Thread(&'a Thread),
    /// A comment.
    Comment(&'a Comment),
}

impl ContentRef<'_> {
    /// Returns the content kind.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Thread(_) => ContentKind::Thread,
            Self::Comment(_) => ContentKind::Comment,
        }
    }

    /// Returns the content author.
    #[must_use]
    pub const fn author_id(&self) -> &UserId {
        match self {
            Self::Thread(thread) => &thread.author_id,
            Self::Comment(comment) => &comment.author_id,
        }
    }

    /// Returns the content identifier as a string slice.
    #[must_use]
    pub fn id_str(&self) -> &str {
        match self {
            Self::Thread(thread) => thread.id.as_str(),
            Self::Comment(comment) => comment.id.as_str(),
        }
    }
}

impl<'a> From<&'a Thread> for ContentRef<'a> {
    fn from(value: &'a Thread) -> Self {
        Self::Thread(value)
    }
}

impl<'a> From<&'a Comment> for ContentRef<'a> {
    fn from(value: &'a Comment) -> Self {
        Self::Comment(value)
    }
}

// ============================================================================
// SECTION: Request Context
// ============================================================================

/// Requester identity and privilege for one permission decision.
///
/// # Invariants
/// - `thread` is the parent thread when the decision concerns a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Requesting user.
    pub requester_id: UserId,
    /// Whether the requester is a moderator or staff member.
    pub is_requester_privileged: bool,
    /// Parent thread for comment decisions.
    pub thread: Option<Thread>,
}

impl RequestContext {
    /// Creates a context without a parent thread.
    #[must_use]
    pub fn new(requester_id: impl Into<UserId>, is_requester_privileged: bool) -> Self {
        Self {
            requester_id: requester_id.into(),
            is_requester_privileged,
            thread: None,
        }
    }

    /// Attaches the parent thread.
    #[must_use]
    pub fn with_thread(mut self, thread: Thread) -> Self {
        self.thread = Some(thread);
        self
    }

    /// Returns true when the requester authored content by `author_id`.
    #[must_use]
    pub fn is_author(&self, author_id: &UserId) -> bool {
        self.requester_id == *author_id
    }

    /// Returns true when the requester authored the parent thread.
    #[must_use]
    pub fn is_thread_author(&self) -> bool {
        self.thread.as_ref().is_some_and(|thread| self.is_author(&thread.author_id))
    }
}
