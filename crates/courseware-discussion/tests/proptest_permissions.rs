// crates/courseware-discussion/tests/proptest_permissions.rs
// ============================================================================
// Module: Permission Property-Based Tests
// Description: Property tests for permission predicates over arbitrary ids.
// Purpose: Check authorship/privilege invariants beyond fixed fixtures.
// ============================================================================

//! Property-based tests for discussion permissions.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use courseware_discussion::Comment;
use courseware_discussion::EditableField;
use courseware_discussion::RequestContext;
use courseware_discussion::Thread;
use courseware_discussion::can_delete;
use courseware_discussion::get_comment_editable_fields;
use courseware_discussion::get_thread_editable_fields;
use courseware_discussion::validate_update;
use proptest::prelude::*;

proptest! {
    #[test]
    fn thread_permissions_follow_authorship(
        requester in "[a-z0-9]{1,6}",
        author in "[a-z0-9]{1,6}",
        privileged in any::<bool>(),
    ) {
        let thread = Thread::new("t", author.as_str());
        let ctx = RequestContext::new(requester.as_str(), privileged);
        let allowed = privileged || requester == author;
        let fields = get_thread_editable_fields(&thread, &ctx);
        prop_assert!(fields.contains(&EditableField::Voted));
        prop_assert_eq!(fields.contains(&EditableField::Title), allowed);
        prop_assert_eq!(can_delete((&thread).into(), &ctx), allowed);
    }

    #[test]
    fn comment_permissions_follow_authorship(
        requester in "[a-z0-9]{1,6}",
        author in "[a-z0-9]{1,6}",
        thread_author in "[a-z0-9]{1,6}",
        privileged in any::<bool>(),
    ) {
        let comment = Comment::new("c", author.as_str(), "t");
        let ctx = RequestContext::new(requester.as_str(), privileged)
            .with_thread(Thread::new("t", thread_author.as_str()));
        let fields = get_comment_editable_fields(&comment, &ctx);
        prop_assert!(fields.contains(&EditableField::Voted));
        prop_assert_eq!(fields.contains(&EditableField::RawBody), privileged || requester == author);
        prop_assert_eq!(
            fields.contains(&EditableField::Endorsed),
            privileged || requester == thread_author
        );
        prop_assert_eq!(can_delete((&comment).into(), &ctx), privileged || requester == author);
    }

    #[test]
    fn editable_fields_always_validate(
        requester in "[a-z0-9]{1,6}",
        author in "[a-z0-9]{1,6}",
        privileged in any::<bool>(),
    ) {
        let thread = Thread::new("t", author.as_str());
        let ctx = RequestContext::new(requester.as_str(), privileged);
        let names: Vec<&str> =
            get_thread_editable_fields(&thread, &ctx).into_iter().map(EditableField::as_str).collect();
        prop_assert_eq!(validate_update((&thread).into(), &ctx, &names), Ok(()));
    }
}
