// crates/courseware-metadata/tests/course_keys.rs
// ============================================================================
// Module: Course Key Tests
// Description: Tests for course key parsing, display, and root locations.
// Purpose: Ensure both key forms parse, render, and serialize stably.
// Dependencies: courseware-metadata, serde_json
// ============================================================================
//! ## Overview
//! Validates the deprecated and current course key forms and their root
//! block locations.

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

use courseware_metadata::CourseKey;
use courseware_metadata::CourseKeyError;
use courseware_metadata::CourseLocation;

#[test]
fn parses_and_displays_both_forms() {
    let deprecated: CourseKey = "edX/DemoX.1/Fall_2014".parse().expect("deprecated key");
    assert!(deprecated.is_deprecated());
    assert_eq!(deprecated.org(), "edX");
    assert_eq!(deprecated.course(), "DemoX.1");
    assert_eq!(deprecated.run(), "Fall_2014");
    assert_eq!(deprecated.to_string(), "edX/DemoX.1/Fall_2014");

    let current: CourseKey = "course-v1:UniversityX+CS-203+Y2096".parse().expect("current key");
    assert!(!current.is_deprecated());
    assert_eq!(current.run(), "Y2096");
    assert_eq!(current.to_string(), "course-v1:UniversityX+CS-203+Y2096");
}

#[test]
fn rejects_malformed_keys() {
    assert_eq!(
        "edX/DemoX.1".parse::<CourseKey>(),
        Err(CourseKeyError::Malformed("edX/DemoX.1".to_string()))
    );
    assert_eq!(
        "course-v1:a+b+c+d".parse::<CourseKey>(),
        Err(CourseKeyError::Malformed("course-v1:a+b+c+d".to_string()))
    );
    assert_eq!("edX//run".parse::<CourseKey>(), Err(CourseKeyError::EmptyComponent("course")));
    assert_eq!(
        CourseKey::new("edX", "Demo X", "run"),
        Err(CourseKeyError::InvalidCharacter {
            component: "course",
            found: ' ',
        })
    );
    assert_eq!(
        CourseKey::new("a".repeat(256), "b", "c"),
        Err(CourseKeyError::ComponentTooLong("org"))
    );
}

#[test]
fn root_location_name_depends_on_key_form() {
    let deprecated = CourseKey::deprecated("edX", "DemoX.1", "Fall_2014").expect("key");
    let location = CourseLocation::for_course(deprecated.clone());
    assert_eq!(location.name(), "Fall_2014");
    assert_eq!(location.block_type(), "course");
    assert_eq!(location.course_key(), &deprecated);
    assert_eq!(location.to_string(), "i4x://edX/DemoX.1/course/Fall_2014");

    let current = CourseKey::new("UniversityX", "CS-203", "Y2096").expect("key");
    let location = current.course_location();
    assert_eq!(location.name(), "course");
    assert_eq!(
        location.to_string(),
        "block-v1:UniversityX+CS-203+Y2096+type@course+block@course"
    );
}

#[test]
fn serializes_as_display_string() {
    let key = CourseKey::new("UniversityX", "CS-203", "Y2096").expect("key");
    let json = serde_json::to_string(&key).expect("serialize");
    assert_eq!(json, "\"course-v1:UniversityX+CS-203+Y2096\"");
    let decoded: CourseKey = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, key);

    let invalid = serde_json::from_str::<CourseKey>("\"not a key\"");
    assert!(invalid.is_err());
}
