mod common;

use filesig::registry::REGISTRY;
use filesig::SignatureMatcher;

#[test]
fn test_exact_header_is_consistent() {
    common::setup("error");
    let registry = &*REGISTRY;

    assert!(SignatureMatcher::is_consistent_type(registry, "pdf", Some("25504446")));
    assert!(SignatureMatcher::is_consistent_type(registry, "docx", Some("504B0304")));
    assert!(SignatureMatcher::is_consistent_type(registry, "gif", Some("47494638")));
}

#[test]
fn test_longer_observed_header_is_consistent() {
    common::setup("error");
    let registry = &*REGISTRY;

    // Camera screenshots capture FFD8FFFE; the canonical jpeg entry is FFD8FF
    assert!(SignatureMatcher::is_consistent_type(registry, "jpg", Some("FFD8FFFE")));
    assert!(SignatureMatcher::is_consistent_type(registry, "jpeg", Some("FFD8FFE0")));
}

#[test]
fn test_shorter_observed_header_is_consistent() {
    common::setup("error");
    let registry = &*REGISTRY;

    // A 4-byte capture is shorter than the full 8-byte png signature
    assert!(SignatureMatcher::is_consistent_type(registry, "png", Some("89504E47")));
    assert!(SignatureMatcher::is_consistent_type(registry, "doc", Some("D0CF11E0")));
    assert!(SignatureMatcher::is_consistent_type(registry, "mp4", Some("00000018")));
}

#[test]
fn test_mismatched_header_is_inconsistent() {
    common::setup("error");
    let registry = &*REGISTRY;

    // jpeg bytes behind a png extension
    assert!(!SignatureMatcher::is_consistent_type(registry, "png", Some("FFD8FF")));
    assert!(!SignatureMatcher::is_consistent_type(registry, "pdf", Some("504B0304")));
    assert!(!SignatureMatcher::is_consistent_type(registry, "rar", Some("89504E47")));
}

#[test]
fn test_skip_types_always_pass() {
    common::setup("error");
    let registry = &*REGISTRY;

    // An executable header behind a txt extension still passes: txt has no
    // signature to verify against
    assert!(SignatureMatcher::is_consistent_type(registry, "txt", Some("4D5A9000")));
    assert!(SignatureMatcher::is_consistent_type(registry, "txt", None));
    assert!(SignatureMatcher::is_consistent_type(registry, "txt", Some("")));
    assert!(SignatureMatcher::is_consistent_type(registry, "mpeg", Some("FFD8FF")));
}

#[test]
fn test_empty_header_sentinel_short_circuits() {
    common::setup("error");
    let registry = &*REGISTRY;

    assert!(SignatureMatcher::is_consistent_type(registry, "jpg", Some("00000000")));
    assert!(SignatureMatcher::is_consistent_type(registry, "doc", Some("00000000")));
    // Even for a type the registry has never heard of
    assert!(SignatureMatcher::is_consistent_type(registry, "exe", Some("00000000")));
}

#[test]
fn test_absent_or_blank_inputs_fail() {
    common::setup("error");
    let registry = &*REGISTRY;

    assert!(!SignatureMatcher::is_consistent_type(registry, "jpg", None));
    assert!(!SignatureMatcher::is_consistent_type(registry, "", Some("FFD8FF")));
    assert!(!SignatureMatcher::is_consistent_type(registry, "exe", Some("FFD8FF")));
}

#[test]
fn test_types_for_header_exact_lookup() {
    common::setup("error");
    let registry = &*REGISTRY;

    let types = SignatureMatcher::types_for_header(registry, Some("504B0304")).unwrap();
    for expected in ["zip", "docx", "xlsx", "pptx", "mr"] {
        assert!(types.contains(expected), "504B0304 should match {}", expected);
    }

    let types = SignatureMatcher::types_for_header(registry, Some("FFD8FF")).unwrap();
    assert_eq!(types.len(), 2);
    assert!(types.contains("jpg") && types.contains("jpeg"));
}

#[test]
fn test_types_for_header_fuzzy_lookup() {
    common::setup("error");
    let registry = &*REGISTRY;

    // Longer than the canonical signature
    let types = SignatureMatcher::types_for_header(registry, Some("FFD8FFFE")).unwrap();
    assert!(types.contains("jpg") && types.contains("jpeg"));

    // Shorter than every zip-family signature
    let types = SignatureMatcher::types_for_header(registry, Some("504B")).unwrap();
    assert!(types.contains("zip") && types.contains("docx"));
}

#[test]
fn test_types_for_header_no_match() {
    common::setup("error");
    let registry = &*REGISTRY;

    assert!(SignatureMatcher::types_for_header(registry, None).is_none());
    assert!(SignatureMatcher::types_for_header(registry, Some("DEADBEEF")).is_none());
}

#[test]
fn test_types_for_blank_header_hits_skip_entry() {
    common::setup("error");
    let registry = &*REGISTRY;

    // The empty string is itself a registered key (the no-signature types),
    // so the exact lookup applies before any fuzzy matching
    let types = SignatureMatcher::types_for_header(registry, Some("")).unwrap();
    assert!(types.contains("txt"));
    assert!(!types.contains("jpg"));
}

#[test]
fn test_header_lookups_are_case_normalized() {
    common::setup("error");
    let registry = &*REGISTRY;

    assert!(SignatureMatcher::is_consistent_type(registry, "jpg", Some("ffd8fffe")));
    let types = SignatureMatcher::types_for_header(registry, Some("ffd8ff")).unwrap();
    assert!(types.contains("jpg"));
}

#[test]
fn test_extension_validity() {
    common::setup("error");
    let registry = &*REGISTRY;

    assert!(SignatureMatcher::is_valid_extension(registry, "jpg"));
    assert!(SignatureMatcher::is_valid_extension(registry, "txt"));
    // Extensions are exact-match only, no case folding and no fuzz
    assert!(!SignatureMatcher::is_valid_extension(registry, "JPG"));
    assert!(!SignatureMatcher::is_valid_extension(registry, "exe"));
    assert!(!SignatureMatcher::is_valid_extension(registry, ""));
}

#[test]
fn test_header_validity() {
    common::setup("error");
    let registry = &*REGISTRY;

    assert!(SignatureMatcher::is_valid_header(registry, Some("25504446")));
    assert!(SignatureMatcher::is_valid_header(registry, Some("FFD8FFFE")));
    assert!(!SignatureMatcher::is_valid_header(registry, Some("DEADBEEF")));
    assert!(!SignatureMatcher::is_valid_header(registry, None));
}
