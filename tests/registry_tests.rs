mod common;

use filesig::matcher::SignatureMatcher;
use filesig::registry::{SignatureRegistry, EMPTY_HEADER, REGISTRY};

#[test]
fn test_every_registered_pair_is_discoverable() {
    common::setup("error");
    let registry = &*REGISTRY;

    for file_type in registry.types() {
        for &header in registry.headers_for_type(file_type).unwrap() {
            let types = SignatureMatcher::types_for_header(registry, Some(header))
                .unwrap_or_default();
            assert!(
                types.contains(file_type),
                "lookup of registered header {:?} should yield {}",
                header,
                file_type
            );
        }
    }
}

#[test]
fn test_construction_is_deterministic() {
    common::setup("error");

    // Two independent builds and the shared global all agree
    assert_eq!(SignatureRegistry::new(), SignatureRegistry::new());
    assert_eq!(*REGISTRY, SignatureRegistry::new());
}

#[test]
fn test_empty_header_sentinel_shape() {
    // Eight hex chars of zero: the observed header of a 4-byte all-zero read
    assert_eq!(EMPTY_HEADER, "00000000");
}

#[test]
fn test_skip_types_via_public_api() {
    common::setup("error");
    let registry = &*REGISTRY;

    assert!(registry.skip_type("txt"));
    assert!(registry.skip_type("mpeg"));
    assert!(!registry.skip_type("jpg"));
    assert!(!registry.skip_type("rar"));
    // Unknown and empty types are never skip types
    assert!(!registry.skip_type("exe"));
    assert!(!registry.skip_type(""));
}

#[test]
fn test_type_membership_is_case_sensitive() {
    common::setup("error");
    let registry = &*REGISTRY;

    assert!(registry.is_known_type("jpg"));
    assert!(!registry.is_known_type("JPG"));
    assert!(!registry.is_known_type("Jpg"));
}

#[test]
fn test_table_breadth() {
    common::setup("error");
    let registry = &*REGISTRY;

    assert!(registry.type_count() >= 30);

    // One representative per family: text, image, Office old/new, PDF,
    // CAD, video, audio, archive
    for file_type in ["txt", "png", "doc", "docx", "pdf", "dwg", "mkv", "mp3", "7z"] {
        assert!(registry.is_known_type(file_type), "missing {}", file_type);
    }
}
