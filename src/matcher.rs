// Signature matching against the registry
// All operations are pure reads; observed headers arrive as Option, where
// None means the collaborator could not extract one.

use std::collections::HashSet;

use log::debug;

use crate::registry::{SignatureRegistry, EMPTY_HEADER};

pub struct SignatureMatcher;

impl SignatureMatcher {
    /// Candidate file types for an observed header.
    ///
    /// Tries the exact inverse-index entry first. On a miss, falls back to a
    /// prefix scan in both directions: captured headers are sometimes longer
    /// than the canonical signature (FFD8FFFE vs FFD8FF for jpeg) and some
    /// signatures are recorded longer than the four bytes we capture. All
    /// matching candidates are returned; ambiguity is the caller's to handle.
    pub fn types_for_header(
        registry: &SignatureRegistry,
        header: Option<&str>,
    ) -> Option<HashSet<&'static str>> {
        let header = header?.to_ascii_uppercase();

        if let Some(types) = registry.types_for_exact_header(&header) {
            return Some(types.clone());
        }

        debug!("No exact entry for header {}, trying prefix match", header);
        let mut matched: HashSet<&'static str> = HashSet::new();
        for (registered, types) in registry.header_entries() {
            if !registered.is_empty() && prefix_related(registered, &header) {
                matched.extend(types.iter().copied());
            }
        }

        if matched.is_empty() {
            None
        } else {
            Some(matched)
        }
    }

    /// Whether the extension is one the registry knows. Exact and
    /// case-sensitive; extensions get no fuzzy treatment.
    pub fn is_valid_extension(registry: &SignatureRegistry, file_type: &str) -> bool {
        registry.is_known_type(file_type)
    }

    /// Whether the observed header maps to at least one known type.
    pub fn is_valid_header(registry: &SignatureRegistry, header: Option<&str>) -> bool {
        Self::types_for_header(registry, header).map_or(false, |types| !types.is_empty())
    }

    /// Whether the observed header is consistent with what the declared
    /// extension predicts. The primary validation entry point.
    pub fn is_consistent_type(
        registry: &SignatureRegistry,
        file_type: &str,
        header: Option<&str>,
    ) -> bool {
        // Types with no reliable signature cannot fail the check
        if registry.skip_type(file_type) {
            return true;
        }

        let header = header.map(|h| h.to_ascii_uppercase());

        // An all-zero header is known-good regardless of declared type;
        // empty Office documents report one
        if header.as_deref() == Some(EMPTY_HEADER) {
            return true;
        }

        // Without both an extension and a header there is nothing to compare
        let (header, expected) = match (header, registry.headers_for_type(file_type)) {
            (Some(header), Some(expected))
                if !file_type.trim().is_empty() && !expected.is_empty() =>
            {
                (header, expected)
            }
            _ => return false,
        };

        if expected.contains(header.as_str()) {
            return true;
        }

        expected
            .iter()
            .any(|&registered| !registered.is_empty() && prefix_related(registered, &header))
    }
}

/// Prefix relation in either direction, the tolerance mechanism for length
/// mismatch between captured headers and recorded signatures.
fn prefix_related(a: &str, b: &str) -> bool {
    a.starts_with(b) || b.starts_with(a)
}
