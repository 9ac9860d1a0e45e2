//! Filesig Library
//!
//! This library validates that a file's declared extension matches its
//! actual content, using known file-signature (magic number) prefixes.

pub mod cli;
pub mod config;
pub mod error;
pub mod header;
pub mod matcher;
pub mod registry;
pub mod scan;
pub mod upload;

// Re-export commonly used items for easier imports
pub use config::CONFIG;
pub use matcher::SignatureMatcher;
pub use registry::{SignatureRegistry, EMPTY_HEADER, REGISTRY};
pub use upload::Upload;

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::error::FileError;

/// Outcome of checking a single file against the registry.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub path: PathBuf,
    /// Declared extension, case as found. None when the filename has none.
    pub extension: Option<String>,
    /// Observed header as uppercase hex. None when the bytes were unreadable.
    pub header: Option<String>,
    /// Whether the extension is one the registry recognizes.
    pub known_extension: bool,
    /// Candidate types for the observed header, sorted for stable output.
    pub candidates: Vec<String>,
    /// Whether the header is consistent with the declared extension.
    pub consistent: bool,
}

/// Checks a single file's extension against its observed header.
///
/// Errors only on files that cannot be opened as files at all; a failed
/// header read is reported as an absent header in the result, and the
/// consistency flag resolves the way the matcher resolves absent input.
pub fn check_file(path: &Path) -> Result<CheckReport, FileError> {
    debug!("Checking {}", path.display());

    let upload = Upload::from_path(path)?;
    let registry = &*REGISTRY;

    let header = upload.header();
    let extension = upload.extension().map(str::to_string);

    let known_extension = extension
        .as_deref()
        .map_or(false, |ext| SignatureMatcher::is_valid_extension(registry, ext));

    let mut candidates: Vec<String> =
        SignatureMatcher::types_for_header(registry, header.as_deref())
            .map(|types| types.into_iter().map(str::to_string).collect())
            .unwrap_or_default();
    candidates.sort_unstable();

    let consistent = extension.as_deref().map_or(false, |ext| {
        SignatureMatcher::is_consistent_type(registry, ext, header.as_deref())
    });

    info!(
        "{}: extension {:?}, header {:?}, consistent: {}",
        upload.file_name(),
        extension,
        header,
        consistent
    );

    Ok(CheckReport {
        path: path.to_path_buf(),
        extension,
        header,
        known_extension,
        candidates,
        consistent,
    })
}
