use std::path::{Path, PathBuf};

use log::{error, info};
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::FileError;
use crate::header;
use crate::{check_file, CheckReport, REGISTRY};

/// Tally of a directory sweep.
#[derive(Debug, Default, Serialize)]
pub struct ScanSummary {
    /// Files with a recognized extension that were checked.
    pub checked: usize,
    pub consistent: usize,
    /// Reports for files whose header contradicts their extension.
    pub inconsistent: Vec<CheckReport>,
    /// Files whose header bytes could not be read.
    pub unreadable: Vec<PathBuf>,
    /// Files skipped because the registry does not know their extension.
    pub skipped_unknown: usize,
}

impl ScanSummary {
    fn merge(&mut self, other: ScanSummary) {
        self.checked += other.checked;
        self.consistent += other.consistent;
        self.inconsistent.extend(other.inconsistent);
        self.unreadable.extend(other.unreadable);
        self.skipped_unknown += other.skipped_unknown;
    }
}

/// Recursively checks every recognized file under a directory.
///
/// Files whose extension the registry does not know are counted and
/// skipped; there is nothing to validate them against.
pub fn scan_directory(dir: &Path) -> Result<ScanSummary, FileError> {
    if !dir.exists() {
        return Err(FileError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(FileError::NotADirectory(dir.to_path_buf()));
    }

    let mut summary = ScanSummary::default();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();

        let known = header::file_extension(path)
            .map_or(false, |ext| REGISTRY.is_known_type(ext));
        if !known {
            summary.skipped_unknown += 1;
            continue;
        }

        match check_file(path) {
            Ok(report) if report.header.is_none() => {
                summary.checked += 1;
                summary.unreadable.push(path.to_path_buf());
            }
            Ok(report) if report.consistent => {
                summary.checked += 1;
                summary.consistent += 1;
            }
            Ok(report) => {
                summary.checked += 1;
                summary.inconsistent.push(report);
            }
            Err(e) => {
                // Raced against deletion or lost permissions mid-walk
                error!("Failed to check {}: {}", path.display(), e);
                summary.checked += 1;
                summary.unreadable.push(path.to_path_buf());
            }
        }
    }

    info!(
        "Scanned {}: {} checked, {} consistent, {} inconsistent, {} unreadable, {} skipped",
        dir.display(),
        summary.checked,
        summary.consistent,
        summary.inconsistent.len(),
        summary.unreadable.len(),
        summary.skipped_unknown
    );

    Ok(summary)
}

/// Scans multiple directories, aggregating the summaries.
pub fn scan_directories(dirs: &[PathBuf]) -> Result<ScanSummary, FileError> {
    let mut summary = ScanSummary::default();

    for dir in dirs {
        summary.merge(scan_directory(dir)?);
    }

    Ok(summary)
}
