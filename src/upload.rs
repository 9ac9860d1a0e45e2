use std::path::{Path, PathBuf};

use log::error;

use crate::error::FileError;
use crate::header;

/// Upload-like wrapper around a filesystem path.
///
/// Gives the matcher the two pieces of information the boundary contract
/// requires, the declared extension and the observed header, without
/// letting I/O failures leak past it.
#[derive(Debug, Clone)]
pub struct Upload {
    path: PathBuf,
    file_name: String,
}

impl Upload {
    pub fn from_path(path: &Path) -> Result<Self, FileError> {
        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| FileError::NameError(path.display().to_string()))?
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Declared extension, case as found in the filename.
    pub fn extension(&self) -> Option<&str> {
        header::file_extension(&self.path)
    }

    /// Observed header as uppercase hex, or None if the bytes could not be
    /// read. Failures are logged here; the matcher only ever sees
    /// present/absent.
    pub fn header(&self) -> Option<String> {
        match header::read_file_header(&self.path) {
            Ok(header) => Some(header),
            Err(e) => {
                error!("Failed to read file header: {}", e);
                None
            }
        }
    }
}
