use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use log::trace;

use crate::error::FileError;

/// Number of leading bytes captured for signature checks.
pub const HEADER_LEN: usize = 4;

/// Reads the first [`HEADER_LEN`] bytes of a file and returns them as an
/// uppercase hex string.
///
/// The buffer is zero-initialized and encoded in full, so a short file pads
/// with trailing zeros and an empty file reports "00000000", the observed
/// empty-header sentinel the matcher treats as known-good.
pub fn read_file_header(path: &Path) -> Result<String, FileError> {
    trace!("Reading file header from {}", path.display());

    let mut file = File::open(path).map_err(|source| FileError::HeaderReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut buffer = [0u8; HEADER_LEN];
    let mut filled = 0;
    while filled < HEADER_LEN {
        match file.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(FileError::HeaderReadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    let header = hex::encode_upper(buffer);
    trace!("Read header {} ({} bytes) from {}", header, filled, path.display());
    Ok(header)
}

/// The filename's extension substring, case as found. No normalization:
/// extension checks downstream are case-sensitive.
pub fn file_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
