//! Common test utilities and shared setup

#![allow(dead_code)]

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

// Global INIT for all tests - ensures logger is initialized only once
static INIT: Once = Once::new();

/// Shared test setup function that can be used across all test files
pub fn setup(log_level: &str) {
    INIT.call_once(|| {
        env::set_var("RUST_LOG", log_level);
        let _ = env_logger::try_init();
    });
}

/// Writes a file with the given contents into `dir` and returns its path
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(contents).unwrap();
    path
}

/// Leading bytes of a JFIF-style jpeg
pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];

/// The full png signature
pub const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const PDF_BYTES: &[u8] = b"%PDF-1.7\n";
