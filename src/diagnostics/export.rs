// SPDX-License-Identifier: MPL-2.0
//! Writing diagnostic reports to disk.

use std::fs;
use std::io;
use std::path::Path;

use super::DiagnosticsCollector;
use crate::error::{Error, Result};

/// Writes the collector's JSON report to `path`.
///
/// Parent directories are created as needed and the file is replaced
/// atomically.
///
/// # Errors
///
/// Returns [`Error::Export`] if serialization fails and [`Error::Io`] if the
/// file cannot be written.
pub fn export_to_file(collector: &DiagnosticsCollector, path: &Path) -> Result<()> {
    let json = collector
        .export_json()
        .map_err(|e| Error::Export(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    write_atomic(path, &json)?;
    Ok(())
}

/// Writes content to a temp file then renames it over `path`.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
