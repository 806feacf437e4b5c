//! JSON output writer
//!
//! Records are written as one JSON array indented with four spaces. The file
//! is written next to its destination and renamed into place, so a failed
//! write never leaves a truncated export behind.

use crate::domain::{DerivedRecord, RenewalError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Serialize records to a JSON array string
///
/// # Errors
///
/// Returns a serialization error if a record cannot be encoded.
pub fn render_records(records: &[DerivedRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| RenewalError::Serialization(e.to_string()))
}

/// Write records to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an error if the records cannot be serialized or the file cannot
/// be written.
pub fn write_records(path: impl AsRef<Path>, records: &[DerivedRecord]) -> Result<()> {
    let path = path.as_ref();
    let rendered = render_records(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_sibling(path);
    let written = fs::File::create(&tmp_path).and_then(|mut file| {
        file.write_all(rendered.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written.and_then(|_| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(RenewalError::Io(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Wrote export file"
    );
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "export".into());
    name.push(".tmp");
    path.with_file_name(name)
}
