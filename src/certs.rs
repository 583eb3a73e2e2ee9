//! Certificate discovery and blob assembly for the cluster pipeline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Pattern for internal root certificates, incl. full chain files.
pub const CERT_GLOB: &str = "Root_*.cer";

/// Indentation nesting the blob under its YAML key in the rendered config.
const INDENT_WIDTH: usize = 10;

/// List certificate files under `dir` matching [`CERT_GLOB`], in listing order.
///
/// Zero matches is not an error; content and count are never validated.
pub fn collect_cert_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::CertsDirNotFound(dir.display().to_string()));
    }

    let pattern = dir.join(CERT_GLOB);
    let pattern = pattern.to_str().ok_or_else(|| {
        AppError::config_error(format!("Non-UTF-8 certificate path: {}", dir.display()))
    })?;

    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        files.push(entry.map_err(|err| AppError::Io(err.into_error()))?);
    }
    Ok(files)
}

/// Concatenate `files` in listing order, indent every line by ten spaces and
/// write the result to `out`, replacing whatever was there.
///
/// The text is staged next to `out` and moved into place with a rename, so a
/// concurrent reader never observes a partially written blob. Returns the
/// indented text so callers can embed it without re-reading the file.
pub fn build_cert_blob(files: &[PathBuf], out: &Path) -> Result<String, AppError> {
    let staging = staging_path(out);
    // Best-effort removal of a stale staging file from an interrupted run.
    if let Err(err) = fs::remove_file(&staging) {
        if err.kind() != io::ErrorKind::NotFound {
            println!("⚠️  Could not remove stale staging file {}: {}", staging.display(), err);
        }
    }

    let mut combined = String::new();
    for file in files {
        combined.push_str(&fs::read_to_string(file)?);
    }

    let indented = indent(&combined, INDENT_WIDTH);

    if let Some(parent) = out.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&staging, &indented)?;
    fs::rename(&staging, out)?;

    Ok(indented)
}

fn staging_path(out: &Path) -> PathBuf {
    let mut name = out.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    out.with_file_name(name)
}

/// Prefix every line, empty interior lines included, with `width` spaces.
fn indent(text: &str, width: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    let prefix = " ".repeat(width);
    let mut result = String::with_capacity(text.len() + width);
    for line in text.split_inclusive('\n') {
        result.push_str(&prefix);
        result.push_str(line);
    }
    result
}
