//! Host persistence: append new host sections to the inventory file.
//!
//! Appends are raw: the file is opened in append mode and the new section is
//! written after whatever is already there. Existing content, comments
//! included, is never rewritten. There is no locking, so two processes adding
//! hosts at the same time can interleave their sections.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::HostiniError;
use crate::ops::HostsResult;
use crate::record::HostRecord;
use crate::section::{Configuration, Section};

/// Pure function: render the section appended for `record`.
///
/// Starts with a blank separator line and the `[host]` header, then one
/// `key = value` line per field in write order. Fields equal to the value in
/// `defaults` are left out; loading restores them through inheritance.
pub fn render_host_section(record: &HostRecord, defaults: Option<&Section>) -> String {
    let mut out = format!("\n[{}]\n", record.host);
    for (key, value) in record.fields() {
        if defaults.and_then(|d| d.get(key)) != Some(value) {
            out.push_str(&format!("{key} = {value}\n"));
        }
    }
    out
}

/// I/O wrapper: check `record` against `current`, then append it to `path`.
///
/// Fails with [`HostiniError::HostExists`] if `current` already has a section
/// named after the host, in which case the file is left untouched. The check
/// uses `current` as given; it does not re-read the file. The file is created
/// if missing, but its parent directory is not.
pub fn append_host(
    path: &Path,
    record: &HostRecord,
    current: &Configuration,
) -> Result<HostsResult, HostiniError> {
    if current.contains(&record.host) {
        tracing::warn!(host = %record.host, "host already configured, not appending");
        return Err(HostiniError::HostExists {
            host: record.host.clone(),
        });
    }
    record.validate()?;

    let section = render_host_section(record, current.defaults());

    let io_error = |e: std::io::Error| HostiniError::IoError {
        path: path.to_path_buf(),
        source: e,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;
    file.write_all(section.as_bytes()).map_err(io_error)?;
    file.flush().map_err(io_error)?;

    tracing::debug!(host = %record.host, path = %path.display(), "appended host section");
    Ok(HostsResult::HostAdded {
        host: record.host.clone(),
        path: path.to_path_buf(),
    })
}
