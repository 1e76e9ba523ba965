//! Locating and loading the host inventory file.
//!
//! # Location
//!
//! Each [`StoreLocation`] resolves to a single directory. The default,
//! [`ExeDir`](StoreLocation::ExeDir), is the directory of the running
//! executable, so the inventory travels with the installed tool no matter
//! where it is invoked from. The builder lets callers pick another location
//! or hand over an explicit file path.
//!
//! # Loading
//!
//! A missing file is not an error: it loads as an empty [`Configuration`].
//! Only real I/O errors (permissions, a directory in the file's place) and
//! parse errors are propagated.

use std::path::{Path, PathBuf};

use crate::error::HostiniError;
use crate::merge::resolve_sections;
use crate::parse::parse_sections;
use crate::section::Configuration;
use crate::types::StoreLocation;

/// Resolve a [`StoreLocation`] to a concrete directory.
///
/// `app_name` is used by `StoreLocation::Platform` to construct the
/// platform-specific config directory (e.g. `~/.config/{app_name}/` on Linux).
///
/// Returns `None` if the directory cannot be determined (e.g. no home directory).
pub fn resolve_location(location: &StoreLocation, app_name: &str) -> Option<PathBuf> {
    match location {
        StoreLocation::ExeDir => {
            let exe = std::env::current_exe().ok()?;
            exe.parent().map(Path::to_path_buf)
        }
        StoreLocation::Platform => {
            let proj = directories::ProjectDirs::from("", "", app_name)?;
            Some(proj.config_dir().to_path_buf())
        }
        StoreLocation::Home(subdir) => {
            let user = directories::UserDirs::new()?;
            Some(user.home_dir().join(subdir))
        }
        StoreLocation::Cwd => std::env::current_dir().ok(),
        StoreLocation::Path(p) => Some(p.clone()),
    }
}

/// Read the file at `path`. `Ok(None)` when it does not exist.
pub fn read_store(path: &Path) -> Result<Option<String>, HostiniError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(HostiniError::IoError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Parse `content` and merge the `default_name` section into every section.
pub fn load_from_str(
    content: &str,
    path: &Path,
    default_name: &str,
) -> Result<Configuration, HostiniError> {
    let raw = parse_sections(content, path)?;
    Ok(resolve_sections(raw, default_name))
}

/// Load and merge the inventory at `path`.
pub fn load(path: &Path, default_name: &str) -> Result<Configuration, HostiniError> {
    match read_store(path)? {
        Some(content) => load_from_str(&content, path, default_name),
        None => {
            tracing::debug!(path = %path.display(), "no host inventory file, starting empty");
            Ok(Configuration::new(default_name))
        }
    }
}
