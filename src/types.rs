use std::path::{Path, PathBuf};

use crate::record::HostRecord;

/// Where the host inventory file lives.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StoreLocation {
    /// Directory containing the running executable.
    #[default]
    ExeDir,
    /// Platform config directory (XDG on Linux, ~/Library/Application Support on macOS).
    Platform,
    /// A subdirectory under the user's home directory, e.g. `Home(".xtools")`.
    Home(&'static str),
    /// Current working directory.
    Cwd,
    /// An explicit directory.
    Path(PathBuf),
}

/// A host inventory operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
///
/// `file` overrides the inventory path the store would otherwise resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostsAction {
    List { file: Option<PathBuf> },
    Show { file: Option<PathBuf> },
    Add { record: HostRecord, file: Option<PathBuf> },
}

impl HostsAction {
    pub fn file(&self) -> Option<&Path> {
        match self {
            HostsAction::List { file }
            | HostsAction::Show { file }
            | HostsAction::Add { file, .. } => file.as_deref(),
        }
    }
}
