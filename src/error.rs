use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum HostiniError {
    #[error("Failed to parse {path} (line {line}): {reason}: `{content}`")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(hostini::parse),
            help("sections look like `[name]`, entries like `key = value`")
        )
    )]
    ParseError {
        path: PathBuf,
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Host '{host}' is already configured, please reconfigure it")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(hostini::host_exists)))]
    HostExists { host: String },

    #[error("Invalid value for '{key}': {reason}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(hostini::invalid_value)))]
    InvalidValue { key: String, reason: String },

    #[error("Failed to serialize configuration: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(hostini::serialize)))]
    SerializeError(#[from] serde_json::Error),

    #[error("Failed to access {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(hostini::io)))]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(hostini::settings)))]
    SettingsError(#[from] confique::Error),

    #[error("Could not resolve a directory for the host inventory file")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(hostini::no_store_path),
            help("set HOSTINI_CONFIG or call .path() on the builder")
        )
    )]
    NoStorePath,

    #[error("App name is required: call .app_name() or .file_name() on the builder")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(hostini::app_name_required)))]
    AppNameRequired,
}
