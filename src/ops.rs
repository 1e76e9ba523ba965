//! Host operations: the host table, the JSON dump, and result types.
//!
//! Provides the logic behind `hosts list` and `hosts show`, and the
//! `HostsResult` enum that callers use to display results.

use std::fmt;
use std::path::PathBuf;

use crate::error::HostiniError;
use crate::section::Configuration;

/// Width of the left-justified name column.
pub const NAME_WIDTH: usize = 16;

/// Width of the separator rule.
pub const RULE_WIDTH: usize = 32;

/// Result of a host operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum HostsResult {
    /// Lines of the name/host table.
    Table { lines: Vec<String> },
    /// The merged configuration as pretty-printed JSON.
    Dump(String),
    /// Confirmation that a host section was appended.
    HostAdded { host: String, path: PathBuf },
}

impl fmt::Display for HostsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostsResult::Table { lines } => {
                for line in lines {
                    writeln!(f, "{line}")?;
                }
                Ok(())
            }
            HostsResult::Dump(json) => writeln!(f, "{json}"),
            HostsResult::HostAdded { host, path } => {
                writeln!(f, "Added {host} to {}", path.display())
            }
        }
    }
}

/// Lazily format every non-default section as a name/host table.
///
/// Yields a header, a rule, one row per host in declaration order, and a
/// closing rule. A section with no `host` value gets an empty host column.
pub fn format_host_table(config: &Configuration) -> impl Iterator<Item = String> + '_ {
    let rule = || "-".repeat(RULE_WIDTH);
    let rows = config
        .hosts()
        .map(|section| table_row(section.name(), section.get("host").unwrap_or_default()));

    std::iter::once(table_row("name", "host"))
        .chain(std::iter::once(rule()))
        .chain(rows)
        .chain(std::iter::once_with(rule))
}

fn table_row(name: &str, host: &str) -> String {
    format!("{name:<width$} {host}", width = NAME_WIDTH)
}

/// Collect the host table into a result.
pub fn list_hosts(config: &Configuration) -> HostsResult {
    HostsResult::Table {
        lines: format_host_table(config).collect(),
    }
}

/// Dump the whole merged configuration, default section included, as JSON.
pub fn dump(config: &Configuration) -> Result<HostsResult, HostiniError> {
    let json = serde_json::to_string_pretty(config)?;
    Ok(HostsResult::Dump(json))
}
