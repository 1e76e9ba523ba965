//! Clap adapter for hostini.
//!
//! Compiled only when the `clap` Cargo feature is enabled (on by default).
//! [`HostsArgs`] can be embedded in an application's own clap derive to get
//! `hosts list|show|add` subcommands. The only bridge to the core is
//! [`HostsArgs::into_action()`], which produces a
//! [`HostsAction`](crate::HostsAction) for
//! [`HostStoreBuilder::handle()`](crate::HostStoreBuilder::handle).

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::record::HostRecord;
use crate::types::HostsAction;

/// Clap-derived args for the `hosts` subcommand group.
///
/// ```ignore
/// #[derive(Subcommand)]
/// enum Commands {
///     Hosts(HostsArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct HostsArgs {
    /// Read and write this inventory file instead of the default location.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub action: Option<HostsSubcommand>,
}

/// Available host subcommands.
#[derive(Debug, Subcommand)]
pub enum HostsSubcommand {
    /// Show configured hosts as a name/host table.
    List,
    /// Print every section, with inherited values, as JSON.
    Show,
    /// Append a host to the inventory.
    Add {
        /// Hostname or IP address; also the section name.
        host: String,
        /// Login user.
        #[arg(short, long)]
        username: String,
        /// Login password.
        #[arg(short, long)]
        password: String,
        /// SSH port.
        #[arg(long)]
        port: String,
    },
}

impl HostsArgs {
    /// Convert clap-parsed args into a framework-agnostic `HostsAction`.
    ///
    /// Bare `hosts` (no subcommand) and explicit `hosts list` both map to
    /// `HostsAction::List`. The `--file` flag is threaded through to every
    /// variant.
    pub fn into_action(self) -> HostsAction {
        let file = self.file;
        match self.action {
            None | Some(HostsSubcommand::List) => HostsAction::List { file },
            Some(HostsSubcommand::Show) => HostsAction::Show { file },
            Some(HostsSubcommand::Add {
                host,
                username,
                password,
                port,
            }) => HostsAction::Add {
                record: HostRecord {
                    host,
                    username,
                    password,
                    port,
                },
                file,
            },
        }
    }
}
