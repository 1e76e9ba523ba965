//! Host inventory files with a shared default section, for Rust CLI apps.
//!
//! An inventory is a plain text file of bracketed sections holding
//! `key = value` pairs. One section, `default`, holds values every host
//! shares; every other section describes one host and inherits whatever it
//! does not set itself.
//!
//! ```text
//! [default]
//! user = soso
//! password = test
//! port = 36000
//!
//! [wap0]
//! host = 192.168.1.100
//! ```
//!
//! Loading this file gives `wap0` the effective pairs `host`, `user`,
//! `password` and `port = 36000`.
//!
//! ```ignore
//! let store = HostStore::builder().app_name("xtools");
//! let config = store.load()?;
//! for line in hostini::format_host_table(&config) {
//!     println!("{line}");
//! }
//! ```
//!
//! # Loading
//!
//! [`HostStoreBuilder::load()`] (or [`load()`] with an explicit path) parses
//! the file and merges the default section into every section. Local values
//! win. A missing file loads as an empty [`Configuration`]; a malformed line
//! fails the whole load with [`HostiniError::ParseError`] naming the line.
//!
//! The result is an ordinary value in file declaration order. Changing it
//! never touches the file.
//!
//! # Adding hosts
//!
//! [`append_host()`] writes a new `[host]` section at the end of the file,
//! leaving out any field whose value equals the default section's. Loading
//! the file again brings those fields back through inheritance. If the
//! supplied configuration already has a section with that name, nothing is
//! written and [`HostiniError::HostExists`] is returned. The check uses the
//! configuration the caller passes in; reload first if the file may have
//! changed since.
//!
//! Appends are plain append-mode writes with no locking. Two processes adding
//! hosts at once can interleave their output.
//!
//! # Where the file lives
//!
//! By default the inventory is `{app_name}.ini` next to the running
//! executable, so it travels with the installed tool. Pick another
//! [`StoreLocation`], set an explicit [`path()`](HostStoreBuilder::path), or
//! point `HOSTINI_CONFIG` at a file. `HOSTINI_DEFAULT_SECTION` renames the
//! inherited section.
//!
//! # Clap adapter
//!
//! The `cli` module (behind the `clap` feature, on by default) provides
//! [`HostsArgs`], giving an app `hosts list|show|add` subcommands. It converts
//! into a [`HostsAction`] that [`HostStoreBuilder::handle()`] executes.

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod file;
pub(crate) mod merge;
mod ops;
mod parse;
mod persist;
mod record;
mod section;
mod settings;

#[cfg(test)]
mod fixtures;

pub use builder::{HostStore, HostStoreBuilder};
#[cfg(feature = "clap")]
pub use cli::{HostsArgs, HostsSubcommand};
pub use error::HostiniError;
pub use file::{load, load_from_str, resolve_location};
pub use ops::{HostsResult, format_host_table};
pub use persist::{append_host, render_host_section};
pub use record::HostRecord;
pub use section::{Configuration, DEFAULT_SECTION, Section};
pub use settings::StoreSettings;
pub use types::{HostsAction, StoreLocation};
