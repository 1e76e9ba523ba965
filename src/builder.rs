use std::path::PathBuf;

use crate::error::HostiniError;
use crate::file;
use crate::ops::{self, HostsResult};
use crate::persist;
use crate::record::HostRecord;
use crate::section::Configuration;
use crate::settings::StoreSettings;
use crate::types::{HostsAction, StoreLocation};

/// Entry point for building a host store.
pub struct HostStore;

impl HostStore {
    pub fn builder() -> HostStoreBuilder {
        HostStoreBuilder::new()
    }
}

/// Builder that decides where the inventory lives and which section is the
/// default, then loads it and appends hosts to it.
///
/// The file path is resolved in priority order:
///
/// 1. An explicit [`path()`](Self::path).
/// 2. `HOSTINI_CONFIG` from the environment (unless [`no_env()`](Self::no_env)).
/// 3. [`location()`](Self::location) joined with the file name
///    (`"{app_name}.ini"` unless [`file_name()`](Self::file_name) is set).
#[derive(Debug, Clone)]
pub struct HostStoreBuilder {
    app_name: Option<String>,
    file_name: Option<String>,
    location: StoreLocation,
    path: Option<PathBuf>,
    default_section: Option<String>,
    env_enabled: bool,
}

impl HostStoreBuilder {
    fn new() -> Self {
        Self {
            app_name: None,
            file_name: None,
            location: StoreLocation::default(),
            path: None,
            default_section: None,
            env_enabled: true,
        }
    }

    /// Set the application name. Derives the file name `"{app_name}.ini"` and
    /// the platform config directory.
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    /// Override the inventory file name (default: `"{app_name}.ini"`).
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = Some(name.to_string());
        self
    }

    /// Set the directory the file name is resolved against
    /// (default: [`StoreLocation::ExeDir`]).
    pub fn location(mut self, location: StoreLocation) -> Self {
        self.location = location;
        self
    }

    /// Use this exact file, bypassing the environment and the location.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Override the name of the inherited section (default: `"default"`).
    pub fn default_section(mut self, name: &str) -> Self {
        self.default_section = Some(name.to_string());
        self
    }

    /// Ignore `HOSTINI_*` environment variables.
    pub fn no_env(mut self) -> Self {
        self.env_enabled = false;
        self
    }

    fn settings(&self) -> Result<StoreSettings, HostiniError> {
        if self.env_enabled {
            StoreSettings::from_env()
        } else {
            StoreSettings::defaults()
        }
    }

    /// Resolve the effective file name.
    fn effective_file_name(&self) -> Result<String, HostiniError> {
        if let Some(name) = &self.file_name {
            return Ok(name.clone());
        }
        let app = self
            .app_name
            .as_deref()
            .ok_or(HostiniError::AppNameRequired)?;
        Ok(format!("{app}.ini"))
    }

    fn resolve_path(&self, settings: &StoreSettings) -> Result<PathBuf, HostiniError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        if let Some(path) = &settings.path {
            return Ok(path.clone());
        }
        let file_name = self.effective_file_name()?;
        if self.location == StoreLocation::Platform && self.app_name.is_none() {
            return Err(HostiniError::AppNameRequired);
        }
        let app_name = self.app_name.as_deref().unwrap_or_default();
        file::resolve_location(&self.location, app_name)
            .map(|dir| dir.join(file_name))
            .ok_or(HostiniError::NoStorePath)
    }

    /// Resolve the inventory path and default section name.
    fn resolve(&self) -> Result<(PathBuf, String), HostiniError> {
        let settings = self.settings()?;
        let path = self.resolve_path(&settings)?;
        let default_section = self
            .default_section
            .clone()
            .unwrap_or(settings.default_section);
        Ok((path, default_section))
    }

    /// The file this store reads and appends to.
    pub fn store_path(&self) -> Result<PathBuf, HostiniError> {
        let settings = self.settings()?;
        self.resolve_path(&settings)
    }

    /// Load the inventory and merge the default section into every section.
    pub fn load(&self) -> Result<Configuration, HostiniError> {
        let (path, default_section) = self.resolve()?;
        file::load(&path, &default_section)
    }

    /// Append `record` to the inventory, checking for a collision against
    /// `current` (not against the file).
    pub fn add_host(
        &self,
        record: &HostRecord,
        current: &Configuration,
    ) -> Result<HostsResult, HostiniError> {
        let path = self.store_path()?;
        persist::append_host(&path, record, current)
    }

    /// Handle a `HostsAction` and print the result to stdout.
    pub fn handle_and_print(&self, action: &HostsAction) -> Result<(), HostiniError> {
        let result = self.handle(action)?;
        print!("{result}");
        Ok(())
    }

    /// Handle a `HostsAction` (list / show / add).
    ///
    /// A `file` carried by the action replaces the path this builder resolves.
    pub fn handle(&self, action: &HostsAction) -> Result<HostsResult, HostiniError> {
        match action.file() {
            Some(file) => self.clone().path(file).handle_resolved(action),
            None => self.handle_resolved(action),
        }
    }

    fn handle_resolved(&self, action: &HostsAction) -> Result<HostsResult, HostiniError> {
        let config = self.load()?;
        match action {
            HostsAction::List { .. } => Ok(ops::list_hosts(&config)),
            HostsAction::Show { .. } => ops::dump(&config),
            HostsAction::Add { record, .. } => self.add_host(record, &config),
        }
    }
}
