//! Environment settings for locating the inventory.
//!
//! Read through confique so the variable names, defaults, and docs live on one
//! struct. Values set explicitly on the builder take precedence over these.

use std::path::PathBuf;

use confique::Config;

use crate::error::HostiniError;

#[derive(Config, Debug, Clone, PartialEq)]
pub struct StoreSettings {
    /// Full path of the host inventory file.
    #[config(env = "HOSTINI_CONFIG")]
    pub path: Option<PathBuf>,

    /// Name of the section every other section inherits from.
    #[config(env = "HOSTINI_DEFAULT_SECTION", default = "default")]
    pub default_section: String,
}

impl StoreSettings {
    /// Compiled defaults only, ignoring the environment.
    pub fn defaults() -> Result<Self, HostiniError> {
        Ok(Self::builder().load()?)
    }

    /// Defaults overridden by `HOSTINI_*` environment variables.
    pub fn from_env() -> Result<Self, HostiniError> {
        Ok(Self::builder().env().load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::DEFAULT_SECTION;

    #[test]
    fn defaults_have_no_path() {
        let settings = StoreSettings::defaults().unwrap();
        assert_eq!(settings.path, None);
        assert_eq!(settings.default_section, DEFAULT_SECTION);
    }

    #[test]
    fn template_documents_fields() {
        let template =
            confique::toml::template::<StoreSettings>(confique::toml::FormatOptions::default());
        assert!(template.contains("default_section"));
        assert!(template.contains("inherits from"));
    }
}
