use crate::section::{Configuration, Section};

/// Fill `own` with every default pair it does not define itself.
/// Keys set in `own` win.
pub fn inherit(own: &Section, defaults: &Section) -> Section {
    let mut merged = own.clone();
    for (key, value) in defaults.entries() {
        if !merged.contains_key(key) {
            merged.insert(key, value);
        }
    }
    merged
}

/// Build the effective configuration from raw parsed sections.
///
/// Every section, the default one included, is merged over the section named
/// `default_name`. The default section merged over itself is unchanged.
pub fn resolve_sections(raw: Vec<Section>, default_name: &str) -> Configuration {
    let defaults = raw
        .iter()
        .find(|s| s.name() == default_name)
        .cloned()
        .unwrap_or_else(|| Section::new(default_name));

    let mut config = Configuration::new(default_name);
    for section in &raw {
        config.insert_section(inherit(section, &defaults));
    }
    config
}
