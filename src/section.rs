//! In-memory model of a host inventory: named sections of string pairs.
//!
//! Both [`Section`] and [`Configuration`] keep declaration order, so listing
//! and serializing a loaded file reproduces the order its sections and keys
//! were written in.

use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Name of the section whose pairs every other section inherits.
pub const DEFAULT_SECTION: &str = "default";

/// A named section holding `key = value` pairs in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Set `key` to `value`. An existing key keeps its position and takes the
    /// new value (last write wins).
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Mutable access to a value, used by the parser for continuation lines.
    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for Section {
    type Output = str;

    fn index(&self, key: &str) -> &str {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no key '{key}' in section [{}]", self.name),
        }
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A loaded host inventory: sections keyed by name, plus the name of the
/// section that the others inherit from.
///
/// This is a plain value. Changing it never touches the file it was loaded
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    default_name: String,
    sections: Vec<Section>,
}

impl Configuration {
    /// An empty configuration whose default section is called `default_name`.
    pub fn new(default_name: &str) -> Self {
        Self {
            default_name: default_name.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// The default section, if the file declared one.
    pub fn defaults(&self) -> Option<&Section> {
        self.get(&self.default_name)
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up one value: `value("wap0", "port")`.
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section)?.get(key)
    }

    /// Add `section`, replacing any section with the same name in place.
    pub fn insert_section(&mut self, section: Section) {
        match self.get_mut(&section.name) {
            Some(existing) => *existing = section,
            None => self.sections.push(section),
        }
    }

    /// All sections in declaration order, default included.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Every section except the default one.
    pub fn hosts(&self) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(move |s| s.name != self.default_name)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION)
    }
}

impl Index<&str> for Configuration {
    type Output = Section;

    fn index(&self, name: &str) -> &Section {
        match self.get(name) {
            Some(section) => section,
            None => panic!("no section [{name}] in configuration"),
        }
    }
}

impl Serialize for Configuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.name, section)?;
        }
        map.end()
    }
}
