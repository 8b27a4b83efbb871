//! Parsed configuration model

use std::collections::HashMap;

use serde::Serialize;

use crate::value::Value;

/// A parsed configuration: section name to [`Section`].
///
/// Section names are stored exactly as written in the file. By
/// convention they are lowercase, but this is not enforced. A `Config`
/// is built fresh on every parse and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Config {
    sections: HashMap<String, Section>,
}

impl Config {
    /// Look up a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Iterate over all sections.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section accessor for the parser. Repeated headers merge into the
    /// same section.
    pub(crate) fn section_entry(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }
}

/// One configuration section: normalized field name to typed [`Value`].
///
/// Field names have had their type tag stripped and their camelCase
/// remainder converted to underscore form, so `iInterval` in the file
/// is the `interval` field here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Section {
    fields: HashMap<String, Value>,
}

impl Section {
    /// Look up a field by its normalized name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up a field, falling back to a default.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.fields.get(key).unwrap_or(default)
    }

    /// Iterate over all fields.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Later inserts win over earlier ones with the same name.
    pub(crate) fn insert(&mut self, name: String, value: Value) {
        self.fields.insert(name, value);
    }
}
