//! Flattened output artifacts.
//!
//! A [`FlatMap`] holds one artifact's path-key to value mapping while it
//! is being built; keys are un-prefixed and collision-checked on insert.
//! [`FlatMap::into_declarations`] prefixes the keys and fixes the
//! alphanumeric emission order, producing the shape a CSS-writing
//! collaborator consumes.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::error::TokenError;
use crate::ordering::compare_alphanumeric;

/// One emitted custom-property declaration, name fully prefixed
/// (`--ids-base-color-1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

/// Flat path-key to value mapping for one artifact under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatMap {
    entries: BTreeMap<String, String>,
}

impl FlatMap {
    pub fn new() -> FlatMap {
        FlatMap::default()
    }

    /// Insert one record. A key that is already present is a naming-scheme
    /// violation and is reported rather than overwritten; `source` names
    /// the colliding token for the error message.
    pub fn insert(&mut self, key: String, value: String, source: &str) -> Result<(), TokenError> {
        if self.entries.contains_key(&key) {
            return Err(TokenError::DuplicateKey {
                key,
                path: source.to_owned(),
            });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Merge another artifact in, collecting key collisions instead of
    /// overwriting them.
    pub fn merge(&mut self, other: FlatMap, source: &str) -> Result<(), Vec<TokenError>> {
        let mut errors = Vec::new();
        for (key, value) in other.entries {
            if let Err(e) = self.insert(key, value, source) {
                errors.push(e);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Prefix every key and emit declarations in alphanumeric order.
    pub fn into_declarations(self, config: &Config) -> Vec<Declaration> {
        let mut declarations: Vec<Declaration> = self
            .entries
            .into_iter()
            .map(|(key, value)| Declaration {
                name: format!("--{}-{}", config.prefix, key),
                value,
            })
            .collect();
        declarations.sort_by(|a, b| compare_alphanumeric(&a.name, &b.name));
        declarations
    }
}
