//! Hierarchical settings source abstraction.
//!
//! Paths are colon-delimited (`"GraphApi:MaxRetries"`); array elements are
//! addressed by numeric segment (`"AzureAd:Scopes:0"`). Sources are read-only
//! and side-effect free: absent keys and sections yield `None`/`false`, never
//! errors, and repeated lookups always see the current tree.

use std::{fs, path::Path};

use serde_json::Value;

use crate::error::AppError;

/// Read-only hierarchical key/value provider.
///
/// The accessor layer never caches what it reads here, so an implementation
/// backed by a reloadable file simply serves the latest tree on every call.
pub trait ConfigSource {
    /// Scalar value at `path`, or `None` when the path is absent or addresses
    /// a sub-tree rather than a leaf.
    fn scalar(&self, path: &str) -> Option<String>;

    /// Whether `path` addresses an existing value or sub-tree.
    fn section_exists(&self, path: &str) -> bool;

    /// Immediate child key names under `path`. Empty when `path` is absent
    /// or a leaf. Array children are reported as their indices (`"0"`, …).
    fn child_keys(&self, path: &str) -> Vec<String>;
}

/// [`ConfigSource`] over a parsed `appsettings.json` tree.
///
/// Path segments match object keys case-insensitively, mirroring the settings
/// provider this replaces. Numbers and booleans surface as their string
/// forms, the flattened key/value view the accessor layer expects.
#[derive(Debug)]
pub struct JsonSource {
    root: Value,
}

impl JsonSource {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn from_str(text: &str) -> Result<Self, AppError> {
        serde_json::from_str(text)
            .map(Self::new)
            .map_err(|e| AppError::Settings(format!("settings are not valid JSON: {e}")))
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::Settings(format!("cannot read {}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map(Self::new)
            .map_err(|e| AppError::Settings(format!("{} is not valid JSON: {e}", path.display())))
    }

    fn node(&self, path: &str) -> Option<&Value> {
        path.split(':').try_fold(&self.root, |node, segment| match node {
            Value::Object(map) => map
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(segment))
                .map(|(_, value)| value),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }
}

impl ConfigSource for JsonSource {
    fn scalar(&self, path: &str) -> Option<String> {
        match self.node(path)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Object(_) | Value::Array(_) => None,
        }
    }

    fn section_exists(&self, path: &str) -> bool {
        !matches!(self.node(path), None | Some(Value::Null))
    }

    fn child_keys(&self, path: &str) -> Vec<String> {
        match self.node(path) {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            Some(Value::Array(items)) => (0..items.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }
}
