//! Multi-valued document metadata: field name to ordered values.
//!
//! Key iteration order is unspecified and must not matter to callers;
//! value order within a field is preserved. A field that is absent is
//! distinct from a field present with zero values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: HashMap<String, Vec<String>>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values of a field in stored order, or `None` if the field is absent.
    pub fn values(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Append a value to a field, creating the field if absent.
    pub fn add_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(field.into()).or_default().push(value.into());
    }

    /// Replace a field's values wholesale.
    pub fn set_values(&mut self, field: impl Into<String>, values: Vec<String>) {
        self.fields.insert(field.into(), values);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Load metadata from a JSON sidecar file shaped as
    /// `{"field": ["value", ...], ...}`.
    pub fn load_json(path: &Path) -> Result<Metadata> {
        let data =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let meta: Metadata =
            serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
        Ok(meta)
    }
}
