use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::descriptors::FeatureValue;

pub const SMILES_KEY: &str = "smiles";
pub const ERROR_KEY: &str = "error";
/// Key that some producers use to carry the parsed molecule handle alongside the values.
pub const MOLECULE_KEY: &str = "mol";
pub const ALERT_DETAIL_KEY: &str = "pains_alerts";

/// Keys that never become table columns.
pub const RESERVED_KEYS: [&str; 4] = [SMILES_KEY, ERROR_KEY, MOLECULE_KEY, ALERT_DETAIL_KEY];

pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Flat, insertion-ordered mapping of everything computed for one molecule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureRecord(IndexMap<String, FeatureValue>);

impl FeatureRecord {
    /// A record that only echoes its input.
    pub fn new(smiles: &str) -> Self {
        let mut record = Self::default();
        record.insert(SMILES_KEY, smiles);
        record
    }

    pub fn failed(smiles: &str, error: &str) -> Self {
        let mut record = Self::new(smiles);
        record.insert(ERROR_KEY, error);
        record
    }

    /// A record for a row that had no structure at all.
    pub fn missing(error: &str) -> Self {
        let mut record = Self::default();
        record.insert(ERROR_KEY, error);
        record
    }

    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<FeatureValue>
    where
        K: Into<String>,
        V: Into<FeatureValue>,
    {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn smiles(&self) -> Option<&str> {
        self.get(SMILES_KEY).and_then(FeatureValue::as_str)
    }

    pub fn error(&self) -> Option<&str> {
        self.get(ERROR_KEY).and_then(FeatureValue::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Keys that are not reserved, in insertion order.
    pub fn descriptor_keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys().filter(|k| !is_reserved_key(k))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops every non-reserved key not accepted by `keep`.
    pub fn retain_descriptors<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.0.retain(|k, _| is_reserved_key(k) || keep(k));
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
