use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single computed value inside a [`FeatureRecord`](crate::descriptors::FeatureRecord).
///
/// Serializes untagged, so a record renders as plain JSON (`null`, numbers, strings,
/// booleans, arrays and objects).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FeatureValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<FeatureValue>),
    Map(IndexMap<String, FeatureValue>),
}

impl FeatureValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FeatureValue::Null)
    }

    /// Numeric view used by filter predicates. NaN counts as unavailable.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Int(i) => Some(*i as f64),
            FeatureValue::Float(f) if !f.is_nan() => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Text rendering for a CSV cell. Null and NaN become an empty cell.
    pub fn to_cell(&self) -> String {
        match self {
            FeatureValue::Null => String::new(),
            FeatureValue::Bool(b) => b.to_string(),
            FeatureValue::Int(i) => i.to_string(),
            FeatureValue::Float(f) if f.is_nan() => String::new(),
            FeatureValue::Float(f) => f.to_string(),
            FeatureValue::Text(s) => s.clone(),
            FeatureValue::List(_) | FeatureValue::Map(_) => {
                serde_json::to_string(self).unwrap_or_default()
            }
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Float(value)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        FeatureValue::Int(value)
    }
}

impl From<usize> for FeatureValue {
    fn from(value: usize) -> Self {
        FeatureValue::Int(value as i64)
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Bool(value)
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl<T> From<Option<T>> for FeatureValue
where
    T: Into<FeatureValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => FeatureValue::Null,
        }
    }
}

impl<T> From<Vec<T>> for FeatureValue
where
    T: Into<FeatureValue>,
{
    fn from(values: Vec<T>) -> Self {
        FeatureValue::List(values.into_iter().map(Into::into).collect())
    }
}
