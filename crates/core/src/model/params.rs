// Resolved report parameters
// The bindings the resolution engine hands to report instantiation.

use serde::{Deserialize, Serialize};

/// Binds one report to one feature: the feature's display name plus the
/// value the report's data query runs against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedParam<V> {
    pub name: String,
    pub value: V,
}

impl<V> NamedParam<V> {
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Binds one report to one or more features. The name is the sole feature's
/// display name for a singleton value list and blank otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedParamList<V> {
    pub name: String,
    pub values: Vec<V>,
}
