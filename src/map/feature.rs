use std::collections::BTreeMap;

use geo::MultiPolygon;
use serde_json::{Map, Value};

use crate::attribute::AttributeName;

/// A spatial unit (one neighborhood) with its joined attribute values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    key: String,                                      // identity as in the spatial source
    geometry: Option<MultiPolygon<f64>>,              // opaque to classification
    properties: BTreeMap<AttributeName, Option<f64>>, // None = missing
    source: Map<String, Value>,                       // properties carried over from the source file
}

impl Feature {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), ..Self::default() }
    }

    pub fn with_geometry(mut self, geometry: MultiPolygon<f64>) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_source_properties(mut self, source: Map<String, Value>) -> Self {
        self.source = source;
        self
    }

    #[inline] pub fn key(&self) -> &str { &self.key }

    #[inline] pub fn geometry(&self) -> Option<&MultiPolygon<f64>> { self.geometry.as_ref() }

    #[inline] pub fn source_properties(&self) -> &Map<String, Value> { &self.source }

    #[inline] pub fn properties(&self) -> &BTreeMap<AttributeName, Option<f64>> { &self.properties }

    /// Joined value of `attr`; `None` when missing or never joined.
    pub fn value(&self, attr: &AttributeName) -> Option<f64> {
        self.properties.get(attr).copied().flatten()
    }

    /// Whether the properties map has an entry (possibly missing) for `attr`.
    #[inline] pub fn has_entry(&self, attr: &AttributeName) -> bool { self.properties.contains_key(attr) }

    pub(crate) fn set(&mut self, attr: &AttributeName, value: Option<f64>) {
        self.properties.insert(attr.clone(), value);
    }
}
