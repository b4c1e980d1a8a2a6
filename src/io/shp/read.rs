use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{json, Map, Value};
use shapefile::{
    dbase::{FieldValue, Record},
    Reader, Shape,
};
use tracing::{info, warn};

use crate::map::Feature;
use super::polygon::rings_to_multipolygon;

/// Read neighborhood polygons from a `.shp` file (with its `.dbf` sidecar),
/// keyed by the `key_field` attribute column.
pub fn read_features(path: &Path, key_field: &str) -> Result<Vec<Feature>> {
    let mut reader = Reader::from_path(path)
        .with_context(|| format!("[io::shp::read] Failed to open shapefile: {}", path.display()))?;

    let mut features = Vec::with_capacity(reader.shape_count()?);
    for (index, item) in reader.iter_shapes_and_records().enumerate() {
        let (shape, record) = item.context("[io::shp::read] Error reading shape+record")?;

        let key = match record.get(key_field) {
            Some(FieldValue::Character(Some(text))) => text.trim().to_string(),
            Some(FieldValue::Numeric(Some(n))) => n.to_string(),
            Some(FieldValue::Integer(n)) => n.to_string(),
            _ => bail!("[io::shp::read] Shape {index} has no {key_field:?} value"),
        };

        let mut feature = Feature::new(key).with_source_properties(record_to_json(record));
        match shape {
            Shape::Polygon(polygon) => feature = feature.with_geometry(rings_to_multipolygon(&polygon)),
            Shape::NullShape => {}
            other => warn!(key = %feature.key(), shape = ?other.shapetype(), "ignoring non-polygon shape"),
        }
        features.push(feature);
    }

    info!(path = %path.display(), features = features.len(), "read neighborhood features");
    Ok(features)
}

/// dBASE attributes as JSON properties; blank and unsupported fields become null.
fn record_to_json(record: Record) -> Map<String, Value> {
    record.into_iter()
        .map(|(name, value)| {
            let value = match value {
                FieldValue::Character(Some(text)) => json!(text.trim()),
                FieldValue::Numeric(Some(n)) => json!(n),
                FieldValue::Float(Some(f)) => json!(f),
                FieldValue::Integer(n) => json!(n),
                FieldValue::Double(d) => json!(d),
                FieldValue::Logical(Some(b)) => json!(b),
                _ => Value::Null,
            };
            (name, value)
        })
        .collect()
}
