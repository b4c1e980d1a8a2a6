use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;
use tracing::{debug, info};

use crate::map::Feature;

/// Read a GeoJSON FeatureCollection into features keyed by the `key_field` property.
pub fn read_features(path: &Path, key_field: &str) -> Result<Vec<Feature>> {
    let bytes = fs::read(path)
        .with_context(|| format!("[io::geojson::read] Failed to open {}", path.display()))?;
    let value: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("[io::geojson::read] Failed to parse GeoJSON in {}", path.display()))?;

    let features = parse_features(&value, key_field)?;
    info!(path = %path.display(), features = features.len(), "read neighborhood features");
    Ok(features)
}

/// Convert a parsed FeatureCollection. Polygon and MultiPolygon geometries are
/// kept; any other geometry is dropped, the feature itself is kept.
pub fn parse_features(value: &Value, key_field: &str) -> Result<Vec<Feature>> {
    if value["type"].as_str() != Some("FeatureCollection") {
        bail!("[io::geojson::read] Expected a FeatureCollection");
    }
    let items = value["features"].as_array()
        .ok_or_else(|| anyhow!("[io::geojson::read] FeatureCollection has no features array"))?;

    items.iter().enumerate()
        .map(|(index, item)| {
            let properties = item["properties"].as_object().cloned().unwrap_or_default();
            let key = match properties.get(key_field) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => bail!("[io::geojson::read] Feature {index} has no {key_field:?} property"),
            };

            let mut feature = Feature::new(key).with_source_properties(properties);
            match parse_geometry(&item["geometry"]) {
                Ok(Some(geometry)) => feature = feature.with_geometry(geometry),
                Ok(None) => debug!(key = %feature.key(), "feature has no polygon geometry"),
                Err(err) => return Err(err.context(format!("[io::geojson::read] Feature {index} ({})", feature.key()))),
            }
            Ok(feature)
        })
        .collect()
}

/// Parse a GeoJSON geometry object into a MultiPolygon, if it is areal.
fn parse_geometry(geometry: &Value) -> Result<Option<MultiPolygon<f64>>> {
    let coords = || geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("geometry has no coordinates array"));

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(Some(MultiPolygon(vec![parse_polygon(coords()?)?]))),
        Some("MultiPolygon") => {
            let polygons = coords()?.iter()
                .map(|polygon| polygon.as_array()
                    .ok_or_else(|| anyhow!("MultiPolygon member is not an array"))
                    .and_then(|rings| parse_polygon(rings)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(MultiPolygon(polygons)))
        }
        _ => Ok(None),
    }
}

/// Rings of one polygon: exterior first, then holes.
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        ring.as_array()
            .ok_or_else(|| anyhow!("ring is not an array"))
            .and_then(|points| parse_ring(points))
    });
    let exterior = rings.next()
        .ok_or_else(|| anyhow!("polygon has no exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Positions of a ring, closed if the source left it open.
fn parse_ring(points: &[Value]) -> Result<LineString<f64>> {
    let mut coords = points.iter()
        .map(|point| match point.as_array().map(Vec::as_slice) {
            Some([x, y, ..]) => match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => Ok(Coord { x, y }),
                _ => Err(anyhow!("coordinate is not numeric")),
            },
            _ => Err(anyhow!("position needs at least two numbers")),
        })
        .collect::<Result<Vec<_>>>()?;

    if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
        if first != last { coords.push(first) }
    }
    Ok(LineString(coords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_polygons_and_multipolygons() {
        let collection = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "community": "HYDE PARK", "area_num_1": "41" },
                    "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]] }
                },
                {
                    "type": "Feature",
                    "properties": { "community": "LOOP" },
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [
                            [[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]], [[0.5, 0.5], [1, 0.5], [1, 1], [0.5, 0.5]]],
                            [[[5, 5], [6, 5], [6, 6], [5, 5]]]
                        ]
                    }
                }
            ]
        });

        let features = parse_features(&collection, "community").unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].key(), "HYDE PARK");
        assert_eq!(features[0].source_properties()["area_num_1"], json!("41"));

        let triangle = features[0].geometry().unwrap();
        assert_eq!(triangle.0.len(), 1);
        assert_eq!(triangle.0[0].exterior().0.len(), 4); // closed on read

        let loop_area = features[1].geometry().unwrap();
        assert_eq!(loop_area.0.len(), 2);
        assert_eq!(loop_area.0[0].interiors().len(), 1);
    }

    #[test]
    fn keeps_features_without_areal_geometry() {
        let collection = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "community": "ORPHAN" }, "geometry": null },
                { "type": "Feature", "properties": { "community": 77 }, "geometry": { "type": "Point", "coordinates": [1, 2] } }
            ]
        });
        let features = parse_features(&collection, "community").unwrap();
        assert!(features[0].geometry().is_none());
        assert_eq!(features[1].key(), "77");
        assert!(features[1].geometry().is_none());
    }

    #[test]
    fn missing_key_is_an_error() {
        let collection = json!({
            "type": "FeatureCollection",
            "features": [{ "type": "Feature", "properties": { "name": "X" }, "geometry": null }]
        });
        assert!(parse_features(&collection, "community").is_err());
    }

    #[test]
    fn rejects_non_collections() {
        assert!(parse_features(&json!({ "type": "Feature" }), "community").is_err());
    }
}
