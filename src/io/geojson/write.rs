use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geo::MultiPolygon;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::{io::atomic::write_atomic, session::{RenderSink, Scene}, view::format_value};

/// Export the scene as a GeoJSON FeatureCollection.
///
/// Each feature keeps its source properties and gains every joined attribute
/// (null when missing) plus `fill`, `class` and `label` for the expressed
/// attribute. The collection carries `expressed` and `breaks` as foreign members.
pub fn scene_to_geojson(scene: &Scene<'_>) -> Value {
    let features: Vec<Value> = scene.fills()
        .map(|(feature, class, fill)| {
            let mut properties: Map<String, Value> = feature.source_properties().clone();
            for (attr, value) in feature.properties() {
                properties.insert(attr.to_string(), value.map_or(Value::Null, |v| json!(v)));
            }
            properties.insert("fill".to_string(), json!(fill));
            properties.insert("class".to_string(), json!(class));
            properties.insert("label".to_string(), json!(format_value(feature.value(scene.expressed))));

            json!({
                "type": "Feature",
                "id": feature.key(),
                "geometry": feature.geometry().map_or(Value::Null, multipolygon_to_geojson),
                "properties": properties,
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "expressed": scene.expressed,
        "breaks": scene.mapper.breaks(),
        "features": features,
    })
}

/// Write the scene's FeatureCollection to `path`.
pub fn write_geojson(path: &Path, scene: &Scene<'_>) -> Result<()> {
    let collection = scene_to_geojson(scene);
    write_atomic(path, |writer| {
        serde_json::to_writer(writer, &collection)
            .with_context(|| format!("[io::geojson::write] Failed to write {}", path.display()))
    })?;
    info!(path = %path.display(), attribute = %scene.expressed, "wrote colored features");
    Ok(())
}

/// Render sink that rewrites a GeoJSON file on every scene.
#[derive(Debug, Clone)]
pub struct GeoJsonFile {
    path: PathBuf,
}

impl GeoJsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl RenderSink for GeoJsonFile {
    fn render(&mut self, scene: &Scene<'_>) -> Result<()> { write_geojson(&self.path, scene) }
}

/// GeoJSON geometry object for a MultiPolygon (RFC 7946 nesting).
fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let ring = |ls: &geo::LineString<f64>| -> Vec<[f64; 2]> { ls.coords().map(|c| [c.x, c.y]).collect() };
    let polygons: Vec<Vec<Vec<[f64; 2]>>> = mp.0.iter()
        .map(|polygon| {
            std::iter::once(ring(polygon.exterior()))
                .chain(polygon.interiors().iter().map(ring))
                .collect()
        })
        .collect();

    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Style,
        io::geojson::parse_features,
        map::Record,
        session::Choropleth,
        attribute::AttributeCatalog,
        color::Palette,
    };

    fn session() -> Choropleth {
        let collection = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "community": "ALPHA", "area": 1.5 },
                    "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]] }
                },
                { "type": "Feature", "properties": { "community": "BETA" }, "geometry": null },
                { "type": "Feature", "properties": { "community": "GAMMA" }, "geometry": null }
            ]
        });
        let features = parse_features(&collection, "community").unwrap();
        let records = [
            Record::new("alpha").with_field("Rate", "10"),
            Record::new("gamma").with_field("Rate", "30"),
        ];
        let style = Style {
            catalog: AttributeCatalog::new(["Rate"]).unwrap(),
            palette: Palette::purples().resample(2).unwrap(),
            classes: 2,
            ..Style::default()
        };
        Choropleth::new(style, features, &records).unwrap()
    }

    #[test]
    fn exports_fill_class_and_values() {
        let session = session();
        let value = scene_to_geojson(&session.scene());

        assert_eq!(value["expressed"], json!("Rate"));
        assert_eq!(value["breaks"], json!([30.0]));

        let alpha = &value["features"][0];
        assert_eq!(alpha["id"], json!("ALPHA"));
        assert_eq!(alpha["properties"]["area"], json!(1.5));
        assert_eq!(alpha["properties"]["Rate"], json!(10.0));
        assert_eq!(alpha["properties"]["class"], json!(0));
        assert_eq!(alpha["properties"]["fill"], json!("#f2f0f7"));
        assert_eq!(alpha["properties"]["label"], json!("10.00%"));
        assert_eq!(alpha["geometry"]["type"], json!("MultiPolygon"));
        assert_eq!(alpha["geometry"]["coordinates"][0][0][1], json!([1.0, 0.0]));

        let beta = &value["features"][1];
        assert_eq!(beta["properties"]["Rate"], Value::Null);
        assert_eq!(beta["properties"]["class"], Value::Null);
        assert_eq!(beta["properties"]["fill"], json!("#cccccc"));
        assert_eq!(beta["geometry"], Value::Null);
    }

    #[test]
    fn exported_collection_reads_back() {
        let session = session();
        let value = scene_to_geojson(&session.scene());
        let features = parse_features(&value, "community").unwrap();

        assert_eq!(features.len(), 3);
        assert_eq!(features[0].geometry(), session.features()[0].geometry());
    }

    #[test]
    fn sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.geojson");

        let mut session = session();
        session.subscribe(Box::new(GeoJsonFile::new(&path)));
        session.render().unwrap();

        let written: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["features"].as_array().unwrap().len(), 3);
    }
}
