//! File formats for the two inputs (indicator table, neighborhood boundaries)
//! and the outputs (colored features, chart).

mod atomic;

pub mod csv;
pub mod geojson;
pub mod json;
pub mod shp;

use std::path::Path;

use anyhow::{bail, Result};

use crate::map::Feature;

/// Read boundary features, choosing the format from the file extension
/// (`.geojson`/`.json` or `.shp`).
pub fn read_features(path: &Path, key_field: &str) -> Result<Vec<Feature>> {
    let extension = path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("geojson" | "json") => geojson::read_features(path, key_field),
        Some("shp") => shp::read_features(path, key_field),
        _ => bail!("[io] Unsupported boundary file {}: expected .geojson, .json or .shp", path.display()),
    }
}
