//! Style configuration: which attributes exist, how many classes, which colors.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    attribute::{AttributeCatalog, CHICAGO_ATTRIBUTES},
    color::{Palette, Rgb, PURPLES, UNKNOWN},
    error::ChoroplethError,
};

/// Validated settings used by a [`Choropleth`](crate::Choropleth) session.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub catalog: AttributeCatalog,
    pub palette: Palette,
    pub unknown: Rgb,
    pub classes: usize,
    pub chart_max: f64,
}

impl Style {
    /// Checks that the class count fits the palette, the unknown color stands
    /// apart from the class colors and the chart axis is positive.
    pub fn validate(&self) -> Result<(), ChoroplethError> {
        if self.classes == 0 || self.classes > self.palette.len() {
            return Err(ChoroplethError::Configuration(format!(
                "{} classes requested but the palette has {} colors", self.classes, self.palette.len()
            )));
        }
        if self.palette.contains(&self.unknown) {
            return Err(ChoroplethError::Configuration(format!(
                "unknown color {} is also a palette color", self.unknown
            )));
        }
        if !(self.chart_max.is_finite() && self.chart_max > 0.0) {
            return Err(ChoroplethError::Configuration(format!(
                "chart axis maximum must be positive, got {}", self.chart_max
            )));
        }
        Ok(())
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            catalog: AttributeCatalog::chicago(),
            palette: Palette::purples(),
            unknown: UNKNOWN,
            classes: PURPLES.len(),
            chart_max: 100.0,
        }
    }
}

/// On-disk form of the style, as JSON. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Column of the table and property of the features holding the neighborhood name.
    pub key_field: String,
    pub attributes: Vec<String>,
    pub palette: Vec<Rgb>,
    pub unknown_color: Rgb,
    pub classes: usize,
    pub chart_max: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            key_field: "community".to_string(),
            attributes: CHICAGO_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            palette: PURPLES.to_vec(),
            unknown_color: UNKNOWN,
            classes: PURPLES.len(),
            chart_max: 100.0,
        }
    }
}

impl StyleConfig {
    /// Read a JSON style file.
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[config] Failed to open style file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[config] Failed to parse style file {}", path.display()))
    }

    /// Read `path` if given, otherwise use the defaults.
    pub fn read_or_default(path: Option<&Path>) -> Result<Self> {
        path.map(Self::read).unwrap_or_else(|| Ok(Self::default()))
    }

    /// Build and validate the runtime style.
    pub fn to_style(&self) -> Result<Style, ChoroplethError> {
        if self.key_field.trim().is_empty() {
            return Err(ChoroplethError::Configuration("key field must not be blank".into()));
        }
        let style = Style {
            catalog: AttributeCatalog::new(&self.attributes)?,
            palette: Palette::new(self.palette.clone())?,
            unknown: self.unknown_color,
            classes: self.classes,
            chart_max: self.chart_max,
        };
        style.validate()?;
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_default_style() {
        assert_eq!(StyleConfig::default().to_style().unwrap(), Style::default());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: StyleConfig = serde_json::from_str(r##"{
            "attributes": ["PovertyRate", "UnemploymentRate"],
            "palette": ["#eff3ff", "#bdd7e7", "#6baed6", "#2171b5"],
            "classes": 4
        }"##).unwrap();

        let style = config.to_style().unwrap();
        assert_eq!(config.key_field, "community");
        assert_eq!(style.catalog.first(), "PovertyRate");
        assert_eq!(style.palette.len(), 4);
        assert_eq!(style.unknown, UNKNOWN);
    }

    #[test]
    fn rejects_more_classes_than_colors() {
        let config = StyleConfig { classes: 7, ..StyleConfig::default() };
        assert!(matches!(config.to_style(), Err(ChoroplethError::Configuration(_))));
    }

    #[test]
    fn rejects_unknown_color_inside_palette() {
        let config = StyleConfig { unknown_color: PURPLES[0], ..StyleConfig::default() };
        assert!(matches!(config.to_style(), Err(ChoroplethError::Configuration(_))));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(serde_json::from_str::<StyleConfig>(r##"{"colour": "#fff"}"##).is_err());
    }

    #[test]
    fn rejects_bad_chart_axis() {
        let config = StyleConfig { chart_max: 0.0, ..StyleConfig::default() };
        assert!(config.to_style().is_err());
    }
}
