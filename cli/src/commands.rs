pub mod attributes;
pub mod breaks;
pub mod render;

use anyhow::{Context, Result};
use choromap::{io, Choropleth, StyleConfig};

use crate::cli::{Cli, InputArgs};

/// Style file (or defaults) with the command-line overrides applied.
pub fn style_config(cli: &Cli, input: Option<&InputArgs>) -> Result<StyleConfig> {
    let mut config = StyleConfig::read_or_default(cli.config.as_deref())?;
    if let Some(input) = input {
        if let Some(key_field) = &input.key_field { config.key_field = key_field.clone(); }
        if let Some(classes) = input.classes { config.classes = classes; }
    }
    Ok(config)
}

/// Read both inputs and join them into a session.
pub fn load_session(cli: &Cli, input: &InputArgs) -> Result<Choropleth> {
    let config = style_config(cli, Some(input))?;
    let style = config.to_style().context("[cli] Invalid style")?;

    let records = io::csv::read_records(&input.data, &config.key_field)?;
    let features = io::read_features(&input.features, &config.key_field)?;
    tracing::info!(records = records.len(), features = features.len(), "inputs loaded");

    let session = Choropleth::new(style, features, &records)?;
    let report = session.join_report();
    if !report.is_clean() {
        eprintln!(
            "[cli] join: {} matched, {} features without data, {} rows without a boundary, {} duplicate keys",
            report.matched,
            report.unmatched_features.len(),
            report.unmatched_records.len(),
            report.duplicate_keys.len(),
        );
    }
    Ok(session)
}
