//! JSON export of the chart model.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::{io::atomic::write_atomic, session::{RenderSink, Scene}, view::Chart};

/// Writes `chart` as pretty-printed JSON.
pub fn write_chart(path: &Path, chart: &Chart) -> Result<()> {
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(writer, chart)
            .with_context(|| format!("[io::json] Failed to write chart to {}", path.display()))
    })?;
    info!(path = %path.display(), bars = chart.bars.len(), "wrote chart");
    Ok(())
}

/// Render sink that rewrites the chart JSON on every scene.
#[derive(Debug, Clone)]
pub struct ChartFile {
    path: PathBuf,
}

impl ChartFile {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl RenderSink for ChartFile {
    fn render(&mut self, scene: &Scene<'_>) -> Result<()> { write_chart(&self.path, &scene.chart()) }
}
