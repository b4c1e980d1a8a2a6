use std::path::Path;

use anyhow::{ensure, Result};
use choromap::io::{geojson::GeoJsonFile, json::ChartFile};

use crate::commands::load_session;

fn check_writable(path: &Path, force: bool) -> Result<()> {
    ensure!(force || !path.exists(), "[render] {} already exists (use --force to overwrite)", path.display());
    Ok(())
}

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    check_writable(&args.output, args.force)?;
    if let Some(chart) = &args.chart { check_writable(chart, args.force)?; }

    let mut session = load_session(cli, &args.input)?;
    session.subscribe(Box::new(GeoJsonFile::new(&args.output)));
    if let Some(chart) = &args.chart {
        session.subscribe(Box::new(ChartFile::new(chart)));
    }

    match &args.attribute {
        Some(name) => session.select_attribute(name)?,
        None => session.render()?,
    }

    println!("[render] {} -> {}", session.expressed(), args.output.display());
    if let Some(chart) = &args.chart { println!("[render] chart -> {}", chart.display()); }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_output_needs_force() {
        let existing = tempfile::NamedTempFile::new().unwrap();

        let err = check_writable(existing.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert!(check_writable(existing.path(), true).is_ok());
    }

    #[test]
    fn new_output_is_writable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_writable(&dir.path().join("map.geojson"), false).is_ok());
    }
}
