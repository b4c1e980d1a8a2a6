//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{ensure, Context, Result};
use polars::{
    frame::DataFrame,
    io::SerReader,
    prelude::{CsvReadOptions, DataType},
};
use tracing::{info, warn};

use crate::map::Record;

/// Read the indicator table at `path` into records keyed by `key_field`.
pub fn read_records(path: &Path, key_field: &str) -> Result<Vec<Record>> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0)) // every column as text; parsing happens at join time
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))?;

    let records = records_from_frame(&df, key_field)?;
    info!(path = %path.display(), rows = records.len(), "read indicator table");
    Ok(records)
}

/// Read records from CSV text.
pub fn read_records_str(csv: &str, key_field: &str) -> Result<Vec<Record>> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(csv.as_bytes()))
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")?;
    records_from_frame(&df, key_field)
}

/// One record per row. Null cells are left out of the record, which the join
/// treats as missing. Rows without a key are skipped with a warning.
fn records_from_frame(df: &DataFrame, key_field: &str) -> Result<Vec<Record>> {
    let names: Vec<String> = df.get_column_names().iter().map(|name| name.to_string()).collect();
    ensure!(
        names.iter().any(|name| name == key_field),
        "[io::csv::read] CSV has no {:?} column (columns: {})", key_field, names.join(", "),
    );

    let columns = names.iter()
        .map(|name| Ok((name.as_str(), df.column(name)?.cast(&DataType::String)?)))
        .collect::<Result<Vec<_>>>()?;

    let (_, keys) = columns.iter()
        .find(|(name, _)| *name == key_field)
        .context("[io::csv::read] key column vanished")?;
    let keys = keys.str()?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let Some(key) = keys.get(row) else {
            warn!(row, key_field, "skipping row without a key");
            continue;
        };

        let mut record = Record::new(key);
        for (name, column) in &columns {
            if *name == key_field { continue }
            if let Some(raw) = column.str()?.get(row).filter(|raw| !raw.is_empty()) {
                record.insert(*name, raw);
            }
        }
        records.push(record);
    }

    Ok(records)
}
