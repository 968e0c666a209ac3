//! CSV import and export of a salary series.
//!
//! Layout: a `category,value` header followed by one row per data point, in
//! display order.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::series::Series;

/// Column header for series CSV files.
const HEADER: [&str; 2] = ["category", "value"];

/// Errors raised while reading or writing a series CSV.
#[derive(Debug, Error)]
pub enum SeriesCsvError {
    /// The file could not be opened or created.
    #[error("cannot open \"{}\": {source}", .path.display())]
    Open {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// A row could not be parsed or written.
    #[error("invalid series CSV: {0}")]
    Csv(#[from] csv::Error),
    /// A value parsed but is NaN or infinite.
    #[error("row {row}: value must be finite")]
    NonFinite {
        /// 1-based data row number.
        row: usize,
    },
    /// Flushing the writer failed.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Deserialize)]
struct Row {
    category: String,
    value: f64,
}

/// Reads a series from the CSV file at `path`.
///
/// # Errors
///
/// Returns a [`SeriesCsvError`] if the file cannot be opened or a row is invalid.
pub fn load_series_csv(path: &Path, name: &str) -> Result<Series, SeriesCsvError> {
    let file = File::open(path).map_err(|source| SeriesCsvError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_series_csv(file, name)
}

/// Reads a series from any reader.
///
/// # Errors
///
/// Returns a [`SeriesCsvError`] if a row is malformed or a value is not finite.
pub fn read_series_csv(reader: impl Read, name: &str) -> Result<Series, SeriesCsvError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut values = Vec::new();
    let mut categories = Vec::new();
    for (i, record) in rdr.deserialize::<Row>().enumerate() {
        let row = record?;
        if !row.value.is_finite() {
            return Err(SeriesCsvError::NonFinite { row: i + 1 });
        }
        categories.push(row.category);
        values.push(row.value);
    }

    Ok(Series::new(name, values, categories))
}

/// Writes `series` to the CSV file at `path`.
///
/// # Errors
///
/// Returns a [`SeriesCsvError`] if file creation or writing fails.
pub fn export_series_csv(series: &Series, path: &Path) -> Result<(), SeriesCsvError> {
    let file = File::create(path).map_err(|source| SeriesCsvError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_series_csv(series, io::BufWriter::new(file))
}

/// Writes `series` as CSV to any writer. Unlabeled values get an empty category.
///
/// # Errors
///
/// Returns a [`SeriesCsvError`] if writing fails.
pub fn write_series_csv(series: &Series, writer: impl Write) -> Result<(), SeriesCsvError> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(HEADER)?;
    for (i, value) in series.values.iter().enumerate() {
        let category = series.categories.get(i).map_or("", String::as_str);
        let value = value.to_string();
        wtr.write_record([category, value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}
