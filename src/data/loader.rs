use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{
    COL_BOOSTER_CATEGORY, COL_BOOSTER_VERSION, COL_CLASS, COL_FLIGHT_NUMBER, COL_PAYLOAD,
    COL_SITE, LaunchDataset, LaunchRecord, Outcome, REQUIRED_COLUMNS,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Shape problems in a source file. Any of these aborts startup.
///
/// `row` is the 1-based record number, not counting the CSV header.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: class must be 0 or 1, got {value}")]
    InvalidClass { row: usize, value: f64 },
    #[error("row {row}: payload mass must be a non-negative number, got {value}")]
    InvalidPayload { row: usize, value: f64 },
    #[error("row {row}: flight number must be a non-negative integer, got {value}")]
    InvalidFlightNumber { row: usize, value: f64 },
    #[error("row {row}: null value in column '{column}'")]
    NullValue { row: usize, column: &'static str },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the launch columns (the usual export)
/// * `.json`    – `[{ "Launch Site": ..., "class": ..., ... }, ...]`
/// * `.parquet` – one column per field, same names
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => return Err(DatasetError::UnsupportedExtension(other.to_string()).into()),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row decoding shared by every format
// ---------------------------------------------------------------------------

/// A row as it appears in the source, before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    // Pandas exports sometimes write the class as 1.0.
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
}

impl RawRow {
    fn into_record(self, row: usize) -> Result<LaunchRecord, DatasetError> {
        let outcome = if self.class.fract() == 0.0 {
            Outcome::from_class(self.class as i64)
        } else {
            None
        }
        .ok_or(DatasetError::InvalidClass {
            row,
            value: self.class,
        })?;

        if !self.payload_mass.is_finite() || self.payload_mass < 0.0 {
            return Err(DatasetError::InvalidPayload {
                row,
                value: self.payload_mass,
            });
        }

        Ok(LaunchRecord {
            site: self.site,
            payload_mass: self.payload_mass,
            outcome,
            booster_category: self.booster_category,
            flight_number: self.flight_number,
            booster_version: self.booster_version.filter(|v| !v.is_empty()),
        })
    }
}

fn require_columns<'a>(present: impl IntoIterator<Item = &'a str>) -> Result<(), DatasetError> {
    let present: Vec<&str> = present.into_iter().map(str::trim).collect();
    match REQUIRED_COLUMNS.iter().find(|c| !present.contains(c)) {
        Some(missing) => Err(DatasetError::MissingColumn(*missing)),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    require_columns(headers.iter())?;

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        let row_no = i + 1;
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into_record(row_no)?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: serde_json::Value = serde_json::from_str(&text).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let row_no = i + 1;
        let obj = row
            .as_object()
            .with_context(|| format!("JSON row {row_no} is not an object"))?;
        require_columns(obj.keys().map(String::as_str))?;

        let raw: RawRow = serde_json::from_value(row.clone())
            .with_context(|| format!("JSON row {row_no}"))?;
        records.push(raw.into_record(row_no)?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas (`df.to_parquet()`) or Polars.
///
/// String columns may be Utf8 or LargeUtf8; numeric columns may be any of
/// Int32, Int64, Float32, Float64.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    // A zero-row file yields no batches, so check the file schema up front.
    require_columns(builder.schema().fields().iter().map(|f| f.name().as_str()))?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let (Some(site), Some(payload), Some(class), Some(category)) = (
            column(&batch, COL_SITE),
            column(&batch, COL_PAYLOAD),
            column(&batch, COL_CLASS),
            column(&batch, COL_BOOSTER_CATEGORY),
        ) else {
            bail!("parquet batch is missing a required column");
        };
        let flight = column(&batch, COL_FLIGHT_NUMBER);
        let version = column(&batch, COL_BOOSTER_VERSION);

        for row in 0..batch.num_rows() {
            let row_no = records.len() + 1;
            let raw = RawRow {
                site: string_cell(site, row)?.ok_or(DatasetError::NullValue {
                    row: row_no,
                    column: COL_SITE,
                })?,
                payload_mass: numeric_cell(payload, row)?.ok_or(DatasetError::NullValue {
                    row: row_no,
                    column: COL_PAYLOAD,
                })?,
                class: numeric_cell(class, row)?.ok_or(DatasetError::NullValue {
                    row: row_no,
                    column: COL_CLASS,
                })?,
                booster_category: string_cell(category, row)?.ok_or(DatasetError::NullValue {
                    row: row_no,
                    column: COL_BOOSTER_CATEGORY,
                })?,
                flight_number: match flight {
                    Some(col) => numeric_cell(col, row)?
                        .map(|v| flight_number(v, row_no))
                        .transpose()?,
                    None => None,
                },
                booster_version: match version {
                    Some(col) => string_cell(col, row)?,
                    None => None,
                },
            };
            records.push(raw.into_record(row_no)?);
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn column<'b>(batch: &'b RecordBatch, name: &str) -> Option<&'b ArrayRef> {
    let idx = batch.schema().index_of(name).ok()?;
    Some(batch.column(idx))
}

/// Same acceptance as serde's `u32` on the CSV and JSON paths.
fn flight_number(value: f64, row: usize) -> Result<u32, DatasetError> {
    if value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) {
        Ok(value as u32)
    } else {
        Err(DatasetError::InvalidFlightNumber { row, value })
    }
}

/// Read a string cell; `None` for null.
fn string_cell(col: &ArrayRef, row: usize) -> Result<Option<String>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .context("expected StringArray")?
            .value(row)
            .to_string(),
        DataType::LargeUtf8 => col.as_string::<i64>().value(row).to_string(),
        other => bail!("Expected string column, got {other:?}"),
    };
    Ok(Some(value))
}

/// Read a numeric cell as `f64`; `None` for null.
fn numeric_cell(col: &ArrayRef, row: usize) -> Result<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let any = col.as_any();
    let value = match col.data_type() {
        DataType::Float64 => any
            .downcast_ref::<Float64Array>()
            .context("expected Float64Array")?
            .value(row),
        DataType::Float32 => any
            .downcast_ref::<Float32Array>()
            .context("expected Float32Array")?
            .value(row) as f64,
        DataType::Int64 => any
            .downcast_ref::<Int64Array>()
            .context("expected Int64Array")?
            .value(row) as f64,
        DataType::Int32 => any
            .downcast_ref::<Int32Array>()
            .context("expected Int32Array")?
            .value(row) as f64,
        other => bail!("Expected numeric column, got {other:?}"),
    };
    Ok(Some(value))
}
