//! Dataset ingestion
//!
//! Parses a headered orders CSV into an [`OrdersTable`]. The table is built
//! once at startup; any malformed input fails the load so that queries never
//! run against a partially-loaded dataset.
//!
//! Column rules:
//! - `order_id`, `order_dow` and `order_hour_of_day` are required
//! - `days_since_prior_order` is ignored
//! - every other column is a category holding per-order item counts
//!
//! Missing category cells (empty, `NaN`, `NA`, `null`) count as zero items.
//! Out-of-range day or hour values are kept; the distribution queries skip
//! those rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};
use types::errors::TableError;
use types::ids::OrderId;
use types::numeric::MAX_SAFE_INTEGER;
use types::table::{OrderRow, OrdersTable, META_COLUMNS};

/// Cell values treated as "no purchase".
const MISSING_MARKERS: [&str; 6] = ["", "NaN", "nan", "NA", "N/A", "null"];

/// Errors that can occur while loading the dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("invalid value {value:?} in column {column} at row {row}: {reason}")]
    InvalidCell {
        row: usize,
        column: String,
        value: String,
        reason: &'static str,
    },

    #[error("invalid table: {0}")]
    Table(#[from] TableError),
}

/// Load the orders CSV at `path`.
pub fn load_orders_csv(path: impl AsRef<Path>) -> Result<OrdersTable, LoadError> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading orders dataset");

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = read_orders(file)?;

    info!(
        path = %path.display(),
        orders = table.len(),
        categories = table.category_count(),
        "Loaded orders dataset"
    );
    Ok(table)
}

/// Parse orders CSV from any reader.
pub fn read_orders<R: Read>(reader: R) -> Result<OrdersTable, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let id_col = required_column(&headers, "order_id")?;
    let dow_col = required_column(&headers, "order_dow")?;
    let hour_col = required_column(&headers, "order_hour_of_day")?;

    let category_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(_, name)| !META_COLUMNS.contains(name))
        .map(|(index, name)| (index, name.to_string()))
        .collect();

    let mut rows = Vec::new();
    let mut out_of_range = 0usize;

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = index + 1;

        let order_id = OrderId::parse(record.get(id_col).unwrap_or_default());
        let order_dow = parse_index(&record, dow_col, "order_dow", row)?;
        let order_hour_of_day = parse_index(&record, hour_col, "order_hour_of_day", row)?;

        let items = category_cols
            .iter()
            .map(|(col, name)| parse_count(record.get(*col).unwrap_or_default(), name, row))
            .collect::<Result<Vec<_>, _>>()?;

        let order = OrderRow::new(order_id, order_dow, order_hour_of_day, items);
        if order.weekday().is_none() || order.hour().is_none() {
            out_of_range += 1;
        }
        rows.push(order);
    }

    if out_of_range > 0 {
        warn!(
            rows = out_of_range,
            "Dataset contains orders with out-of-range day or hour; distributions will skip them"
        );
    }

    let categories = category_cols.into_iter().map(|(_, name)| name).collect();
    Ok(OrdersTable::new(categories, rows)?)
}

fn required_column(headers: &StringRecord, name: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(LoadError::MissingColumn(name))
}

fn invalid(row: usize, column: &str, value: &str, reason: &'static str) -> LoadError {
    LoadError::InvalidCell {
        row,
        column: column.to_string(),
        value: value.to_string(),
        reason,
    }
}

/// Day or hour value: an integer, possibly written as `3.0`.
fn parse_index(record: &StringRecord, col: usize, column: &str, row: usize) -> Result<i64, LoadError> {
    let raw = record.get(col).unwrap_or_default();
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(value);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER as f64 => {
            Ok(value as i64)
        }
        _ => Err(invalid(row, column, raw, "expected an integer")),
    }
}

/// Item count: a non-negative integer, possibly written as `2.0`.
fn parse_count(raw: &str, column: &str, row: usize) -> Result<u64, LoadError> {
    if MISSING_MARKERS.contains(&raw) {
        return Ok(0);
    }
    if let Ok(value) = raw.parse::<u64>() {
        if value > MAX_SAFE_INTEGER {
            return Err(invalid(row, column, raw, "item count is too large"));
        }
        return Ok(value);
    }

    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(row, column, raw, "expected a number"))?;

    if value < 0.0 {
        return Err(invalid(row, column, raw, "item count must not be negative"));
    }
    if value.fract() != 0.0 {
        return Err(invalid(row, column, raw, "item count must be a whole number"));
    }
    if value > MAX_SAFE_INTEGER as f64 {
        return Err(invalid(row, column, raw, "item count is too large"));
    }
    Ok(value as u64)
}
