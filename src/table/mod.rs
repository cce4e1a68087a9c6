//! Tabular data model
//!
//! Rows are ordered maps from column name to [`Cell`]. A [`Table`] is the
//! normalized form handed to the encoder: one header list and records that
//! all have exactly one rendered field per header.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ReportError, Result};

mod headers;
mod value;

pub use headers::HeaderSet;
pub use value::{Cell, iso_timestamp};

/// One record of named scalar values.
pub type Row = IndexMap<String, Cell>;

/// Build a [`Row`] from key/value pairs, keeping their order.
pub fn row<K, V, I>(pairs: I) -> Row
where
    K: Into<String>,
    V: Into<Cell>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Parse a JSON array of objects into rows, preserving key order.
pub fn rows_from_json(input: &str) -> Result<Vec<Row>> {
    let document: Value = serde_json::from_str(input)?;
    let Value::Array(items) = document else {
        return Err(ReportError::InvalidRows(
            "expected a JSON array of objects".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (k, Cell::from(v)))
                .collect::<Row>()),
            other => Err(ReportError::InvalidRows(format!(
                "row {index} is {}, expected an object",
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Header plus fully rendered records, ready for encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl Table {
    /// Normalize heterogeneous rows against their combined header set.
    /// Keys a row lacks become empty fields.
    pub fn from_rows(rows: &[Row], normalize_dates: bool) -> Self {
        let headers = HeaderSet::from_rows(rows).into_vec();
        let records = rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|name| {
                        row.get(name)
                            .map(|cell| cell.render(normalize_dates))
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Self { headers, records }
    }

    /// Fixed-schema table. Record lengths are not checked here; the encoder
    /// rejects a record whose length differs from the header.
    pub fn with_columns<S: Into<String>>(columns: impl IntoIterator<Item = S>, records: &[Vec<Cell>]) -> Self {
        Self {
            headers: columns.into_iter().map(Into::into).collect(),
            records: records
                .iter()
                .map(|record| record.iter().map(|cell| cell.render(false)).collect())
                .collect(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Number of data records, header excluded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
