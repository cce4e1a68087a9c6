//! Scalar cell values and their text rendering

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// A single scalar value inside a row.
///
/// Rows come from loosely typed sources, so a cell keeps enough of the
/// original type to render it the way the source would have: integers
/// without a decimal point, date-times in ISO-8601 form, null as `null`.
/// Only a key that is absent from a row renders as an empty field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum Cell {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl Cell {
    /// Render the cell as CSV field text.
    ///
    /// With `normalize_dates` set, text that parses as an RFC 3339 timestamp
    /// is rewritten into the same canonical form a `DateTime` cell uses.
    pub fn render(&self, normalize_dates: bool) -> String {
        match self {
            Cell::Text(text) if normalize_dates => {
                normalize_timestamp(text).unwrap_or_else(|| text.clone())
            }
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Integer(n) => write!(f, "{n}"),
            Cell::Float(x) => f.write_str(&format_float(*x)),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::DateTime(ts) => f.write_str(&iso_timestamp(ts)),
            Cell::Null => f.write_str("null"),
        }
    }
}

/// `YYYY-MM-DDTHH:mm:ss.sssZ`
pub fn iso_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn normalize_timestamp(text: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(text.trim())
        .ok()
        .map(|ts| iso_timestamp(&ts.with_timezone(&Utc)))
}

fn format_float(x: f64) -> String {
    if x.is_infinite() {
        let sign = if x.is_sign_negative() { "-" } else { "" };
        format!("{sign}Infinity")
    } else {
        // f64's Display already drops a trailing ".0"
        x.to_string()
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::Bool(b) => Cell::Bool(b),
            Value::String(s) => Cell::Text(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Cell::Integer(i)
                } else if let Some(x) = n.as_f64().filter(|_| n.is_f64()) {
                    Cell::Float(x)
                } else {
                    // u64 beyond i64::MAX keeps its exact digits
                    Cell::Text(n.to_string())
                }
            }
            nested @ (Value::Array(_) | Value::Object(_)) => Cell::Text(nested.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Integer(value.into())
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Integer(value.into())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<DateTime<Utc>> for Cell {
    fn from(value: DateTime<Utc>) -> Self {
        Cell::DateTime(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}
