//! CSV encoding
//!
//! A pure step: a [`Table`] plus [`EncodeOptions`] in, CSV text out. Writing
//! the text anywhere is the caller's business.

use csv::{QuoteStyle, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ReportError, Result};
use crate::table::Table;

pub const DEFAULT_DELIMITER: u8 = b',';

/// Field separator. Always a single ASCII byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Delimiter(u8);

impl Delimiter {
    pub fn new(byte: u8) -> Result<Self> {
        if byte.is_ascii() && byte != b'"' && byte != b'\n' && byte != b'\r' {
            Ok(Self(byte))
        } else {
            Err(ReportError::InvalidDelimiter(
                char::from(byte).to_string(),
            ))
        }
    }

    /// Parse a delimiter from user input. An empty string selects the
    /// default comma.
    pub fn parse(input: &str) -> Result<Self> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self::default()),
            (Some(c), None) if c.is_ascii() => Self::new(c as u8)
                .map_err(|_| ReportError::InvalidDelimiter(input.to_string())),
            _ => Err(ReportError::InvalidDelimiter(input.to_string())),
        }
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(DEFAULT_DELIMITER)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(self.0))
    }
}

impl FromStr for Delimiter {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Delimiter {
    type Error = ReportError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Delimiter> for String {
    fn from(value: Delimiter) -> Self {
        value.to_string()
    }
}

/// Encoder settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub delimiter: Delimiter,
    /// Wrap every field in quotes, empty ones included. When off, only
    /// fields that need it (delimiter, quote, newline) are quoted.
    pub quote_all: bool,
}

impl EncodeOptions {
    pub fn new(delimiter: Delimiter, quote_all: bool) -> Self {
        Self { delimiter, quote_all }
    }

    fn quote_style(&self) -> QuoteStyle {
        if self.quote_all {
            QuoteStyle::Always
        } else {
            QuoteStyle::Necessary
        }
    }
}

/// Encode a header line followed by every record, each terminated by `\n`.
pub fn encode(table: &Table, options: &EncodeOptions) -> Result<String> {
    // csv writes a zero-field record as `""`; a table without columns is
    // blank lines only.
    if table.headers().is_empty() && table.records().iter().all(|record| record.is_empty()) {
        return Ok("\n".repeat(table.len() + 1));
    }

    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter.as_byte())
        .quote_style(options.quote_style())
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.headers())?;
    for record in table.records() {
        writer.write_record(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;

    tracing::debug!(
        records = table.len(),
        bytes = bytes.len(),
        delimiter = %options.delimiter,
        quoted = options.quote_all,
        "Encoded table"
    );

    String::from_utf8(bytes).map_err(|err| {
        ReportError::Encode(csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            err,
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Cell, Row, row};

    fn people() -> Vec<Row> {
        vec![
            row([
                ("Name", Cell::from("John")),
                ("Age", Cell::from(28)),
                ("City", Cell::from("New \n\n York")),
            ]),
            row([
                ("Name", Cell::from("Jane")),
                ("Age", Cell::from(32)),
                ("City", Cell::from("London")),
            ]),
        ]
    }

    #[test]
    fn test_pipe_delimited_and_quoted() {
        let table = Table::from_rows(&people(), false);
        let options = EncodeOptions::new(Delimiter::parse("|").unwrap(), true);
        let output = encode(&table, &options).unwrap();

        assert_eq!(
            output,
            "\"Name\"|\"Age\"|\"City\"\n\"John\"|\"28\"|\"New \n\n York\"\n\"Jane\"|\"32\"|\"London\"\n"
        );
    }

    #[test]
    fn test_defaults_quote_only_when_needed() {
        let table = Table::from_rows(&people(), false);
        let output = encode(&table, &EncodeOptions::default()).unwrap();

        assert_eq!(
            output,
            "Name,Age,City\nJohn,28,\"New \n\n York\"\nJane,32,London\n"
        );
    }

    #[test]
    fn test_quote_all_wraps_empty_cells() {
        let rows = vec![row([("a", "1")]), row([("b", "2")])];
        let table = Table::from_rows(&rows, false);
        let output = encode(&table, &EncodeOptions::new(Delimiter::default(), true)).unwrap();

        assert_eq!(output, "\"a\",\"b\"\n\"1\",\"\"\n\"\",\"2\"\n");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let rows = vec![row([("quote", "say \"hi\"")])];
        let output = encode(&Table::from_rows(&rows, false), &EncodeOptions::default()).unwrap();
        assert_eq!(output, "quote\n\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_fields_containing_delimiter_are_quoted() {
        let rows = vec![row([("pair", "a;b")])];
        let options = EncodeOptions::new(Delimiter::parse(";").unwrap(), false);
        let output = encode(&Table::from_rows(&rows, false), &options).unwrap();
        assert_eq!(output, "pair\n\"a;b\"\n");
    }

    #[test]
    fn test_line_count_is_rows_plus_header() {
        let rows: Vec<Row> = (0..5).map(|i| row([("n", i)])).collect();
        let output = encode(&Table::from_rows(&rows, false), &EncodeOptions::default()).unwrap();
        assert_eq!(output.lines().count(), rows.len() + 1);
    }

    #[test]
    fn test_columnless_table_is_blank_lines() {
        let table = Table::from_rows(&[Row::new(), Row::new()], false);
        assert_eq!(encode(&table, &EncodeOptions::default()).unwrap(), "\n\n\n");

        let quoted = EncodeOptions::new(Delimiter::default(), true);
        assert_eq!(encode(&table, &quoted).unwrap(), "\n\n\n");
    }

    #[test]
    fn test_ragged_record_is_encode_error() {
        let table = Table::with_columns(["a", "b"], &[vec![Cell::from(1)]]);
        let err = encode(&table, &EncodeOptions::default()).unwrap_err();
        assert!(err.is_encode());
    }

    #[test]
    fn test_delimiter_parsing() {
        assert_eq!(Delimiter::parse("").unwrap(), Delimiter::default());
        assert_eq!(Delimiter::parse("\t").unwrap().as_byte(), b'\t');
        assert!(matches!(
            Delimiter::parse("||"),
            Err(ReportError::InvalidDelimiter(_))
        ));
        assert!(Delimiter::parse("§").is_err());
        assert!(Delimiter::parse("\"").is_err());
        assert_eq!("|".parse::<Delimiter>().unwrap().to_string(), "|");
    }
}
