//! # csv-report - delimited reports from loosely-typed rows
//!
//! csv-report turns in-memory tabular data into CSV text and writes it to
//! disk:
//!
//! - **Heterogeneous rows**: each row may carry its own keys; the header is the
//!   union of all keys in first-seen order and missing cells render empty
//! - **Fixed schemas**: known columns with date-times rendered as ISO-8601
//! - **Configurable encoding**: any single-character delimiter, optional
//!   quoting of every field
//! - **Empty reports**: no rows writes the literal text `No Results Found`
//!
//! ## Quick Start
//!
//! ```bash
//! # Write ./reports/test-report.csv, pipe-delimited and fully quoted
//! csv-report generate rows.json -o test-report.csv -d reports --delimiter '|' --quote
//!
//! # Print to stdout instead
//! csv-report preview rows.json
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use csv_report::{Cell, FormatOptions, ReportDetails, ReportWriter, row};
//!
//! # async fn run() -> csv_report::Result<()> {
//! let rows = vec![
//!     row([("Name", Cell::from("John")), ("Age", Cell::from(28))]),
//!     row([("Name", Cell::from("Jane")), ("City", Cell::from("London"))]),
//! ];
//! let details = ReportDetails::new("people.csv", rows)
//!     .with_directory("reports")
//!     .with_format_options(FormatOptions {
//!         delimiter: "|".into(),
//!         quote_values: true,
//!         ..FormatOptions::default()
//!     });
//!
//! let path = ReportWriter::new("/tmp").generate_csv_report(&details).await?;
//! println!("Report generated at: {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod encode;
pub mod error;
pub mod report;
pub mod table;

pub use cli::{Cli, Output};
pub use encode::{Delimiter, EncodeOptions, encode};
pub use error::{ReportError, Result};
pub use report::{
    FixedSchemaWriter, FormatOptions, NO_RESULTS, ReportDetails, ReportFormat, ReportWriter,
    render_report,
};
pub use table::{Cell, HeaderSet, Row, Table, row, rows_from_json};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
