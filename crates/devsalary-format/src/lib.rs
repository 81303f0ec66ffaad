//! Report renderers for devsalary.
//!
//! This crate provides formatters for writing per-platform salary reports:
//!
//! - [`TableFormatter`] - Bordered ASCII table with the report title
//! - [`CsvFormatter`] - CSV (or TSV) format
//! - [`JsonFormatter`] - JSON document or NDJSON format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/devsalary/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod table;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use table::{COLUMN_TITLES, TableFormatter};
