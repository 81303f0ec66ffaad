//! Output format abstraction.

use devsalary_types::StatsReport;
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// ASCII table.
    #[default]
    Table,
    /// CSV format.
    Csv,
    /// JSON document.
    Json,
    /// Newline-delimited JSON format, one line per language.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Table => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Table, Self::Csv, Self::Json, Self::Ndjson]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Table => "table",
            other => other.extension(),
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "txt" | "ascii" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendered output was not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Trait for report formatters.
pub trait Formatter: Send + Sync {
    /// Writes a report to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_report<W: Write>(&self, report: &StatsReport, writer: W) -> Result<(), FormatError>;

    /// Writes several reports to the output.
    ///
    /// By default each report is written in turn, separated by a blank line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_reports<W: Write>(
        &self,
        reports: &[StatsReport],
        mut writer: W,
    ) -> Result<(), FormatError> {
        for (index, report) in reports.iter().enumerate() {
            if index > 0 {
                writeln!(writer)?;
            }
            self.write_report(report, &mut writer)?;
        }
        Ok(())
    }

    /// Renders a report into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&self, report: &StatsReport) -> Result<String, FormatError> {
        let mut buffer = Vec::new();
        self.write_report(report, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
