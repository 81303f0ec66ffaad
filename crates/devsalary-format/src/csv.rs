//! CSV output format.

use devsalary_types::StatsReport;
use std::borrow::Cow;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a field if it contains the delimiter, a quote or a line break.
    fn escape<'a>(&self, field: &'a str) -> Cow<'a, str> {
        if field.contains([self.delimiter, '"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }
}

impl CsvFormatter {
    fn write_header<W: Write>(&self, writer: &mut W) -> Result<(), FormatError> {
        let d = self.delimiter;
        writeln!(
            writer,
            "platform{d}language{d}vacancies_found{d}vacancies_processed{d}avg_salary"
        )?;
        Ok(())
    }

    fn write_rows<W: Write>(&self, report: &StatsReport, writer: &mut W) -> Result<(), FormatError> {
        let d = self.delimiter;
        for (language, stat) in report.iter() {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}",
                report.platform().as_str(),
                self.escape(language),
                stat.vacancies_found(),
                stat.vacancies_processed(),
                stat.avg_salary()
            )?;
        }
        Ok(())
    }
}

impl Formatter for CsvFormatter {
    fn write_report<W: Write>(
        &self,
        report: &StatsReport,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.include_header {
            self.write_header(&mut writer)?;
        }
        self.write_rows(report, &mut writer)
    }

    /// Writes one header followed by the rows of every report.
    fn write_reports<W: Write>(
        &self,
        reports: &[StatsReport],
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.include_header {
            self.write_header(&mut writer)?;
        }
        for report in reports {
            self.write_rows(report, &mut writer)?;
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
