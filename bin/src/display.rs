//! Display utilities and output formatting for the devsalary CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use devsalary_lib::prelude::*;
use devsalary_lib::{FormatError, JsonStyle};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for the rendered reports.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Table,
    Csv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => Self::Table,
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OutputFormat::from(*self))
    }
}

/// Write reports in the given format.
pub(crate) fn write_reports<W: Write>(
    reports: &[StatsReport],
    format: OutputFormat,
    writer: W,
) -> Result<(), FormatError> {
    match format {
        OutputFormat::Table => TableFormatter::new().write_reports(reports, writer),
        OutputFormat::Csv => CsvFormatter::new().write_reports(reports, writer),
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_reports(reports, writer),
        OutputFormat::Ndjson => JsonFormatter::new()
            .with_style(JsonStyle::Ndjson)
            .write_reports(reports, writer),
    }
}

/// Write reports to a file, or to stdout when no path is given.
pub(crate) fn emit_reports(
    reports: &[StatsReport],
    format: Format,
    output: Option<&Path>,
) -> Result<()> {
    let format = OutputFormat::from(format);
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_reports(reports, format, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_reports(reports, format, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Progress bar for one platform's languages.
pub(crate) fn language_progress(title: &str, languages: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(languages as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {prefix} [{bar:30.cyan/blue}] {pos}/{len} languages {msg}")
            .expect("Invalid progress template")
            .progress_chars("=>-"),
    );
    pb.set_prefix(title.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> StatsReport {
        let mut report = StatsReport::new(Platform::HeadHunter, "HeadHunter Москва");
        report.insert("Go", LanguageStat::from_totals(5, 2, 500_000));
        report
    }

    #[test]
    fn test_format_names_match_output_formats() {
        for format in Format::value_variants() {
            let name = format.to_string();
            assert_eq!(name.parse::<OutputFormat>().unwrap(), OutputFormat::from(*format));
            assert!(Format::from_str(&name, false).is_ok());
        }
    }

    #[test]
    fn test_write_reports_dispatch() {
        let reports = vec![sample_report()];

        let mut table = Vec::new();
        write_reports(&reports, OutputFormat::Table, &mut table).unwrap();
        assert!(String::from_utf8(table).unwrap().starts_with("+HeadHunter Москва"));

        let mut csv = Vec::new();
        write_reports(&reports, OutputFormat::Csv, &mut csv).unwrap();
        assert!(String::from_utf8(csv).unwrap().contains("hh,Go,5,2,250000"));

        let mut ndjson = Vec::new();
        write_reports(&reports, OutputFormat::Ndjson, &mut ndjson).unwrap();
        assert_eq!(String::from_utf8(ndjson).unwrap().lines().count(), 1);
    }
}
