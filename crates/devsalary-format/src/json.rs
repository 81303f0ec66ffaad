//! JSON output format.

use devsalary_types::{LanguageStat, Platform, StatsReport};
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// One JSON document for the whole report.
    #[default]
    Document,
    /// Newline-delimited JSON (NDJSON/JSONL), one line per language.
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for document style).
    pretty: bool,
}

/// One NDJSON line.
#[derive(Serialize)]
struct LanguageLine<'a> {
    platform: Platform,
    language: &'a str,
    #[serde(flatten)]
    stat: &'a LanguageStat,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (document style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Document,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (document style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_report<W: Write>(
        &self,
        report: &StatsReport,
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Document => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, report)?;
                } else {
                    serde_json::to_writer(&mut writer, report)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for (language, stat) in report.iter() {
                    let line = LanguageLine {
                        platform: report.platform(),
                        language,
                        stat,
                    };
                    serde_json::to_writer(&mut writer, &line)?;
                    writeln!(writer)?;
                }
            }
        }

        Ok(())
    }

    /// Writes a JSON array of reports, or every report's lines for NDJSON.
    fn write_reports<W: Write>(
        &self,
        reports: &[StatsReport],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Document => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, reports)?;
                } else {
                    serde_json::to_writer(&mut writer, reports)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for report in reports {
                    self.write_report(report, &mut writer)?;
                }
            }
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Document => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_test_report() -> StatsReport {
        let generated_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut report =
            StatsReport::with_timestamp(Platform::HeadHunter, "HeadHunter Москва", generated_at);
        report.insert("Swift", LanguageStat::from_totals(40, 20, 4_000_000));
        report.insert("Java", LanguageStat::from_totals(900, 300, 60_000_000));
        report
    }

    #[test]
    fn test_json_document() {
        let result = JsonFormatter::new().render(&create_test_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["platform"], "hh");
        assert_eq!(value["title"], "HeadHunter Москва");
        assert_eq!(value["languages"]["Swift"]["avg_salary"], 200_000);
        assert_eq!(value["languages"]["Java"]["vacancies_found"], 900);
        assert!(result.find("Swift").unwrap() < result.find("Java").unwrap());
    }

    #[test]
    fn test_json_pretty() {
        let result = JsonFormatter::new()
            .with_pretty(true)
            .render(&create_test_report())
            .unwrap();
        assert!(result.contains("\n  \"platform\": \"hh\""));
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let result = formatter.render(&create_test_report()).unwrap();
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"platform":"hh","language":"Swift","vacancies_found":40,"vacancies_processed":20,"avg_salary":200000}"#
        );
        assert_eq!(formatter.extension(), "ndjson");
    }

    #[test]
    fn test_multiple_reports() {
        let mut sj = StatsReport::new(Platform::SuperJob, "SuperJob Москва");
        sj.insert("Swift", LanguageStat::from_totals(2, 1, 90_000));
        let reports = vec![create_test_report(), sj];

        let mut buffer = Vec::new();
        JsonFormatter::new().write_reports(&reports, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["platform"], "sj");

        let mut buffer = Vec::new();
        JsonFormatter::ndjson()
            .write_reports(&reports, &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 3);
    }
}
