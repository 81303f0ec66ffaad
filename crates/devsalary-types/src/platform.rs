//! Job-search platform definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A job-search platform vacancies are collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// hh.ru
    #[serde(rename = "hh")]
    HeadHunter,
    /// superjob.ru
    #[serde(rename = "sj")]
    SuperJob,
}

impl Platform {
    /// Returns the short identifier used on the command line and in JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HeadHunter => "hh",
            Self::SuperJob => "sj",
        }
    }

    /// Returns the human-readable platform name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::HeadHunter => "HeadHunter",
            Self::SuperJob => "SuperJob",
        }
    }

    /// Returns the report title for the given city, e.g. `HeadHunter Москва`.
    #[must_use]
    pub fn report_title(&self, city: &str) -> String {
        format!("{} {}", self.name(), city)
    }

    /// Returns all platforms in reporting order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::HeadHunter, Self::SuperJob]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hh" | "headhunter" | "hh.ru" => Ok(Self::HeadHunter),
            "sj" | "superjob" | "superjob.ru" => Ok(Self::SuperJob),
            _ => Err(PlatformParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid platform string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformParseError(String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid platform '{}', expected one of: hh, headhunter, sj, superjob",
            self.0
        )
    }
}

impl std::error::Error for PlatformParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        assert_eq!("hh".parse::<Platform>().unwrap(), Platform::HeadHunter);
        assert_eq!("HeadHunter".parse::<Platform>().unwrap(), Platform::HeadHunter);
        assert_eq!("SJ".parse::<Platform>().unwrap(), Platform::SuperJob);
        assert_eq!(" superjob ".parse::<Platform>().unwrap(), Platform::SuperJob);
        assert!("linkedin".parse::<Platform>().is_err());
    }

    #[test]
    fn test_report_title() {
        assert_eq!(
            Platform::HeadHunter.report_title("Москва"),
            "HeadHunter Москва"
        );
        assert_eq!(Platform::SuperJob.report_title("Казань"), "SuperJob Казань");
    }

    #[test]
    fn test_platform_order() {
        assert_eq!(
            Platform::all(),
            &[Platform::HeadHunter, Platform::SuperJob]
        );
    }

    #[test]
    fn test_serde_short_names() {
        for platform in Platform::all() {
            let json = serde_json::to_string(platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.as_str()));
            assert_eq!(serde_json::from_str::<Platform>(&json).unwrap(), *platform);
        }
        assert_eq!(serde_json::to_string(&Platform::SuperJob).unwrap(), "\"sj\"");
    }
}
