//! Ordered per-platform salary report.

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::{LanguageStat, Platform};

/// Salary statistics for every surveyed language on one platform.
///
/// Languages keep the order in which they were inserted, which is the order
/// of the configured language list.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    platform: Platform,
    title: String,
    generated_at: DateTime<Utc>,
    entries: Vec<(String, LanguageStat)>,
}

impl StatsReport {
    /// Creates an empty report stamped with the current time.
    #[must_use]
    pub fn new(platform: Platform, title: impl Into<String>) -> Self {
        Self::with_timestamp(platform, title, Utc::now())
    }

    /// Creates an empty report with an explicit generation timestamp.
    #[must_use]
    pub fn with_timestamp(
        platform: Platform,
        title: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            platform,
            title: title.into(),
            generated_at,
            entries: Vec::new(),
        }
    }

    /// Inserts statistics for a language.
    ///
    /// A language that is already present keeps its position and has its
    /// statistics replaced.
    pub fn insert(&mut self, language: impl Into<String>, stat: LanguageStat) {
        let language = language.into();
        match self.entries.iter().position(|(name, _)| *name == language) {
            Some(index) => self.entries[index].1 = stat,
            None => self.entries.push((language, stat)),
        }
    }

    /// Returns the statistics for a language.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&LanguageStat> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, stat)| stat)
    }

    /// Returns the platform this report covers.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns when the report was generated.
    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Iterates over `(language, stat)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStat)> {
        self.entries
            .iter()
            .map(|(name, stat)| (name.as_str(), stat))
    }

    /// Returns the languages in insertion order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of languages in the report.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the report has no languages.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes entries as a JSON object that keeps insertion order.
struct OrderedLanguages<'a>(&'a [(String, LanguageStat)]);

impl Serialize for OrderedLanguages<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (language, stat) in self.0 {
            map.serialize_entry(language, stat)?;
        }
        map.end()
    }
}

impl Serialize for StatsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut report = serializer.serialize_struct("StatsReport", 4)?;
        report.serialize_field("platform", &self.platform)?;
        report.serialize_field("title", &self.title)?;
        report.serialize_field("generated_at", &self.generated_at)?;
        report.serialize_field("languages", &OrderedLanguages(&self.entries))?;
        report.end()
    }
}
