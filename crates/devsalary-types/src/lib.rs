//! Core types for the devsalary vacancy salary statistics tool.
//!
//! This crate provides the fundamental data structures used throughout devsalary:
//!
//! - [`HhVacancy`] / [`SjVacancy`] - Raw vacancy records from HeadHunter and SuperJob
//! - [`Vacancy`] - Platform-agnostic vacancy wrapper
//! - [`LanguageStat`] - Salary statistics for a single programming language
//! - [`StatsReport`] - Ordered per-language statistics for one platform
//! - [`Platform`] - Supported job-search platforms
//! - [`Lookup`] - Tagged result of a name-to-ID resolution

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/devsalary/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod lookup;
mod platform;
mod report;
mod stat;
mod vacancy;

pub use error::{DevsalaryError, Result};
pub use lookup::{Lookup, UnresolvedPolicy, UnresolvedPolicyParseError};
pub use platform::{Platform, PlatformParseError};
pub use report::StatsReport;
pub use stat::LanguageStat;
pub use vacancy::{HhSalary, HhVacancy, SjVacancy, Vacancy};

/// Programming languages surveyed when no explicit list is configured.
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Go",
    "Scala",
    "Swift",
];

/// City surveyed when none is configured.
pub const DEFAULT_CITY: &str = "Москва";

/// HeadHunter professional role surveyed when none is configured.
pub const DEFAULT_PROFESSIONAL_ROLE: &str = "Программист";
