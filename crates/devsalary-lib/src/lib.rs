//! Salary statistics for programming languages from HeadHunter and SuperJob.
//!
//! This is a facade crate that re-exports functionality from the devsalary
//! workspace crates and adds run configuration ([`AppConfig`]) and report
//! collection ([`collect_report`]).
//!
//! # Quick Start
//!
//! ```ignore
//! use devsalary_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let client = ApiClient::with_defaults()?;
//!     let source = HeadHunterSource::resolve(
//!         client,
//!         &config.city,
//!         &config.professional_role,
//!         config.on_unresolved,
//!     )
//!     .await?;
//!
//!     let report = collect_report(&source, &config.languages, config.parallelism).await?;
//!     print!("{}", TableFormatter::new().render(&report)?);
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/devsalary/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
mod report;

pub use config::{AppConfig, ConfigError};
pub use report::{collect_report, collect_report_with};

// Re-export core types
pub use devsalary_types::*;

// Re-export salary estimation
pub use devsalary_estimate::{
    HH_RUBLE_CURRENCY, PredictSalary, SJ_RUBLE_CURRENCY, predict_rub_salary,
};

// Re-export aggregation
pub use devsalary_aggregate::{SalaryAggregator, aggregate, aggregate_predicted};

// Re-export fetch functionality
pub use devsalary_fetch::{
    ApiClient, ClientConfig, FetchError, HeadHunterSource, SuperJobSource, VacancySource,
    headhunter, superjob, url,
};

// Re-export formatters
pub use devsalary_format::{
    COLUMN_TITLES, CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
    TableFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use devsalary_lib::prelude::*;
/// ```
pub mod prelude {
    pub use devsalary_types::{
        DevsalaryError, LanguageStat, Lookup, Platform, Result, StatsReport, UnresolvedPolicy,
    };

    pub use crate::config::{AppConfig, ConfigError};
    pub use crate::report::{collect_report, collect_report_with};

    pub use devsalary_aggregate::aggregate_predicted;
    pub use devsalary_estimate::PredictSalary;
    pub use devsalary_fetch::{ApiClient, HeadHunterSource, SuperJobSource, VacancySource};
    pub use devsalary_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, TableFormatter,
    };
}
