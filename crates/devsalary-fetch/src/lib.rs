//! HeadHunter and SuperJob API clients for devsalary.
//!
//! This crate provides the data collection pipeline:
//!
//! - [`ApiClient`] - JSON-over-HTTP client without retries
//! - [`url`] - API endpoint construction
//! - [`page_stream`] - Lazy, restartable pagination
//! - [`headhunter`] / [`superjob`] - Lookups, searches and vacancy sources
//! - [`VacancySource`] - Per-platform "all vacancies for a language" capability

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/devsalary/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod headhunter;
mod pages;
mod source;
pub mod superjob;
#[cfg(test)]
mod test_server;
pub mod url;

pub use client::{ApiClient, ClientConfig, FetchError, Query};
pub use headhunter::{HeadHunterSource, HhPage, HhSearch};
pub use pages::{Page, collect_items, page_stream};
pub use source::VacancySource;
pub use superjob::{SjPage, SjSearch, SuperJobSource};
