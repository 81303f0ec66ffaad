//! Per-language salary aggregation for devsalary.
//!
//! This crate folds vacancies into [`LanguageStat`](devsalary_types::LanguageStat):
//!
//! - [`SalaryAggregator`] - Streaming aggregator over predicted salaries
//! - [`aggregate`] - Aggregates a slice with an explicit adapter
//! - [`aggregate_predicted`] - Aggregates a slice of [`PredictSalary`](devsalary_estimate::PredictSalary) records

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/devsalary/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;

pub use aggregator::{SalaryAggregator, aggregate, aggregate_predicted};
