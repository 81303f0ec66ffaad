//! Ruble salary prediction for devsalary.
//!
//! This crate turns vacancy salary bounds into a single predicted figure:
//!
//! - [`predict_rub_salary`] - The bound-averaging heuristic
//! - [`PredictSalary`] - Per-platform adapters with a ruble currency gate

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/devsalary/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adapter;
mod predict;

pub use adapter::{HH_RUBLE_CURRENCY, PredictSalary, SJ_RUBLE_CURRENCY};
pub use predict::{LOWER_BOUND_FACTOR, UPPER_BOUND_FACTOR, predict_rub_salary};
