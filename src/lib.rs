//! budgetlens - transaction classification and budget analytics
//!
//! This library turns loosely shaped transaction and budget records, as
//! exported by a budgeting backend, into the figures a personal-finance
//! dashboard shows: per-kind totals, monthly chart buckets and budget
//! envelope utilization.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, kinds, months, money, envelopes)
//! - `storage`: JSON input loading and atomic writes
//! - `services`: Classification, date normalization, aggregation, totals, budgets
//! - `routing`: Locale-aware authentication redirect guard
//! - `display`: Terminal formatting helpers
//! - `reports`: Dashboard, monthly and budget status reports
//! - `cli`: Command handlers for the `budgetlens` binary
//!
//! # Example
//!
//! ```rust
//! use budgetlens::models::{Money, TransactionRecord};
//! use budgetlens::services::compute_totals;
//!
//! let records = vec![
//!     TransactionRecord::new(Money::from_units(100), Some("revenu")),
//!     TransactionRecord::new(Money::from_units(-40), Some("depense")),
//!     TransactionRecord::new(Money::from_units(-10), Some("virement")),
//! ];
//! let totals = compute_totals(&records);
//! assert_eq!(totals.balance, Money::from_units(60));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod routing;
pub mod services;
pub mod storage;

pub use error::BudgetLensError;
