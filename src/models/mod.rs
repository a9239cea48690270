//! Core data models for budgetlens
//!
//! This module contains the data structures the computation layer works on:
//! normalized transaction records, their classified kind, month keys, money
//! amounts and budget envelopes.

pub mod budget;
pub mod fields;
pub mod kind;
pub mod money;
pub mod month;
pub mod record;

pub use budget::{BudgetEnvelope, EnvelopeValidationError};
pub use fields::FieldResolver;
pub use kind::Kind;
pub use money::Money;
pub use month::MonthKey;
pub use record::TransactionRecord;
