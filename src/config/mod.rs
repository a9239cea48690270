//! Configuration module for budgetlens
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - The explicit display context handed to presentation code

pub mod paths;
pub mod settings;

pub use paths::BudgetLensPaths;
pub use settings::{DisplayContext, Settings};
