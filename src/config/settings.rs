//! User settings for budgetlens
//!
//! Holds the preferences a dashboard would otherwise keep in ambient UI state:
//! locale, currency, date format, chart window, dark mode and the current user.
//! Presentation code receives them through an explicit [`DisplayContext`].

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::BudgetLensPaths;
use crate::error::BudgetLensError;
use crate::storage::write_json_atomic;
use crate::services::aggregate::DEFAULT_MONTH_WINDOW;

/// User settings for budgetlens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default locale used for route prefixes
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Locales recognised as route prefixes
    #[serde(default = "default_supported_locales")]
    pub supported_locales: Vec<String>,

    /// ISO currency code used when displaying amounts
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of months shown in the monthly chart
    #[serde(default = "default_chart_months")]
    pub chart_months: usize,

    /// Dark mode preference, stored for the front end
    #[serde(default)]
    pub dark_mode: bool,

    /// Colour terminal status labels
    #[serde(default = "default_color")]
    pub color: bool,

    /// Identifier of the signed-in user, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_locale() -> String {
    "fr".to_string()
}

fn default_supported_locales() -> Vec<String> {
    vec!["fr".to_string(), "en".to_string()]
}

fn default_currency_code() -> String {
    "EUR".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_color() -> bool {
    true
}

fn default_chart_months() -> usize {
    DEFAULT_MONTH_WINDOW
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: default_locale(),
            supported_locales: default_supported_locales(),
            currency_code: default_currency_code(),
            date_format: default_date_format(),
            chart_months: default_chart_months(),
            dark_mode: false,
            color: default_color(),
            current_user: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetLensPaths) -> Result<Self, BudgetLensError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetLensError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetLensError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetLensPaths) -> Result<(), BudgetLensError> {
        paths.ensure_directories()?;

        write_json_atomic(paths.settings_file(), self)
    }

    /// Reject settings that the guard and reports cannot work with
    pub fn validate(&self) -> Result<(), BudgetLensError> {
        if self.supported_locales.is_empty() {
            return Err(BudgetLensError::Config(
                "supported_locales must list at least one locale".into(),
            ));
        }
        if !self.supported_locales.iter().any(|l| l == &self.locale) {
            return Err(BudgetLensError::Config(format!(
                "default locale '{}' is not in supported_locales",
                self.locale
            )));
        }
        if self.currency_code.trim().is_empty() {
            return Err(BudgetLensError::Config("currency_code is empty".into()));
        }
        if StrftimeItems::new(&self.date_format).any(|item| item == Item::Error) {
            return Err(BudgetLensError::Config(format!(
                "invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// The presentation context derived from these settings
    pub fn display_context(&self) -> DisplayContext {
        DisplayContext {
            currency_code: self.currency_code.clone(),
            date_format: self.date_format.clone(),
            use_color: self.color,
        }
    }
}

/// Explicit presentation context passed to display and report formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContext {
    pub currency_code: String,
    pub date_format: String,
    pub use_color: bool,
}

impl Default for DisplayContext {
    fn default() -> Self {
        Settings::default().display_context()
    }
}
