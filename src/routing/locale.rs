//! Locale prefixes on route paths

use crate::config::Settings;
use crate::error::{BudgetLensError, BudgetLensResult};

/// The set of locales accepted as route prefixes, with a default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locales {
    supported: Vec<String>,
    default: String,
}

impl Locales {
    /// Create a locale set; the default must be one of the supported locales
    pub fn new(supported: Vec<String>, default: impl Into<String>) -> BudgetLensResult<Self> {
        let default = default.into();
        if !supported.contains(&default) {
            return Err(BudgetLensError::Config(format!(
                "default locale '{}' is not supported",
                default
            )));
        }
        Ok(Self { supported, default })
    }

    /// Locales configured in the user settings
    pub fn from_settings(settings: &Settings) -> BudgetLensResult<Self> {
        Self::new(settings.supported_locales.clone(), settings.locale.clone())
    }

    pub fn default_locale(&self) -> &str {
        &self.default
    }

    pub fn is_supported(&self, locale: &str) -> bool {
        self.supported.iter().any(|l| l == locale)
    }

    /// Split a path into its locale and the route below it
    ///
    /// `/fr/transactions` gives `fr` and `/transactions`. A path without a
    /// supported prefix keeps its route and gets the default locale.
    pub fn split(&self, path: &str) -> LocalizedPath {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_start_matches('/');
        let (first, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));

        if self.is_supported(first) {
            LocalizedPath {
                locale: first.to_string(),
                route: normalize_route(rest),
                explicit_locale: true,
            }
        } else {
            LocalizedPath {
                locale: self.default.clone(),
                route: normalize_route(trimmed),
                explicit_locale: false,
            }
        }
    }
}

impl Default for Locales {
    fn default() -> Self {
        Self {
            supported: vec!["fr".to_string(), "en".to_string()],
            default: "fr".to_string(),
        }
    }
}

fn normalize_route(rest: &str) -> String {
    let rest = rest.trim_end_matches('/');
    format!("/{}", rest)
}

/// A path split into locale and route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedPath {
    pub locale: String,
    /// Route below the locale, always starting with `/`
    pub route: String,
    /// Whether the locale came from the path rather than the default
    pub explicit_locale: bool,
}

impl LocalizedPath {
    /// Build a path to another route in the same locale
    pub fn sibling(&self, route: &str) -> String {
        format!("/{}/{}", self.locale, route.trim_start_matches('/'))
    }
}
