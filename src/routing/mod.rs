//! Locale-aware route guarding
//!
//! The dashboard prefixes every route with a locale (`/fr/budgets`) and only
//! lets signed-in users past the login page. This module models that guard
//! as an explicit state machine so routing code can ask for a decision
//! instead of rendering and redirecting.

pub mod guard;
pub mod locale;

pub use guard::{AuthState, GuardDecision, RouteGuard};
pub use locale::{LocalizedPath, Locales};
