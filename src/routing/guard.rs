//! Authentication redirect guard
//!
//! Three states: `Checking` while the session is being restored,
//! `Authenticated` once a token is known, `Unauthenticated` otherwise.
//! The guard maps a state and a requested path to a routing decision.

use serde::Serialize;
use std::fmt;

use super::locale::Locales;

/// Session state as seen by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthState {
    Checking,
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    /// State after a session lookup; a blank token is no session
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.trim().is_empty() => Self::Authenticated,
            _ => Self::Unauthenticated,
        }
    }

    /// Move to the state reported by a finished session lookup
    pub fn resolve(self, token: Option<&str>) -> Self {
        let next = Self::from_token(token);
        if next != self {
            tracing::debug!(from = %self, to = %next, "auth state changed");
        }
        next
    }

    /// Sign-out always ends unauthenticated
    pub fn sign_out(self) -> Self {
        if self != Self::Unauthenticated {
            tracing::debug!(from = %self, "signed out");
        }
        Self::Unauthenticated
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Checking => "checking",
            Self::Authenticated => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        })
    }
}

/// What the router should do with a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "lowercase")]
pub enum GuardDecision {
    /// Session not known yet; render nothing
    Wait,
    /// Render the requested route
    Allow,
    /// Navigate elsewhere
    Redirect(String),
}

impl fmt::Display for GuardDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wait => f.write_str("wait"),
            Self::Allow => f.write_str("allow"),
            Self::Redirect(target) => write!(f, "redirect {}", target),
        }
    }
}

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const PUBLIC_ROUTES: [&str; 3] = [LOGIN_ROUTE, "/register", "/forgot-password"];

/// Route guard bound to a locale configuration
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    locales: Locales,
}

impl RouteGuard {
    pub fn new(locales: Locales) -> Self {
        Self { locales }
    }

    /// Whether a route (without locale prefix) needs a session
    pub fn is_protected(route: &str) -> bool {
        !PUBLIC_ROUTES.contains(&route)
    }

    /// Decide what to do with a request for `path` in the given state
    pub fn decide(&self, state: AuthState, path: &str) -> GuardDecision {
        let localized = self.locales.split(path);

        let decision = match state {
            AuthState::Checking => GuardDecision::Wait,
            AuthState::Unauthenticated if Self::is_protected(&localized.route) => {
                GuardDecision::Redirect(localized.sibling(LOGIN_ROUTE))
            }
            AuthState::Authenticated if localized.route == LOGIN_ROUTE => {
                GuardDecision::Redirect(localized.sibling(DASHBOARD_ROUTE))
            }
            _ => GuardDecision::Allow,
        };

        tracing::debug!(%state, path, %decision, "route guard decision");
        decision
    }
}
