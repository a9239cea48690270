//! Classified kind of a financial record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The semantic category assigned to every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
    Contribution,
    Transfer,
}

impl Kind {
    /// Every kind, in display order
    pub const ALL: [Kind; 4] = [
        Kind::Income,
        Kind::Expense,
        Kind::Contribution,
        Kind::Transfer,
    ];

    /// Lowercase identifier used in output and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
            Kind::Contribution => "contribution",
            Kind::Transfer => "transfer",
        }
    }

    /// Whether this kind is drawn in the monthly chart
    pub fn is_charted(&self) -> bool {
        !matches!(self, Kind::Transfer)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "revenu" => Ok(Kind::Income),
            "expense" | "depense" | "dépense" => Ok(Kind::Expense),
            "contribution" => Ok(Kind::Contribution),
            "transfer" | "virement" => Ok(Kind::Transfer),
            _ => Err(KindParseError(s.to_string())),
        }
    }
}

/// Error for an unknown kind name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindParseError(pub String);

impl fmt::Display for KindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown kind '{}' (expected income, expense, contribution or transfer)",
            self.0
        )
    }
}

impl std::error::Error for KindParseError {}
