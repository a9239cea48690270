//! Money type for representing currency amounts
//!
//! Backend payloads carry amounts as JSON numbers or strings with arbitrary
//! precision. Amounts are stored as exact decimals so that sums and `abs()` are
//! the only transformations applied before display. Arithmetic saturates at
//! the decimal range instead of overflowing.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount held as an exact decimal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wrap a decimal amount
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budgetlens::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a Money amount from a whole number of units
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is negative (negative zero is not)
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Lossy conversion for charting and percentages
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "10,50", "€10.50", "1 234,56", "1.234,56", "1,234.56"
    /// and scientific notation such as "1.5e3".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '€' | '$' | '£'))
            .collect();

        if cleaned.is_empty() {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        // The last separator is the decimal one; the other groups thousands
        let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
            (Some(comma), Some(dot)) if comma > dot => {
                cleaned.replace('.', "").replace(',', ".")
            }
            (Some(_), Some(_)) => cleaned.replace(',', ""),
            _ => cleaned.replace(',', "."),
        };

        Decimal::from_str(&normalized)
            .or_else(|_| Decimal::from_scientific(&normalized))
            .map(Self)
            .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))
    }

    /// Read an amount from a JSON value (number or numeric string)
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Self::parse(&n.to_string()).ok(),
            Value::String(s) => Self::parse(s).ok(),
            _ => None,
        }
    }

    /// Amount rounded half away from zero to two decimals, for display only
    pub fn display_amount(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format with a currency symbol, two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.display_amount();
        if rounded < Decimal::ZERO {
            format!("-{}{:.2}", symbol, rounded.abs())
        } else {
            format!("{}{:.2}", symbol, rounded.abs())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.display_amount();
        if rounded < Decimal::ZERO {
            write!(f, "-{:.2}", rounded.abs())
        } else {
            write!(f, "{:.2}", rounded.abs())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
