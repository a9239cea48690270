//! Kind classifier
//!
//! Assigns exactly one [`Kind`] to every record from its type hint and amount.
//! Rules are checked in a fixed order and the first match wins; the order
//! decides records whose hint mentions several kinds ("virement depense").

use crate::models::{Kind, Money, TransactionRecord};

/// Hint fragments checked in priority order
const RULES: [(Kind, &[&str]); 4] = [
    (Kind::Transfer, &["transf", "virement"]),
    (Kind::Contribution, &["contrib"]),
    (Kind::Expense, &["depens", "expense", "charge"]),
    (Kind::Income, &["revenu", "income", "recette"]),
];

/// Classify a record
pub fn classify(record: &TransactionRecord) -> Kind {
    classify_parts(record.amount, record.raw_type.as_deref())
}

/// Classify from an amount and an optional type hint
///
/// Without a recognised hint, negative amounts are expenses and everything
/// else (zero included) is income.
pub fn classify_parts(amount: Money, raw_type: Option<&str>) -> Kind {
    if let Some(kind) = raw_type.and_then(kind_from_hint) {
        return kind;
    }

    if amount.is_negative() {
        Kind::Expense
    } else {
        Kind::Income
    }
}

/// Match a type hint against the rule table (case-insensitive substring)
pub fn kind_from_hint(raw_type: &str) -> Option<Kind> {
    let hint = raw_type.to_lowercase();
    if hint.trim().is_empty() {
        return None;
    }

    RULES
        .iter()
        .find(|(_, fragments)| fragments.iter().any(|f| hint.contains(f)))
        .map(|(kind, _)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(amount: i64, raw_type: Option<&str>) -> Kind {
        classify(&TransactionRecord::new(Money::from_units(amount), raw_type))
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(kind(10, Some("Transfert interne")), Kind::Transfer);
        assert_eq!(kind(10, Some("VIREMENT")), Kind::Transfer);
        assert_eq!(kind(-10, Some("contribution")), Kind::Contribution);
        assert_eq!(kind(10, Some("depense")), Kind::Expense);
        assert_eq!(kind(10, Some("Expense")), Kind::Expense);
        assert_eq!(kind(10, Some("charges fixes")), Kind::Expense);
        assert_eq!(kind(-10, Some("revenu")), Kind::Income);
        assert_eq!(kind(-10, Some("Other income")), Kind::Income);
        assert_eq!(kind(-10, Some("recette")), Kind::Income);
    }

    #[test]
    fn test_transfer_wins_over_expense() {
        assert_eq!(kind(-10, Some("virement depense")), Kind::Transfer);
        assert_eq!(kind(-10, Some("depense par virement")), Kind::Transfer);
    }

    #[test]
    fn test_contribution_wins_over_income() {
        assert_eq!(kind(10, Some("contribution revenu")), Kind::Contribution);
    }

    #[test]
    fn test_expense_wins_over_income() {
        assert_eq!(kind(10, Some("recette / charge")), Kind::Expense);
    }

    #[test]
    fn test_sign_fallback() {
        assert_eq!(kind(-5, None), Kind::Expense);
        assert_eq!(kind(5, None), Kind::Income);
        assert_eq!(kind(-40, Some("Courses")), Kind::Expense);
        assert_eq!(kind(100, Some("Salaire")), Kind::Income);
    }

    #[test]
    fn test_zero_without_hint_is_income() {
        assert_eq!(kind(0, Some("")), Kind::Income);
        assert_eq!(kind(0, None), Kind::Income);
        assert_eq!(kind(0, Some("   ")), Kind::Income);
    }

    #[test]
    fn test_accented_hint_is_not_folded() {
        // "dépense" does not contain "depens"; the sign decides
        assert_eq!(kind(25, Some("Dépense")), Kind::Income);
        assert_eq!(kind(-25, Some("Dépense")), Kind::Expense);
    }

    #[test]
    fn test_always_one_of_four() {
        let hints = [None, Some(""), Some("x"), Some("virement"), Some("contrib")];
        for amount in [-3, 0, 3] {
            for hint in hints {
                assert!(Kind::ALL.contains(&kind(amount, hint)));
            }
        }
    }
}
