//! Raw payload normalization
//!
//! Turns backend JSON objects into [`TransactionRecord`]s and
//! [`BudgetEnvelope`]s using ordered field resolvers.

use serde_json::Value;

use super::dates::{parse_date_str, parse_record_date};
use crate::models::{
    BudgetEnvelope, EnvelopeValidationError, FieldResolver, Money, MonthKey, TransactionRecord,
};

pub const ID_FIELDS: FieldResolver = FieldResolver::new(&["id", "_id"]);
pub const AMOUNT_FIELDS: FieldResolver = FieldResolver::new(&["amount", "montant"]);
pub const TYPE_FIELDS: FieldResolver =
    FieldResolver::new(&["type", "type_transaction", "kind", "nature"]);
pub const USER_FIELDS: FieldResolver =
    FieldResolver::new(&["user_id", "utilisateur_id", "userId", "utilisateur"]);
pub const ACCOUNT_FIELDS: FieldResolver =
    FieldResolver::new(&["account_id", "compte_id", "accountId", "compte"]);
pub const DESCRIPTION_FIELDS: FieldResolver =
    FieldResolver::new(&["description", "libelle", "label", "note"]);
pub const CATEGORY_FIELDS: FieldResolver =
    FieldResolver::new(&["categorie", "category", "categorie_nom", "category_name"]);

pub const ENVELOPE_MAX_FIELDS: FieldResolver = FieldResolver::new(&["montant_max", "max_amount"]);
pub const ENVELOPE_SPENT_FIELDS: FieldResolver =
    FieldResolver::new(&["montant_depense", "spent_amount"]);
pub const ENVELOPE_MONTH_FIELDS: FieldResolver = FieldResolver::new(&["mois", "month"]);

/// Normalize one raw transaction object
///
/// Never fails: a missing or unreadable amount counts as zero and a missing
/// date leaves the record undated.
pub fn normalize_record(object: &Value) -> TransactionRecord {
    let amount = AMOUNT_FIELDS
        .resolve(object)
        .and_then(Money::from_json)
        .unwrap_or_default();

    TransactionRecord {
        id: ID_FIELDS.resolve_text(object),
        amount,
        raw_type: TYPE_FIELDS.resolve_text(object),
        date: parse_record_date(object),
        user_id: USER_FIELDS.resolve_text(object),
        account_id: ACCOUNT_FIELDS.resolve_text(object),
        description: DESCRIPTION_FIELDS.resolve_text(object),
        category: CATEGORY_FIELDS.resolve_text(object),
    }
}

/// Normalize a list of raw transaction objects, keeping input order
pub fn normalize_records(objects: &[Value]) -> Vec<TransactionRecord> {
    objects.iter().map(normalize_record).collect()
}

/// Read one envelope from a budgets endpoint object
///
/// The month and category are required to match records; amounts default to
/// zero. `montant_restant` and `pourcentage_utilise` are derived values and
/// are recomputed rather than read.
pub fn normalize_envelope(object: &Value) -> Result<BudgetEnvelope, EnvelopeValidationError> {
    let category = CATEGORY_FIELDS
        .resolve_text(object)
        .ok_or(EnvelopeValidationError::MissingCategory)?;

    let month_value = ENVELOPE_MONTH_FIELDS
        .resolve_text(object)
        .ok_or(EnvelopeValidationError::MissingPeriod)?;
    let month = MonthKey::parse(&month_value)
        .ok()
        .or_else(|| parse_date_str(&month_value).map(MonthKey::from_date))
        .ok_or_else(|| EnvelopeValidationError::InvalidPeriod(month_value.clone()))?;

    let max_amount = ENVELOPE_MAX_FIELDS
        .resolve(object)
        .and_then(Money::from_json)
        .unwrap_or_default();
    let reported_spent = ENVELOPE_SPENT_FIELDS
        .resolve(object)
        .and_then(Money::from_json)
        .unwrap_or_default();

    Ok(BudgetEnvelope {
        id: ID_FIELDS.resolve_text(object),
        category,
        month,
        max_amount,
        reported_spent,
    })
}
