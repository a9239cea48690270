//! Ordered field lookup over raw API objects
//!
//! The backend names the same logical value differently depending on the
//! endpoint (`montant` vs `amount`, `date_revenu` vs `date_depense`, ...).
//! A [`FieldResolver`] lists the candidate names in priority order so the
//! lookup order is explicit and testable.

use serde_json::Value;

/// An ordered list of candidate field names for one logical value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldResolver {
    names: &'static [&'static str],
}

impl FieldResolver {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    /// Candidate names, highest priority first
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// First candidate that is present and not `null`
    pub fn resolve<'a>(&self, object: &'a Value) -> Option<&'a Value> {
        self.names
            .iter()
            .filter_map(|name| object.get(name))
            .find(|value| !value.is_null())
    }

    /// First candidate accepted by `parse`; candidates it rejects are skipped
    pub fn resolve_with<'a, T, F>(&self, object: &'a Value, parse: F) -> Option<T>
    where
        F: Fn(&'a Value) -> Option<T>,
    {
        self.names
            .iter()
            .filter_map(|name| object.get(name))
            .find_map(parse)
    }

    /// First candidate rendered as non-blank text
    ///
    /// Numbers are accepted (ids are often numeric). Objects are searched for a
    /// display name so nested `{"id": 3, "nom": "Courses"}` values resolve too.
    pub fn resolve_text(&self, object: &Value) -> Option<String> {
        self.resolve_with(object, value_as_text)
    }
}

const NESTED_NAME: FieldResolver = FieldResolver::new(&["nom", "name", "libelle", "label"]);

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(_) => NESTED_NAME.resolve_text(value),
        _ => None,
    }
}
