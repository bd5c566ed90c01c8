use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved key holding errors that are not attributable to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Validation messages keyed by field name, as returned by the server.
///
/// Messages keep the order the server sent them in. Whole-form errors live under
/// [`NON_FIELD_ERRORS`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding a single whole-form error.
    pub fn whole_form(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(NON_FIELD_ERRORS, message);
        errors
    }

    /// Append a message to `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Messages for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Messages not attributable to a single field.
    pub fn non_field_errors(&self) -> Option<&[String]> {
        self.get(NON_FIELD_ERRORS)
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over field names and their messages, whole-form errors included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl FromIterator<(String, Vec<String>)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
