//! Aggregate outcome of one validation pass.

use super::FormField;
use crate::registration::error::FieldError;
use std::collections::BTreeMap;

/// Outcome of every rule for a single submission attempt.
///
/// Fields without an entry passed their rule. The result always covers all
/// five fields, so callers can refresh every error slot from it.
///
/// # Examples
///
/// ```
/// use registration_form::registration::{
///     domain::{FormField, ValidationResult},
///     error::FieldError,
/// };
///
/// let result = ValidationResult::from_errors([FieldError::TermsNotAccepted]);
/// assert!(!result.is_valid());
/// assert_eq!(result.message(FormField::Email), "");
/// assert_eq!(
///     result.message(FormField::Terms),
///     "You must accept the terms to register."
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FormField, FieldError>,
}

impl ValidationResult {
    /// Creates a result in which every field passed.
    #[must_use]
    pub fn valid() -> Self {
        Self::default()
    }

    /// Creates a result from the errors raised by failed rules.
    ///
    /// Each error is filed under [`FieldError::field`]; fields not mentioned
    /// are treated as valid.
    #[must_use]
    pub fn from_errors(errors: impl IntoIterator<Item = FieldError>) -> Self {
        Self {
            errors: errors
                .into_iter()
                .map(|error| (error.field(), error))
                .collect(),
        }
    }

    /// Returns `true` when every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the error for `field`, if its rule failed.
    #[must_use]
    pub fn error(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Returns the text for `field`'s error slot; empty when the field is
    /// valid.
    #[must_use]
    pub fn message(&self, field: FormField) -> String {
        self.error(field).map(ToString::to_string).unwrap_or_default()
    }

    /// Returns the fields whose rules failed, in form order.
    #[must_use]
    pub fn failed_fields(&self) -> Vec<FormField> {
        self.errors.keys().copied().collect()
    }

    /// Iterates over all five fields in form order with their outcome.
    pub fn entries(&self) -> impl Iterator<Item = (FormField, Option<&FieldError>)> + '_ {
        FormField::ALL
            .into_iter()
            .map(|field| (field, self.error(field)))
    }
}
