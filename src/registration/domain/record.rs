//! Accepted registrations as displayed in the results table.

use super::{FormField, RegistrationInput, ValidationResult};
use crate::registration::error::RegistrationError;
use serde::Serialize;

/// Row appended to the results table after an accepted submission.
///
/// Values are the form's display values at submission time, untrimmed. A
/// record can only be built from a [`ValidationResult`] that is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    timestamp: String,
    full_name: String,
    email: String,
    phone: String,
    birth_date: String,
}

/// Column headings of the results table, in display order.
pub const RECORD_COLUMNS: [&str; 5] = ["timestamp", "fullName", "email", "phone", "birthDate"];

impl RegistrationRecord {
    /// Builds a record from a submission that passed validation.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidSubmission`] listing the failed
    /// fields when `result` is not valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use registration_form::registration::domain::{
    ///     RegistrationInput, RegistrationRecord, ValidationResult,
    /// };
    ///
    /// let input = RegistrationInput::new("Ada Lovelace", "ada@x.io", "+358 40 12345", "2000-01-01")
    ///     .with_terms_accepted(true);
    /// let record = RegistrationRecord::from_validated(
    ///     "2025-06-15T09:30:00.000Z",
    ///     &input,
    ///     &ValidationResult::valid(),
    /// )
    /// .expect("valid submission");
    /// assert_eq!(record.full_name(), "Ada Lovelace");
    /// ```
    pub fn from_validated(
        timestamp: impl Into<String>,
        input: &RegistrationInput,
        result: &ValidationResult,
    ) -> Result<Self, RegistrationError> {
        if !result.is_valid() {
            return Err(RegistrationError::InvalidSubmission {
                failed: result.failed_fields(),
            });
        }

        Ok(Self {
            timestamp: timestamp.into(),
            full_name: input.full_name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            birth_date: input.birth_date.clone(),
        })
    }

    /// Returns the timestamp field value at submission time.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the submitted full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the submitted email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the submitted phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the submitted birth date.
    #[must_use]
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    /// Returns the cell values in [`RECORD_COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [&str; 5] {
        [
            self.timestamp.as_str(),
            self.full_name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.birth_date.as_str(),
        ]
    }

    /// Returns the displayed value of a validated field.
    ///
    /// The terms checkbox is not displayed and yields `None`.
    #[must_use]
    pub fn value(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::FullName => Some(self.full_name.as_str()),
            FormField::Email => Some(self.email.as_str()),
            FormField::Phone => Some(self.phone.as_str()),
            FormField::BirthDate => Some(self.birth_date.as_str()),
            FormField::Terms => None,
        }
    }
}
