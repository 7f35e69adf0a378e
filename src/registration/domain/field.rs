//! Names of the validated form fields and their error slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated field of the registration form.
///
/// Variants are declared in the order the form presents them, which is also
/// the order in which [`ValidationResult::entries`] reports outcomes.
///
/// [`ValidationResult::entries`]: super::ValidationResult::entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// First and last name.
    FullName,
    /// Contact email address.
    Email,
    /// Finnish phone number.
    Phone,
    /// Calendar birth date.
    BirthDate,
    /// Terms-of-service checkbox.
    Terms,
}

impl FormField {
    /// Every validated field, in form order.
    pub const ALL: [Self; 5] = [
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::BirthDate,
        Self::Terms,
    ];

    /// Returns the name of the input this field is read from.
    ///
    /// # Examples
    ///
    /// ```
    /// use registration_form::registration::domain::FormField;
    ///
    /// assert_eq!(FormField::BirthDate.as_str(), "birthDate");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::BirthDate => "birthDate",
            Self::Terms => "terms",
        }
    }

    /// Returns the name of the text slot that displays this field's error.
    #[must_use]
    pub const fn error_slot(self) -> &'static str {
        match self {
            Self::FullName => "fullNameError",
            Self::Email => "emailError",
            Self::Phone => "phoneError",
            Self::BirthDate => "birthDateError",
            Self::Terms => "termsError",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for FormField {
    type Error = ParseFormFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value.trim())
            .ok_or_else(|| ParseFormFieldError(value.to_owned()))
    }
}

/// Error returned when a string does not name a validated field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct ParseFormFieldError(pub String);
