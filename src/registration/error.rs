//! Error types for registration validation and record construction.
//!
//! [`FieldError`] carries the user-facing message for each failed rule in its
//! `Display` implementation, so hosts can project it straight into the
//! matching error slot.

use super::domain::FormField;
use thiserror::Error;

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The name is empty, has fewer than two parts, or a part is too short.
    #[error("Please enter your full name (first and last, ≥2 chars each).")]
    InvalidFullName,

    /// The email is not shaped like `local@domain.tld`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// The phone number is not a `+358` number.
    #[error("Please enter a Finnish phone number starting with +358.")]
    InvalidPhone,

    /// No usable birth date was entered.
    #[error("Please enter your birth date.")]
    MissingBirthDate,

    /// The birth date lies after today.
    #[error("Birth date cannot be in the future.")]
    BirthDateInFuture,

    /// The registrant is younger than the required age.
    #[error("You must be at least {minimum_age} years old.")]
    Underage {
        /// The minimum age in whole years.
        minimum_age: u32,
    },

    /// The terms checkbox is not ticked.
    #[error("You must accept the terms to register.")]
    TermsNotAccepted,
}

impl FieldError {
    /// Returns the field whose error slot displays this error.
    #[must_use]
    pub const fn field(&self) -> FormField {
        match self {
            Self::InvalidFullName => FormField::FullName,
            Self::InvalidEmail => FormField::Email,
            Self::InvalidPhone => FormField::Phone,
            Self::MissingBirthDate | Self::BirthDateInFuture | Self::Underage { .. } => {
                FormField::BirthDate
            }
            Self::TermsNotAccepted => FormField::Terms,
        }
    }
}

/// Errors raised while turning a submission into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A record was requested for a submission that failed validation.
    #[error("submission failed validation for: {}", format_fields(.failed))]
    InvalidSubmission {
        /// Fields whose rules failed, in form order.
        failed: Vec<FormField>,
    },
}

fn format_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
