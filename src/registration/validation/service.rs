//! Validation service implementation.
//!
//! Provides the default implementation of the [`RegistrationValidator`]
//! port, running every rule on every call.

use crate::registration::{
    domain::{RegistrationInput, ValidationResult},
    ports::validator::{RegistrationPolicy, RegistrationValidator},
    validation::rules,
};
use chrono::NaiveDate;

/// Default implementation of the registration validator.
///
/// All five rules are evaluated independently, so a failing rule never hides
/// the outcome of another.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use registration_form::registration::{
///     domain::{FormField, RegistrationInput},
///     ports::validator::RegistrationValidator,
///     validation::service::DefaultRegistrationValidator,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date");
/// let input = RegistrationInput::new("Ada", "ada@x.io", "+358 40 12345", "2000-01-01")
///     .with_terms_accepted(true);
///
/// let result = DefaultRegistrationValidator::new().validate(&input, today);
/// assert!(!result.is_valid());
/// assert_eq!(result.failed_fields(), vec![FormField::FullName]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultRegistrationValidator {
    policy: RegistrationPolicy,
}

impl DefaultRegistrationValidator {
    /// Creates a new validator with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with a custom policy.
    #[must_use]
    pub const fn with_policy(policy: RegistrationPolicy) -> Self {
        Self { policy }
    }

    /// Returns the current policy.
    #[must_use]
    pub const fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }
}

impl RegistrationValidator for DefaultRegistrationValidator {
    fn validate(&self, input: &RegistrationInput, today: NaiveDate) -> ValidationResult {
        let outcomes = [
            rules::validate_full_name(&input.full_name, &self.policy),
            rules::validate_email(&input.email),
            rules::validate_phone(&input.phone),
            rules::validate_birth_date(&input.birth_date, today, &self.policy),
            rules::validate_terms(input.terms_accepted),
        ];

        ValidationResult::from_errors(outcomes.into_iter().filter_map(Result::err))
    }
}
