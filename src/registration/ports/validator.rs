//! Validator port for registration submissions.

use crate::registration::domain::{RegistrationInput, ValidationResult};
use chrono::NaiveDate;

/// Port for validating a registration submission.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Evaluate every rule on every call (not fail-fast)
/// - Depend only on `input` and `today`, so repeated calls agree
/// - Be stateless and thread-safe
pub trait RegistrationValidator: Send + Sync {
    /// Validates all fields of a submission against the calendar date
    /// `today`.
    fn validate(&self, input: &RegistrationInput, today: NaiveDate) -> ValidationResult;
}

/// Thresholds applied by the registration rules.
///
/// # Examples
///
/// ```
/// use registration_form::registration::ports::validator::RegistrationPolicy;
///
/// let policy = RegistrationPolicy::default();
/// assert_eq!(policy.minimum_age, 16);
///
/// let adults = RegistrationPolicy::default().with_minimum_age(18);
/// assert_eq!(adults.minimum_age, 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationPolicy {
    /// Minimum age in whole years on the day of submission.
    pub minimum_age: u32,
    /// Minimum number of space-separated name parts.
    pub min_name_parts: usize,
    /// Minimum length of each name part in characters.
    pub min_name_part_chars: usize,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            minimum_age: 16,
            min_name_parts: 2,
            min_name_part_chars: 2,
        }
    }
}

impl RegistrationPolicy {
    /// Returns the policy with a different minimum age.
    #[must_use]
    pub const fn with_minimum_age(mut self, minimum_age: u32) -> Self {
        self.minimum_age = minimum_age;
        self
    }

    /// Returns the policy with different name-part requirements.
    #[must_use]
    pub const fn with_name_parts(mut self, min_parts: usize, min_part_chars: usize) -> Self {
        self.min_name_parts = min_parts;
        self.min_name_part_chars = min_part_chars;
        self
    }
}
