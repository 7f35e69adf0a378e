//! Raw values read from the registration form.

use serde::{Deserialize, Serialize};

/// Field values captured at the moment the form is submitted.
///
/// Values are kept exactly as the host reported them; trimming is applied by
/// the individual rules, and accepted records display the untrimmed text.
///
/// # Examples
///
/// ```
/// use registration_form::registration::domain::RegistrationInput;
///
/// let input = RegistrationInput::new("Ada Lovelace", "ada@x.io", "+358 40 12345", "2000-01-01")
///     .with_terms_accepted(true);
/// assert!(input.terms_accepted);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    /// First and last name.
    pub full_name: String,
    /// Contact email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Birth date as `YYYY-MM-DD`; empty when not entered.
    pub birth_date: String,
    /// Whether the terms checkbox is ticked.
    pub terms_accepted: bool,
}

impl RegistrationInput {
    /// Creates an input with the four text fields set and terms not accepted.
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            phone: phone.into(),
            birth_date: birth_date.into(),
            terms_accepted: false,
        }
    }

    /// Sets the terms checkbox state.
    #[must_use]
    pub const fn with_terms_accepted(mut self, accepted: bool) -> Self {
        self.terms_accepted = accepted;
        self
    }
}
