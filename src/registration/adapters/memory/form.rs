//! In-memory form host for tests and headless embedding.

use crate::registration::{
    domain::{FormField, RegistrationInput, RegistrationRecord, Timestamp},
    ports::FormHost,
};
use std::collections::BTreeMap;

/// Form host that keeps fields, error slots, and the results table in
/// memory.
///
/// # Examples
///
/// ```
/// use registration_form::registration::{
///     adapters::memory::InMemoryForm,
///     domain::{FormField, RegistrationInput},
///     ports::FormHost,
/// };
///
/// let mut form = InMemoryForm::new();
/// form.fill(&RegistrationInput::new("Ada Lovelace", "ada@x.io", "+358 40 12345", "2000-01-01"));
/// form.set_error(FormField::Email, "Please enter a valid email address.");
///
/// assert_eq!(form.read_input().full_name, "Ada Lovelace");
/// assert_eq!(form.error(FormField::Email), "Please enter a valid email address.");
/// assert_eq!(form.error(FormField::Phone), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryForm {
    input: RegistrationInput,
    timestamp: String,
    errors: BTreeMap<FormField, String>,
    rows: Vec<RegistrationRecord>,
    suppressed_defaults: usize,
}

impl InMemoryForm {
    /// Creates an empty form with no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every validated field with the values in `input`.
    pub fn fill(&mut self, input: &RegistrationInput) {
        self.input = input.clone();
    }

    /// Sets a single text field; [`FormField::Terms`] is ticked when the
    /// value is non-empty.
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        let text = value.into();
        match field {
            FormField::FullName => self.input.full_name = text,
            FormField::Email => self.input.email = text,
            FormField::Phone => self.input.phone = text,
            FormField::BirthDate => self.input.birth_date = text,
            FormField::Terms => self.input.terms_accepted = !text.is_empty(),
        }
    }

    /// Ticks or clears the terms checkbox.
    pub const fn set_terms_accepted(&mut self, accepted: bool) {
        self.input.terms_accepted = accepted;
    }

    /// Returns the text currently shown in `field`'s error slot.
    #[must_use]
    pub fn error(&self, field: FormField) -> &str {
        self.errors.get(&field).map_or("", String::as_str)
    }

    /// Returns the error slots that currently show a message.
    #[must_use]
    pub fn populated_errors(&self) -> Vec<FormField> {
        self.errors
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, _)| *field)
            .collect()
    }

    /// Returns the rows of the results table in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[RegistrationRecord] {
        &self.rows
    }

    /// Returns how many submit actions had their default handling
    /// suppressed.
    #[must_use]
    pub const fn suppressed_defaults(&self) -> usize {
        self.suppressed_defaults
    }
}

impl FormHost for InMemoryForm {
    fn read_input(&self) -> RegistrationInput {
        self.input.clone()
    }

    fn timestamp(&self) -> String {
        self.timestamp.clone()
    }

    fn set_timestamp(&mut self, timestamp: &Timestamp) {
        self.timestamp = timestamp.to_iso8601();
    }

    fn set_error(&mut self, field: FormField, message: &str) {
        self.errors.insert(field, message.to_owned());
    }

    fn append_row(&mut self, record: &RegistrationRecord) {
        self.rows.push(record.clone());
    }

    fn reset(&mut self) {
        self.input = RegistrationInput::default();
        self.timestamp.clear();
    }

    fn suppress_default_action(&mut self) {
        self.suppressed_defaults += 1;
    }
}
