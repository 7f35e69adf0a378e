//! Host port for the document that renders the registration form.
//!
//! The host owns the field values, the error slots, and the results table.
//! Everything the submission flow reads or writes goes through this trait.

use crate::registration::domain::{FormField, RegistrationInput, RegistrationRecord, Timestamp};

/// Structural contract with the form's host document.
pub trait FormHost {
    /// Reads the current values of the five validated fields.
    fn read_input(&self) -> RegistrationInput;

    /// Returns the current value of the timestamp field.
    fn timestamp(&self) -> String;

    /// Writes a timestamp into the timestamp field.
    fn set_timestamp(&mut self, timestamp: &Timestamp);

    /// Replaces the text of `field`'s error slot; an empty string clears it.
    fn set_error(&mut self, field: FormField, message: &str);

    /// Appends a row to the results table.
    fn append_row(&mut self, record: &RegistrationRecord);

    /// Resets every form input, including the timestamp field, to empty.
    fn reset(&mut self);

    /// Suppresses the host's default handling of the submit action.
    fn suppress_default_action(&mut self);
}
