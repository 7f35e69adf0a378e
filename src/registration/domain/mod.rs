//! Domain types for registration submissions.
//!
//! These are plain values with no host or clock dependencies beyond the
//! [`Timestamp`] constructor.

mod field;
mod input;
mod record;
mod result;
mod timestamp;

pub use field::{FormField, ParseFormFieldError};
pub use input::RegistrationInput;
pub use record::{RECORD_COLUMNS, RegistrationRecord};
pub use result::ValidationResult;
pub use timestamp::Timestamp;
