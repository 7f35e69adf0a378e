//! In-memory adapters.

mod form;

pub use form::InMemoryForm;
