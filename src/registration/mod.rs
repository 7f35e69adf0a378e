//! Registration form validation and submission handling.
//!
//! This module validates a user-registration form and turns accepted
//! submissions into rows of a results table.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Plain values ([`domain::RegistrationInput`], [`domain::ValidationResult`], [`domain::RegistrationRecord`])
//! - **Ports**: Abstract trait interfaces ([`ports::validator::RegistrationValidator`], [`ports::host::FormHost`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryForm`])
//! - **Validation**: The five field rules and the composite validator
//! - **Services**: The submission cycle and its binding to a host
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use registration_form::registration::{
//!     adapters::memory::InMemoryForm,
//!     domain::RegistrationInput,
//!     services::{FormController, SubmissionService},
//!     validation::DefaultRegistrationValidator,
//! };
//!
//! let service = SubmissionService::new(
//!     Arc::new(DefaultRegistrationValidator::new()),
//!     Arc::new(DefaultClock),
//! );
//! let mut controller = FormController::new(InMemoryForm::new(), service);
//! controller.initialize();
//!
//! controller.host_mut().fill(
//!     &RegistrationInput::new("Ada Lovelace", "ada@x.io", "+358 40 12345", "2000-01-01")
//!         .with_terms_accepted(true),
//! );
//! let outcome = controller.submit();
//!
//! assert!(outcome.is_accepted());
//! assert_eq!(controller.host().rows().len(), 1);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
