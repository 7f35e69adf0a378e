//! Registration validation implementation.
//!
//! This module provides the individual field rules and the composite
//! validator service built from them.

pub mod rules;
pub mod service;

pub use service::DefaultRegistrationValidator;
