//! Registration form validation and submission handling.
//!
//! This crate validates a user-registration form and turns accepted
//! submissions into rows of a results table. It owns the decision logic
//! only; reading and rendering the form is delegated to a host through the
//! [`registration::ports::FormHost`] port.
//!
//! # Modules
//!
//! - [`registration`]: Field rules, the submission cycle, and host adapters

pub mod registration;
