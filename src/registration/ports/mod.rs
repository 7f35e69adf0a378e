//! Port trait definitions for the registration subsystem.
//!
//! Ports define the interfaces the submission flow requires: a validator
//! for the rules and a host for the form document.

pub mod host;
pub mod validator;

pub use host::FormHost;
pub use validator::{RegistrationPolicy, RegistrationValidator};
