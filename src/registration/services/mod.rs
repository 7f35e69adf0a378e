//! Services for the registration submission cycle.

pub mod controller;
pub mod submission;

pub use controller::FormController;
pub use submission::{
    ParseSubmissionStateError, SubmissionOutcome, SubmissionService, SubmissionState,
};
