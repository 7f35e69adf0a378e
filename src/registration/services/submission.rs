//! Submission transition function for the registration form.

use crate::registration::{
    domain::{RegistrationInput, RegistrationRecord, Timestamp, ValidationResult},
    ports::RegistrationValidator,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Phase of the submission cycle.
///
/// The cycle never terminates: every attempt passes through `Validating`
/// into `Rejected` or `Accepted` and then returns to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    /// Waiting for a submit action.
    #[default]
    Idle,
    /// Running the rules on the current field values.
    Validating,
    /// At least one rule failed; field values are kept for correction.
    Rejected,
    /// Every rule passed and a record was produced.
    Accepted,
}

impl SubmissionState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
        }
    }
}

impl TryFrom<&str> for SubmissionState {
    type Error = ParseSubmissionStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "idle" => Ok(Self::Idle),
            "validating" => Ok(Self::Validating),
            "rejected" => Ok(Self::Rejected),
            "accepted" => Ok(Self::Accepted),
            _ => Err(ParseSubmissionStateError(value.to_owned())),
        }
    }
}

/// Error returned while parsing submission states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown submission state: {0}")]
pub struct ParseSubmissionStateError(pub String);

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// At least one rule failed; no record was produced.
    Rejected(ValidationResult),
    /// Every rule passed.
    Accepted {
        /// Row to append to the results table.
        record: RegistrationRecord,
        /// Timestamp to place into the freshly reset form.
        next_timestamp: Timestamp,
    },
}

impl SubmissionOutcome {
    /// Returns the state the attempt ended in.
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        match self {
            Self::Rejected(_) => SubmissionState::Rejected,
            Self::Accepted { .. } => SubmissionState::Accepted,
        }
    }

    /// Returns `true` when the submission was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the produced record, if the submission was accepted.
    #[must_use]
    pub const fn record(&self) -> Option<&RegistrationRecord> {
        match self {
            Self::Accepted { record, .. } => Some(record),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the validation result behind this outcome.
    ///
    /// Accepted outcomes report every field as valid.
    #[must_use]
    pub fn validation(&self) -> ValidationResult {
        match self {
            Self::Rejected(result) => result.clone(),
            Self::Accepted { .. } => ValidationResult::valid(),
        }
    }
}

/// Registration submission service.
///
/// Combines a validator with a clock to turn the current field values into a
/// [`SubmissionOutcome`]. It reads nothing from and writes nothing to the
/// host; see [`FormController`](super::FormController) for that binding.
#[derive(Clone)]
pub struct SubmissionService<V, C>
where
    V: RegistrationValidator,
    C: Clock + Send + Sync,
{
    validator: Arc<V>,
    clock: Arc<C>,
}

impl<V, C> SubmissionService<V, C>
where
    V: RegistrationValidator,
    C: Clock + Send + Sync,
{
    /// Creates a new submission service.
    #[must_use]
    pub const fn new(validator: Arc<V>, clock: Arc<C>) -> Self {
        Self { validator, clock }
    }

    /// Returns the timestamp to show when the form first becomes active.
    #[must_use]
    pub fn initial_timestamp(&self) -> Timestamp {
        Timestamp::now(&*self.clock)
    }

    /// Validates `input` against today's date without producing a record.
    #[must_use]
    pub fn validate(&self, input: &RegistrationInput) -> ValidationResult {
        let today = self.clock.utc().date_naive();
        self.validator.validate(input, today)
    }

    /// Runs one submit attempt.
    ///
    /// `timestamp` is the current value of the form's timestamp field and
    /// becomes the record's first column. On acceptance a fresh timestamp is
    /// captured for the reset form.
    #[must_use]
    pub fn on_submit(&self, input: &RegistrationInput, timestamp: &str) -> SubmissionOutcome {
        let result = self.validate(input);
        let Ok(record) = RegistrationRecord::from_validated(timestamp, input, &result) else {
            tracing::debug!(failed = ?result.failed_fields(), "registration rejected");
            return SubmissionOutcome::Rejected(result);
        };

        SubmissionOutcome::Accepted {
            record,
            next_timestamp: Timestamp::now(&*self.clock),
        }
    }
}
