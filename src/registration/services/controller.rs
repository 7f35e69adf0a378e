//! Binding between the submission service and a form host.

use super::submission::{SubmissionOutcome, SubmissionService, SubmissionState};
use crate::registration::{
    domain::{FormField, ValidationResult},
    ports::{FormHost, RegistrationValidator},
};
use mockable::Clock;

/// Drives a [`FormHost`] through the submission cycle.
///
/// The controller exclusively owns its host. Each call to [`submit`] runs to
/// completion before the next can start, and the controller is back in
/// [`SubmissionState::Idle`] when it returns.
///
/// [`submit`]: Self::submit
pub struct FormController<H, V, C>
where
    H: FormHost,
    V: RegistrationValidator,
    C: Clock + Send + Sync,
{
    host: H,
    service: SubmissionService<V, C>,
    state: SubmissionState,
    submissions: usize,
    accepted: usize,
}

impl<H, V, C> FormController<H, V, C>
where
    H: FormHost,
    V: RegistrationValidator,
    C: Clock + Send + Sync,
{
    /// Creates a controller around `host`.
    ///
    /// Call [`initialize`](Self::initialize) once the host is ready to stamp
    /// the form with its initial timestamp.
    #[must_use]
    pub const fn new(host: H, service: SubmissionService<V, C>) -> Self {
        Self {
            host,
            service,
            state: SubmissionState::Idle,
            submissions: 0,
            accepted: 0,
        }
    }

    /// Populates the timestamp field with the current instant.
    pub fn initialize(&mut self) {
        let timestamp = self.service.initial_timestamp();
        self.host.set_timestamp(&timestamp);
        tracing::debug!(%timestamp, "registration form initialised");
    }

    /// Handles one submit action.
    ///
    /// The host's default action is always suppressed. Every error slot is
    /// refreshed from the validation result, whatever the outcome. On
    /// acceptance the record is appended, the form is reset, and a new
    /// timestamp is written back.
    pub fn submit(&mut self) -> SubmissionOutcome {
        self.host.suppress_default_action();
        self.submissions += 1;

        self.state = SubmissionState::Validating;
        let input = self.host.read_input();
        let outcome = self.service.on_submit(&input, &self.host.timestamp());
        self.state = outcome.state();

        self.project_errors(&outcome.validation());

        if let SubmissionOutcome::Accepted {
            record,
            next_timestamp,
        } = &outcome
        {
            self.host.append_row(record);
            self.host.reset();
            self.host.set_timestamp(next_timestamp);
            self.accepted += 1;
            tracing::info!(
                accepted = self.accepted,
                next_timestamp = %next_timestamp,
                "registration accepted"
            );
        }

        self.state = SubmissionState::Idle;
        outcome
    }

    /// Returns the current submission state.
    ///
    /// [`submit`](Self::submit) holds the controller exclusively for the
    /// whole cycle and returns it to [`SubmissionState::Idle`], so callers
    /// always observe `Idle` here. The outcome of a submission is reported
    /// by [`SubmissionOutcome::state`].
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Returns the number of submit actions handled.
    #[must_use]
    pub const fn submission_count(&self) -> usize {
        self.submissions
    }

    /// Returns the number of accepted submissions.
    #[must_use]
    pub const fn accepted_count(&self) -> usize {
        self.accepted
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host for direct edits, such as typing into fields.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the controller and returns the host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    fn project_errors(&mut self, result: &ValidationResult) {
        for field in FormField::ALL {
            self.host.set_error(field, &result.message(field));
        }
    }
}
