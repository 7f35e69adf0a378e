//! Shared world state for registration submission BDD scenarios.

use crate::test_helpers::SteppingClock;
use registration_form::registration::{
    adapters::memory::InMemoryForm,
    domain::RegistrationInput,
    ports::FormHost,
    services::{FormController, SubmissionOutcome},
    validation::DefaultRegistrationValidator,
};
use rstest::fixture;

/// Controller type used by the BDD world.
pub type TestController =
    FormController<InMemoryForm, DefaultRegistrationValidator, SteppingClock>;

/// Scenario world for registration submission behaviour tests.
#[derive(Default)]
pub struct RegistrationWorld {
    pub controller: Option<TestController>,
    pub opened_timestamp: Option<String>,
    pub last_outcome: Option<SubmissionOutcome>,
}

impl RegistrationWorld {
    /// Returns the controller created by the opening step.
    pub fn controller(&self) -> Result<&TestController, eyre::Report> {
        self.controller
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing registration form in scenario world"))
    }

    /// Returns the controller created by the opening step for mutation.
    pub fn controller_mut(&mut self) -> Result<&mut TestController, eyre::Report> {
        self.controller
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing registration form in scenario world"))
    }

    /// Applies `edit` to the values currently typed into the form.
    pub fn edit_input(
        &mut self,
        edit: impl FnOnce(&mut RegistrationInput),
    ) -> Result<(), eyre::Report> {
        let form = self.controller_mut()?.host_mut();
        let mut input = form.read_input();
        edit(&mut input);
        form.fill(&input);
        Ok(())
    }

    /// Returns the outcome of the most recent submission.
    pub fn last_outcome(&self) -> Result<&SubmissionOutcome, eyre::Report> {
        self.last_outcome
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no submission has been made"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RegistrationWorld {
    RegistrationWorld::default()
}
