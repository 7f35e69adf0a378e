//! Given steps for registration submission BDD scenarios.

use super::world::RegistrationWorld;
use crate::test_helpers::SteppingClock;
use chrono::{DateTime, TimeDelta, Utc};
use eyre::WrapErr;
use registration_form::registration::{
    adapters::memory::InMemoryForm,
    domain::RegistrationInput,
    ports::FormHost,
    services::{FormController, SubmissionService},
    validation::DefaultRegistrationValidator,
};
use rstest_bdd_macros::given;
use std::sync::Arc;

#[given(r#"a registration form opened at "{instant}""#)]
fn registration_form_opened_at(
    world: &mut RegistrationWorld,
    instant: String,
) -> Result<(), eyre::Report> {
    let start = DateTime::parse_from_rfc3339(&instant)
        .wrap_err("parse opening instant")?
        .with_timezone(&Utc);
    let service = SubmissionService::new(
        Arc::new(DefaultRegistrationValidator::new()),
        Arc::new(SteppingClock::starting_at(start, TimeDelta::seconds(1))),
    );

    let mut controller = FormController::new(InMemoryForm::new(), service);
    controller.initialize();
    world.opened_timestamp = Some(controller.host().timestamp());
    world.controller = Some(controller);
    world.last_outcome = None;
    Ok(())
}

#[given(r#"the form is filled with a valid registration for "{name}""#)]
fn form_filled_for(world: &mut RegistrationWorld, name: String) -> Result<(), eyre::Report> {
    let input = RegistrationInput::new(name, "ada@x.io", "+358 40 12345", "2000-01-01")
        .with_terms_accepted(true);
    world.controller_mut()?.host_mut().fill(&input);
    Ok(())
}

#[given("the terms are not accepted")]
fn terms_not_accepted(world: &mut RegistrationWorld) -> Result<(), eyre::Report> {
    world.edit_input(|input| input.terms_accepted = false)
}

#[given(r#"the birth date is "{birth_date}""#)]
fn birth_date_is(world: &mut RegistrationWorld, birth_date: String) -> Result<(), eyre::Report> {
    world.edit_input(|input| input.birth_date = birth_date)
}

#[given(r#"the email is "{email}""#)]
fn email_is(world: &mut RegistrationWorld, email: String) -> Result<(), eyre::Report> {
    world.edit_input(|input| input.email = email)
}
