//! Then steps for registration submission BDD scenarios.

use super::world::RegistrationWorld;
use registration_form::registration::{
    domain::{FormField, RegistrationInput},
    ports::FormHost,
};
use rstest_bdd_macros::then;

#[then("the submission is accepted")]
fn submission_accepted(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let outcome = world.last_outcome()?;
    if !outcome.is_accepted() {
        return Err(eyre::eyre!("expected acceptance, got {outcome:?}"));
    }
    Ok(())
}

#[then("the submission is rejected")]
fn submission_rejected(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let outcome = world.last_outcome()?;
    if outcome.is_accepted() {
        return Err(eyre::eyre!("expected rejection, got {outcome:?}"));
    }
    Ok(())
}

fn ensure_row_count(world: &RegistrationWorld, expected: usize) -> Result<(), eyre::Report> {
    let actual = world.controller()?.host().rows().len();
    if actual != expected {
        return Err(eyre::eyre!("expected {expected} rows, found {actual}"));
    }
    Ok(())
}

#[then("the results table has {count:usize} row")]
fn results_table_has_row(world: &RegistrationWorld, count: usize) -> Result<(), eyre::Report> {
    ensure_row_count(world, count)
}

#[then("the results table has {count:usize} rows")]
fn results_table_has_rows(world: &RegistrationWorld, count: usize) -> Result<(), eyre::Report> {
    ensure_row_count(world, count)
}

#[then(r#"the last row shows "{name}" "{email}" "{phone}" "{birth_date}""#)]
fn last_row_shows(
    world: &RegistrationWorld,
    name: String,
    email: String,
    phone: String,
    birth_date: String,
) -> Result<(), eyre::Report> {
    let row = world
        .controller()?
        .host()
        .rows()
        .last()
        .ok_or_else(|| eyre::eyre!("results table is empty"))?;
    let opened = world
        .opened_timestamp
        .as_deref()
        .ok_or_else(|| eyre::eyre!("missing opening timestamp"))?;

    let expected: [&str; 5] = [
        opened,
        name.as_str(),
        email.as_str(),
        phone.as_str(),
        birth_date.as_str(),
    ];
    if row.cells() != expected {
        return Err(eyre::eyre!(
            "expected row {expected:?}, found {:?}",
            row.cells()
        ));
    }
    Ok(())
}

#[then("the form fields are empty")]
fn form_fields_empty(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let input = world.controller()?.host().read_input();
    if input != RegistrationInput::default() {
        return Err(eyre::eyre!("expected empty form, found {input:?}"));
    }
    Ok(())
}

#[then("the timestamp field shows a later timestamp")]
fn timestamp_refreshed(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let current = world.controller()?.host().timestamp();
    let opened = world
        .opened_timestamp
        .as_deref()
        .ok_or_else(|| eyre::eyre!("missing opening timestamp"))?;
    if current.as_str() <= opened {
        return Err(eyre::eyre!(
            "expected timestamp after {opened}, found {current}"
        ));
    }
    Ok(())
}

#[then(r#"only the "{field}" error is shown"#)]
fn only_error_shown(world: &RegistrationWorld, field: String) -> Result<(), eyre::Report> {
    let expected = FormField::try_from(field.as_str())
        .map_err(|err| eyre::eyre!("invalid field in scenario: {err}"))?;
    let shown = world.controller()?.host().populated_errors();
    if shown != vec![expected] {
        return Err(eyre::eyre!("expected only {expected} error, found {shown:?}"));
    }
    Ok(())
}

#[then(r#"the "{field}" error reads "{message}""#)]
fn error_reads(
    world: &RegistrationWorld,
    field: String,
    message: String,
) -> Result<(), eyre::Report> {
    let target = FormField::try_from(field.as_str())
        .map_err(|err| eyre::eyre!("invalid field in scenario: {err}"))?;
    let shown = world.controller()?.host().error(target);
    if shown != message {
        return Err(eyre::eyre!(
            "expected {target} error {message:?}, found {shown:?}"
        ));
    }
    Ok(())
}

#[then("no errors are shown")]
fn no_errors_shown(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let shown = world.controller()?.host().populated_errors();
    if !shown.is_empty() {
        return Err(eyre::eyre!("expected no errors, found {shown:?}"));
    }
    Ok(())
}
