//! When steps for registration submission BDD scenarios.

use super::world::RegistrationWorld;
use rstest_bdd_macros::when;

#[when("the form is submitted")]
fn form_submitted(world: &mut RegistrationWorld) -> Result<(), eyre::Report> {
    let outcome = world.controller_mut()?.submit();
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"the email is corrected to "{email}""#)]
fn email_corrected(world: &mut RegistrationWorld, email: String) -> Result<(), eyre::Report> {
    world.edit_input(|input| input.email = email)
}
