//! When steps for result decoration BDD scenarios.

use super::world::DecorationWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use validator_result::result::{
    decorators::{ObscuredResult, TranslatedResult},
    ports::result::ValidationResult,
};

#[when("the result is obscured")]
fn result_is_obscured(world: &mut DecorationWorld) -> Result<(), eyre::Report> {
    let result = world
        .result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing result in scenario world"))?;
    let messages = ObscuredResult::new(result)
        .messages()
        .wrap_err("read obscured messages")?;
    world.messages = Some(messages);
    Ok(())
}

#[when("the result is translated")]
fn result_is_translated(world: &mut DecorationWorld) -> Result<(), eyre::Report> {
    let result = world
        .result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing result in scenario world"))?;
    let messages = TranslatedResult::new(result, &world.translator)
        .messages()
        .wrap_err("read translated messages")?;
    world.messages = Some(messages);
    Ok(())
}

#[when("the aggregate messages are read")]
fn aggregate_messages_read(world: &mut DecorationWorld) -> Result<(), eyre::Report> {
    let aggregate = world
        .aggregate
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing aggregate in scenario world"))?;
    let messages = aggregate.messages().wrap_err("read aggregate messages")?;
    world.messages = Some(messages);
    Ok(())
}

#[when("the aggregate is obscured")]
fn aggregate_is_obscured(world: &mut DecorationWorld) -> Result<(), eyre::Report> {
    let aggregate = world
        .aggregate
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing aggregate in scenario world"))?;
    let messages = ObscuredResult::new(aggregate)
        .messages()
        .wrap_err("read obscured aggregate messages")?;
    world.messages = Some(messages);
    Ok(())
}
