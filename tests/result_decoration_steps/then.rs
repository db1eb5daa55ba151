//! Then steps for result decoration BDD scenarios.

use super::world::DecorationWorld;
use rstest_bdd_macros::then;
use validator_result::result::ports::result::ValidationResult;

fn read_messages(world: &DecorationWorld) -> Result<&[String], eyre::Report> {
    world
        .messages
        .as_deref()
        .ok_or_else(|| eyre::eyre!("no messages were read"))
}

#[then(r#"the messages are "{expected}""#)]
fn messages_are(world: &DecorationWorld, expected: String) -> Result<(), eyre::Report> {
    let messages = read_messages(world)?;
    let expected: Vec<&str> = expected.split(" | ").collect();
    if messages != expected.as_slice() {
        return Err(eyre::eyre!("expected messages {expected:?}, got {messages:?}"));
    }
    Ok(())
}

#[then(r#"no message contains "{fragment}""#)]
fn no_message_contains(world: &DecorationWorld, fragment: String) -> Result<(), eyre::Report> {
    let messages = read_messages(world)?;
    if let Some(leaked) = messages.iter().find(|message| message.contains(&fragment)) {
        return Err(eyre::eyre!("message '{leaked}' contains '{fragment}'"));
    }
    Ok(())
}

#[then("the aggregate is invalid")]
fn aggregate_is_invalid(world: &DecorationWorld) -> Result<(), eyre::Report> {
    let aggregate = world
        .aggregate
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing aggregate in scenario world"))?;
    if aggregate.is_valid() {
        return Err(eyre::eyre!("expected the aggregate to be invalid"));
    }
    Ok(())
}
