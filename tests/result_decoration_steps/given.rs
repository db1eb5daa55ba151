//! Given steps for result decoration BDD scenarios.

use super::world::DecorationWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use validator_result::result::domain::{BasicResult, ResultAggregate};

#[given(r#"an invalid result for "{value}" with template "{template}""#)]
fn invalid_result(
    world: &mut DecorationWorld,
    value: String,
    template: String,
) -> Result<(), eyre::Report> {
    let result = BasicResult::invalid(value, [template]).wrap_err("build invalid result")?;
    world.result = Some(result);
    Ok(())
}

#[given(r#"a translator mapping "{message}" to "{translation}""#)]
fn translator_mapping(world: &mut DecorationWorld, message: String, translation: String) {
    world.translator.insert(None, message, translation);
}

#[given(r#"an aggregate for "{value}""#)]
fn aggregate_for(world: &mut DecorationWorld, value: String) {
    world.aggregate = Some(ResultAggregate::new(value));
}

#[given(r#"the aggregate receives an invalid result with template "{template}""#)]
fn aggregate_receives_result(
    world: &mut DecorationWorld,
    template: String,
) -> Result<(), eyre::Report> {
    let aggregate = world
        .aggregate
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing aggregate in scenario world"))?;
    let value = aggregate.validated_value().clone();
    aggregate.push(BasicResult::invalid(value, [template]).wrap_err("build child result")?);
    Ok(())
}

#[given(r#"the aggregate receives a nested aggregate with templates "{first}" and "{second}""#)]
fn aggregate_receives_nested(
    world: &mut DecorationWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let aggregate = world
        .aggregate
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing aggregate in scenario world"))?;
    let value = aggregate.validated_value().clone();

    let mut nested = ResultAggregate::new(value.clone());
    for template in [first, second] {
        nested.push(
            BasicResult::invalid(value.clone(), [template]).wrap_err("build nested result")?,
        );
    }
    aggregate.push(nested);
    Ok(())
}
