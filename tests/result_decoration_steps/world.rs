//! Shared world state for result decoration BDD scenarios.

use rstest::fixture;
use validator_result::result::{
    adapters::memory::InMemoryTranslator,
    domain::{BasicResult, ResultAggregate},
};

/// Scenario world for result decoration behaviour tests.
pub struct DecorationWorld {
    pub result: Option<BasicResult>,
    pub aggregate: Option<ResultAggregate>,
    pub translator: InMemoryTranslator,
    pub messages: Option<Vec<String>>,
}

impl DecorationWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            result: None,
            aggregate: None,
            translator: InMemoryTranslator::new(),
            messages: None,
        }
    }
}

impl Default for DecorationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DecorationWorld {
    DecorationWorld::default()
}
