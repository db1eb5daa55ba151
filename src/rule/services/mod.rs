//! Services that evaluate rules.

mod chain;

pub use chain::{ChainConfig, ValidatorChain};
