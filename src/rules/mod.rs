//! Rule policy for the turn engine.
//!
//! Rule sets implement `RuleSet` to define:
//! - Card legality against the top of the discard pile
//! - The effect each card has when played
//!
//! The engine calls into `RuleSet` but owns turn order and containers.

pub mod engine;

pub use engine::{Effect, RuleSet, StandardRules};
