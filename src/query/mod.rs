//! The condition-based query engine
//!
//! Pipeline: flat token list → [`parse`] → predicate list →
//! [`matching_structures`] over the world's connectivity groups → lazy
//! stream of matching structures. Parsing resolves fully before evaluation
//! begins; evaluation reads live world state through the collaborators in
//! [`QueryEnv`].

mod condition;
mod evaluator;
mod parser;
mod registry;

pub use condition::{Predicate, QueryEnv};
pub use evaluator::matching_structures;
pub use parser::parse;
pub use registry::{builtin_registry, BuildFn, ConditionRegistry};
