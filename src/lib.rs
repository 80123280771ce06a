//! Gridsweep - condition-based query console for a live simulated world
//!
//! Finds, lists and deletes grid structures matching a flat list of
//! `keyword argument` condition tokens. Match decisions are made per
//! connectivity group: a group is emitted only when every member satisfies
//! every condition, so a single non-compliant docked grid protects its
//! whole group.
//!
//! The engine owns nothing: the world partition, identity resolution and
//! spatial lookups come in through the traits in [`world`], so queries run
//! against the real simulation and against test fakes alike.

// Core engine modules
pub mod constants;
pub mod error;
pub mod query;
pub mod world;

// Operator-facing commands
pub mod commands;

pub use commands::{Responder, SweepConsole};
pub use error::{SweepError, SweepResult};
pub use query::{
    builtin_registry, matching_structures, parse, BuildFn, ConditionRegistry, Predicate, QueryEnv,
};
pub use world::{
    Body, BoundingSphere, ConnectivityGroup, IdentityId, IdentityResolver, PowerSource,
    ResourceKind, SpatialQuery, Structure, StructureId, WorldView,
};
