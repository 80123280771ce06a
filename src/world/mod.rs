//! Data model and collaborator seams for the live world
//!
//! The engine never talks to the simulation directly; everything it needs is
//! behind the traits here ([`WorldView`], [`IdentityResolver`],
//! [`SpatialQuery`]) so queries are testable against fakes.

mod identity;
mod partition;
mod spatial;
mod structure;

pub use identity::IdentityResolver;
pub use partition::{ConnectivityGroup, WorldView};
pub use spatial::{Body, SpatialQuery};
pub use structure::{
    BoundingSphere, IdentityId, PowerSource, ResourceKind, Structure, StructureId,
};
