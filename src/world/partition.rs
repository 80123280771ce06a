use crate::error::SweepResult;
use crate::world::{Structure, StructureId};
use serde::{Deserialize, Serialize};

/// A maximal set of structures joined through physical or logical links
/// (docking, wiring). Every loaded structure belongs to exactly one group;
/// an unconnected structure forms a singleton group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityGroup {
    /// Members in the group's natural order.
    pub members: Vec<Structure>,
}

impl ConnectivityGroup {
    pub fn new(members: Vec<Structure>) -> Self {
        Self { members }
    }
}

/// The engine's view of the live world.
///
/// Implemented by the host simulation; the engine takes it by reference per
/// invocation and never caches anything across calls.
pub trait WorldView {
    /// The current partition of loaded structures into connectivity groups.
    /// Recomputed fresh on every call; the returned snapshot is what the
    /// world looks like right now, not a consistent transaction.
    fn connectivity_groups(&self) -> Vec<ConnectivityGroup>;

    /// Remove a structure from the world. Irreversible and synchronous:
    /// when this returns `Ok` the entity is fully gone and group membership
    /// is updated. Returns [`SweepError::StructureGone`] when the structure
    /// was already removed by the simulation.
    ///
    /// [`SweepError::StructureGone`]: crate::error::SweepError::StructureGone
    fn remove(&mut self, id: StructureId) -> SweepResult<()>;

    /// Every loaded structure, flattened out of the current partition.
    fn loaded_structures(&self) -> Vec<Structure> {
        self.connectivity_groups()
            .into_iter()
            .flat_map(|group| group.members)
            .collect()
    }
}
