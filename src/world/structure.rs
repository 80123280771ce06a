use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Unique identifier for a structure. Stable for the lifetime of the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct StructureId(pub u64);

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a player or faction identity.
///
/// Negative values are reserved for NPC factions (the pirate identity among
/// them); the engine never assumes anything beyond equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct IdentityId(pub i64);

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// World-space bounding volume of a structure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    pub center: DVec3,
    pub radius: f64,
}

impl BoundingSphere {
    pub const ZERO: BoundingSphere = BoundingSphere {
        center: DVec3::ZERO,
        radius: 0.0,
    };
}

/// Resource kinds a power source can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Electricity,
    Hydrogen,
    Oxygen,
}

/// Snapshot of one power-producing component on a structure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerSource {
    pub resource: ResourceKind,
    pub has_capacity: bool,
    pub production_enabled: bool,
}

/// A grid of blocks in the simulated world, as seen at query time.
///
/// Hosts build these snapshots from live entities when the world partition is
/// queried; the engine never holds them across invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub id: StructureId,
    /// Mutable player-assigned name; absent on freshly spawned grids.
    pub display_name: Option<String>,
    pub block_count: u64,
    /// Block type tags present anywhere on the grid.
    pub block_types: HashSet<String>,
    /// Block subtype tags present anywhere on the grid.
    pub block_subtypes: HashSet<String>,
    /// Majority owners of the grid. Empty for derelicts.
    pub owners: HashSet<IdentityId>,
    pub bounds: BoundingSphere,
    pub power_sources: Vec<PowerSource>,
}

impl Structure {
    pub fn new(id: StructureId) -> Self {
        Self {
            id,
            display_name: None,
            block_count: 0,
            block_types: HashSet::new(),
            block_subtypes: HashSet::new(),
            owners: HashSet::new(),
            bounds: BoundingSphere::ZERO,
            power_sources: Vec::new(),
        }
    }

    /// Display name, or the empty string when none is set.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }

    pub fn has_block_type(&self, tag: &str) -> bool {
        self.block_types.contains(tag)
    }

    pub fn has_block_subtype(&self, tag: &str) -> bool {
        self.block_subtypes.contains(tag)
    }

    /// True when at least one source simultaneously has remaining capacity
    /// and has production enabled for electricity.
    pub fn has_power(&self) -> bool {
        self.power_sources.iter().any(|source| {
            source.resource == ResourceKind::Electricity
                && source.has_capacity
                && source.production_enabled
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_defaults_to_empty() {
        let mut structure = Structure::new(StructureId(1));
        assert_eq!(structure.name(), "");
        structure.display_name = Some("Salvage Rig".to_string());
        assert_eq!(structure.name(), "Salvage Rig");
    }

    #[test]
    fn power_requires_capacity_and_enabled_electricity() {
        let mut structure = Structure::new(StructureId(2));
        assert!(!structure.has_power());

        // Hydrogen production does not count as powered
        structure.power_sources.push(PowerSource {
            resource: ResourceKind::Hydrogen,
            has_capacity: true,
            production_enabled: true,
        });
        assert!(!structure.has_power());

        // Depleted reactor does not count either
        structure.power_sources.push(PowerSource {
            resource: ResourceKind::Electricity,
            has_capacity: false,
            production_enabled: true,
        });
        assert!(!structure.has_power());

        structure.power_sources.push(PowerSource {
            resource: ResourceKind::Electricity,
            has_capacity: true,
            production_enabled: true,
        });
        assert!(structure.has_power());
    }
}
