use crate::world::BoundingSphere;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A planetary body returned from a spatial query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub center: DVec3,
    pub max_radius: f64,
}

/// Spatial lookup over planetary bodies, provided by the host's pruning
/// structure. Results reflect the world at call time.
pub trait SpatialQuery {
    /// All bodies whose volume overlaps the given sphere.
    fn bodies_overlapping(&self, sphere: BoundingSphere) -> Vec<Body>;
}
