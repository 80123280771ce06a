//! Tunable constants for the sweep engine

/// Divisor applied to a planetary body's squared maximum radius by the
/// `insideplanet` condition. With the value 2.0 a structure matches only when
/// its bounding-sphere center sits within ~70.7% of the body's maximum radius
/// from the body's center, well inside the body rather than merely touching
/// it. Tunable product choice; keep in sync with operator documentation.
pub const PLANET_INTERIOR_DIVISOR: f64 = 2.0;
