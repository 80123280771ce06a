//! Error handling for the sweep engine
//!
//! Only fatal conditions live here. Malformed numeric arguments and
//! unresolvable identities are not errors: the condition builders degrade
//! those to never-true predicates so the rest of the query keeps working.

use crate::world::StructureId;

/// Sweep-specific result type
pub type SweepResult<T> = Result<T, SweepError>;

#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// A token that is not a registered condition keyword. The Display text
    /// is the user-facing response line.
    #[error("Unknown argument '{0}'")]
    UnknownCondition(String),

    /// The `name` condition received a pattern that is not a valid regular
    /// expression. Aborts the whole query.
    #[error("Invalid name pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Removal raced with the simulation and the structure was already gone.
    #[error("Structure {0} is no longer present in the world")]
    StructureGone(StructureId),
}
