use crate::world::IdentityId;

/// Player/faction identity lookup provided by the host.
///
/// The reserved `ownedby` arguments `nobody` and `pirates` are special-cased
/// inside the condition engine and never reach this resolver.
pub trait IdentityResolver {
    /// Resolve a player name or numeric identity id to an identity.
    /// Returns `None` when nothing matches.
    fn resolve_player(&self, name_or_id: &str) -> Option<IdentityId>;

    /// Identity of the reserved pirate faction.
    fn pirate_identity(&self) -> IdentityId;
}
