//! Group-level match evaluation
//!
//! The match decision is made per connectivity group: a group is emitted in
//! full iff every member passes every predicate. A single non-compliant
//! member disqualifies the whole group, including members that individually
//! would have matched. Evaluation is lazy per group; consumers drive it.

use crate::query::condition::Predicate;
use crate::world::{ConnectivityGroup, Structure};

/// Lazily yield every member of every uniformly-compliant group.
///
/// Groups are visited in supplier order, members in group order. With an
/// empty predicate list every group matches trivially.
pub fn matching_structures<'p, 'e: 'p>(
    groups: Vec<ConnectivityGroup>,
    predicates: &'p [Predicate<'e>],
) -> impl Iterator<Item = Structure> + 'p {
    groups
        .into_iter()
        .filter(move |group| {
            group
                .members
                .iter()
                .all(|member| predicates.iter().all(|check| check(member)))
        })
        .flat_map(|group| group.members)
}
