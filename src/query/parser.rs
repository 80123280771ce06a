//! Token list → predicate list
//!
//! Tokens are consumed two at a time as `keyword argument` pairs. Parsing
//! resolves completely before any group is evaluated, so an unknown keyword
//! or a fatal builder error touches zero structures.

use crate::error::{SweepError, SweepResult};
use crate::query::condition::{Predicate, QueryEnv};
use crate::query::registry::ConditionRegistry;

/// Parse a flat token list into an ordered predicate list.
///
/// A trailing keyword with no argument to pair with is silently dropped.
/// An empty token list parses to an empty predicate list, which matches
/// every structure.
pub fn parse<'e, S: AsRef<str>>(
    tokens: &[S],
    registry: &ConditionRegistry,
    env: &QueryEnv<'e>,
) -> SweepResult<Vec<Predicate<'e>>> {
    let mut predicates = Vec::with_capacity(tokens.len() / 2);

    for pair in tokens.chunks_exact(2) {
        let keyword = pair[0].as_ref();
        let argument = pair[1].as_ref();
        let build = registry
            .get(keyword)
            .ok_or_else(|| SweepError::UnknownCondition(keyword.to_owned()))?;
        predicates.push(build(argument, env)?);
    }

    Ok(predicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::registry::builtin_registry;
    use crate::world::{
        Body, BoundingSphere, IdentityId, IdentityResolver, SpatialQuery, Structure, StructureId,
    };

    struct NoIdentities;

    impl IdentityResolver for NoIdentities {
        fn resolve_player(&self, _name_or_id: &str) -> Option<IdentityId> {
            None
        }

        fn pirate_identity(&self) -> IdentityId {
            IdentityId(-7)
        }
    }

    struct NoBodies;

    impl SpatialQuery for NoBodies {
        fn bodies_overlapping(&self, _sphere: BoundingSphere) -> Vec<Body> {
            Vec::new()
        }
    }

    fn test_env<'e>(identities: &'e NoIdentities, space: &'e NoBodies) -> QueryEnv<'e> {
        QueryEnv::new(identities, space)
    }

    #[test]
    fn empty_token_list_parses_to_empty_predicate_list() {
        let (identities, space) = (NoIdentities, NoBodies);
        let env = test_env(&identities, &space);
        let tokens: [&str; 0] = [];
        let predicates = parse(&tokens, builtin_registry(), &env).unwrap();
        assert!(predicates.is_empty());
    }

    #[test]
    fn pairs_tokens_in_order() {
        let (identities, space) = (NoIdentities, NoBodies);
        let env = test_env(&identities, &space);
        let tokens = ["hastype", "Reactor", "blocksgreaterthan", "4"];
        let predicates = parse(&tokens, builtin_registry(), &env).unwrap();
        assert_eq!(predicates.len(), 2);

        let mut structure = Structure::new(StructureId(1));
        structure.block_types.insert("Reactor".to_string());
        structure.block_count = 5;
        assert!(predicates.iter().all(|check| check(&structure)));
    }

    #[test]
    fn trailing_unpaired_keyword_is_dropped() {
        let (identities, space) = (NoIdentities, NoBodies);
        let env = test_env(&identities, &space);
        let tokens = ["hastype", "Reactor", "nopower"];
        let predicates = parse(&tokens, builtin_registry(), &env).unwrap();
        assert_eq!(predicates.len(), 1);
    }

    #[test]
    fn unknown_keyword_aborts_and_names_the_token() {
        let (identities, space) = (NoIdentities, NoBodies);
        let env = test_env(&identities, &space);
        let tokens = ["hastype", "Reactor", "bogus", "x"];
        let err = parse(&tokens, builtin_registry(), &env).err().unwrap();
        assert_eq!(err.to_string(), "Unknown argument 'bogus'");
    }

    #[test]
    fn invalid_name_pattern_aborts_parsing() {
        let (identities, space) = (NoIdentities, NoBodies);
        let env = test_env(&identities, &space);
        let tokens = ["name", "[unterminated"];
        let err = parse(&tokens, builtin_registry(), &env).err().unwrap();
        assert!(matches!(err, SweepError::InvalidPattern { .. }));
    }
}
