//! Built-in condition predicates
//!
//! Each builder turns one string argument into a boxed predicate over a
//! [`Structure`]. Builders that need a collaborator (identity resolution,
//! spatial lookup) take it from the [`QueryEnv`] passed in at parse time.
//!
//! Error policy: a malformed integer or an unresolvable identity degrades to
//! a predicate that matches nothing (with a `warn!` so it is visible in
//! logs); an invalid `name` regex is fatal for the whole query.

use crate::constants::PLANET_INTERIOR_DIVISOR;
use crate::error::{SweepError, SweepResult};
use crate::world::{IdentityResolver, SpatialQuery, Structure};
use regex::Regex;

/// A compiled condition: a boolean test over a single structure, valid for
/// one invocation.
pub type Predicate<'e> = Box<dyn Fn(&Structure) -> bool + 'e>;

/// Read-only collaborators available to condition builders.
#[derive(Clone, Copy)]
pub struct QueryEnv<'e> {
    pub identities: &'e dyn IdentityResolver,
    pub space: &'e dyn SpatialQuery,
}

impl<'e> QueryEnv<'e> {
    pub fn new(identities: &'e dyn IdentityResolver, space: &'e dyn SpatialQuery) -> Self {
        Self { identities, space }
    }
}

fn never<'e>() -> Predicate<'e> {
    Box::new(|_| false)
}

/// `hastype T`: any block on the structure carries type tag T.
pub(crate) fn has_type<'e>(arg: &str, _env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
    let tag = arg.to_owned();
    Ok(Box::new(move |s| s.has_block_type(&tag)))
}

/// `notype T`: no block on the structure carries type tag T.
pub(crate) fn no_type<'e>(arg: &str, _env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
    let tag = arg.to_owned();
    Ok(Box::new(move |s| !s.has_block_type(&tag)))
}

/// `hassubtype T`: any block carries subtype tag T.
pub(crate) fn has_subtype<'e>(arg: &str, _env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
    let tag = arg.to_owned();
    Ok(Box::new(move |s| s.has_block_subtype(&tag)))
}

/// `nosubtype T`: no block carries subtype tag T.
pub(crate) fn no_subtype<'e>(arg: &str, _env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
    let tag = arg.to_owned();
    Ok(Box::new(move |s| !s.has_block_subtype(&tag)))
}

/// `blockslessthan N`: block count strictly below N. A non-integer argument
/// matches nothing.
pub(crate) fn blocks_less_than<'e>(arg: &str, _env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
    match arg.parse::<i64>() {
        Ok(limit) => Ok(Box::new(move |s| (s.block_count as i64) < limit)),
        Err(_) => {
            log::warn!(
                "blockslessthan: '{}' is not an integer, condition matches nothing",
                arg
            );
            Ok(never())
        }
    }
}

/// `blocksgreaterthan N`: block count strictly above N. A non-integer
/// argument matches nothing.
pub(crate) fn blocks_greater_than<'e>(arg: &str, _env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
    match arg.parse::<i64>() {
        Ok(limit) => Ok(Box::new(move |s| (s.block_count as i64) > limit)),
        Err(_) => {
            log::warn!(
                "blocksgreaterthan: '{}' is not an integer, condition matches nothing",
                arg
            );
            Ok(never())
        }
    }
}

/// `ownedby who`: `nobody` matches structures with an empty owner set,
/// `pirates` matches the reserved pirate faction, anything else is resolved
/// as a player name or numeric id. An unresolvable argument matches nothing.
pub(crate) fn owned_by<'e>(arg: &str, env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
    if arg.eq_ignore_ascii_case("nobody") {
        return Ok(Box::new(|s| s.owners.is_empty()));
    }

    let identity = if arg.eq_ignore_ascii_case("pirates") {
        Some(env.identities.pirate_identity())
    } else {
        env.identities.resolve_player(arg)
    };

    match identity {
        Some(id) => Ok(Box::new(move |s| s.owners.contains(&id))),
        None => {
            log::warn!(
                "ownedby: no player or identity matches '{}', condition matches nothing",
                arg
            );
            Ok(never())
        }
    }
}

/// `name P`: display name matches the regular expression P anywhere in the
/// string (absent names match as empty). An invalid pattern aborts the query.
pub(crate) fn name_matches<'e>(arg: &str, _env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
    let pattern = Regex::new(arg).map_err(|source| SweepError::InvalidPattern {
        pattern: arg.to_owned(),
        source,
    })?;
    Ok(Box::new(move |s| pattern.is_match(s.name())))
}

/// `haspower _`: some source is producing electricity right now.
pub(crate) fn has_power<'e>(_arg: &str, _env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
    Ok(Box::new(|s| s.has_power()))
}

/// `nopower _`: no source is producing electricity.
pub(crate) fn no_power<'e>(_arg: &str, _env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
    Ok(Box::new(|s| !s.has_power()))
}

/// `insideplanet _`: some planetary body overlaps the structure's bounding
/// sphere and the sphere's center sits within `max_radius² /`
/// [`PLANET_INTERIOR_DIVISOR`] squared distance of the body's center.
pub(crate) fn inside_planet<'e>(_arg: &str, env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
    let space = env.space;
    Ok(Box::new(move |s| {
        space.bodies_overlapping(s.bounds).iter().any(|body| {
            let dist_sq = s.bounds.center.distance_squared(body.center);
            dist_sq <= body.max_radius * body.max_radius / PLANET_INTERIOR_DIVISOR
        })
    }))
}
