//! Operator commands over the query engine
//!
//! `scan`, `list` and `delete` consume the same lazy match stream and differ
//! only in their terminal effect. Each invocation is stateless start to
//! finish: parse, then either respond with the error line or evaluate and
//! act. Responses go through the [`Responder`] line sink; audit entries for
//! destructive actions go through the `log` facade.

use crate::error::SweepError;
use crate::query::{
    builtin_registry, matching_structures, parse, ConditionRegistry, Predicate, QueryEnv,
};
use crate::world::{Structure, WorldView};

/// Write-only sink for user-visible response lines.
pub trait Responder {
    fn respond(&mut self, line: &str);
}

impl<F: FnMut(&str)> Responder for F {
    fn respond(&mut self, line: &str) {
        self(line)
    }
}

/// One command invocation's view of the world and its collaborators.
///
/// Holds nothing across invocations; hosts build one per command.
pub struct SweepConsole<'a, W: WorldView> {
    world: &'a mut W,
    env: QueryEnv<'a>,
    registry: &'a ConditionRegistry,
}

impl<'a, W: WorldView> SweepConsole<'a, W> {
    pub fn new(world: &'a mut W, env: QueryEnv<'a>) -> Self {
        Self {
            world,
            env,
            registry: builtin_registry(),
        }
    }

    /// Use a caller-supplied registry instead of the built-in one.
    pub fn with_registry(
        world: &'a mut W,
        env: QueryEnv<'a>,
        registry: &'a ConditionRegistry,
    ) -> Self {
        Self {
            world,
            env,
            registry,
        }
    }

    fn parse_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
        responder: &mut dyn Responder,
    ) -> Option<Vec<Predicate<'a>>> {
        match parse(tokens, self.registry, &self.env) {
            Ok(predicates) => Some(predicates),
            Err(err) => {
                // zero structures are touched on any parse failure
                responder.respond(&err.to_string());
                None
            }
        }
    }

    /// Count structures matching the given conditions.
    pub fn scan<S: AsRef<str>>(&mut self, tokens: &[S], responder: &mut dyn Responder) {
        let Some(predicates) = self.parse_tokens(tokens, responder) else {
            return;
        };
        let count = matching_structures(self.world.connectivity_groups(), &predicates).count();
        responder.respond(&format!(
            "Found {} structures matching the given conditions.",
            count
        ));
    }

    /// List structures matching the given conditions, sorted by display name.
    pub fn list<S: AsRef<str>>(&mut self, tokens: &[S], responder: &mut dyn Responder) {
        let Some(predicates) = self.parse_tokens(tokens, responder) else {
            return;
        };
        let mut matched: Vec<Structure> =
            matching_structures(self.world.connectivity_groups(), &predicates).collect();
        matched.sort_by(|a, b| a.name().cmp(b.name()));

        for (index, structure) in matched.iter().enumerate() {
            responder.respond(&format!(
                "{}. {} ({} block(s))",
                index + 1,
                structure.name(),
                structure.block_count
            ));
        }
        responder.respond(&format!(
            "Found {} structures matching the given conditions.",
            matched.len()
        ));
    }

    /// Delete structures matching the given conditions. Each removal is
    /// audited before it happens and completes before the next is attempted;
    /// a structure the simulation already removed is skipped, not fatal.
    pub fn delete<S: AsRef<str>>(&mut self, tokens: &[S], responder: &mut dyn Responder) {
        let Some(predicates) = self.parse_tokens(tokens, responder) else {
            return;
        };

        let mut count = 0usize;
        for structure in matching_structures(self.world.connectivity_groups(), &predicates) {
            log::info!("Deleting structure {}: {}", structure.id, structure.name());
            match self.world.remove(structure.id) {
                Ok(()) => count += 1,
                Err(err) => log::warn!("Skipping structure {}: {}", structure.id, err),
            }
        }

        responder.respond(&format!(
            "Deleted {} structures matching the given conditions.",
            count
        ));
        let conditions: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        log::info!(
            "Sweep deleted {} structures matching conditions {}",
            count,
            conditions.join(", ")
        );
    }

    /// List every loaded structure whose display name contains the search
    /// term, case-insensitively.
    pub fn find(&mut self, term: &str, responder: &mut dyn Responder) {
        if term.is_empty() {
            return;
        }
        let needle = term.to_ascii_lowercase();

        responder.respond("Found entities:");
        for structure in self.world.loaded_structures() {
            if let Some(name) = &structure.display_name {
                if name.to_ascii_lowercase().contains(&needle) {
                    responder.respond(&format!("{} ({})", name, structure.id));
                }
            }
        }
    }
}
