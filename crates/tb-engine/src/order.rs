//! Turn order resolution.
//!
//! [`resolve_turn_order`] sorts a round's actors into the authoritative
//! acting order. Initiative dominates; within an initiative tie the layered
//! tie-break policy applies: a summon acts just before its owner, summons
//! and characters tie-break by (owner) class order, and every pairing
//! outside those rules keeps its original input order.
//!
//! The policy is implemented as one derived composite sort key per actor
//! rather than a pairwise comparator, so the resulting order is total and
//! transitive for any mix of summons, characters, and monsters sharing an
//! initiative value.

use std::collections::HashMap;

use tb_core::{Actor, ActorId, ActorKind, CharacterClass};

/// Tie rank for actors with no class to break ties on: monsters, summons
/// with no resolvable owner, and characters without a class. Sorts after
/// every real class rank.
const UNCLASSED: u8 = CharacterClass::ALL.len() as u8;

/// Resolve the acting order for a round.
///
/// Returns a new vector; the input is not touched, and empty input yields
/// empty output. The sort is deterministic: actors that no tie-break rule
/// separates keep their relative input order.
///
/// A summon's owner reference participates in tie-breaks only when it
/// resolves to a character in the same set; an unresolved reference means
/// "no ownership" and is never an error.
pub fn resolve_turn_order(actors: &[Actor]) -> Vec<Actor> {
    // Owner lookups resolve against characters only; a summon pointing at
    // a monster or another summon is treated as unowned.
    let character_class: HashMap<&ActorId, Option<CharacterClass>> = actors
        .iter()
        .filter(|a| a.kind == ActorKind::Character)
        .map(|a| (&a.id, a.class))
        .collect();

    let mut indexed: Vec<(usize, &Actor)> = actors.iter().enumerate().collect();
    indexed.sort_by_key(|&(index, actor)| turn_key(actor, &character_class, index));
    indexed.into_iter().map(|(_, actor)| actor.clone()).collect()
}

/// Composite sort key: `(initiative, class rank, kind rank, input index)`.
///
/// Within an initiative tie, an owned summon carries its owner's class rank
/// with kind rank 0, so it slots directly ahead of the owner (kind rank 1)
/// and ahead of any character sharing that class. Characters carry their
/// own class rank. Everything else sorts behind the classed group, ordered
/// purely by input index.
fn turn_key(
    actor: &Actor,
    character_class: &HashMap<&ActorId, Option<CharacterClass>>,
    index: usize,
) -> (u32, u8, u8, usize) {
    let (class_rank, kind_rank) = match actor.kind {
        ActorKind::Summon => match actor.owner.as_ref().and_then(|o| character_class.get(o)) {
            Some(owner_class) => (owner_class.map_or(UNCLASSED, CharacterClass::rank), 0),
            None => (UNCLASSED, 1),
        },
        ActorKind::Character => match actor.class {
            Some(class) => (class.rank(), 1),
            None => (UNCLASSED, 1),
        },
        ActorKind::Monster => (UNCLASSED, 1),
    };

    (actor.initiative, class_rank, kind_rank, index)
}
