//! Per-round order updates.
//!
//! Between rounds only the characters pick new cards; monster and summon
//! initiatives are supplied fresh by the caller (or deliberately carried
//! over). [`update_turn_order`] applies a round's card selections to the
//! previous order and re-resolves.

use std::collections::HashMap;

use tb_core::{Actor, ActorId, ActorKind};

use crate::initiative::InitiativeSelection;
use crate::order::resolve_turn_order;

/// Apply new character card selections to the previous round's order and
/// resolve the order for the next round.
///
/// Characters named in `selections` get only their initiative replaced;
/// every other field, and every actor not named — monsters, summons, and
/// characters without a new selection — passes through unchanged. A
/// selection naming an id that is not a character in `previous` is
/// ignored.
pub fn update_turn_order(previous: &[Actor], selections: &[InitiativeSelection]) -> Vec<Actor> {
    let new_initiative: HashMap<&ActorId, u32> = selections
        .iter()
        .map(|s| (&s.actor, s.initiative))
        .collect();

    let updated: Vec<Actor> = previous
        .iter()
        .map(|actor| {
            if actor.kind == ActorKind::Character
                && let Some(&initiative) = new_initiative.get(&actor.id)
            {
                Actor {
                    initiative,
                    ..actor.clone()
                }
            } else {
                actor.clone()
            }
        })
        .collect();

    resolve_turn_order(&updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_core::CharacterClass;

    fn previous_round() -> Vec<Actor> {
        resolve_turn_order(&[
            Actor::character("p1", "Kaela", CharacterClass::Vanguard, 23),
            Actor::character("p2", "Sylla", CharacterClass::Runeweaver, 61),
            Actor::monster("m1", "Gravefang", 31),
            Actor::summon("s1", "Ember Wisp", "p1", 23),
        ])
    }

    #[test]
    fn new_selections_reposition_characters() {
        let order = update_turn_order(
            &previous_round(),
            &[
                InitiativeSelection::new("p1", 77),
                InitiativeSelection::new("p2", 12),
            ],
        );
        let ids: Vec<&str> = order.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["p2", "s1", "m1", "p1"]);
    }

    #[test]
    fn unnamed_actors_pass_through_unchanged() {
        let previous = previous_round();
        let order = update_turn_order(&previous, &[InitiativeSelection::new("p1", 77)]);

        for before in &previous {
            if before.id.as_str() == "p1" {
                continue;
            }
            let after = order.iter().find(|a| a.id == before.id).unwrap();
            assert_eq!(after, before);
        }
    }

    #[test]
    fn only_initiative_changes_on_named_character() {
        let previous = previous_round();
        let order = update_turn_order(&previous, &[InitiativeSelection::new("p1", 77)]);

        let before = previous.iter().find(|a| a.id.as_str() == "p1").unwrap();
        let after = order.iter().find(|a| a.id.as_str() == "p1").unwrap();
        assert_eq!(after.initiative, 77);
        assert_eq!(
            Actor {
                initiative: before.initiative,
                ..after.clone()
            },
            *before
        );
    }

    #[test]
    fn selections_never_touch_monsters_or_summons() {
        let previous = previous_round();
        let order = update_turn_order(
            &previous,
            &[
                InitiativeSelection::new("m1", 1),
                InitiativeSelection::new("s1", 1),
            ],
        );

        let monster = order.iter().find(|a| a.id.as_str() == "m1").unwrap();
        let summon = order.iter().find(|a| a.id.as_str() == "s1").unwrap();
        assert_eq!(monster.initiative, 31);
        assert_eq!(summon.initiative, 23);
    }

    #[test]
    fn empty_selections_just_re_resolve() {
        let previous = previous_round();
        let order = update_turn_order(&previous, &[]);
        assert_eq!(order, previous);
    }

    #[test]
    fn selection_for_unknown_id_is_ignored() {
        let previous = previous_round();
        let order = update_turn_order(&previous, &[InitiativeSelection::new("ghost", 5)]);
        assert_eq!(order, previous);
    }
}
