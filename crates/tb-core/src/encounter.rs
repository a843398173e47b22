use serde::{Deserialize, Serialize};

use crate::actor::{Actor, ActorId, ActorKind};
use crate::error::{TbError, TbResult};

/// One round's worth of acting entities, assembled by the lobby layer and
/// handed to the turn order engine.
///
/// The container enforces id uniqueness on insertion. Encounters loaded
/// from JSON skip that check — callers are expected to run roster
/// validation before resolving an untrusted encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encounter {
    /// Scenario name, display only.
    pub name: String,
    /// Current round number (1-based).
    pub round: u32,
    actors: Vec<Actor>,
}

impl Encounter {
    /// Create an empty encounter at round 1.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            round: 1,
            actors: Vec::new(),
        }
    }

    /// Add an actor, rejecting duplicate ids.
    pub fn add_actor(&mut self, actor: Actor) -> TbResult<()> {
        if self.actors.iter().any(|a| a.id == actor.id) {
            return Err(TbError::DuplicateActor(actor.id));
        }
        self.actors.push(actor);
        Ok(())
    }

    /// Remove an actor from the roster, e.g. a summon that was destroyed
    /// for good or a character who left the session.
    pub fn remove_actor(&mut self, id: &ActorId) -> TbResult<Actor> {
        let position = self
            .actors
            .iter()
            .position(|a| &a.id == id)
            .ok_or_else(|| TbError::ActorNotFound(id.clone()))?;
        Ok(self.actors.remove(position))
    }

    /// Look up an actor by id.
    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| &a.id == id)
    }

    /// All actors in insertion order.
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// All player characters in insertion order.
    pub fn characters(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.kind == ActorKind::Character)
    }

    /// Number of actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// True if the encounter has no actors.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
