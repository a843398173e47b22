use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::class::CharacterClass;

/// Unique identifier for an acting entity within an encounter.
///
/// Ids are caller-owned strings — the lobby layer that assembles an
/// encounter decides what they look like. [`ActorId::random`] generates a
/// compact unique id for rosters built in-process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    /// Wrap a caller-supplied id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id (short uuid form).
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string()[..8].to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ActorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ActorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The kind of an acting entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// A player character, initiative derived from chosen ability cards.
    Character,
    /// A scenario monster with precomputed initiative.
    Monster,
    /// An allied creature, usually linked to an owning character.
    Summon,
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Monster => write!(f, "monster"),
            Self::Summon => write!(f, "summon"),
        }
    }
}

/// One participant eligible to act in a round.
///
/// Actors are assembled fresh each round from external character, monster,
/// and summon state. The engine only reads and re-orders them; it never
/// mutates `is_dead`, `is_exhausted`, or `initiative` in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique id within the round's actor set.
    pub id: ActorId,
    /// Character, monster, or summon.
    pub kind: ActorKind,
    /// Display name; never an ordering input.
    pub name: String,
    /// Turn position for the round; lower acts earlier, 99 means long rest.
    pub initiative: u32,
    /// Class of a character; also resolves a summon's owner class.
    #[serde(default)]
    pub class: Option<CharacterClass>,
    /// Dead monsters and summons are skipped during traversal.
    #[serde(default)]
    pub is_dead: bool,
    /// Exhausted characters are skipped during traversal.
    #[serde(default)]
    pub is_exhausted: bool,
    /// Owning character of a summon. An id that resolves to nothing in the
    /// same actor set means "no ownership", never an error.
    #[serde(default)]
    pub owner: Option<ActorId>,
}

impl Actor {
    /// Create a player character.
    pub fn character(
        id: impl Into<ActorId>,
        name: impl Into<String>,
        class: CharacterClass,
        initiative: u32,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ActorKind::Character,
            name: name.into(),
            initiative,
            class: Some(class),
            is_dead: false,
            is_exhausted: false,
            owner: None,
        }
    }

    /// Create a scenario monster.
    pub fn monster(id: impl Into<ActorId>, name: impl Into<String>, initiative: u32) -> Self {
        Self {
            id: id.into(),
            kind: ActorKind::Monster,
            name: name.into(),
            initiative,
            class: None,
            is_dead: false,
            is_exhausted: false,
            owner: None,
        }
    }

    /// Create a summon linked to an owning character. Summons are normally
    /// given their owner's initiative for the round.
    pub fn summon(
        id: impl Into<ActorId>,
        name: impl Into<String>,
        owner: impl Into<ActorId>,
        initiative: u32,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ActorKind::Summon,
            name: name.into(),
            initiative,
            class: None,
            is_dead: false,
            is_exhausted: false,
            owner: Some(owner.into()),
        }
    }

    /// Create an unowned, scenario-spawned ally.
    pub fn stray_summon(
        id: impl Into<ActorId>,
        name: impl Into<String>,
        initiative: u32,
    ) -> Self {
        Self {
            kind: ActorKind::Summon,
            ..Self::monster(id, name, initiative)
        }
    }

    /// Whether this actor can take a turn (neither dead nor exhausted).
    pub fn can_act(&self) -> bool {
        !self.is_dead && !self.is_exhausted
    }
}
