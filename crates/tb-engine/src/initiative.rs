//! Per-character initiative calculation from ability-card selections.
//!
//! Each round a player picks two ability cards (or declares a long rest).
//! The faster of the two cards — the lower value — fixes the character's
//! place in the round. A long rest always resolves last, encoded as the
//! reserved initiative value 99.

use serde::{Deserialize, Serialize};

use tb_core::ActorId;

use crate::error::{EngineError, EngineResult};

/// Reserved initiative for a long-resting character. Sorts after every
/// normal card value; never a legal card value itself.
pub const LONG_REST_INITIATIVE: u32 = 99;

/// One character's confirmed initiative for the coming round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiativeSelection {
    /// The character this selection belongs to.
    pub actor: ActorId,
    /// The resolved initiative value.
    pub initiative: u32,
}

impl InitiativeSelection {
    /// Create a selection for a character.
    pub fn new(actor: impl Into<ActorId>, initiative: u32) -> Self {
        Self {
            actor: actor.into(),
            initiative,
        }
    }
}

/// Resolve two chosen card values (or a long rest) into a single
/// initiative.
///
/// A long rest wins over any card values and returns
/// [`LONG_REST_INITIATIVE`]; ties between several long-resting characters
/// are broken downstream by class order, not here. With one card value
/// absent — a pending second card, or a single-card scenario rule — the
/// present value decides. With both present, the minimum does.
///
/// Fails with [`EngineError::InvalidInitiativeInput`] when no card value
/// is given and long rest is not flagged: a character must supply at least
/// one determining card.
pub fn calculate_initiative(
    top_card: Option<u32>,
    bottom_card: Option<u32>,
    long_rest: bool,
) -> EngineResult<u32> {
    if long_rest {
        return Ok(LONG_REST_INITIATIVE);
    }

    match (top_card, bottom_card) {
        (None, None) => Err(EngineError::InvalidInitiativeInput),
        (Some(value), None) | (None, Some(value)) => Ok(value),
        (Some(top), Some(bottom)) => Ok(top.min(bottom)),
    }
}
