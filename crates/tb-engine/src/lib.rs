//! Initiative and turn order resolution engine for Torchbound.
//!
//! Given a round's initiative inputs — ability-card values chosen by
//! players, precomputed monster initiatives, and summon ownership links —
//! this crate produces a deterministic total ordering of all acting
//! entities and supports cyclic traversal of that ordering while actors
//! die or become exhausted mid-round.
//!
//! Every operation is a pure function over its inputs: the caller owns all
//! state between calls and re-invokes with a complete snapshot. The only
//! stateful convenience is [`RoundTracker`], which packages the common
//! advance-and-wrap loop around the pure helpers.

pub mod error;
pub mod initiative;
pub mod order;
pub mod tracker;
pub mod traversal;
pub mod update;
pub mod validate;

pub use error::{EngineError, EngineResult};
pub use initiative::{InitiativeSelection, LONG_REST_INITIATIVE, calculate_initiative};
pub use order::resolve_turn_order;
pub use tracker::RoundTracker;
pub use traversal::{is_round_end, next_index, next_ready_index};
pub use update::update_turn_order;
pub use validate::{ValidationIssue, validate_roster};
