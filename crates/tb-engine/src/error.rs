//! Error types for the turn order engine.

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during engine operations.
///
/// The taxonomy is deliberately small: apart from the initiative
/// calculator, every operation in this crate is total over well-formed
/// input and degrades gracefully on unresolved references instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A character confirmed a turn with no card values and no long rest.
    /// This is a caller contract violation — the selection UI should never
    /// allow it — and is not retryable.
    #[error("invalid initiative input: no card values and no long rest")]
    InvalidInitiativeInput,
}
