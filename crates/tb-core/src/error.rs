use crate::actor::ActorId;

/// Alias for `Result<T, TbError>`.
pub type TbResult<T> = Result<T, TbError>;

/// Errors that can occur when assembling an encounter.
#[derive(Debug, thiserror::Error)]
pub enum TbError {
    /// The requested actor id does not exist in the encounter.
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),

    /// An actor with the same id is already present.
    #[error("duplicate actor id: \"{0}\"")]
    DuplicateActor(ActorId),
}
