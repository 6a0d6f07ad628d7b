use wage_core::WageError;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while constructing an engine.
///
/// Turn processing itself never fails; it degrades instead.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The world has no designated player character.
    #[error("world has no player character")]
    NoPlayer,

    /// The world could not be built.
    #[error(transparent)]
    World(#[from] WageError),
}
