/// Alias for `Result<T, WageError>`.
pub type WageResult<T> = Result<T, WageError>;

/// Errors that can occur while building or loading a world.
#[derive(Debug, thiserror::Error)]
pub enum WageError {
    /// An entity of the same kind with the same (case-insensitive) name exists.
    #[error("{kind} already exists: \"{name}\"")]
    DuplicateName {
        /// The entity kind ("scene", "object", "character", "sound").
        kind: &'static str,
        /// The clashing name.
        name: String,
    },

    /// A scene name could not be resolved.
    #[error("unknown scene: \"{0}\"")]
    UnknownScene(String),

    /// A character name could not be resolved.
    #[error("unknown character: \"{0}\"")]
    UnknownCharacter(String),

    /// An object name could not be resolved.
    #[error("unknown object: \"{0}\"")]
    UnknownObject(String),

    /// The world has no designated player character.
    #[error("world has no player character")]
    NoPlayer,

    /// A world definition is structurally invalid.
    #[error("invalid world definition: {0}")]
    Definition(String),

    /// A world definition could not be parsed.
    #[error("malformed world definition: {0}")]
    Json(#[from] serde_json::Error),
}
