//! Turn engine for WAGE worlds.
//!
//! An [`Engine`] owns a [`wage_core::World`] and advances it one player action
//! at a time: it runs the active scene's script through a [`ScriptHost`],
//! notices scene changes and encounters, and resolves combat. Every random
//! draw goes through a [`RandomSource`], so sessions replay exactly under a
//! fixed seed.

/// Combat resolution.
mod combat;
/// Built-in command interpreter.
pub mod commands;
/// Configuration types for engine sessions.
pub mod config;
/// The turn engine.
pub mod engine;
/// Error types for the engine crate.
pub mod error;
/// Narration sink, sound and menu collaborators.
pub mod io;
/// Sentence building for encounters and combat.
pub mod narration;
/// Random sources.
pub mod random;
/// Mutable state shared by a turn and its callbacks.
mod runtime;
/// The script host contract and its callback surface.
pub mod script;
/// Turn memory.
pub mod state;

/// Re-exports of [`commands::StandardScripts`] and [`commands::Command`].
pub use commands::{Command, StandardScripts};
/// Re-export of [`config::EngineConfig`].
pub use config::EngineConfig;
/// Re-export of [`engine::Engine`].
pub use engine::Engine;
/// Re-exports of [`error::EngineError`] and [`error::EngineResult`].
pub use error::{EngineError, EngineResult};
/// Re-exports of the presentation collaborators.
pub use io::{
    MenuCallbacks, MenuLog, NoMenu, OutputSink, SilentSound, SoundLog, SoundPlayer, TextBuffer,
};
/// Re-exports of [`random::RandomSource`] and [`random::ScriptedRolls`].
pub use random::{RandomSource, ScriptedRolls};
/// Re-exports of the script host contract.
pub use script::{ClickInput, ScriptHost, TurnContext};
/// Re-export of [`state::TurnState`].
pub use state::TurnState;
