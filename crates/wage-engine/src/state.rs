use serde::{Deserialize, Serialize};
use wage_core::SceneId;

/// The turn engine's memory between turns.
///
/// Owned by the engine, but plain data so it can be inspected, saved and
/// restored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// The player's scene at the end of the previous turn.
    pub last_scene: Option<SceneId>,
    /// Script invocations in the current scene; reset on every scene change.
    pub loop_count: u32,
    /// Completed turns. Initial placement runs while this is 0.
    pub turn: u64,
}

impl TurnState {
    /// Whether initial placement is still pending.
    pub fn is_first_turn(&self) -> bool {
        self.turn == 0
    }

    /// Hand out the current loop count and advance it.
    pub(crate) fn next_loop(&mut self) -> u32 {
        let current = self.loop_count;
        self.loop_count += 1;
        current
    }
}
