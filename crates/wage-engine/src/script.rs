//! The contract between the engine and whatever decides what a scene does.

use serde::{Deserialize, Serialize};
use wage_core::{ArmorSlot, CharacterId, MoveEvent, ObjectId, SceneId, Weapon, World};

use crate::runtime::Runtime;

/// A pointer target the player clicked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickInput {
    /// A scene.
    Scene(SceneId),
    /// An object.
    Object(ObjectId),
    /// A character.
    Character(CharacterId),
}

/// Runs scene scripts.
pub trait ScriptHost {
    /// Run the script of `scene` for one attempted action.
    ///
    /// `loop_count` counts invocations since the player entered the scene,
    /// starting at 0. Returns whether the input was handled.
    fn execute(
        &mut self,
        scene: SceneId,
        loop_count: u32,
        text: Option<&str>,
        click: Option<ClickInput>,
        ctx: &mut TurnContext<'_>,
    ) -> bool;
}

/// The callback surface a script sees during one invocation.
///
/// Moves made through the context are observed by the engine, so a
/// non-player character moved into the player's scene triggers an encounter
/// before the call returns.
pub struct TurnContext<'a> {
    pub(crate) rt: &'a mut Runtime,
}

impl TurnContext<'_> {
    /// Read access to the world.
    pub fn world(&self) -> &World {
        &self.rt.world
    }

    /// The player character.
    pub fn player(&self) -> CharacterId {
        self.rt.player
    }

    /// The player's scene, `None` while off the map.
    pub fn player_scene(&self) -> Option<SceneId> {
        self.rt.player_scene()
    }

    /// Write one narration line. Empty text is dropped.
    pub fn append_text(&mut self, text: &str) {
        self.rt.append_text(text);
    }

    /// Play a sound by name (case-insensitive). Unknown names are ignored.
    pub fn play_sound(&mut self, name: &str) {
        self.rt.play_sound(Some(name));
    }

    /// Forward a command-menu format to the presentation layer.
    pub fn set_menu(&mut self, format: &str) {
        self.rt.set_menu(format);
    }

    /// Put an object on a scene floor.
    pub fn move_object_to_scene(&mut self, object: ObjectId, scene: SceneId) -> MoveEvent {
        self.rt.move_object_to_scene(object, scene)
    }

    /// Put an object in a character's inventory.
    pub fn move_object_to_character(
        &mut self,
        object: ObjectId,
        character: CharacterId,
    ) -> MoveEvent {
        self.rt.move_object_to_character(object, character)
    }

    /// Move a character. `None` if it was already there.
    pub fn move_character(&mut self, character: CharacterId, scene: SceneId) -> Option<MoveEvent> {
        self.rt.move_character(character, scene)
    }

    /// Wear a carried armor object.
    pub fn wear(&mut self, character: CharacterId, object: ObjectId) -> Option<ArmorSlot> {
        self.rt.world.wear(character, object)
    }

    /// Resolve an attack, including any retaliation.
    pub fn attack(&mut self, attacker: CharacterId, victim: CharacterId, weapon: Weapon) {
        self.rt.attack(attacker, victim, weapon);
    }

    /// A uniform draw from `[0, 1)` from the engine's random source.
    pub fn random(&mut self) -> f64 {
        self.rt.rng.unit()
    }
}
