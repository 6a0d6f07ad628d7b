use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::{WageError, WageResult};
use crate::object::Object;
use crate::scene::Scene;
use crate::sound::Sound;
use crate::world::{RANDOM_SCENE, STORAGE, World, WorldMeta};

/// A complete world as a serde document.
///
/// Entities are registered in document order, which fixes their registration
/// indexes and therefore every tie-break ordering in the world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldDefinition {
    /// World metadata.
    #[serde(flatten)]
    pub meta: WorldMeta,
    /// Name of the player character.
    pub player: String,
    /// Visitable scenes. STORAGE is implicit.
    pub scenes: Vec<Scene>,
    /// Objects, placed by their `home` during initial setup.
    pub objects: Vec<Object>,
    /// Characters, placed by their `initial_scene` during initial setup.
    pub characters: Vec<Character>,
    /// Named sounds.
    pub sounds: Vec<Sound>,
}

impl WorldDefinition {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> WageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> WageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Register every entity into a fresh world and designate the player.
    ///
    /// Nothing is placed yet; placement happens on the first turn.
    pub fn build(self) -> WageResult<World> {
        if self.player.trim().is_empty() {
            return Err(WageError::NoPlayer);
        }
        let mut world = World::new(self.meta);
        for scene in self.scenes {
            if scene.name.eq_ignore_ascii_case(STORAGE)
                || scene.name.eq_ignore_ascii_case(RANDOM_SCENE)
            {
                return Err(WageError::Definition(format!(
                    "scene name \"{}\" is reserved",
                    scene.name
                )));
            }
            world.add_scene(scene)?;
        }
        for object in self.objects {
            world.add_object(object)?;
        }
        for character in self.characters {
            world.add_character(character)?;
        }
        for sound in self.sounds {
            world.add_sound(sound)?;
        }
        let player = world
            .character_by_name(&self.player)
            .ok_or(WageError::UnknownCharacter(self.player))?;
        world.set_player(player);
        Ok(world)
    }
}

impl World {
    /// Parse and build a world from a JSON definition.
    pub fn from_json(json: &str) -> WageResult<Self> {
        WorldDefinition::from_json(json)?.build()
    }

    /// Declared placements that initial setup will not be able to resolve.
    ///
    /// These are not fatal; setup logs and skips them.
    pub fn unresolved_placements(&self) -> Vec<String> {
        let mut issues = Vec::new();
        for id in self.object_ids() {
            let object = self.object(id);
            let home = object.home.as_str();
            if home.eq_ignore_ascii_case(RANDOM_SCENE) {
                continue;
            }
            if self.scene_by_name(home).is_none() && self.character_by_name(home).is_none() {
                issues.push(format!(
                    "object \"{}\" has unknown home \"{}\"",
                    object.name, home
                ));
            }
        }
        for id in self.character_ids() {
            let character = self.character(id);
            let scene = character.initial_scene.as_str();
            if scene.eq_ignore_ascii_case(RANDOM_SCENE) {
                continue;
            }
            if self.scene_by_name(scene).is_none() {
                issues.push(format!(
                    "character \"{}\" has unknown initial scene \"{}\"",
                    character.name, scene
                ));
            }
        }
        issues
    }
}
