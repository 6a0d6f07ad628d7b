use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::character::{Character, Weapon, WeaponInfo};
use crate::entity::{CharacterId, ObjectId, SceneId, SoundId};
use crate::error::{WageError, WageResult};
use crate::location::{MoveObserver, ObserverId};
use crate::object::Object;
use crate::scene::Scene;
use crate::sound::Sound;

/// Name of the reserved off-map scene.
pub const STORAGE: &str = "STORAGE@";

/// Placement name that resolves to a random scene.
pub const RANDOM_SCENE: &str = "random@";

/// Metadata about the world itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldMeta {
    /// Display name.
    pub name: String,
    /// Text shown by an "about" menu.
    pub about: String,
    /// Whether the presentation layer should hide the weapons menu.
    pub weapons_menu_disabled: bool,
}

impl WorldMeta {
    /// Metadata with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// The aggregate root. Owns every scene, object, character and sound.
///
/// Entities live in insertion-ordered arenas and are addressed by typed
/// handles, so the arenas double as the "ordered" lists. Name lookups are
/// case-insensitive and per entity kind.
#[derive(Debug)]
pub struct World {
    /// World metadata.
    pub meta: WorldMeta,
    pub(crate) scenes: Vec<Scene>,
    pub(crate) objects: Vec<Object>,
    pub(crate) characters: Vec<Character>,
    sounds: Vec<Sound>,

    // Indexes
    scenes_by_name: HashMap<String, SceneId>,
    objects_by_name: HashMap<String, ObjectId>,
    characters_by_name: HashMap<String, CharacterId>,
    sounds_by_name: HashMap<String, SoundId>,

    player: Option<CharacterId>,
    pub(crate) observers: Vec<(ObserverId, Box<dyn MoveObserver>)>,
    pub(crate) next_observer: u64,
}

impl World {
    /// Create an empty world holding only the STORAGE scene.
    pub fn new(meta: WorldMeta) -> Self {
        let storage = Scene::new(STORAGE, 0, 0);
        let mut scenes_by_name = HashMap::new();
        scenes_by_name.insert(STORAGE.to_lowercase(), SceneId(0));
        Self {
            meta,
            scenes: vec![storage],
            objects: Vec::new(),
            characters: Vec::new(),
            sounds: Vec::new(),
            scenes_by_name,
            objects_by_name: HashMap::new(),
            characters_by_name: HashMap::new(),
            sounds_by_name: HashMap::new(),
            player: None,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register a scene. Its index counts only the visitable scenes.
    pub fn add_scene(&mut self, mut scene: Scene) -> WageResult<SceneId> {
        let key = scene.name.to_lowercase();
        if self.scenes_by_name.contains_key(&key) {
            return Err(WageError::DuplicateName {
                kind: "scene",
                name: scene.name,
            });
        }
        let id = SceneId(self.scenes.len());
        scene.index = Some(self.scenes.len() - 1);
        scene.objects.clear();
        scene.characters.clear();
        self.scenes_by_name.insert(key, id);
        self.scenes.push(scene);
        Ok(id)
    }

    /// Register an object. It is not placed anywhere until it is moved.
    pub fn add_object(&mut self, mut object: Object) -> WageResult<ObjectId> {
        let key = object.name.to_lowercase();
        if self.objects_by_name.contains_key(&key) {
            return Err(WageError::DuplicateName {
                kind: "object",
                name: object.name,
            });
        }
        let id = ObjectId(self.objects.len());
        object.index = id.0;
        object.location = None;
        self.objects_by_name.insert(key, id);
        self.objects.push(object);
        Ok(id)
    }

    /// Register a character. It is not placed anywhere until it is moved.
    pub fn add_character(&mut self, mut character: Character) -> WageResult<CharacterId> {
        let key = character.name.to_lowercase();
        if self.characters_by_name.contains_key(&key) {
            return Err(WageError::DuplicateName {
                kind: "character",
                name: character.name,
            });
        }
        let id = CharacterId(self.characters.len());
        character.index = id.0;
        character.current_scene = None;
        character.inventory.clear();
        character.armor = [None; 4];
        character.player_character = false;
        self.characters_by_name.insert(key, id);
        self.characters.push(character);
        Ok(id)
    }

    /// Register a sound.
    pub fn add_sound(&mut self, sound: Sound) -> WageResult<SoundId> {
        let key = sound.name.to_lowercase();
        if self.sounds_by_name.contains_key(&key) {
            return Err(WageError::DuplicateName {
                kind: "sound",
                name: sound.name,
            });
        }
        let id = SoundId(self.sounds.len());
        self.sounds_by_name.insert(key, id);
        self.sounds.push(sound);
        Ok(id)
    }

    /// Designate the player character.
    pub fn set_player(&mut self, id: CharacterId) {
        if let Some(previous) = self.player {
            self.characters[previous.0].player_character = false;
        }
        self.characters[id.0].player_character = true;
        self.player = Some(id);
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------
    //
    // Handles are only minted by this world, so indexing cannot go out of
    // bounds unless a handle from another world is passed in.

    /// The reserved off-map scene.
    pub fn storage(&self) -> SceneId {
        SceneId(0)
    }

    /// Whether a scene is STORAGE.
    pub fn is_storage(&self, id: SceneId) -> bool {
        id.0 == 0
    }

    /// The designated player character.
    pub fn player(&self) -> Option<CharacterId> {
        self.player
    }

    /// A scene by handle.
    pub fn scene(&self, id: SceneId) -> &Scene {
        &self.scenes[id.0]
    }

    /// An object by handle.
    pub fn object(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }

    /// A mutable object by handle. Location fields stay owned by the graph.
    pub fn object_mut(&mut self, id: ObjectId) -> &mut Object {
        &mut self.objects[id.0]
    }

    /// A character by handle.
    pub fn character(&self, id: CharacterId) -> &Character {
        &self.characters[id.0]
    }

    /// A mutable character by handle. Location fields stay owned by the graph.
    pub fn character_mut(&mut self, id: CharacterId) -> &mut Character {
        &mut self.characters[id.0]
    }

    /// A sound by handle.
    pub fn sound(&self, id: SoundId) -> &Sound {
        &self.sounds[id.0]
    }

    /// A scene by handle, `None` if the handle is not from this world.
    pub fn get_scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.get(id.0)
    }

    /// An object by handle, `None` if the handle is not from this world.
    pub fn get_object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0)
    }

    /// A character by handle, `None` if the handle is not from this world.
    pub fn get_character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.0)
    }

    /// Every scene handle in registration order, STORAGE first.
    pub fn scene_ids(&self) -> impl Iterator<Item = SceneId> + '_ {
        (0..self.scenes.len()).map(SceneId)
    }

    /// Visitable scenes in registration order (STORAGE excluded).
    pub fn ordered_scenes(&self) -> impl Iterator<Item = SceneId> + '_ {
        (1..self.scenes.len()).map(SceneId)
    }

    /// Every object handle in registration order.
    pub fn object_ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        (0..self.objects.len()).map(ObjectId)
    }

    /// Every character handle in registration order.
    pub fn character_ids(&self) -> impl Iterator<Item = CharacterId> + '_ {
        (0..self.characters.len()).map(CharacterId)
    }

    /// Number of scenes including STORAGE.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of characters.
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Number of sounds.
    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Find a scene by name (case-insensitive). `STORAGE@` resolves to STORAGE.
    pub fn scene_by_name(&self, name: &str) -> Option<SceneId> {
        self.scenes_by_name.get(&name.to_lowercase()).copied()
    }

    /// Find an object by name (case-insensitive).
    pub fn object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects_by_name.get(&name.to_lowercase()).copied()
    }

    /// Find a character by name (case-insensitive).
    pub fn character_by_name(&self, name: &str) -> Option<CharacterId> {
        self.characters_by_name.get(&name.to_lowercase()).copied()
    }

    /// Find a sound by name (case-insensitive).
    pub fn sound_by_name(&self, name: &str) -> Option<&Sound> {
        self.sounds_by_name
            .get(&name.to_lowercase())
            .map(|id| &self.sounds[id.0])
    }

    /// Find a scene by resource identifier.
    pub fn scene_by_resource_id(&self, resource_id: u16) -> Option<SceneId> {
        self.scene_ids()
            .find(|id| self.scene(*id).resource_id == resource_id)
    }

    /// Find an object by resource identifier.
    pub fn object_by_resource_id(&self, resource_id: u16) -> Option<ObjectId> {
        self.object_ids()
            .find(|id| self.object(*id).resource_id == resource_id)
    }

    /// Find a character by resource identifier.
    pub fn character_by_resource_id(&self, resource_id: u16) -> Option<CharacterId> {
        self.character_ids()
            .find(|id| self.character(*id).resource_id == resource_id)
    }

    /// The visitable scene at a grid position.
    pub fn scene_at(&self, x: i32, y: i32) -> Option<SceneId> {
        self.ordered_scenes().find(|id| {
            let scene = self.scene(*id);
            scene.x == x && scene.y == y
        })
    }

    // -----------------------------------------------------------------------
    // Weapons
    // -----------------------------------------------------------------------

    /// Everything a character can attack with: natural weapons first, then
    /// weapon-capable inventory objects in inventory order.
    pub fn weapons(&self, id: CharacterId) -> Vec<Weapon> {
        let character = self.character(id);
        let natural = (0..character.natural_weapons.len())
            .map(|slot| Weapon::Natural { owner: id, slot });
        let carried = character
            .inventory
            .iter()
            .filter(|obj| self.object(**obj).kind.is_weapon())
            .map(|obj| Weapon::Object(*obj));
        natural.chain(carried).collect()
    }

    /// Narration data for a weapon.
    pub fn weapon_info(&self, weapon: Weapon) -> WeaponInfo<'_> {
        match weapon {
            Weapon::Natural { owner, slot } => {
                let natural = &self.character(owner).natural_weapons[slot];
                WeaponInfo {
                    name: &natural.name,
                    verb: &natural.verb,
                    sound: natural.sound.as_deref(),
                    damage: natural.damage,
                }
            }
            Weapon::Object(id) => {
                let object = self.object(id);
                WeaponInfo {
                    name: &object.name,
                    verb: &object.verb,
                    sound: object.sound.as_deref(),
                    damage: object.damage,
                }
            }
        }
    }
}
