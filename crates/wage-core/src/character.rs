use serde::{Deserialize, Serialize};

use crate::context::{BaseStats, Context};
use crate::entity::{CharacterId, ObjectId, SceneId};
use crate::world::STORAGE;

/// Grammatical gender, used when narrating a character's weapon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// "his".
    He,
    /// "her".
    She,
    /// "its".
    #[default]
    It,
}

impl Gender {
    /// The possessive pronoun for this gender.
    pub fn possessive(self) -> &'static str {
        match self {
            Self::He => "his",
            Self::She => "her",
            Self::It => "its",
        }
    }
}

/// A weapon a character fights with bare: claws, fists, a breath attack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaturalWeapon {
    /// Weapon name ("claws").
    pub name: String,
    /// Operative verb ("rake").
    pub verb: String,
    /// Sound cue played on use.
    pub sound: Option<String>,
    /// Hit points removed from the victim on a hit.
    pub damage: i32,
}

/// Something a character can attack with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weapon {
    /// One of the owner's natural weapons.
    Natural {
        /// The character the weapon belongs to.
        owner: CharacterId,
        /// Position in the owner's natural weapon list.
        slot: usize,
    },
    /// A weapon-capable object from an inventory.
    Object(ObjectId),
}

/// Borrowed narration data of a [`Weapon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponInfo<'a> {
    /// Weapon name.
    pub name: &'a str,
    /// Operative verb.
    pub verb: &'a str,
    /// Sound cue.
    pub sound: Option<&'a str>,
    /// Damage on a hit.
    pub damage: i32,
}

/// A worn-armor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorSlot {
    /// Helmets.
    Head,
    /// Shields.
    Shield,
    /// Chest armor.
    Chest,
    /// Spiritual armor.
    Magic,
}

impl ArmorSlot {
    /// Every slot in storage order.
    pub const ALL: [ArmorSlot; 4] = [Self::Head, Self::Shield, Self::Chest, Self::Magic];

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

/// An actor in the world. Exactly one character is the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    /// Unique (case-insensitive) name.
    pub name: String,
    /// Grammatical gender.
    pub gender: Gender,
    /// Proper nouns are narrated without an article ("Gandalf" vs "the Orc").
    pub proper_noun: bool,
    /// Declared stats.
    pub stats: BaseStats,
    /// Name of the scene the character starts in.
    pub initial_scene: String,
    /// Said when the player encounters the character.
    pub initial_comment: Option<String>,
    /// Said when the character takes a hit.
    pub receives_hit_comment: Option<String>,
    /// Played when the character lands a hit.
    pub scores_hit_sound: Option<String>,
    /// Played when the character takes a hit.
    pub receives_hit_sound: Option<String>,
    /// Built-in weapons, in declaration order.
    pub natural_weapons: Vec<NaturalWeapon>,
    /// Resource identifier from the loaded world file.
    pub resource_id: u16,

    #[serde(skip)]
    pub(crate) player_character: bool,
    #[serde(skip)]
    pub(crate) index: usize,
    #[serde(skip)]
    pub(crate) current_scene: Option<SceneId>,
    #[serde(skip)]
    pub(crate) inventory: Vec<ObjectId>,
    #[serde(skip)]
    pub(crate) armor: [Option<ObjectId>; 4],
    #[serde(skip)]
    pub(crate) context: Context,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            name: String::new(),
            gender: Gender::default(),
            proper_noun: false,
            stats: BaseStats::default(),
            initial_scene: STORAGE.to_string(),
            initial_comment: None,
            receives_hit_comment: None,
            scores_hit_sound: None,
            receives_hit_sound: None,
            natural_weapons: Vec::new(),
            resource_id: 0,
            player_character: false,
            index: 0,
            current_scene: None,
            inventory: Vec::new(),
            armor: [None; 4],
            context: Context::default(),
        }
    }
}

impl Character {
    /// Create a character that starts in STORAGE.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the starting scene by name.
    pub fn starting_in(mut self, scene: impl Into<String>) -> Self {
        self.initial_scene = scene.into();
        self
    }

    /// Set the declared stats.
    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    /// Add a natural weapon.
    pub fn with_weapon(mut self, weapon: NaturalWeapon) -> Self {
        self.natural_weapons.push(weapon);
        self
    }

    /// Registration index, used for ordering.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this character is the player.
    pub fn is_player(&self) -> bool {
        self.player_character
    }

    /// The scene the character is in, `None` before initial placement.
    pub fn current_scene(&self) -> Option<SceneId> {
        self.current_scene
    }

    /// Carried objects, sorted immobile-first then by registration index.
    pub fn inventory(&self) -> &[ObjectId] {
        &self.inventory
    }

    /// The object worn in a slot, if any.
    pub fn armor(&self, slot: ArmorSlot) -> Option<ObjectId> {
        self.armor[slot.slot()]
    }

    /// Run-time stats.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Mutable run-time stats.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }
}
