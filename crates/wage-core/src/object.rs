use serde::{Deserialize, Serialize};

use crate::character::ArmorSlot;
use crate::entity::Container;
use crate::world::STORAGE;

/// What an object is, which decides how it sorts, whether it can be carried,
/// and whether it can be fought with or worn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// A melee weapon.
    RegularWeapon,
    /// A thrown weapon.
    ThrowWeapon,
    /// A wand, scroll or other magical weapon.
    MagicalObject,
    /// Worn in the head slot.
    Helmet,
    /// Worn in the shield slot.
    Shield,
    /// Worn in the chest slot.
    ChestArmor,
    /// Worn in the magic slot.
    SpiritualArmor,
    /// An ordinary carriable item.
    #[default]
    Movable,
    /// Scenery: cannot be picked up and sorts first.
    Immobile,
}

impl ObjectKind {
    /// Whether an object of this kind can be attacked with.
    pub fn is_weapon(self) -> bool {
        matches!(
            self,
            Self::RegularWeapon | Self::ThrowWeapon | Self::MagicalObject
        )
    }

    /// Whether an object of this kind is fixed scenery.
    pub fn is_immobile(self) -> bool {
        self == Self::Immobile
    }

    /// The slot an object of this kind is worn in, if it is armor.
    pub fn armor_slot(self) -> Option<ArmorSlot> {
        match self {
            Self::Helmet => Some(ArmorSlot::Head),
            Self::Shield => Some(ArmorSlot::Shield),
            Self::ChestArmor => Some(ArmorSlot::Chest),
            Self::SpiritualArmor => Some(ArmorSlot::Magic),
            _ => None,
        }
    }
}

/// An item in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Object {
    /// Unique (case-insensitive) name.
    pub name: String,
    /// What the object is.
    pub kind: ObjectKind,
    /// Remaining uses; `None` means unlimited.
    pub uses: Option<i32>,
    /// Verb narrated when the object is used as a weapon ("slash").
    pub verb: String,
    /// Sound cue played when the object is used as a weapon.
    pub sound: Option<String>,
    /// Hit points removed from the victim on a hit.
    pub damage: i32,
    /// Text shown when the object is examined.
    pub description: String,
    /// Declared home: a scene name, a character name, STORAGE or `random@`.
    pub home: String,
    /// Resource identifier from the loaded world file.
    pub resource_id: u16,

    #[serde(skip)]
    pub(crate) index: usize,
    #[serde(skip)]
    pub(crate) location: Option<Container>,
}

impl Default for Object {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ObjectKind::default(),
            uses: None,
            verb: String::new(),
            sound: None,
            damage: 0,
            description: String::new(),
            home: STORAGE.to_string(),
            resource_id: 0,
            index: 0,
            location: None,
        }
    }
}

impl Object {
    /// Create an object of the given kind that starts in STORAGE.
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    /// Set the declared home (scene or owner name).
    pub fn homed_at(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }

    /// Make the object a weapon with the given verb and damage.
    pub fn wielded(mut self, verb: impl Into<String>, damage: i32) -> Self {
        self.verb = verb.into();
        self.damage = damage;
        self
    }

    /// Limit the number of uses.
    pub fn with_uses(mut self, uses: i32) -> Self {
        self.uses = Some(uses);
        self
    }

    /// Registration index, used for ordering.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Where the object is, `None` before initial placement.
    pub fn location(&self) -> Option<Container> {
        self.location
    }

    /// Sort key for scene and inventory lists: immobile first, then by index.
    pub(crate) fn sort_key(&self) -> (bool, usize) {
        (!self.kind.is_immobile(), self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_kinds() {
        assert!(ObjectKind::RegularWeapon.is_weapon());
        assert!(ObjectKind::ThrowWeapon.is_weapon());
        assert!(ObjectKind::MagicalObject.is_weapon());
        assert!(!ObjectKind::Helmet.is_weapon());
        assert!(!ObjectKind::Immobile.is_weapon());
    }

    #[test]
    fn armor_slots() {
        assert_eq!(ObjectKind::Helmet.armor_slot(), Some(ArmorSlot::Head));
        assert_eq!(ObjectKind::SpiritualArmor.armor_slot(), Some(ArmorSlot::Magic));
        assert_eq!(ObjectKind::Movable.armor_slot(), None);
    }

    #[test]
    fn immobile_sorts_before_movable() {
        let mut statue = Object::new("statue", ObjectKind::Immobile);
        statue.index = 5;
        let mut coin = Object::new("coin", ObjectKind::Movable);
        coin.index = 1;
        assert!(statue.sort_key() < coin.sort_key());
    }

    #[test]
    fn deserialized_object_defaults_to_storage() {
        let obj: Object = serde_json::from_str(r#"{"name": "sword", "kind": "regular_weapon"}"#).unwrap();
        assert_eq!(obj.home, STORAGE);
        assert_eq!(obj.uses, None);
        assert!(obj.location().is_none());
    }
}
