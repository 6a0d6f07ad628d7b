use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to a scene. Position in the world's scene arena; STORAGE is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SceneId(pub(crate) usize);

/// Handle to an object. Equal to the object's registration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub(crate) usize);

/// Handle to a character. Equal to the character's registration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub(crate) usize);

/// Handle to a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SoundId(pub(crate) usize);

impl SceneId {
    /// Position in the world's scene arena (STORAGE is 0).
    pub fn arena_index(self) -> usize {
        self.0
    }
}

impl ObjectId {
    /// Registration index of the object.
    pub fn index(self) -> usize {
        self.0
    }
}

impl CharacterId {
    /// Registration index of the character.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene#{}", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj#{}", self.0)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chr#{}", self.0)
    }
}

/// Something that can hold objects: a scene floor or a character's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Container {
    /// The object list of a scene.
    Scene(SceneId),
    /// The inventory of a character.
    Character(CharacterId),
}

impl Container {
    /// The scene, if this container is one.
    pub fn scene(self) -> Option<SceneId> {
        match self {
            Self::Scene(id) => Some(id),
            Self::Character(_) => None,
        }
    }

    /// The character, if this container is an inventory.
    pub fn character(self) -> Option<CharacterId> {
        match self {
            Self::Character(id) => Some(id),
            Self::Scene(_) => None,
        }
    }
}

/// The entity a move event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movable {
    /// An object changed container.
    Object(ObjectId),
    /// A character changed scene.
    Character(CharacterId),
}

impl Movable {
    /// The character, if a character moved.
    pub fn character(self) -> Option<CharacterId> {
        match self {
            Self::Character(id) => Some(id),
            Self::Object(_) => None,
        }
    }

    /// The object, if an object moved.
    pub fn object(self) -> Option<ObjectId> {
        match self {
            Self::Object(id) => Some(id),
            Self::Character(_) => None,
        }
    }
}
