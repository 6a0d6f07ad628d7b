use serde::{Deserialize, Serialize};

use crate::entity::{CharacterId, ObjectId};

/// A compass direction between adjacent scenes on the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards smaller y.
    North,
    /// Towards larger y.
    South,
    /// Towards larger x.
    East,
    /// Towards smaller x.
    West,
}

impl Direction {
    /// Every direction.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Parse a direction or its one-letter abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Grid offset `(dx, dy)` of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

/// A location node. Holds objects and characters and is bound to a script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Unique (case-insensitive) name.
    pub name: String,
    /// World grid x coordinate.
    pub x: i32,
    /// World grid y coordinate.
    pub y: i32,
    /// Text shown when the player looks around.
    pub description: String,
    /// Opaque script source, handed to the script host.
    pub script: Option<String>,
    /// Directions the player cannot leave by.
    pub blocked: Vec<Direction>,
    /// Resource identifier from the loaded world file.
    pub resource_id: u16,

    #[serde(skip)]
    pub(crate) index: Option<usize>,
    #[serde(skip)]
    pub(crate) objects: Vec<ObjectId>,
    #[serde(skip)]
    pub(crate) characters: Vec<CharacterId>,
}

impl Scene {
    /// Create a scene at a grid position.
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            ..Self::default()
        }
    }

    /// Set the description text.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Position among the visitable scenes; `None` for STORAGE.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Objects present, immobile first, then by registration index.
    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }

    /// Characters present, by registration index.
    pub fn characters(&self) -> &[CharacterId] {
        &self.characters
    }

    /// Whether the player cannot leave in a direction.
    pub fn is_blocked(&self, direction: Direction) -> bool {
        self.blocked.contains(&direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parse_and_name() {
        assert_eq!(Direction::parse("N"), Some(Direction::North));
        assert_eq!(Direction::parse("west"), Some(Direction::West));
        assert_eq!(Direction::parse("up"), None);
        for dir in Direction::ALL {
            assert_eq!(Direction::parse(dir.name()), Some(dir));
        }
    }

    #[test]
    fn offsets_are_opposite() {
        let (nx, ny) = Direction::North.offset();
        let (sx, sy) = Direction::South.offset();
        assert_eq!((nx + sx, ny + sy), (0, 0));
    }

    #[test]
    fn blocked_directions() {
        let mut scene = Scene::new("Cellar", 0, 0);
        scene.blocked.push(Direction::East);
        assert!(scene.is_blocked(Direction::East));
        assert!(!scene.is_blocked(Direction::West));
    }
}
