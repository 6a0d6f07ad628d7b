//! Core types for WAGE: scenes, characters, objects, and the world model.
//!
//! The [`World`] owns every entity in index-addressed arenas. Entities refer
//! to each other only through the typed handles in [`entity`], and the
//! location graph in [`location`] is the single mutation path for "who
//! contains what". A world can be built programmatically or loaded from a
//! JSON [`definition`].

/// Character data: base stats, natural weapons, armor slots.
pub mod character;
/// Per-character run-time stat block.
pub mod context;
/// Serde world definitions used to construct a [`World`].
pub mod definition;
/// Typed entity handles and move-event payloads.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Move operations and move observers.
pub mod location;
/// Objects: items, weapons and armor.
pub mod object;
/// Scenes and directions.
pub mod scene;
/// Named sound resources.
pub mod sound;
/// The aggregate root that owns every entity.
pub mod world;

/// Re-export character types.
pub use character::{ArmorSlot, Character, Gender, NaturalWeapon, Weapon, WeaponInfo};
/// Re-export context types.
pub use context::{BaseStats, Context, Stat, StatValue};
/// Re-export definition types.
pub use definition::WorldDefinition;
/// Re-export handle types.
pub use entity::{CharacterId, Container, Movable, ObjectId, SceneId, SoundId};
/// Re-export error types.
pub use error::{WageError, WageResult};
/// Re-export location types.
pub use location::{MoveEvent, MoveObserver, ObserverId};
/// Re-export object types.
pub use object::{Object, ObjectKind};
/// Re-export scene types.
pub use scene::{Direction, Scene};
/// Re-export sound types.
pub use sound::Sound;
/// Re-export world model types.
pub use world::{RANDOM_SCENE, STORAGE, World, WorldMeta};
