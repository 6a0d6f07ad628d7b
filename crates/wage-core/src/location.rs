//! The location graph: the only mutation path for "who contains what".
//!
//! Every object lives in exactly one container (a scene floor or a character's
//! inventory) once it has been placed, and every character in exactly one
//! scene. The `move_*` methods remove the entity from its previous container,
//! insert it into the new one, restore the container sort order and then
//! notify observers, so observers always see the finished move.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::character::ArmorSlot;
use crate::entity::{CharacterId, Container, Movable, ObjectId, SceneId};
use crate::world::World;

/// A completed relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvent {
    /// What moved.
    pub what: Movable,
    /// Where it was, `None` if it had never been placed.
    pub from: Option<Container>,
    /// Where it is now.
    pub to: Container,
}

/// Receives every move after it has been applied.
///
/// Observers run synchronously in registration order and only get read
/// access; anything that wants to react with further moves uses the
/// [`MoveEvent`] returned by the `move_*` call instead.
pub trait MoveObserver: std::fmt::Debug {
    /// Called once per applied move.
    fn on_move(&mut self, world: &World, event: &MoveEvent);
}

/// Handle returned by [`World::add_move_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl World {
    // -----------------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------------

    /// Register a move observer.
    pub fn add_move_observer(&mut self, observer: Box<dyn MoveObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Unregister a move observer, returning it if it was registered.
    pub fn remove_move_observer(&mut self, id: ObserverId) -> Option<Box<dyn MoveObserver>> {
        let pos = self.observers.iter().position(|(oid, _)| *oid == id)?;
        Some(self.observers.remove(pos).1)
    }

    fn notify(&mut self, event: MoveEvent) -> MoveEvent {
        debug!(what = ?event.what, from = ?event.from, to = ?event.to, "move");
        let mut observers = std::mem::take(&mut self.observers);
        for (_, observer) in observers.iter_mut() {
            observer.on_move(self, &event);
        }
        self.observers = observers;
        event
    }

    // -----------------------------------------------------------------------
    // Moves
    // -----------------------------------------------------------------------

    /// Put an object on a scene floor.
    pub fn move_object_to_scene(&mut self, object: ObjectId, scene: SceneId) -> MoveEvent {
        let from = self.detach_object(object);
        self.objects[object.0].location = Some(Container::Scene(scene));
        self.scenes[scene.0].objects.push(object);
        let objects = &self.objects;
        self.scenes[scene.0]
            .objects
            .sort_by_key(|id| objects[id.0].sort_key());
        self.notify(MoveEvent {
            what: Movable::Object(object),
            from,
            to: Container::Scene(scene),
        })
    }

    /// Put an object in a character's inventory.
    pub fn move_object_to_character(
        &mut self,
        object: ObjectId,
        character: CharacterId,
    ) -> MoveEvent {
        let from = self.detach_object(object);
        self.objects[object.0].location = Some(Container::Character(character));
        self.characters[character.0].inventory.push(object);
        let objects = &self.objects;
        self.characters[character.0]
            .inventory
            .sort_by_key(|id| objects[id.0].sort_key());
        self.notify(MoveEvent {
            what: Movable::Object(object),
            from,
            to: Container::Character(character),
        })
    }

    /// Put an object into any container.
    pub fn move_object(&mut self, object: ObjectId, to: Container) -> MoveEvent {
        match to {
            Container::Scene(scene) => self.move_object_to_scene(object, scene),
            Container::Character(character) => self.move_object_to_character(object, character),
        }
    }

    /// Move a character to a scene.
    ///
    /// Returns `None` without notifying anyone if the character is already
    /// there. Leaving STORAGE re-derives the character's context from its
    /// base stats; any other scene change only counts a visit.
    pub fn move_character(&mut self, character: CharacterId, scene: SceneId) -> Option<MoveEvent> {
        let from = self.characters[character.0].current_scene;
        if from == Some(scene) {
            return None;
        }
        if let Some(previous) = from {
            self.scenes[previous.0]
                .characters
                .retain(|id| *id != character);
        }

        let left_storage = from.is_some_and(|previous| self.is_storage(previous));
        let chr = &mut self.characters[character.0];
        chr.current_scene = Some(scene);
        if left_storage {
            let base = chr.stats;
            chr.context.initialize(&base);
        } else if from.is_some() {
            chr.context.record_visit();
        }

        let present = &mut self.scenes[scene.0].characters;
        present.push(character);
        present.sort();

        Some(self.notify(MoveEvent {
            what: Movable::Character(character),
            from: from.map(Container::Scene),
            to: Container::Scene(scene),
        }))
    }

    /// Wear an inventory object in its armor slot, replacing whatever was
    /// there. Returns the slot, or `None` if the object is not armor carried
    /// by the character.
    pub fn wear(&mut self, character: CharacterId, object: ObjectId) -> Option<ArmorSlot> {
        let slot = self.objects[object.0].kind.armor_slot()?;
        if self.objects[object.0].location != Some(Container::Character(character)) {
            return None;
        }
        self.characters[character.0].armor[slot.slot()] = Some(object);
        Some(slot)
    }

    /// Take an object out of wherever it is, clearing armor slots that
    /// reference it. Returns the vacated container.
    fn detach_object(&mut self, object: ObjectId) -> Option<Container> {
        let from = self.objects[object.0].location.take();
        match from {
            Some(Container::Scene(scene)) => {
                self.scenes[scene.0].objects.retain(|id| *id != object);
            }
            Some(Container::Character(owner)) => {
                let chr = &mut self.characters[owner.0];
                chr.inventory.retain(|id| *id != object);
                for slot in chr.armor.iter_mut() {
                    if *slot == Some(object) {
                        *slot = None;
                    }
                }
            }
            None => {}
        }
        from
    }

    // -----------------------------------------------------------------------
    // Derived lookups
    // -----------------------------------------------------------------------

    /// The scene an object is ultimately in, following its owner if carried.
    pub fn scene_of_object(&self, object: ObjectId) -> Option<SceneId> {
        match self.objects[object.0].location? {
            Container::Scene(scene) => Some(scene),
            Container::Character(owner) => self.characters[owner.0].current_scene,
        }
    }

    /// The player's current scene.
    pub fn player_scene(&self) -> Option<SceneId> {
        self.player()
            .and_then(|id| self.characters[id.0].current_scene)
    }
}
