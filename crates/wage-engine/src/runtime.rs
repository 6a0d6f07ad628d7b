use tracing::{debug, warn};
use wage_core::{
    CharacterId, Container, Movable, MoveEvent, ObjectId, RANDOM_SCENE, STORAGE, SceneId, Stat,
    World,
};

use crate::config::EngineConfig;
use crate::io::{MenuCallbacks, OutputSink, SoundPlayer};
use crate::narration;
use crate::random::RandomSource;
use crate::state::TurnState;

/// Everything a turn mutates, apart from the script host.
///
/// Kept separate from the host so the host can be called with a
/// [`TurnContext`](crate::script::TurnContext) borrowing this mutably.
pub(crate) struct Runtime {
    pub(crate) world: World,
    pub(crate) player: CharacterId,
    pub(crate) state: TurnState,
    pub(crate) config: EngineConfig,
    pub(crate) rng: Box<dyn RandomSource>,
    pub(crate) output: Box<dyn OutputSink>,
    pub(crate) sounds: Box<dyn SoundPlayer>,
    pub(crate) menu: Box<dyn MenuCallbacks>,
    pub(crate) had_output: bool,
}

impl Runtime {
    // -----------------------------------------------------------------------
    // Callbacks
    // -----------------------------------------------------------------------

    /// Write one narration line. Empty text is dropped.
    pub(crate) fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.had_output = true;
        self.output.write(text);
        self.output.write("\n");
    }

    /// Play a sound by name; unknown or absent names are ignored.
    pub(crate) fn play_sound(&mut self, name: Option<&str>) {
        let Some(name) = name else { return };
        match self.world.sound_by_name(name) {
            Some(sound) => self.sounds.play(sound),
            None => debug!(sound = name, "sound not found"),
        }
    }

    pub(crate) fn set_menu(&mut self, format: &str) {
        self.menu.set_commands_menu(format);
    }

    // -----------------------------------------------------------------------
    // Moves
    // -----------------------------------------------------------------------

    pub(crate) fn move_object_to_scene(&mut self, object: ObjectId, scene: SceneId) -> MoveEvent {
        let event = self.world.move_object_to_scene(object, scene);
        self.on_move(&event);
        event
    }

    pub(crate) fn move_object_to_character(
        &mut self,
        object: ObjectId,
        character: CharacterId,
    ) -> MoveEvent {
        let event = self.world.move_object_to_character(object, character);
        self.on_move(&event);
        event
    }

    pub(crate) fn move_character(
        &mut self,
        character: CharacterId,
        scene: SceneId,
    ) -> Option<MoveEvent> {
        let event = self.world.move_character(character, scene)?;
        self.on_move(&event);
        Some(event)
    }

    /// A non-player character arriving in the player's scene is an encounter.
    fn on_move(&mut self, event: &MoveEvent) {
        let Movable::Character(mover) = event.what else {
            return;
        };
        if mover == self.player {
            return;
        }
        let Some(here) = self.player_scene() else {
            return;
        };
        if event.to == Container::Scene(here) {
            self.encounter(mover);
        }
    }

    /// The player's scene, or `None` while the player is off the map.
    pub(crate) fn player_scene(&self) -> Option<SceneId> {
        self.world
            .character(self.player)
            .current_scene()
            .filter(|scene| !self.world.is_storage(*scene))
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Send everything to STORAGE, then to its declared home.
    pub(crate) fn initial_setup(&mut self) {
        debug!("initial placement");
        let storage = self.world.storage();
        let objects: Vec<ObjectId> = self.world.object_ids().collect();
        let characters: Vec<CharacterId> = self.world.character_ids().collect();

        for object in &objects {
            self.move_object_to_scene(*object, storage);
        }
        for character in &characters {
            self.move_character(*character, storage);
        }

        for object in objects {
            let home = self.world.object(object).home.clone();
            if home.eq_ignore_ascii_case(STORAGE) {
                continue;
            }
            if let Some(scene) = self.resolve_scene(&home) {
                self.move_object_to_scene(object, scene);
            } else if let Some(owner) = self.world.character_by_name(&home) {
                self.move_object_to_character(object, owner);
            } else {
                warn!(
                    object = %self.world.object(object).name,
                    home = %home,
                    "unresolved object placement"
                );
            }
        }

        for character in characters {
            let initial = self.world.character(character).initial_scene.clone();
            if initial.eq_ignore_ascii_case(STORAGE) {
                continue;
            }
            match self.resolve_scene(&initial) {
                Some(scene) => {
                    self.move_character(character, scene);
                }
                None => warn!(
                    character = %self.world.character(character).name,
                    scene = %initial,
                    "unresolved character placement"
                ),
            }
        }
    }

    /// Resolve a placement name; `random@` picks any scene, STORAGE included.
    fn resolve_scene(&mut self, name: &str) -> Option<SceneId> {
        if name.eq_ignore_ascii_case(RANDOM_SCENE) {
            let scenes: Vec<SceneId> = self.world.scene_ids().collect();
            let pick = self.rng.pick(scenes.len());
            return scenes.get(pick).copied();
        }
        self.world.scene_by_name(name)
    }

    // -----------------------------------------------------------------------
    // Encounters
    // -----------------------------------------------------------------------

    /// Announce a non-player character and let it strike first.
    pub(crate) fn encounter(&mut self, character: CharacterId) {
        debug!(character = %character, "encounter");
        let chr = self.world.character(character);
        let line = narration::encounter_line(chr);
        let comment = chr.initial_comment.clone();
        self.append_text(&line);
        if let Some(comment) = comment {
            self.append_text(&comment);
        }
        self.react(character, self.player);
    }

    /// `npc` attacks `target` with a uniformly chosen weapon.
    pub(crate) fn react(&mut self, npc: CharacterId, target: CharacterId) {
        let weapons = self.world.weapons(npc);
        if weapons.is_empty() {
            warn!(
                character = %self.world.character(npc).name,
                "no weapon to react with"
            );
            return;
        }
        let weapon = weapons[self.rng.pick(weapons.len())];
        self.attack(npc, target, weapon);
    }

    // -----------------------------------------------------------------------
    // Regeneration
    // -----------------------------------------------------------------------

    /// Recover a random fraction of the player's missing physical hit points.
    pub(crate) fn regen(&mut self) {
        let context = self.world.character(self.player).context();
        let deficit = context
            .base(Stat::PhysicalHp)
            .saturating_sub(context.current(Stat::PhysicalHp));
        if deficit <= 0 {
            return;
        }
        let bonus = regen_bonus(deficit, self.rng.unit());
        debug!(deficit, bonus, "regenerate");
        self.world
            .character_mut(self.player)
            .context_mut()
            .adjust(Stat::PhysicalHp, bonus);
    }

    /// Reply to input nothing understood.
    pub(crate) fn confused(&mut self) {
        let replies = &self.config.confusion_replies;
        if replies.is_empty() {
            return;
        }
        let reply = replies[self.rng.pick(replies.len())].clone();
        self.append_text(&reply);
    }
}

/// `floor(deficit / (8 + 2u))` for a unit roll `u`.
pub(crate) fn regen_bonus(deficit: i32, roll: f64) -> i32 {
    (f64::from(deficit) / (8.0 + 2.0 * roll)) as i32
}
