use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use wage_core::{SceneId, World};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::io::{MenuCallbacks, NoMenu, OutputSink, SilentSound, SoundPlayer, TextBuffer};
use crate::random::RandomSource;
use crate::runtime::Runtime;
use crate::script::{ClickInput, ScriptHost, TurnContext};
use crate::state::TurnState;

/// Drives a world one player action at a time.
///
/// Owns the world, the script host and the presentation collaborators. The
/// defaults write narration to a [`TextBuffer`], play no sounds, ignore menu
/// updates and draw from a [`StdRng`] seeded from the config.
pub struct Engine {
    scripts: Box<dyn ScriptHost>,
    rt: Runtime,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("world", &self.rt.world.meta.name)
            .field("state", &self.rt.state)
            .field("config", &self.rt.config)
            .finish()
    }
}

impl Engine {
    /// Create an engine for a world with a designated player.
    pub fn new(
        world: World,
        scripts: impl ScriptHost + 'static,
        config: EngineConfig,
    ) -> EngineResult<Self> {
        let player = world.player().ok_or(EngineError::NoPlayer)?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            scripts: Box::new(scripts),
            rt: Runtime {
                world,
                player,
                state: TurnState::default(),
                config,
                rng: Box::new(rng),
                output: Box::new(TextBuffer::new()),
                sounds: Box::new(SilentSound),
                menu: Box::new(NoMenu),
                had_output: false,
            },
        })
    }

    /// Replace the narration sink.
    pub fn with_output(mut self, output: impl OutputSink + 'static) -> Self {
        self.rt.output = Box::new(output);
        self
    }

    /// Replace the sound player.
    pub fn with_sound_player(mut self, sounds: impl SoundPlayer + 'static) -> Self {
        self.rt.sounds = Box::new(sounds);
        self
    }

    /// Replace the command-menu callback.
    pub fn with_menu(mut self, menu: impl MenuCallbacks + 'static) -> Self {
        self.rt.menu = Box::new(menu);
        self
    }

    /// Replace the random source.
    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rt.rng = Box::new(rng);
        self
    }

    /// Swap in a different script host, returning the previous one.
    pub fn replace_scripts(&mut self, scripts: impl ScriptHost + 'static) -> Box<dyn ScriptHost> {
        std::mem::replace(&mut self.scripts, Box::new(scripts))
    }

    /// Process one turn of player input.
    ///
    /// The first call places every entity. While the player is in STORAGE the
    /// call returns without output and without advancing the turn counter.
    pub fn process_turn(&mut self, text: Option<&str>, click: Option<ClickInput>) {
        debug!(turn = self.rt.state.turn, text, "turn start");
        if self.rt.state.is_first_turn() {
            self.rt.initial_setup();
        }

        let Some(scene) = self.rt.player_scene() else {
            debug!("player off the map, turn skipped");
            return;
        };
        if Some(scene) != self.rt.state.last_scene {
            self.rt.state.loop_count = 0;
        }
        self.rt.had_output = false;
        let handled = self.run_script(scene, text, click);

        let Some(scene) = self.rt.player_scene() else {
            debug!("player left the map");
            return;
        };
        if Some(scene) != self.rt.state.last_scene {
            debug!(scene = %scene, "scene change");
            self.rt.regen();
            self.rt.state.last_scene = Some(scene);
            if self.rt.state.is_first_turn() {
                self.rt.output.write("\n");
            } else {
                self.rt.state.loop_count = 0;
                // A "look" that moves the player again is not re-checked.
                self.run_script(scene, Some("look"), None);
                let present = self.rt.world.scene(scene).characters();
                if let [a, b] = *present {
                    let other = if a == self.rt.player { b } else { a };
                    self.rt.encounter(other);
                }
            }
        } else if !self.rt.had_output && text.is_some_and(|t| !t.is_empty()) && !handled {
            self.rt.confused();
        }

        self.rt.state.turn += 1;
        debug!(turn = self.rt.state.turn, handled, "turn end");
    }

    fn run_script(
        &mut self,
        scene: SceneId,
        text: Option<&str>,
        click: Option<ClickInput>,
    ) -> bool {
        let loop_count = self.rt.state.next_loop();
        let mut ctx = TurnContext { rt: &mut self.rt };
        self.scripts.execute(scene, loop_count, text, click, &mut ctx)
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.rt.world
    }

    /// Mutable access to the world, for setup between turns.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.rt.world
    }

    /// Extract the world, consuming the engine.
    pub fn into_world(self) -> World {
        self.rt.world
    }

    /// The engine's memory between turns.
    pub fn turn_state(&self) -> TurnState {
        self.rt.state
    }

    /// Restore previously saved turn memory.
    pub fn set_turn_state(&mut self, state: TurnState) {
        self.rt.state = state;
    }

    /// The configuration the engine was created with.
    pub fn config(&self) -> &EngineConfig {
        &self.rt.config
    }

    /// The player's scene, `None` while off the map.
    pub fn player_scene(&self) -> Option<SceneId> {
        self.rt.player_scene()
    }
}
