pub mod check;
pub mod info;
pub mod play;

use std::path::Path;

use tracing::debug;
use wage_core::World;
use wage_engine::{Engine, EngineConfig, StandardScripts};

/// Read and build a world definition file.
fn load_world(path: &Path) -> Result<World, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
    let world = World::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    debug!(
        path = %path.display(),
        scenes = world.scene_count(),
        objects = world.object_count(),
        characters = world.character_count(),
        "world loaded"
    );
    Ok(world)
}

/// Load a world and wrap it in an engine driven by the built-in commands.
fn load_engine(path: &Path, seed: u64) -> Result<Engine, String> {
    let world = load_world(path)?;
    let config = EngineConfig::default().with_seed(seed);
    Engine::new(world, StandardScripts, config).map_err(|e| e.to_string())
}
