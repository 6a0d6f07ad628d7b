use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use wage_core::{Container, Stat, World};
use wage_engine::TextBuffer;

pub fn run(path: &Path, seed: u64) -> Result<(), String> {
    // Run the first turn silently so every entity sits at its starting place.
    let mut engine = super::load_engine(path, seed)?.with_output(TextBuffer::new());
    engine.process_turn(None, None);
    let world = engine.world();

    println!("  {}", world.meta.name.bold());
    if !world.meta.about.is_empty() {
        println!("  {}", world.meta.about.dimmed());
    }
    println!();

    println!("{}", scene_table(world));
    println!("{}", character_table(world));
    println!("{}", object_table(world));
    println!();
    println!(
        "  {} scenes, {} characters, {} objects",
        world.ordered_scenes().count(),
        world.character_count(),
        world.object_count()
    );

    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn scene_table(world: &World) -> Table {
    let mut table = new_table(vec!["Scene", "Position", "Objects", "Characters"]);
    for id in world.ordered_scenes() {
        let scene = world.scene(id);
        let objects: Vec<&str> = scene
            .objects()
            .iter()
            .map(|o| world.object(*o).name.as_str())
            .collect();
        let characters: Vec<&str> = scene
            .characters()
            .iter()
            .map(|c| world.character(*c).name.as_str())
            .collect();
        table.add_row(vec![
            scene.name.clone(),
            format!("({}, {})", scene.x, scene.y),
            or_dash(objects.join(", ")),
            or_dash(characters.join(", ")),
        ]);
    }
    table
}

fn character_table(world: &World) -> Table {
    let mut table = new_table(vec!["Character", "Scene", "HP", "Weapons"]);
    for id in world.character_ids() {
        let character = world.character(id);
        let mut name = character.name.clone();
        if character.is_player() {
            name.push_str(" (player)");
        }
        let scene = character
            .current_scene()
            .map(|s| world.scene(s).name.clone())
            .unwrap_or_default();
        let stat = character.context().stat(Stat::PhysicalHp);
        let weapons: Vec<&str> = world
            .weapons(id)
            .into_iter()
            .map(|w| world.weapon_info(w).name)
            .collect();
        table.add_row(vec![
            name,
            or_dash(scene),
            format!("{}/{}", stat.current, stat.base),
            or_dash(weapons.join(", ")),
        ]);
    }
    table
}

fn object_table(world: &World) -> Table {
    let mut table = new_table(vec!["Object", "Kind", "Location", "Uses"]);
    for id in world.object_ids() {
        let object = world.object(id);
        let location = match object.location() {
            Some(Container::Scene(scene)) => world.scene(scene).name.clone(),
            Some(Container::Character(owner)) => {
                format!("carried by {}", world.character(owner).name)
            }
            None => String::new(),
        };
        let uses = object
            .uses
            .map(|n| n.to_string())
            .unwrap_or_else(|| "∞".to_string());
        table.add_row(vec![
            object.name.clone(),
            format!("{:?}", object.kind),
            or_dash(location),
            uses,
        ]);
    }
    table
}

fn or_dash(text: String) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        text
    }
}
