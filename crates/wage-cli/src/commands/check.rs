use std::path::Path;

use colored::Colorize;

pub fn run(path: &Path) -> Result<(), String> {
    let world = super::load_world(path)?;

    let issues = world.unresolved_placements();
    for issue in &issues {
        eprintln!("{} {issue}", "warning:".yellow().bold());
    }

    println!("  All checks passed for '{}'.", world.meta.name);
    println!(
        "  {} scenes, {} characters, {} objects, {} sounds",
        world.ordered_scenes().count(),
        world.character_count(),
        world.object_count(),
        world.sound_count()
    );
    if !issues.is_empty() {
        println!("  {} unresolved placements", issues.len());
    }

    Ok(())
}
