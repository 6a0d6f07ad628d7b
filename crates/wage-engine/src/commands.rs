//! A built-in script host answering a small command vocabulary.
//!
//! Worlds normally carry their own scene scripts. [`StandardScripts`] ignores
//! them and understands looking around, walking the grid, handling objects
//! and fighting, which is enough to play any world definition.

use strsim::jaro_winkler;
use wage_core::{CharacterId, Direction, ObjectId, SceneId, Stat, Weapon, World};

use crate::narration;
use crate::script::{ClickInput, ScriptHost, TurnContext};

/// Minimum similarity score for fuzzy name matching (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Describe the scene, or a named thing in it.
    Look {
        /// Optional thing to examine.
        target: Option<String>,
    },
    /// Walk to the adjacent scene.
    Move {
        /// The direction to walk.
        direction: Direction,
    },
    /// Pick an object up.
    Take {
        /// The object name.
        item: String,
    },
    /// Put a carried object down.
    Drop {
        /// The object name.
        item: String,
    },
    /// Put on carried armor.
    Wear {
        /// The object name.
        item: String,
    },
    /// Attack a character.
    Attack {
        /// The character name.
        target: String,
        /// Optional weapon name.
        weapon: Option<String>,
    },
    /// List carried objects.
    Inventory,
    /// Report the player's condition.
    Status,
    /// Anything else.
    Unknown,
}

const LOOK_VERBS: &[&str] = &["look", "l", "examine", "x"];
const MOVE_VERBS: &[&str] = &["go", "walk"];
const TAKE_VERBS: &[&str] = &["take", "get"];
const DROP_VERBS: &[&str] = &["drop"];
const WEAR_VERBS: &[&str] = &["wear"];
const ATTACK_VERBS: &[&str] = &["attack", "hit", "fight"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const STATUS_VERBS: &[&str] = &["status"];

/// Parse one line of player input.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some(first) = words.first() else {
        return Command::Unknown;
    };
    let verb = first.to_lowercase();
    let rest = strip_article(&words[1..]).join(" ");

    if let Some(direction) = Direction::parse(&verb) {
        return if rest.is_empty() {
            Command::Move { direction }
        } else {
            Command::Unknown
        };
    }
    let verb = verb.as_str();
    if LOOK_VERBS.contains(&verb) {
        let target = (!rest.is_empty()).then_some(rest);
        return Command::Look { target };
    }
    if MOVE_VERBS.contains(&verb) {
        return match Direction::parse(&rest) {
            Some(direction) => Command::Move { direction },
            None => Command::Unknown,
        };
    }
    if INVENTORY_VERBS.contains(&verb) && rest.is_empty() {
        return Command::Inventory;
    }
    if STATUS_VERBS.contains(&verb) && rest.is_empty() {
        return Command::Status;
    }
    if rest.is_empty() {
        return Command::Unknown;
    }
    if TAKE_VERBS.contains(&verb) {
        return Command::Take { item: rest };
    }
    if DROP_VERBS.contains(&verb) {
        return Command::Drop { item: rest };
    }
    if WEAR_VERBS.contains(&verb) {
        return Command::Wear { item: rest };
    }
    if ATTACK_VERBS.contains(&verb) {
        return match rest.split_once(" with ") {
            Some((target, weapon)) => Command::Attack {
                target: target.trim().to_string(),
                weapon: Some(strip_article_str(weapon.trim()).to_string()),
            },
            None => Command::Attack {
                target: rest,
                weapon: None,
            },
        };
    }
    Command::Unknown
}

fn strip_article<'a>(words: &'a [&'a str]) -> &'a [&'a str] {
    match words.first() {
        Some(w) if ["the", "a", "an"].contains(&w.to_lowercase().as_str()) => &words[1..],
        _ => words,
    }
}

fn strip_article_str(s: &str) -> &str {
    for article in ["the ", "a ", "an "] {
        let prefixed = s
            .get(..article.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(article));
        if prefixed && s.len() > article.len() {
            return &s[article.len()..];
        }
    }
    s
}

/// Resolve a name among candidates: exact (case-insensitive) first, then the
/// best fuzzy match above the threshold.
pub fn resolve_name<'a, T: Copy>(
    input: &str,
    candidates: impl IntoIterator<Item = (T, &'a str)>,
) -> Option<T> {
    let input_lower = input.to_lowercase();
    let mut best: Option<(T, f64)> = None;
    for (id, name) in candidates {
        let name_lower = name.to_lowercase();
        if name_lower == input_lower {
            return Some(id);
        }
        let score = jaro_winkler(&input_lower, &name_lower);
        if score >= FUZZY_THRESHOLD && best.is_none_or(|(_, b)| score > b) {
            best = Some((id, score));
        }
    }
    best.map(|(id, _)| id)
}

fn object_names<'w>(world: &'w World, ids: &[ObjectId]) -> Vec<(ObjectId, &'w str)> {
    ids.iter()
        .map(|id| (*id, world.object(*id).name.as_str()))
        .collect()
}

/// The built-in command interpreter.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScripts;

impl ScriptHost for StandardScripts {
    fn execute(
        &mut self,
        scene: SceneId,
        _loop_count: u32,
        text: Option<&str>,
        click: Option<ClickInput>,
        ctx: &mut TurnContext<'_>,
    ) -> bool {
        if let Some(click) = click {
            return clicked(scene, click, ctx);
        }
        let Some(text) = text else {
            return false;
        };
        match parse_command(text) {
            Command::Look { target: None } => look(scene, ctx),
            Command::Look {
                target: Some(target),
            } => examine(scene, &target, ctx),
            Command::Move { direction } => walk(scene, direction, ctx),
            Command::Take { item } => take(scene, &item, ctx),
            Command::Drop { item } => drop_item(scene, &item, ctx),
            Command::Wear { item } => wear(&item, ctx),
            Command::Attack { target, weapon } => {
                attack(scene, &target, weapon.as_deref(), ctx)
            }
            Command::Inventory => inventory(ctx),
            Command::Status => status(ctx),
            Command::Unknown => false,
        }
    }
}

fn clicked(scene: SceneId, click: ClickInput, ctx: &mut TurnContext<'_>) -> bool {
    match click {
        ClickInput::Scene(_) => look(scene, ctx),
        ClickInput::Object(object) => {
            let Some(name) = ctx.world().get_object(object).map(|o| o.name.clone()) else {
                return false;
            };
            examine(scene, &name, ctx)
        }
        ClickInput::Character(character) => {
            let Some(name) = ctx.world().get_character(character).map(|c| c.name.clone())
            else {
                return false;
            };
            attack(scene, &name, None, ctx)
        }
    }
}

fn look(scene: SceneId, ctx: &mut TurnContext<'_>) -> bool {
    let world = ctx.world();
    let here = world.scene(scene);
    let mut lines = vec![here.name.clone(), here.description.clone()];
    if !here.objects().is_empty() {
        let names: Vec<&str> = here
            .objects()
            .iter()
            .map(|id| world.object(*id).name.as_str())
            .collect();
        lines.push(format!("You see: {}.", names.join(", ")));
    }
    let player = ctx.player();
    let others: Vec<String> = here
        .characters()
        .iter()
        .filter(|id| **id != player)
        .map(|id| narration::definite_name(world.character(*id), false))
        .collect();
    if !others.is_empty() {
        lines.push(format!("Also here: {}.", others.join(", ")));
    }
    for line in lines {
        ctx.append_text(&line);
    }
    true
}

fn examine(scene: SceneId, target: &str, ctx: &mut TurnContext<'_>) -> bool {
    let world = ctx.world();
    let player = ctx.player();
    let mut visible = object_names(world, world.scene(scene).objects());
    visible.extend(object_names(world, world.character(player).inventory()));
    if let Some(object) = resolve_name(target, visible) {
        let object = world.object(object);
        let line = if object.description.is_empty() {
            format!("You see nothing special about the {}.", object.name)
        } else {
            object.description.clone()
        };
        ctx.append_text(&line);
        return true;
    }
    let present = world
        .scene(scene)
        .characters()
        .iter()
        .map(|id| (*id, world.character(*id).name.as_str()));
    if let Some(character) = resolve_name(target, present) {
        let line = narration::condition_line(world.character(character));
        ctx.append_text(&line);
        return true;
    }
    false
}

fn walk(scene: SceneId, direction: Direction, ctx: &mut TurnContext<'_>) -> bool {
    let here = ctx.world().scene(scene);
    let destination = if here.is_blocked(direction) {
        None
    } else {
        let (dx, dy) = direction.offset();
        ctx.world().scene_at(here.x + dx, here.y + dy)
    };
    match destination {
        Some(next) => {
            let player = ctx.player();
            ctx.move_character(player, next);
        }
        None => ctx.append_text("You can't go that way."),
    }
    true
}

fn take(scene: SceneId, item: &str, ctx: &mut TurnContext<'_>) -> bool {
    let world = ctx.world();
    let Some(object) = resolve_name(item, object_names(world, world.scene(scene).objects()))
    else {
        return false;
    };
    let name = world.object(object).name.clone();
    if world.object(object).kind.is_immobile() {
        ctx.append_text(&format!("You can't take the {name}."));
        return true;
    }
    let player = ctx.player();
    ctx.move_object_to_character(object, player);
    ctx.append_text(&format!("You now have the {name}."));
    true
}

fn drop_item(scene: SceneId, item: &str, ctx: &mut TurnContext<'_>) -> bool {
    let world = ctx.world();
    let carried = object_names(world, world.character(ctx.player()).inventory());
    let Some(object) = resolve_name(item, carried) else {
        return false;
    };
    let name = world.object(object).name.clone();
    ctx.move_object_to_scene(object, scene);
    ctx.append_text(&format!("You no longer have the {name}."));
    true
}

fn wear(item: &str, ctx: &mut TurnContext<'_>) -> bool {
    let world = ctx.world();
    let player = ctx.player();
    let Some(object) = resolve_name(item, object_names(world, world.character(player).inventory()))
    else {
        return false;
    };
    let name = world.object(object).name.clone();
    let line = match ctx.wear(player, object) {
        Some(_) => format!("You are now wearing the {name}."),
        None => format!("You can't wear the {name}."),
    };
    ctx.append_text(&line);
    true
}

fn attack(
    scene: SceneId,
    target: &str,
    weapon: Option<&str>,
    ctx: &mut TurnContext<'_>,
) -> bool {
    let world = ctx.world();
    let player = ctx.player();
    let present = world
        .scene(scene)
        .characters()
        .iter()
        .filter(|id| **id != player)
        .map(|id| (*id, world.character(*id).name.as_str()));
    let Some(victim) = resolve_name(target, present) else {
        return false;
    };
    let Some(chosen) = choose_weapon(world, player, weapon) else {
        ctx.append_text("You have nothing to fight with.");
        return true;
    };
    ctx.attack(player, victim, chosen);
    true
}

fn choose_weapon(world: &World, player: CharacterId, name: Option<&str>) -> Option<Weapon> {
    let weapons = world.weapons(player);
    match name {
        Some(name) => resolve_name(
            name,
            weapons.iter().map(|w| (*w, world.weapon_info(*w).name)),
        ),
        None => weapons.first().copied(),
    }
}

fn inventory(ctx: &mut TurnContext<'_>) -> bool {
    let world = ctx.world();
    let carried = world.character(ctx.player()).inventory();
    let line = if carried.is_empty() {
        "You are empty-handed.".to_string()
    } else {
        let names: Vec<&str> = carried
            .iter()
            .map(|id| world.object(*id).name.as_str())
            .collect();
        format!("You have: {}.", names.join(", "))
    };
    ctx.append_text(&line);
    true
}

fn status(ctx: &mut TurnContext<'_>) -> bool {
    let player = ctx.world().character(ctx.player());
    let context = player.context();
    let line = format!(
        "Your condition appears to be {}. Kills: {}.",
        narration::condition_phrase(context, Stat::PhysicalHp),
        context.kills()
    );
    ctx.append_text(&line);
    true
}
