//! Sentence building for encounters and combat.

use wage_core::{Character, Context, Gender, Stat};

/// Body parts an attack is narrated against.
pub const TARGETS: [&str; 3] = ["chest", "head", "side"];

/// A character's name with a definite article unless it is a proper noun.
pub fn definite_name(character: &Character, capitalize: bool) -> String {
    if character.proper_noun {
        character.name.clone()
    } else if capitalize {
        format!("The {}", character.name)
    } else {
        format!("the {}", character.name)
    }
}

/// A weapon name with the owner's possessive pronoun ("his sword").
pub fn possessive_weapon(gender: Gender, weapon: &str) -> String {
    format!("{} {}", gender.possessive(), weapon)
}

/// "You encounter the Orc." / "You encounter Gandalf."
pub fn encounter_line(character: &Character) -> String {
    format!("You encounter {}.", definite_name(character, false))
}

/// "The Orc swings his axe at Hero's head."
pub fn attack_line(
    attacker: &Character,
    verb: &str,
    weapon: &str,
    victim: &Character,
    target: &str,
) -> String {
    format!(
        "{} {}s {} at {}'s {}.",
        definite_name(attacker, true),
        verb,
        possessive_weapon(attacker.gender, weapon),
        definite_name(victim, false),
        target
    )
}

/// "The Orc is dead."
pub fn death_line(victim: &Character) -> String {
    format!("{} is dead.", definite_name(victim, true))
}

/// "The Orc's condition appears to be fair."
pub fn condition_line(victim: &Character) -> String {
    format!(
        "{}'s condition appears to be {}.",
        definite_name(victim, true),
        condition_phrase(victim.context(), Stat::PhysicalHp)
    )
}

/// Describe the current/base ratio of a stat in words.
pub fn condition_phrase(context: &Context, stat: Stat) -> &'static str {
    let ratio = context.ratio(stat);
    if ratio < 0.40 {
        "very bad"
    } else if ratio <= 0.55 {
        "bad"
    } else if ratio <= 0.70 {
        "average"
    } else if ratio <= 0.80 {
        "fair"
    } else if ratio <= 0.95 {
        "good"
    } else {
        "excellent"
    }
}
