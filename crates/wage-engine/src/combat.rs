use tracing::debug;
use wage_core::{CharacterId, Stat, Weapon};

use crate::narration::{self, TARGETS};
use crate::runtime::Runtime;

impl Runtime {
    /// Resolve one attack.
    ///
    /// A miss skips only the hit branch: weapon uses still go down and the
    /// victim may still strike back.
    ///
    /// When the player attacks and the victim survives in the same scene, the
    /// victim strikes back once. Retaliation never recurses further because
    /// non-player attackers do not trigger it.
    pub(crate) fn attack(&mut self, attacker: CharacterId, victim: CharacterId, weapon: Weapon) {
        let target = TARGETS[self.rng.pick(TARGETS.len())];
        let player_attacks = attacker == self.player;

        let info = self.world.weapon_info(weapon);
        let weapon_sound = info.sound.map(str::to_string);
        let damage = info.damage;
        if !player_attacks {
            let line = narration::attack_line(
                self.world.character(attacker),
                info.verb,
                info.name,
                self.world.character(victim),
                target,
            );
            self.append_text(&line);
        }
        self.play_sound(weapon_sound.as_deref());

        let roll = self.rng.unit();
        let hit = roll <= self.config.hit_threshold;
        debug!(%attacker, %victim, target, roll, hit, "attack");
        if hit {
            self.resolve_hit(attacker, victim, target, damage);
        } else {
            self.append_text("A miss!");
        }

        let uses = match weapon {
            Weapon::Object(object) => self.world.object_mut(object).uses.as_mut(),
            Weapon::Natural { .. } => None,
        };
        if let Some(uses) = uses {
            *uses -= 1;
        }

        let attacker_scene = self.world.character(attacker).current_scene();
        if player_attacks && self.world.character(victim).current_scene() == attacker_scene {
            self.react(victim, attacker);
        }
    }

    fn resolve_hit(
        &mut self,
        attacker: CharacterId,
        victim: CharacterId,
        target: &str,
        damage: i32,
    ) {
        self.append_text(&format!("A hit to the {target}."));

        let scores = self.world.character(attacker).scores_hit_sound.clone();
        self.play_sound(scores.as_deref());
        let (comment, receives) = {
            let chr = self.world.character(victim);
            (chr.receives_hit_comment.clone(), chr.receives_hit_sound.clone())
        };
        if let Some(comment) = comment {
            self.append_text(&comment);
        }
        self.play_sound(receives.as_deref());

        let remaining = self
            .world
            .character_mut(victim)
            .context_mut()
            .adjust(Stat::PhysicalHp, damage.saturating_neg());
        if remaining < 0 {
            let line = narration::death_line(self.world.character(victim));
            self.append_text(&line);
            self.world
                .character_mut(attacker)
                .context_mut()
                .record_kill();
            let storage = self.world.storage();
            self.move_character(victim, storage);
        } else if attacker == self.player {
            let line = narration::condition_line(self.world.character(victim));
            self.append_text(&line);
        }
    }
}
