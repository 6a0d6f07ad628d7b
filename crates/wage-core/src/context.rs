//! Per-character run-time stat block.
//!
//! A [`Context`] pairs a base and a current value for every [`Stat`]. It is
//! derived from the character's [`BaseStats`] the moment the character first
//! leaves STORAGE, and only mutated afterwards (combat damage, regeneration,
//! script adjustments).

use serde::{Deserialize, Serialize};

/// The kinds of combat statistic a character carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    /// Physical accuracy.
    PhysicalAccuracy,
    /// Natural armor.
    PhysicalArmor,
    /// Physical hit points.
    PhysicalHp,
    /// Physical strength.
    PhysicalStrength,
    /// Running speed.
    PhysicalSpeed,
    /// Spiritual accuracy.
    SpiritualAccuracy,
    /// Resistance to magic.
    SpiritualArmor,
    /// Spiritual hit points.
    SpiritualHp,
    /// Spiritual strength.
    SpiritualStrength,
}

impl Stat {
    /// Every stat, in storage order.
    pub const ALL: [Stat; 9] = [
        Self::PhysicalAccuracy,
        Self::PhysicalArmor,
        Self::PhysicalHp,
        Self::PhysicalStrength,
        Self::PhysicalSpeed,
        Self::SpiritualAccuracy,
        Self::SpiritualArmor,
        Self::SpiritualHp,
        Self::SpiritualStrength,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// The declared (loader-provided) stats of a character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    /// Physical accuracy.
    pub physical_accuracy: i32,
    /// Natural armor.
    pub natural_armor: i32,
    /// Physical hit points.
    pub physical_hp: i32,
    /// Physical strength.
    pub physical_strength: i32,
    /// Running speed.
    pub running_speed: i32,
    /// Spiritual accuracy.
    pub spiritual_accuracy: i32,
    /// Resistance to magic.
    pub resistance_to_magic: i32,
    /// Spiritual hit points.
    pub spiritual_hp: i32,
    /// Spiritual strength.
    pub spiritual_strength: i32,
}

impl BaseStats {
    /// The declared value for a stat.
    pub fn value(&self, stat: Stat) -> i32 {
        match stat {
            Stat::PhysicalAccuracy => self.physical_accuracy,
            Stat::PhysicalArmor => self.natural_armor,
            Stat::PhysicalHp => self.physical_hp,
            Stat::PhysicalStrength => self.physical_strength,
            Stat::PhysicalSpeed => self.running_speed,
            Stat::SpiritualAccuracy => self.spiritual_accuracy,
            Stat::SpiritualArmor => self.resistance_to_magic,
            Stat::SpiritualHp => self.spiritual_hp,
            Stat::SpiritualStrength => self.spiritual_strength,
        }
    }
}

/// A base/current pair for one stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    /// The value the stat regenerates towards.
    pub base: i32,
    /// The value in effect right now.
    pub current: i32,
}

/// Mutable combat state of a character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    stats: [StatValue; 9],
    visits: u32,
    kills: u32,
    initialized: bool,
}

impl Context {
    /// Reset every stat to its declared value, visits to 1 and kills to 0.
    pub fn initialize(&mut self, base: &BaseStats) {
        for stat in Stat::ALL {
            let value = base.value(stat);
            self.stats[stat.slot()] = StatValue {
                base: value,
                current: value,
            };
        }
        self.visits = 1;
        self.kills = 0;
        self.initialized = true;
    }

    /// Whether the context has been derived from base stats yet.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The base/current pair of a stat.
    pub fn stat(&self, stat: Stat) -> StatValue {
        self.stats[stat.slot()]
    }

    /// The current value of a stat.
    pub fn current(&self, stat: Stat) -> i32 {
        self.stats[stat.slot()].current
    }

    /// The base value of a stat.
    pub fn base(&self, stat: Stat) -> i32 {
        self.stats[stat.slot()].base
    }

    /// Overwrite the current value of a stat.
    pub fn set_current(&mut self, stat: Stat, value: i32) {
        self.stats[stat.slot()].current = value;
    }

    /// Overwrite the base value of a stat.
    pub fn set_base(&mut self, stat: Stat, value: i32) {
        self.stats[stat.slot()].base = value;
    }

    /// Add `delta` to the current value of a stat, saturating at the `i32`
    /// bounds. Returns the new value.
    pub fn adjust(&mut self, stat: Stat, delta: i32) -> i32 {
        let slot = &mut self.stats[stat.slot()];
        slot.current = slot.current.saturating_add(delta);
        slot.current
    }

    /// Current/base ratio of a stat; a zero base counts as full.
    pub fn ratio(&self, stat: Stat) -> f64 {
        let value = self.stat(stat);
        if value.base == 0 {
            return 1.0;
        }
        f64::from(value.current) / f64::from(value.base)
    }

    /// How many scenes the character has entered since it was placed.
    pub fn visits(&self) -> u32 {
        self.visits
    }

    /// How many opponents the character has defeated.
    pub fn kills(&self) -> u32 {
        self.kills
    }

    /// Count one more scene entry.
    pub fn record_visit(&mut self) {
        self.visits += 1;
    }

    /// Count one more defeated opponent.
    pub fn record_kill(&mut self) {
        self.kills += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> BaseStats {
        BaseStats {
            physical_accuracy: 5,
            natural_armor: 2,
            physical_hp: 20,
            physical_strength: 7,
            running_speed: 3,
            spiritual_accuracy: 1,
            resistance_to_magic: 4,
            spiritual_hp: 9,
            spiritual_strength: 6,
        }
    }

    #[test]
    fn default_context_is_uninitialized() {
        let ctx = Context::default();
        assert!(!ctx.is_initialized());
        assert_eq!(ctx.visits(), 0);
        assert_eq!(ctx.current(Stat::PhysicalHp), 0);
    }

    #[test]
    fn initialize_copies_every_stat() {
        let mut ctx = Context::default();
        ctx.record_kill();
        ctx.initialize(&stats());

        assert!(ctx.is_initialized());
        assert_eq!(ctx.visits(), 1);
        assert_eq!(ctx.kills(), 0);
        for stat in Stat::ALL {
            assert_eq!(ctx.base(stat), stats().value(stat));
            assert_eq!(ctx.current(stat), stats().value(stat));
        }
    }

    #[test]
    fn adjust_moves_current_only() {
        let mut ctx = Context::default();
        ctx.initialize(&stats());
        assert_eq!(ctx.adjust(Stat::PhysicalHp, -25), -5);
        assert_eq!(ctx.base(Stat::PhysicalHp), 20);
    }

    #[test]
    fn adjust_saturates_on_extreme_values() {
        let mut ctx = Context::default();
        ctx.set_current(Stat::PhysicalHp, -2);
        assert_eq!(ctx.adjust(Stat::PhysicalHp, -i32::MAX), i32::MIN);
        ctx.set_current(Stat::PhysicalHp, i32::MAX - 1);
        assert_eq!(ctx.adjust(Stat::PhysicalHp, 5), i32::MAX);
    }

    #[test]
    fn ratio_handles_zero_base() {
        let mut ctx = Context::default();
        assert!((ctx.ratio(Stat::PhysicalHp) - 1.0).abs() < f64::EPSILON);
        ctx.initialize(&stats());
        ctx.set_current(Stat::PhysicalHp, 10);
        assert!((ctx.ratio(Stat::PhysicalHp) - 0.5).abs() < f64::EPSILON);
    }
}
