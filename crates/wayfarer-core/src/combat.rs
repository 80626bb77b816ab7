//! Combatants, weapons and attack resolution.
//!
//! Damage is deterministic: an attack deals exactly the attacker's weapon
//! damage, health never drops below zero, and a combatant at zero health
//! cannot act.

use crate::geom::Point;
use crate::map::{Direction, MovementOptions};
use crate::tile::{self, Tile};

/// A weapon. Weapons are statics shared by reference between combatants.
#[derive(Debug, PartialEq, Eq)]
pub struct Weapon {
    pub name: &'static str,
    pub damage: i32,
}

impl Weapon {
    pub const fn new(name: &'static str, damage: i32) -> Self {
        Self { name, damage }
    }
}

/// What any combatant holds when it has nothing else.
pub static FISTS: Weapon = Weapon::new("Fists", 5);
pub static CLAWS: Weapon = Weapon::new("Claws", 3);
pub static JAWS: Weapon = Weapon::new("Jaws", 4);
pub static SHORT_BOW: Weapon = Weapon::new("Short Bow", 6);

/// Result of a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The target lost `damage` health (possibly less than the weapon's
    /// damage when the floor at zero was hit).
    Hit { damage: i32 },
    /// The attacker was already down and did nothing.
    Incapacitated,
}

/// Anything with health and a weapon: the player and every enemy.
///
/// `Clone` is the explicit, field-by-field copy used to spawn an enemy from
/// a roster template; the weapon reference is shared, health is not.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub weapon: &'static Weapon,
}

impl Combatant {
    /// A combatant at full health. `max_health` must be positive.
    pub fn new(name: impl Into<String>, max_health: i32, weapon: &'static Weapon) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            weapon,
        }
    }

    /// An enemy template; no weapon means unarmed.
    pub fn enemy(name: impl Into<String>, max_health: i32, weapon: Option<&'static Weapon>) -> Self {
        Self::new(name, max_health, weapon.unwrap_or(&FISTS))
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Hit `target` with the equipped weapon. Does nothing if `self` is
    /// already at zero health.
    pub fn attack(&self, target: &mut Combatant) -> AttackOutcome {
        if !self.is_alive() {
            return AttackOutcome::Incapacitated;
        }
        self.strike(target)
    }

    /// Hit `target` regardless of own health. Used for the second half of
    /// an exchange, where readiness was decided when the exchange began.
    pub fn strike(&self, target: &mut Combatant) -> AttackOutcome {
        let before = target.health;
        target.health = (target.health - self.weapon.damage).max(0);
        AttackOutcome::Hit {
            damage: before - target.health,
        }
    }

    /// Filled width of a health bar `length` units long: proportional to
    /// health over max health, never less than one unit.
    pub fn bar_fill(&self, length: u32) -> u32 {
        if self.max_health <= 0 {
            return 1;
        }
        let health = self.health.clamp(0, self.max_health) as u64;
        let filled = health * u64::from(length) / self.max_health as u64;
        (filled as u32).max(1)
    }

    /// `"hp/max"` label.
    pub fn health_label(&self) -> String {
        format!("{}/{}", self.health, self.max_health)
    }
}

/// The player: a combatant with a position, a default weapon to fall back
/// to, and the movement legality computed for the current turn.
#[derive(Debug, Clone)]
pub struct Player {
    pub stats: Combatant,
    pub pos: Point,
    pub default_weapon: &'static Weapon,
    pub movement: MovementOptions,
    pub marker: Tile,
}

impl Player {
    pub fn new(name: impl Into<String>, max_health: i32) -> Self {
        let stats = Combatant::new(name, max_health, &FISTS);
        Self {
            default_weapon: stats.weapon,
            stats,
            pos: Point::ZERO,
            movement: MovementOptions::default(),
            marker: &tile::PLAYER_MARKER,
        }
    }

    /// Replace the equipped weapon.
    pub fn equip(&mut self, weapon: &'static Weapon) {
        log::debug!("{} equipped {}", self.stats.name, weapon.name);
        self.stats.weapon = weapon;
    }

    /// Drop the equipped weapon, going back to the default one.
    pub fn drop_weapon(&mut self) {
        log::debug!("{} dropped {}", self.stats.name, self.stats.weapon.name);
        self.stats.weapon = self.default_weapon;
    }

    /// Recompute which directions are legal on a `width`×`height` grid.
    pub fn update_movement(&mut self, width: i32, height: i32) {
        self.movement = MovementOptions::compute(self.pos, width, height);
    }

    /// Step in `dir` if this turn's movement options allow it.
    pub fn step(&mut self, dir: Direction) -> bool {
        if !self.movement.allows(dir) {
            return false;
        }
        let d = dir.delta();
        self.pos = self.pos + d;
        true
    }
}
