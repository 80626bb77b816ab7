//! Enemy templates.

use rand::{Rng, RngExt};

use crate::combat::{self, Combatant};

/// The enemies that can be encountered. Templates are never fought
/// directly; every encounter gets its own copy.
#[derive(Debug, Clone, Default)]
pub struct EnemyRoster {
    templates: Vec<Combatant>,
}

impl EnemyRoster {
    pub fn new(templates: Vec<Combatant>) -> Self {
        Self { templates }
    }

    /// Slime, goblin, spider and rat.
    pub fn standard() -> Self {
        Self::new(vec![
            Combatant::enemy("Slime", 10, Some(&combat::JAWS)),
            Combatant::enemy("Goblin", 20, Some(&combat::SHORT_BOW)),
            Combatant::enemy("Spider", 15, Some(&combat::JAWS)),
            Combatant::enemy("Rat", 6, Some(&combat::CLAWS)),
        ])
    }

    /// A fresh copy of a uniformly chosen template, or `None` for an empty
    /// roster.
    pub fn spawn(&self, rng: &mut impl Rng) -> Option<Combatant> {
        if self.templates.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.templates.len());
        let enemy = self.templates[i].clone();
        log::info!("a {} appears ({} hp)", enemy.name, enemy.max_health);
        Some(enemy)
    }
}
