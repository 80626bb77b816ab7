//! One game session: the map, the player, the roster and the current
//! encounter, with the turn operations every presentation mode shares.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::combat::{AttackOutcome, Combatant, Player};
use crate::config::GameConfig;
use crate::log::{GameLog, LogStyle};
use crate::map::{Direction, GameMap};
use crate::roster::EnemyRoster;

/// Where an encounter stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    /// Waiting for the player to confirm the next exchange.
    AwaitingAttack,
    /// One side is at zero health. Terminal.
    Resolved,
}

/// The two attacks of one exchange, player first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub player: AttackOutcome,
    pub enemy: AttackOutcome,
}

/// A fight between the player and one spawned enemy.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub enemy: Combatant,
    pub state: EncounterState,
    pub exchanges: u32,
}

impl Encounter {
    pub fn new(enemy: Combatant) -> Self {
        Self {
            enemy,
            state: EncounterState::AwaitingAttack,
            exchanges: 0,
        }
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.state == EncounterState::Resolved
    }
}

/// Session state.
pub struct Game {
    pub map: GameMap,
    pub player: Player,
    pub encounter: Option<Encounter>,
    pub log: GameLog,
    /// Successful moves so far.
    pub turn: u32,
    roster: EnemyRoster,
    rng: StdRng,
    seed: u64,
    spawn_chance: u32,
}

impl Game {
    /// Start a session: seed the RNG, generate the map, place the player at
    /// the origin.
    pub fn new(config: &GameConfig, roster: EnemyRoster) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        let map = GameMap::generate(config.map_width, config.map_height, &mut rng);
        Self {
            map,
            player: Player::new(config.player_name.clone(), config.player_health),
            encounter: None,
            log: GameLog::new(),
            turn: 0,
            roster,
            rng,
            seed,
            spawn_chance: config.spawn_chance,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn set_spawn_chance(&mut self, chance: u32) {
        self.spawn_chance = chance;
    }

    /// The player is down and no encounter is waiting to be closed.
    pub fn is_over(&self) -> bool {
        !self.player.stats.is_alive() && self.encounter.is_none()
    }

    #[inline]
    pub fn in_combat(&self) -> bool {
        self.encounter.is_some()
    }

    /// The enemy of the current encounter, if any.
    pub fn enemy(&self) -> Option<&Combatant> {
        self.encounter.as_ref().map(|e| &e.enemy)
    }

    /// Recompute movement legality, then reveal around the player and put
    /// the marker on the working copy.
    pub fn begin_cycle(&mut self) {
        self.player.update_movement(self.map.width(), self.map.height());
        self.map.update(self.player.pos, self.player.marker);
    }

    /// Move the player one step if the move is legal this turn. Never moves
    /// during an encounter.
    pub fn try_move(&mut self, dir: Direction) -> bool {
        if self.in_combat() || !self.player.step(dir) {
            return false;
        }
        self.turn += 1;
        self.log.new_turn();
        log::debug!("turn {}: moved {dir:?} to {}", self.turn, self.player.pos);
        true
    }

    /// Roll for an enemy on the player's cell and engage it. Returns
    /// whether an encounter started.
    pub fn spawn_at_player(&mut self) -> bool {
        if self.in_combat() {
            return false;
        }
        let pos = self.player.pos;
        match self
            .map
            .spawn_enemy(pos, self.spawn_chance, &self.roster, &mut self.rng)
        {
            Some(enemy) => {
                self.engage(enemy);
                true
            }
            None => false,
        }
    }

    /// Start an encounter with `enemy`, replacing any current one.
    pub fn engage(&mut self, enemy: Combatant) {
        self.log.new_turn();
        self.log
            .log_styled(&format!("A {} blocks the way", enemy.name), LogStyle::Notable);
        self.encounter = Some(Encounter::new(enemy));
    }

    /// Resolve one exchange: the player attacks, then the enemy attacks
    /// even if the player's hit brought it to zero. The encounter resolves
    /// when either side ends at zero health.
    pub fn attack(&mut self) -> Option<Exchange> {
        let enc = self.encounter.as_mut()?;
        if enc.is_resolved() {
            return None;
        }
        let player = &mut self.player.stats;
        let enemy = &mut enc.enemy;

        // Both sides act if they were standing when the exchange began.
        let enemy_ready = enemy.is_alive();
        self.log.new_turn();
        let p = player.attack(enemy);
        self.log.log_attack(player, enemy, p, LogStyle::HurtMonster);
        let e = if enemy_ready {
            enemy.strike(player)
        } else {
            AttackOutcome::Incapacitated
        };
        self.log.log_attack(enemy, player, e, LogStyle::HurtPlayer);
        enc.exchanges += 1;
        log::debug!(
            "exchange {}: {} {}, {} {}",
            enc.exchanges,
            player.name,
            player.health_label(),
            enemy.name,
            enemy.health_label()
        );

        if !player.is_alive() || !enemy.is_alive() {
            enc.state = EncounterState::Resolved;
            let (winner, fallen) = if player.is_alive() {
                (&player.name, &enemy.name)
            } else {
                (&enemy.name, &player.name)
            };
            self.log.log(&format!("{fallen} falls"));
            log::info!(
                "encounter with {} over after {} exchanges, {winner} stands",
                enemy.name,
                enc.exchanges
            );
        }
        Some(Exchange { player: p, enemy: e })
    }

    /// Drop the encounter if it is resolved. Returns whether it was.
    pub fn finish_encounter(&mut self) -> bool {
        if self.encounter.as_ref().is_some_and(Encounter::is_resolved) {
            self.encounter = None;
            true
        } else {
            false
        }
    }
}
