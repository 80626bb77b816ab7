//! In-game message log.

use crate::combat::{AttackOutcome, Combatant};

/// Kind of a log entry, mapped to a display colour by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    Normal,
    HurtMonster,
    HurtPlayer,
    Notable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub text: String,
    pub style: LogStyle,
}

/// The game's message log.
#[derive(Debug, Clone, Default)]
pub struct GameLog {
    entries: Vec<LogEntry>,
    /// Index of the first entry of the current turn.
    turn_start: usize,
}

impl GameLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_styled(&mut self, text: &str, style: LogStyle) {
        self.entries.push(LogEntry {
            text: text.to_string(),
            style,
        });
        if self.entries.len() > Self::MAX_ENTRIES {
            let n = Self::MAX_ENTRIES / 10;
            self.entries.drain(0..n);
            self.turn_start = self.turn_start.saturating_sub(n);
        }
    }

    /// Start a new turn: later entries make up [`GameLog::current_turn`].
    pub fn new_turn(&mut self) {
        self.turn_start = self.entries.len();
    }

    /// Entries logged since the last [`GameLog::new_turn`].
    pub fn current_turn(&self) -> &[LogEntry] {
        &self.entries[self.turn_start.min(self.entries.len())..]
    }

    pub fn log(&mut self, text: &str) {
        self.log_styled(text, LogStyle::Normal);
    }

    /// Record one attack. An incapacitated attacker logs nothing.
    pub fn log_attack(
        &mut self,
        attacker: &Combatant,
        target: &Combatant,
        outcome: AttackOutcome,
        style: LogStyle,
    ) {
        if let AttackOutcome::Hit { damage } = outcome {
            let text = format!(
                "{} dealt {} damage to {} with {}",
                attacker.name, damage, target.name, attacker.weapon.name
            );
            self.log_styled(&text, style);
        }
    }
}
