//! Session configuration.

use crate::map::SPAWN_CHANCE;

/// How the text modes read input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputStyle {
    /// One line per input, confirmed with Enter.
    #[default]
    Line,
    /// Single key presses, no Enter needed.
    Instant,
}

impl InputStyle {
    /// Parse `line` or `instant`, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Some(Self::Line),
            "instant" => Some(Self::Instant),
            _ => None,
        }
    }
}

/// Configuration for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub map_width: i32,
    pub map_height: i32,
    /// RNG seed. `None` draws a fresh one.
    pub seed: Option<u64>,
    pub input: InputStyle,
    pub player_name: String,
    pub player_health: i32,
    /// Spawn rolls (1–100) strictly below this produce an enemy.
    pub spawn_chance: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: 30,
            map_height: 15,
            seed: None,
            input: InputStyle::Line,
            player_name: "Player".into(),
            player_health: 100,
            spawn_chance: SPAWN_CHANCE,
        }
    }
}

impl GameConfig {
    pub const SEED_VAR: &'static str = "WAYFARER_SEED";
    pub const INPUT_VAR: &'static str = "WAYFARER_INPUT";

    /// Defaults overlaid with `WAYFARER_SEED` and `WAYFARER_INPUT` from the
    /// process environment.
    pub fn from_env() -> Self {
        Self::default().with_env(|k| std::env::var(k).ok())
    }

    /// Overlay settings found through `lookup`. Values that fail to parse
    /// are logged and skipped.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup(Self::SEED_VAR) {
            match v.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(e) => log::warn!("ignoring {}={v:?}: {e}", Self::SEED_VAR),
            }
        }
        if let Some(v) = lookup(Self::INPUT_VAR) {
            match InputStyle::parse(&v) {
                Some(style) => self.input = style,
                None => log::warn!("ignoring {}={v:?}: expected line or instant", Self::INPUT_VAR),
            }
        }
        self
    }

    /// Builder: fix the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |k| {
            vars.iter()
                .find(|(name, _)| *name == k)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults() {
        let c = GameConfig::default();
        assert_eq!((c.map_width, c.map_height), (30, 15));
        assert_eq!(c.seed, None);
        assert_eq!(c.input, InputStyle::Line);
        assert_eq!(c.player_health, 100);
        assert_eq!(c.spawn_chance, 10);
    }

    #[test]
    fn env_overrides() {
        let c = GameConfig::default().with_env(env(&[
            ("WAYFARER_SEED", "42"),
            ("WAYFARER_INPUT", "Instant"),
        ]));
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.input, InputStyle::Instant);
    }

    #[test]
    fn bad_env_values_are_ignored() {
        let c = GameConfig::default().with_env(env(&[
            ("WAYFARER_SEED", "forty-two"),
            ("WAYFARER_INPUT", "telepathy"),
        ]));
        assert_eq!(c, GameConfig::default());
    }
}
