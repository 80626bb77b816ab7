//! **wayfarer-core**: map, visibility, combat and the game-mode control loop.
//!
//! This crate holds everything the three presentation modes share: the tile
//! registry, patch-based terrain generation, the fog-of-war grid, combatants,
//! the enemy roster and the [`Controller`] that schedules rendering for each
//! [`RenderStrategy`]. Renderers and input sources plug in through the traits
//! in [`app`].

pub mod app;
pub mod combat;
pub mod config;
pub mod controller;
pub mod fov;
pub mod game;
pub mod geom;
pub mod grid;
pub mod log;
pub mod map;
pub mod mapgen;
pub mod messages;
pub mod roster;
pub mod style;
pub mod tile;

pub use app::{EventLoopDriver, InputSource, Prompt, ScriptedInput, TextRenderer, View};
pub use combat::{AttackOutcome, Combatant, Player, Weapon};
pub use config::{GameConfig, InputStyle};
pub use controller::{Controller, Flow, RenderStrategy};
pub use game::{Encounter, EncounterState, Exchange, Game};
pub use geom::{Point, Range};
pub use grid::Grid;
pub use self::log::{GameLog, LogEntry, LogStyle};
pub use map::{Direction, GameMap, MovementOptions};
pub use messages::{Key, Msg};
pub use roster::EnemyRoster;
pub use style::Color;
pub use tile::{TerrainKind, Tile};
