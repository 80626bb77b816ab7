//! Seams between the game and its front-ends: [`InputSource`],
//! [`TextRenderer`], [`EventLoopDriver`] and the [`View`] snapshot they
//! consume.

use crate::combat::{Combatant, Player};
use crate::controller::Controller;
use crate::log::LogEntry;
use crate::map::GameMap;
use crate::messages::Msg;

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// What the player is being asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Pick one of the legal directions.
    Move,
    /// Confirm the next exchange.
    Attack,
    /// Acknowledge the exchange that just happened.
    Continue,
    GameOver,
}

impl Prompt {
    /// Fixed prompt text; `Move` lists directions instead.
    pub fn text(self) -> Option<&'static str> {
        match self {
            Self::Move => None,
            Self::Attack => Some("[ENTER] - ATTACK"),
            Self::Continue => Some("[ENTER] - CONTINUE"),
            Self::GameOver => Some("Game Over"),
        }
    }
}

/// Read-only snapshot of everything a renderer draws.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub map: &'a GameMap,
    pub player: &'a Player,
    pub enemy: Option<&'a Combatant>,
    pub prompt: Prompt,
    /// Messages of the current turn, oldest first.
    pub log: &'a [LogEntry],
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Blocking input for the text cadence.
pub trait InputSource {
    /// Wait for the next input. End of input is reported as [`Msg::Quit`].
    fn next_msg(&mut self) -> Result<Msg, Box<dyn std::error::Error>>;
}

/// Draws a full text rendering of a [`View`].
pub trait TextRenderer {
    fn render(&mut self, view: &View<'_>) -> Result<(), Box<dyn std::error::Error>>;
}

/// Back-end that owns the main-thread event loop (e.g. a window system) and
/// drives a [`Controller`] until the user quits.
pub trait EventLoopDriver {
    fn run(self, controller: Controller) -> Result<(), Box<dyn std::error::Error>>;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn next_msg(&mut self) -> Result<Msg, Box<dyn std::error::Error>> {
        (**self).next_msg()
    }
}

impl<T: TextRenderer + ?Sized> TextRenderer for Box<T> {
    fn render(&mut self, view: &View<'_>) -> Result<(), Box<dyn std::error::Error>> {
        (**self).render(view)
    }
}

/// An input source replaying a fixed script, then [`Msg::Quit`] forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    msgs: std::collections::VecDeque<Msg>,
}

impl ScriptedInput {
    pub fn new(msgs: impl IntoIterator<Item = Msg>) -> Self {
        Self {
            msgs: msgs.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.msgs.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_msg(&mut self) -> Result<Msg, Box<dyn std::error::Error>> {
        Ok(self.msgs.pop_front().unwrap_or(Msg::Quit))
    }
}
