//! The [`Controller`]: one game, scheduled by a [`RenderStrategy`].
//!
//! - **Text only**: one cycle per blocking input ([`Controller::run_text`]).
//! - **Graphical**: an event loop calls [`Controller::step`] and draws
//!   [`Controller::view`] on every pass, feeding key-downs through
//!   [`Controller::handle_msg`].
//! - **Hybrid**: the graphical loop, plus a text rendering emitted at start
//!   and after every input that changed the game. Idle passes never touch the
//!   terminal.

use crate::app::{InputSource, Prompt, TextRenderer, View};
use crate::game::Game;
use crate::map::Direction;
use crate::messages::{Key, Msg};

/// Which presentation the controller schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    TextOnly,
    Graphical,
    Hybrid,
}

impl RenderStrategy {
    /// `"ascii"` selects text only, any other argument the graphical view,
    /// no argument the hybrid of both.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("ascii") => Self::TextOnly,
            Some(_) => Self::Graphical,
            None => Self::Hybrid,
        }
    }

    /// Whether a text renderer is driven.
    pub fn emits_text(self) -> bool {
        matches!(self, Self::TextOnly | Self::Hybrid)
    }

    /// Whether an event loop drives the controller every frame.
    pub fn is_continuous(self) -> bool {
        matches!(self, Self::Graphical | Self::Hybrid)
    }
}

/// Whether the loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn is_quit(msg: Msg) -> bool {
    matches!(msg, Msg::Quit | Msg::KeyDown(Key::Escape))
}

/// Drives a [`Game`] for one of the three render strategies.
pub struct Controller {
    game: Game,
    strategy: RenderStrategy,
    text: Option<Box<dyn TextRenderer>>,
    quit: bool,
    game_over_seen: bool,
}

impl Controller {
    pub fn new(game: Game, strategy: RenderStrategy) -> Self {
        Self {
            game,
            strategy,
            text: None,
            quit: false,
            game_over_seen: false,
        }
    }

    /// Attach the text renderer (builder).
    pub fn with_text(mut self, renderer: Box<dyn TextRenderer>) -> Self {
        self.text = Some(renderer);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Prompt for the continuous modes.
    pub fn prompt(&self) -> Prompt {
        if self.game.is_over() {
            Prompt::GameOver
        } else if self.game.in_combat() {
            Prompt::Attack
        } else {
            Prompt::Move
        }
    }

    /// Snapshot with the continuous-mode prompt.
    pub fn view(&self) -> View<'_> {
        self.view_with(self.prompt())
    }

    fn view_with(&self, prompt: Prompt) -> View<'_> {
        View {
            map: &self.game.map,
            player: &self.game.player,
            enemy: self.game.enemy(),
            prompt,
            log: self.game.log.current_turn(),
        }
    }

    fn render_text(&mut self, prompt: Prompt) -> Result<(), Box<dyn std::error::Error>> {
        let Some(mut renderer) = self.text.take() else {
            return Ok(());
        };
        let res = renderer.render(&self.view_with(prompt));
        self.text = Some(renderer);
        res
    }

    fn note_game_over(&mut self) {
        if !self.game_over_seen {
            self.game_over_seen = true;
            log::info!("game over after {} turns", self.game.turn);
        }
    }

    // -----------------------------------------------------------------------
    // Text cadence
    // -----------------------------------------------------------------------

    /// Run the text loop until the player quits or the game ends. Every
    /// cycle checks for game over, refreshes the map, rolls for an enemy on
    /// the player's cell (fighting it out if one appears), renders and then
    /// blocks for one input.
    pub fn run_text(
        &mut self,
        input: &mut dyn InputSource,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.text.is_none() {
            return Err("text mode needs a text renderer".into());
        }
        loop {
            if self.game.is_over() {
                self.note_game_over();
                self.render_text(Prompt::GameOver)?;
                input.next_msg()?;
                return Ok(());
            }

            self.game.begin_cycle();
            if self.game.in_combat() || self.game.spawn_at_player() {
                if self.run_encounter(input)? == Flow::Quit {
                    break;
                }
                // The cycle goes on to its move prompt; the next roll waits
                // for the next cycle.
                if self.game.is_over() {
                    continue;
                }
                self.game.begin_cycle();
            }

            self.render_text(Prompt::Move)?;
            let msg = input.next_msg()?;
            if is_quit(msg) {
                break;
            }
            if let Msg::KeyDown(key) = msg {
                if let Some(dir) = Direction::from_key(key) {
                    self.game.try_move(dir);
                }
            }
        }
        self.quit = true;
        Ok(())
    }

    /// Text combat: any input confirms. Each exchange is shown and
    /// acknowledged before the next one or the end of the encounter.
    fn run_encounter(
        &mut self,
        input: &mut dyn InputSource,
    ) -> Result<Flow, Box<dyn std::error::Error>> {
        while self.game.in_combat() {
            self.render_text(Prompt::Attack)?;
            if is_quit(input.next_msg()?) {
                return Ok(Flow::Quit);
            }
            self.game.attack();

            self.render_text(Prompt::Continue)?;
            if is_quit(input.next_msg()?) {
                return Ok(Flow::Quit);
            }
            self.game.finish_encounter();
        }
        Ok(Flow::Continue)
    }

    // -----------------------------------------------------------------------
    // Continuous cadence
    // -----------------------------------------------------------------------

    /// Prepare the first frame. The hybrid strategy also emits the initial
    /// text rendering here.
    pub fn start(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.game.begin_cycle();
        if self.strategy == RenderStrategy::Hybrid {
            self.render_text(self.prompt())?;
        }
        Ok(())
    }

    /// One pass of the continuous loop, before drawing: check for game
    /// over, otherwise refresh movement legality and the revealed map.
    pub fn step(&mut self) {
        if self.game.is_over() {
            self.note_game_over();
            return;
        }
        self.game.begin_cycle();
    }

    /// Handle one event of the continuous loop. In the hybrid strategy the
    /// text rendering is re-emitted when the event changed the game.
    pub fn handle_msg(&mut self, msg: Msg) -> Result<Flow, Box<dyn std::error::Error>> {
        if is_quit(msg) {
            self.quit = true;
            return Ok(Flow::Quit);
        }
        let Msg::KeyDown(key) = msg else {
            return Ok(Flow::Continue);
        };
        if self.handle_key(key) {
            self.game.begin_cycle();
            if self.game.is_over() {
                self.note_game_over();
            }
            if self.strategy == RenderStrategy::Hybrid {
                self.render_text(self.prompt())?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Apply a key in the continuous modes. Returns whether the game
    /// changed. During an encounter only Enter counts; it runs one exchange
    /// and closes the encounter as soon as it resolves. Otherwise a legal
    /// direction moves the player and rolls for an enemy on the new cell.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.game.is_over() {
            return false;
        }
        if self.game.in_combat() {
            if key != Key::Enter {
                return false;
            }
            let changed = self.game.attack().is_some();
            self.game.finish_encounter();
            return changed;
        }
        let Some(dir) = Direction::from_key(key) else {
            return false;
        };
        if !self.game.try_move(dir) {
            return false;
        }
        self.game.spawn_at_player();
        true
    }
}
