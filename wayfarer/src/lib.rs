//! Launching a wayfarer session in one of the three render strategies.

use std::error::Error;

use clap::Parser;

use wayfarer_core::{
    Controller, EnemyRoster, EventLoopDriver, Game, GameConfig, InputSource, InputStyle,
    RenderStrategy,
};
use wayfarer_crossterm::CrosstermRenderer;
use wayfarer_crossterm::input::{KeypressInput, LineInput};
use wayfarer_winit::{WinitConfig, WinitDriver};

/// Explore a fog-covered map and fight what you meet.
#[derive(Debug, Parser)]
#[command(name = "wayfarer", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// `ascii` plays in the terminal; any other value opens only the
    /// window; no value opens the window and mirrors it in the terminal.
    #[arg(allow_hyphen_values = true)]
    pub mode: Option<String>,
    /// Anything after the mode is ignored.
    #[arg(hide = true, allow_hyphen_values = true, trailing_var_arg = true)]
    _rest: Vec<String>,
}

impl Cli {
    pub fn strategy(&self) -> RenderStrategy {
        RenderStrategy::from_arg(self.mode.as_deref())
    }
}

/// Build the session and its controller, with a terminal renderer
/// attached for the strategies that print text.
pub fn build_controller(strategy: RenderStrategy, config: &GameConfig) -> Controller {
    let game = Game::new(config, EnemyRoster::standard());
    let controller = Controller::new(game, strategy);
    if strategy.emits_text() {
        controller.with_text(Box::new(CrosstermRenderer::stdout()))
    } else {
        controller
    }
}

/// Play one session to the end.
pub fn launch(strategy: RenderStrategy, config: GameConfig) -> Result<(), Box<dyn Error>> {
    log::info!("starting {strategy:?} session");
    let mut controller = build_controller(strategy, &config);
    if strategy.is_continuous() {
        return WinitDriver::new(WinitConfig::default()).run(controller);
    }
    let mut input: Box<dyn InputSource> = match config.input {
        InputStyle::Line => Box::new(LineInput::stdin()),
        InputStyle::Instant => Box::new(KeypressInput::new()?),
    };
    controller.run_text(input.as_mut())
}
