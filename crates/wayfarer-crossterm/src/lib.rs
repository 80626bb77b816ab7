//! Crossterm text front-end for wayfarer.
//!
//! Provides [`CrosstermRenderer`], a [`TextRenderer`] drawing the bordered
//! map, legend, health bars and prompts as coloured text, and the two
//! blocking input sources in [`input`].

pub mod input;

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use wayfarer_core::{Color, Combatant, Direction, LogStyle, Prompt, TextRenderer, View};

pub use input::{KeypressInput, LineInput, to_key};

/// Segments in a text health bar.
pub const BAR_SEGMENTS: u32 = 20;

/// Display colour of a log line.
pub fn style_color(style: LogStyle) -> Color {
    match style {
        LogStyle::Normal => Color::DEFAULT,
        LogStyle::HurtMonster => Color::GREEN,
        LogStyle::HurtPlayer => Color::RED,
        LogStyle::Notable => Color::YELLOW,
    }
}

/// Maps a [`wayfarer_core::Color`] to a [`crossterm::style::Color`].
pub fn to_ct_color(c: Color) -> CtColor {
    if c.is_default() {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// Text renderer writing to any [`Write`] sink (stdout by default).
pub struct CrosstermRenderer<W: Write> {
    out: W,
    color: bool,
    clear: bool,
}

impl CrosstermRenderer<io::Stdout> {
    /// Coloured output to stdout, clearing the screen before every frame.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: true,
            clear: true,
        }
    }

    /// Emit colour escapes (builder).
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Clear the screen before each frame (builder).
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// `\r\n` keeps lines aligned when the terminal is in raw mode.
    fn newline(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\r\n"))
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))?;
        self.newline()
    }

    fn colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.color && !color.is_default() {
            queue!(self.out, SetForegroundColor(to_ct_color(color)), Print(text), ResetColor)
        } else {
            queue!(self.out, Print(text))
        }
    }

    fn rule(&mut self, width: i32) -> io::Result<()> {
        let rule = "-".repeat(width.max(0) as usize + 1);
        self.line(&rule)
    }

    /// Bordered map; unexplored cells are blank and each row carries at
    /// most one legend entry.
    fn draw_map(&mut self, view: &View<'_>) -> io::Result<()> {
        let map = view.map;
        let frame = format!("x{}x", "=".repeat(map.width().max(0) as usize));
        self.line(&frame)?;
        for (y, row) in map.view().rows().enumerate() {
            queue!(self.out, Print('|'))?;
            for (x, tile) in row.iter().enumerate() {
                let p = wayfarer_core::Point::new(x as i32, y as i32);
                if map.is_explored(p) {
                    let mut buf = [0u8; 4];
                    self.colored(tile.symbol.encode_utf8(&mut buf), tile.color)?;
                } else {
                    queue!(self.out, Print(' '))?;
                }
            }
            queue!(self.out, Print("| "))?;
            if let Some(kind) = map.legend().get(y) {
                self.colored(&kind.legend(), kind.color)?;
            }
            self.newline()?;
        }
        self.line(&frame)
    }

    /// `Name [#####     ] hp/max`.
    fn draw_health_bar(&mut self, c: &Combatant, color: Color) -> io::Result<()> {
        let fill = c.bar_fill(BAR_SEGMENTS).min(BAR_SEGMENTS) as usize;
        let empty = BAR_SEGMENTS as usize - fill;
        queue!(self.out, Print(format!("{} [", c.name)))?;
        self.colored(&"#".repeat(fill), color)?;
        queue!(
            self.out,
            Print(" ".repeat(empty)),
            Print(format!("] {}", c.health_label()))
        )?;
        self.newline()
    }

    fn draw_prompt(&mut self, view: &View<'_>) -> io::Result<()> {
        if view.enemy.is_some() || view.prompt == Prompt::GameOver {
            for entry in view.log {
                self.colored(&entry.text, style_color(entry.style))?;
                self.newline()?;
            }
        }
        match view.prompt.text() {
            Some(text) => self.line(text),
            None => {
                let legal: Vec<Direction> = view.player.movement.legal().collect();
                for dir in legal {
                    self.line(dir.label())?;
                }
                Ok(())
            }
        }
    }

    fn draw(&mut self, view: &View<'_>) -> io::Result<()> {
        if self.clear {
            queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        }
        let width = view.map.width();
        self.draw_map(view)?;
        self.rule(width)?;
        self.draw_health_bar(&view.player.stats, Color::GREEN)?;
        if let Some(enemy) = view.enemy {
            self.draw_health_bar(enemy, Color::RED)?;
        }
        self.newline()?;
        self.rule(width)?;
        self.draw_prompt(view)?;
        self.out.flush()
    }
}

impl<W: Write> TextRenderer for CrosstermRenderer<W> {
    fn render(&mut self, view: &View<'_>) -> Result<(), Box<dyn std::error::Error>> {
        self.draw(view)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::combat::FISTS;
    use wayfarer_core::tile;
    use wayfarer_core::{EnemyRoster, Game, GameConfig, GameMap, Point};

    fn game() -> Game {
        let config = GameConfig::default().with_seed(3);
        let mut game = Game::new(&config, EnemyRoster::default());
        game.map = GameMap::blank(10, 4);
        game.begin_cycle();
        game
    }

    fn render(game: &Game, prompt: Prompt) -> Vec<String> {
        let mut r = CrosstermRenderer::new(Vec::new())
            .with_color(false)
            .with_clear(false);
        let view = View {
            map: &game.map,
            player: &game.player,
            enemy: game.enemy(),
            prompt,
            log: game.log.current_turn(),
        };
        assert!(r.render(&view).is_ok());
        let text = String::from_utf8(r.into_inner()).unwrap_or_default();
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn map_block_with_fog_and_legend() {
        let lines = render(&game(), Prompt::Move);
        assert_eq!(lines[0], "x==========x");
        assert_eq!(lines[1], "|X..       | X PLAYER");
        assert_eq!(lines[2], "|...       | . PLAINS");
        assert_eq!(lines[3], "|..        | ");
        assert_eq!(lines[4], "|          | ");
        assert_eq!(lines[5], "x==========x");
        assert_eq!(lines[6], "-----------");
    }

    #[test]
    fn move_prompt_lists_legal_directions() {
        let lines = render(&game(), Prompt::Move);
        let tail: Vec<&str> = lines.iter().rev().take(2).rev().map(String::as_str).collect();
        assert_eq!(tail, vec!["[S] - DOWN", "[D] - RIGHT"]);
        assert!(lines.iter().all(|l| l != "[W] - UP" && l != "[A] - LEFT"));
    }

    #[test]
    fn health_bars_and_combat_prompt() {
        let mut g = game();
        g.engage(Combatant::new("Rat", 6, &FISTS));
        g.attack();
        let lines = render(&g, Prompt::Continue);
        assert!(lines.contains(&format!("Player [{}{}] 95/100", "#".repeat(19), " ")));
        assert!(lines.contains(&format!("Rat [###{}] 1/6", " ".repeat(17))));
        assert!(lines.contains(&"Player dealt 5 damage to Rat with Fists".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("[ENTER] - CONTINUE"));
    }

    #[test]
    fn empty_bar_keeps_one_segment() {
        let mut g = game();
        g.player.stats.health = 0;
        let lines = render(&g, Prompt::GameOver);
        assert!(lines.contains(&format!("Player [#{}] 0/100", " ".repeat(19))));
        assert_eq!(lines.last().map(String::as_str), Some("Game Over"));
    }

    #[test]
    fn colours_wrap_symbols() {
        let g = game();
        let mut r = CrosstermRenderer::new(Vec::new()).with_clear(false);
        let view = View {
            map: &g.map,
            player: &g.player,
            enemy: None,
            prompt: Prompt::Move,
            log: &[],
        };
        assert!(r.render(&view).is_ok());
        let text = String::from_utf8_lossy(r.get_ref()).into_owned();
        assert!(text.contains("\x1b["));
        assert!(g.map.view().at(Point::ZERO).is_some_and(|t| t.is(&tile::PLAYER_MARKER)));
    }

    #[test]
    fn log_lines_take_their_style_colour() {
        let mut g = game();
        g.engage(Combatant::new("Rat", 6, &FISTS));
        g.attack();
        let mut r = CrosstermRenderer::new(Vec::new()).with_clear(false);
        let view = View {
            map: &g.map,
            player: &g.player,
            enemy: g.enemy(),
            prompt: Prompt::Continue,
            log: g.log.current_turn(),
        };
        assert!(r.render(&view).is_ok());
        let text = String::from_utf8_lossy(r.get_ref()).into_owned();
        // GREEN is (13, 188, 121), RED is (205, 49, 49).
        assert!(text.contains("\x1b[38;2;13;188;121mPlayer dealt 5 damage to Rat with Fists"));
        assert!(text.contains("\x1b[38;2;205;49;49mRat dealt 5 damage to Player with Fists"));
        assert_eq!(style_color(LogStyle::Normal), Color::DEFAULT);
    }

    #[test]
    fn default_colour_resets() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
