//! Blocking input sources for the text loop.

use std::io::{self, BufRead};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};

use wayfarer_core::{InputSource, Key, Msg};

/// Maps a crossterm [`KeyCode`] to a wayfarer [`Key`].
pub fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Translate one key event. Releases, Ctrl+C and Esc are handled here;
/// keys the game has no use for are dropped.
fn translate(ev: KeyEvent) -> Option<Msg> {
    if ev.kind == KeyEventKind::Release {
        return None;
    }
    if ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Msg::Quit);
    }
    match to_key(ev.code)? {
        Key::Escape => Some(Msg::Quit),
        key => Some(Msg::KeyDown(key)),
    }
}

// ---------------------------------------------------------------------------
// LineInput
// ---------------------------------------------------------------------------

/// One message per line: an empty line is Enter, a single character is that
/// key and anything longer is [`Key::Other`]. End of input quits.
pub struct LineInput<R: BufRead> {
    reader: R,
    buf: String,
}

impl LineInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_msg(&mut self) -> Result<Msg, Box<dyn std::error::Error>> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(Msg::Quit);
        }
        let line = self.buf.trim_end_matches(['\r', '\n']);
        let mut chars = line.chars();
        Ok(match (chars.next(), chars.next()) {
            (None, _) => Msg::KeyDown(Key::Enter),
            (Some(c), None) => Msg::char(c),
            _ => Msg::KeyDown(Key::Other),
        })
    }
}

// ---------------------------------------------------------------------------
// KeypressInput
// ---------------------------------------------------------------------------

/// Single key presses in raw mode, no Enter needed. Raw mode is left when
/// the source is dropped.
pub struct KeypressInput {
    _raw: RawMode,
}

struct RawMode;

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("failed to leave raw mode: {e}");
        }
    }
}

impl KeypressInput {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        log::debug!("terminal in raw mode");
        Ok(Self { _raw: RawMode })
    }
}

impl InputSource for KeypressInput {
    fn next_msg(&mut self) -> Result<Msg, Box<dyn std::error::Error>> {
        loop {
            if let Event::Key(ev) = event::read()? {
                if let Some(msg) = translate(ev) {
                    return Ok(msg);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use wayfarer_core::combat::FISTS;
    use wayfarer_core::{
        Combatant, Controller, EnemyRoster, Game, GameConfig, GameMap, Point, RenderStrategy,
    };

    use crate::CrosstermRenderer;

    fn msgs(input: &str) -> Vec<Msg> {
        let mut src = LineInput::new(Cursor::new(input.as_bytes().to_vec()));
        let mut out = Vec::new();
        loop {
            match src.next_msg() {
                Ok(Msg::Quit) | Err(_) => break,
                Ok(m) => out.push(m),
            }
        }
        out
    }

    #[test]
    fn only_single_characters_are_keys() {
        assert_eq!(
            msgs("d\r\nSouth\n\nw\ndog\n"),
            vec![
                Msg::char('d'),
                Msg::KeyDown(Key::Other),
                Msg::KeyDown(Key::Enter),
                Msg::char('w'),
                Msg::KeyDown(Key::Other),
            ]
        );
    }

    #[test]
    fn words_do_not_move_the_player() {
        let mut game = Game::new(&GameConfig::default().with_seed(5), EnemyRoster::default());
        game.map = GameMap::blank(30, 15);
        game.set_spawn_chance(0);
        let renderer = CrosstermRenderer::new(Vec::new()).with_clear(false);
        let mut c = Controller::new(game, RenderStrategy::TextOnly).with_text(Box::new(renderer));
        let mut input = LineInput::new(Cursor::new(b"South\ndog\nsouth\ns\n".to_vec()));
        assert!(c.run_text(&mut input).is_ok());
        assert_eq!(c.game().player.pos, Point::new(0, 1));
    }

    #[test]
    fn words_confirm_in_text_combat() {
        let mut game = Game::new(&GameConfig::default().with_seed(5), EnemyRoster::default());
        game.map = GameMap::blank(30, 15);
        game.set_spawn_chance(0);
        game.engage(Combatant::new("Rat", 5, &FISTS));
        let renderer = CrosstermRenderer::new(Vec::new()).with_clear(false);
        let mut c = Controller::new(game, RenderStrategy::TextOnly).with_text(Box::new(renderer));
        let mut input = LineInput::new(Cursor::new(b"attack\nok\n".to_vec()));
        assert!(c.run_text(&mut input).is_ok());
        assert!(!c.game().in_combat());
        assert_eq!(c.game().player.stats.health, 95);
    }

    #[test]
    fn eof_quits() {
        let mut src = LineInput::new(Cursor::new(Vec::new()));
        assert_eq!(src.next_msg().ok(), Some(Msg::Quit));
    }

    #[test]
    fn key_events() {
        assert_eq!(translate(KeyEvent::from(KeyCode::Char('a'))), Some(Msg::char('a')));
        assert_eq!(
            translate(KeyEvent::from(KeyCode::Enter)),
            Some(Msg::KeyDown(Key::Enter))
        );
        assert_eq!(translate(KeyEvent::from(KeyCode::Esc)), Some(Msg::Quit));
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::Quit)
        );
        assert_eq!(translate(KeyEvent::from(KeyCode::Tab)), None);

        let mut release = KeyEvent::from(KeyCode::Char('d'));
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(release), None);
    }
}
