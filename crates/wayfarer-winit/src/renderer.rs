//! Draws a [`View`] into a pixel [`Canvas`]: the explored map scaled 2×
//! inside a frame, and a HUD with names, health bars and prompts.

use wayfarer_core::{Combatant, Direction, Prompt, View};

use crate::WinitConfig;
use crate::assets::SpriteSet;
use crate::canvas::{BLACK, Canvas, rgb};
use crate::text::{Anchor, TextPainter};

const BACKGROUND: u32 = rgb(165, 42, 42);
const FRAME: u32 = rgb(92, 51, 23);
const HUD_BASE: u32 = rgb(40, 40, 48);
const BAR_BASE: u32 = rgb(190, 190, 190);
const PLAYER_BAR: u32 = rgb(40, 200, 40);
const ENEMY_BAR: u32 = rgb(200, 40, 40);
const WHITE: u32 = rgb(255, 255, 255);

pub const BAR_LENGTH: u32 = 200;
pub const BAR_HEIGHT: i32 = 24;
const BAR_OUTLINE: i32 = 3;
const TEXT_SIZE: u32 = 30;
const BAR_TEXT_SIZE: u32 = 24;
const PROMPT_SPACING: i32 = 22;

pub struct SpriteRenderer {
    tile_size: i32,
    hud_height: i32,
    sprites: SpriteSet,
    text: Option<TextPainter>,
    canvas: Canvas,
}

impl SpriteRenderer {
    /// Load assets from `config.asset_dir`, falling back to generated
    /// sprites and no text.
    pub fn new(map_width: i32, map_height: i32, config: &WinitConfig) -> Self {
        let sprites = SpriteSet::load(&config.asset_dir, config.tile_size);
        let font = config.asset_dir.join("font.ttf");
        let text = match TextPainter::from_file(&font) {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("{e}; the HUD will have no text");
                None
            }
        };
        Self::with_assets(map_width, map_height, config, sprites, text)
    }

    pub fn with_assets(
        map_width: i32,
        map_height: i32,
        config: &WinitConfig,
        sprites: SpriteSet,
        text: Option<TextPainter>,
    ) -> Self {
        let tile_size = config.tile_size as i32;
        let hud_height = config.hud_height as i32;
        let (w, h) = screen_size(map_width, map_height, tile_size, hud_height);
        Self {
            tile_size,
            hud_height,
            sprites,
            text,
            canvas: Canvas::new(w as usize, h as usize),
        }
    }

    /// Window size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.canvas.width() as u32, self.canvas.height() as u32)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn width(&self) -> i32 {
        self.canvas.width() as i32
    }

    fn height(&self) -> i32 {
        self.canvas.height() as i32
    }

    /// Redraw the whole frame.
    pub fn draw(&mut self, view: &View<'_>) {
        self.canvas.fill(BLACK);
        self.draw_background();
        self.draw_map(view);
        self.draw_hud(view);
    }

    fn draw_background(&mut self) {
        let (w, h, hud) = (self.width(), self.height(), self.hud_height);
        self.canvas.fill_rect(0, 0, w, h - hud, BACKGROUND);
        match &self.sprites.map_frame {
            Some(frame) => self.canvas.blit(frame, 0, 0),
            None => self.canvas.stroke_rect(0, 0, w, h - hud, self.tile_size / 2, FRAME),
        }
        match &self.sprites.hud_frame {
            Some(frame) => self.canvas.blit(frame, 0, h - hud),
            None => {
                self.canvas.fill_rect(0, h - hud, w, hud, HUD_BASE);
                self.canvas.stroke_rect(0, h - hud, w, hud, self.tile_size / 2, FRAME);
            }
        }
    }

    /// Explored cells only, each at twice the tile size, offset by one
    /// tile for the frame.
    fn draw_map(&mut self, view: &View<'_>) {
        let step = self.tile_size * 2;
        let origin = self.tile_size;
        for (p, t) in view.map.view().iter() {
            if !view.map.is_explored(p) {
                continue;
            }
            if let Some(sprite) = self.sprites.tile(*t) {
                self.canvas.blit(sprite, origin + p.x * step, origin + p.y * step);
            }
        }
    }

    fn draw_hud(&mut self, view: &View<'_>) {
        let (w, h) = (self.width(), self.height());
        let cx = w / 2;

        self.label(&view.player.stats.name, cx, h - 110, TEXT_SIZE, Anchor::Center, WHITE);
        self.health_bar(&view.player.stats, PLAYER_BAR, h - 95);

        match view.prompt {
            Prompt::GameOver => {
                self.label("Game Over", cx, h - 80, TEXT_SIZE, Anchor::Center, WHITE);
            }
            Prompt::Move => {
                for (i, dir) in Direction::ALL.into_iter().enumerate() {
                    if view.player.movement.allows(dir) {
                        let y = h - 105 + i as i32 * PROMPT_SPACING;
                        self.label(dir.label(), 40, y, TEXT_SIZE, Anchor::Left, WHITE);
                    }
                }
            }
            Prompt::Attack | Prompt::Continue => {
                if let Some(text) = view.prompt.text() {
                    self.label(text, w - 40, h - 105, TEXT_SIZE, Anchor::Right, WHITE);
                }
            }
        }

        if let Some(enemy) = view.enemy {
            self.label(&enemy.name, cx, h - 55, TEXT_SIZE, Anchor::Center, WHITE);
            self.health_bar(enemy, ENEMY_BAR, h - 40);
        }
    }

    fn label(&mut self, text: &str, x: i32, y: i32, size: u32, anchor: Anchor, color: u32) {
        if let Some(painter) = self.text.as_mut() {
            painter.draw(&mut self.canvas, text, x, y, size, anchor, color);
        }
    }

    /// Gray base, coloured fill proportional to health (at least one
    /// pixel), black outline and the `hp/max` label on top.
    fn health_bar(&mut self, c: &Combatant, fill_color: u32, y: i32) {
        let length = BAR_LENGTH as i32;
        let x = self.width() / 2 - length / 2;
        let fill = c.bar_fill(BAR_LENGTH) as i32;
        self.canvas.fill_rect(x, y, length, BAR_HEIGHT, BAR_BASE);
        self.canvas.fill_rect(x, y, fill, BAR_HEIGHT, fill_color);
        self.canvas
            .stroke_rect(x, y, length, BAR_HEIGHT, BAR_OUTLINE, BLACK);
        let label = c.health_label();
        self.label(&label, self.width() / 2, y, BAR_TEXT_SIZE, Anchor::Top, BLACK);
    }
}

/// Window size for a `map_width`×`map_height` map: the map at twice the
/// tile size, a one-tile frame around it and the HUD below.
pub fn screen_size(map_width: i32, map_height: i32, tile_size: i32, hud_height: i32) -> (i32, i32) {
    (
        tile_size * map_width * 2 + tile_size * 2,
        tile_size * map_height * 2 + hud_height + tile_size * 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::combat::FISTS;
    use wayfarer_core::tile;
    use wayfarer_core::{EnemyRoster, Game, GameConfig, GameMap};

    fn setup() -> (Game, SpriteRenderer) {
        let config = GameConfig::default().with_seed(1);
        let mut game = Game::new(&config, EnemyRoster::default());
        game.map = GameMap::blank(30, 15);
        game.begin_cycle();
        let wc = WinitConfig::default();
        let r = SpriteRenderer::with_assets(30, 15, &wc, SpriteSet::fallback(wc.tile_size), None);
        (game, r)
    }

    fn view(game: &Game, prompt: Prompt) -> View<'_> {
        View {
            map: &game.map,
            player: &game.player,
            enemy: game.enemy(),
            prompt,
            log: &[],
        }
    }

    #[test]
    fn window_size() {
        assert_eq!(screen_size(30, 15, 16, 140), (992, 652));
        let (_, r) = setup();
        assert_eq!(r.size(), (992, 652));
    }

    #[test]
    fn only_explored_tiles_are_drawn() {
        let (game, mut r) = setup();
        r.draw(&view(&game, Prompt::Move));
        let c = r.canvas();
        let marker = crate::canvas::color_to_pixel(tile::PLAYER_MARKER.color);
        let plains = crate::canvas::color_to_pixel(tile::PLAINS.color);
        // Player cell at (0, 0), a seen plains cell at (1, 0), fog at (10, 10).
        assert_eq!(c.pixel(16 + 5, 16 + 5), Some(marker));
        assert_eq!(c.pixel(16 + 32 + 31, 16 + 31), Some(plains));
        assert_eq!(c.pixel(16 + 320 + 5, 16 + 320 + 5), Some(BACKGROUND));
    }

    #[test]
    fn bars_follow_health() {
        let (mut game, mut r) = setup();
        game.player.stats.health = 50;
        game.engage(Combatant::new("Rat", 6, &FISTS));
        r.draw(&view(&game, Prompt::Attack));
        let c = r.canvas();
        let x0 = 992 / 2 - 100;
        let py = (652 - 95 + 12) as usize;
        let ey = (652 - 40 + 12) as usize;
        assert_eq!(c.pixel(x0 as usize + 50, py), Some(PLAYER_BAR));
        assert_eq!(c.pixel(x0 as usize + 150, py), Some(BAR_BASE));
        assert_eq!(c.pixel(x0 as usize + 150, ey), Some(ENEMY_BAR));
        assert_eq!(c.pixel(x0 as usize + 1, py), Some(BLACK));
    }

    #[test]
    fn no_enemy_bar_outside_combat() {
        let (game, mut r) = setup();
        r.draw(&view(&game, Prompt::Move));
        let x0 = (992 / 2 - 100) as usize;
        let ey = (652 - 40 + 12) as usize;
        assert_eq!(r.canvas().pixel(x0 + 150, ey), Some(HUD_BASE));
    }
}
