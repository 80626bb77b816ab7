use std::cell::RefCell;
use std::rc::Rc;

use wayfarer_core::tile;
use wayfarer_core::{
    Controller, EnemyRoster, Game, GameConfig, GameMap, Key, MovementOptions, Msg, Point, Prompt,
    RenderStrategy, ScriptedInput, TextRenderer, View,
};

/// Keeps a count of explored cells and the legend size after every render.
#[derive(Clone, Default)]
struct Census(Rc<RefCell<Vec<(usize, usize)>>>);

impl TextRenderer for Census {
    fn render(&mut self, view: &View<'_>) -> Result<(), Box<dyn std::error::Error>> {
        let explored = view.map.explored().count(|e| *e);
        self.0.borrow_mut().push((explored, view.map.legend().len()));
        Ok(())
    }
}

fn peaceful(seed: u64) -> Game {
    let config = GameConfig::default().with_seed(seed);
    let mut game = Game::new(&config, EnemyRoster::standard());
    game.set_spawn_chance(0);
    game
}

#[test]
fn player_at_origin_can_go_down_or_right() {
    let mut game = peaceful(1);
    game.begin_cycle();
    assert_eq!(
        game.player.movement,
        MovementOptions {
            up: false,
            down: true,
            left: false,
            right: true
        }
    );
}

#[test]
fn walking_reveals_more_and_never_less() {
    let census = Census::default();
    let game = peaceful(4);
    let mut c = Controller::new(game, RenderStrategy::TextOnly).with_text(Box::new(census.clone()));
    let script = "dddddddsssssaaaawwwwdddddddddddddsssss".chars().map(Msg::char);
    assert!(c.run_text(&mut ScriptedInput::new(script)).is_ok());

    let counts = census.0.borrow();
    assert!(counts.windows(2).all(|w| w[0].0 <= w[1].0 && w[0].1 <= w[1].1));
    // The first cycle at the origin sees 8 cells.
    assert_eq!(counts.first().map(|c| c.0), Some(8));
    assert!(counts.last().is_some_and(|c| c.0 > 8));
}

#[test]
fn working_copy_tracks_the_player() {
    let mut c = Controller::new(peaceful(8), RenderStrategy::Graphical);
    assert!(c.start().is_ok());
    for key in ['d', 'd', 's', 's', 'a'] {
        assert!(c.handle_msg(Msg::char(key)).is_ok());
        c.step();
    }
    let game = c.game();
    assert_eq!(game.player.pos, Point::new(1, 2));
    let view = game.map.view();
    for (p, t) in view.iter() {
        let on_marker = t.is(&tile::PLAYER_MARKER);
        assert_eq!(on_marker, p == game.player.pos, "{p}");
    }
}

#[test]
fn seeded_sessions_replay_identically() {
    let run = |seed| {
        let config = GameConfig::default().with_seed(seed);
        let mut c = Controller::new(Game::new(&config, EnemyRoster::standard()), RenderStrategy::Graphical);
        let _ = c.start();
        let mut trace = Vec::new();
        for i in 0..400 {
            let key = if c.game().in_combat() {
                Key::Enter
            } else {
                Key::Char(['d', 's', 'a', 'w'][(i / 7) % 4])
            };
            let _ = c.handle_msg(Msg::KeyDown(key));
            c.step();
            trace.push((c.game().player.pos, c.game().player.stats.health, c.prompt()));
        }
        trace
    };
    assert_eq!(run(2024), run(2024));
}

#[test]
fn game_over_sticks_in_continuous_mode() {
    let config = GameConfig::default().with_seed(5);
    let mut game = Game::new(&config, EnemyRoster::standard());
    game.map = GameMap::blank(30, 15);
    game.player.stats.health = 1;
    game.set_spawn_chance(101);
    let mut c = Controller::new(game, RenderStrategy::Graphical);
    assert!(c.start().is_ok());
    assert!(c.handle_msg(Msg::char('d')).is_ok());
    assert!(c.game().in_combat());
    assert!(c.handle_msg(Msg::KeyDown(Key::Enter)).is_ok());
    assert_eq!(c.prompt(), Prompt::GameOver);
    for _ in 0..5 {
        assert!(c.handle_msg(Msg::char('s')).is_ok());
        c.step();
        assert_eq!(c.view().prompt, Prompt::GameOver);
    }
    assert_eq!(c.game().player.pos, Point::new(1, 0));
}
