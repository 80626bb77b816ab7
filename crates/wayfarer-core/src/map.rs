//! The game map: master terrain, the per-turn working copy, fog of war and
//! the explored-terrain legend.

use rand::{Rng, RngExt};

use crate::combat::Combatant;
use crate::fov;
use crate::geom::{Point, Range};
use crate::grid::Grid;
use crate::mapgen::{DEFAULT_LAYOUT, PatchGen, PatchSpec};
use crate::messages::Key;
use crate::roster::EnemyRoster;
use crate::tile::{self, Tile};

/// Spawn rolls below this value (on a 1–100 roll) produce an enemy.
pub const SPAWN_CHANCE: u32 = 10;

// ---------------------------------------------------------------------------
// Direction / MovementOptions
// ---------------------------------------------------------------------------

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in prompt order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn delta(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
        }
    }

    /// Fixed prompt label for this direction.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "[W] - UP",
            Self::Down => "[S] - DOWN",
            Self::Left => "[A] - LEFT",
            Self::Right => "[D] - RIGHT",
        }
    }

    /// W/S/A/D, either case.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('w' | 'W') => Some(Self::Up),
            Key::Char('s' | 'S') => Some(Self::Down),
            Key::Char('a' | 'A') => Some(Self::Left),
            Key::Char('d' | 'D') => Some(Self::Right),
            _ => None,
        }
    }
}

/// Which directions are legal from the current position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementOptions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementOptions {
    /// A direction is legal unless the step would leave
    /// `[0, width) × [0, height)`.
    pub fn compute(pos: Point, width: i32, height: i32) -> Self {
        Self {
            up: pos.y > 0,
            down: pos.y < height - 1,
            left: pos.x > 0,
            right: pos.x < width - 1,
        }
    }

    pub fn allows(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Legal directions in prompt order.
    pub fn legal(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.allows(*d))
    }
}

// ---------------------------------------------------------------------------
// GameMap
// ---------------------------------------------------------------------------

/// Terrain plus everything the player has seen of it.
#[derive(Debug, Clone)]
pub struct GameMap {
    width: i32,
    height: i32,
    /// Master terrain. Not touched once generation is over.
    terrain: Grid<Tile>,
    /// Master terrain with the player marker on top, rebuilt every update.
    view: Grid<Tile>,
    /// Cells ever seen. Only ever goes from `false` to `true`.
    explored: Grid<bool>,
    /// Distinct kinds seen so far, in discovery order.
    legend: Vec<Tile>,
}

impl GameMap {
    /// A `width`×`height` map of plains, nothing explored.
    pub fn blank(width: i32, height: i32) -> Self {
        let terrain = Grid::new(width, height, &tile::PLAINS as Tile);
        Self {
            width: terrain.width(),
            height: terrain.height(),
            view: terrain.clone(),
            explored: Grid::new(width, height, false),
            legend: vec![&tile::PLAYER_MARKER],
            terrain,
        }
    }

    /// Generate a map with the standard patch layout: forest, pines,
    /// mountain, water, town.
    pub fn generate(width: i32, height: i32, rng: &mut impl Rng) -> Self {
        let mut map = Self::blank(width, height);
        for (tile, spec) in DEFAULT_LAYOUT {
            let n = map.generate_patch(tile, spec, true, rng);
            log::debug!("stamped {n} {tile} cells ({} patches)", spec.count);
        }
        map
    }

    /// Stamp patches of `tile` onto the master terrain. Returns the number
    /// of cells written.
    pub fn generate_patch(
        &mut self,
        tile: Tile,
        spec: PatchSpec,
        irregular: bool,
        rng: &mut impl Rng,
    ) -> usize {
        let stamped = PatchGen::new(&mut self.terrain, rng)
            .with_irregular(irregular)
            .patch(tile, spec);
        self.view.copy_from(&self.terrain);
        stamped.len()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.terrain.bounds()
    }

    /// Master terrain.
    pub fn terrain(&self) -> &Grid<Tile> {
        &self.terrain
    }

    /// Working copy: master terrain plus the player marker.
    pub fn view(&self) -> &Grid<Tile> {
        &self.view
    }

    pub fn explored(&self) -> &Grid<bool> {
        &self.explored
    }

    pub fn legend(&self) -> &[Tile] {
        &self.legend
    }

    pub fn terrain_at(&self, p: Point) -> Option<Tile> {
        self.terrain.at(p).copied()
    }

    pub fn is_explored(&self, p: Point) -> bool {
        self.explored.at(p).copied().unwrap_or(false)
    }

    /// Mark everything in sight of `pos` as explored and record newly seen
    /// terrain kinds in the legend.
    pub fn reveal(&mut self, pos: Point) {
        for p in fov::visible_points(pos, self.bounds()) {
            self.explored.set(p, true);
            if let Some(t) = self.terrain_at(p) {
                if !self.legend.iter().any(|l| l.is(t)) {
                    log::debug!("discovered {t} at {p}");
                    self.legend.push(t);
                }
            }
        }
    }

    /// Refresh the working copy from the master terrain, reveal around
    /// `pos` and put `marker` on it.
    pub fn update(&mut self, pos: Point, marker: Tile) {
        self.view.copy_from(&self.terrain);
        self.reveal(pos);
        self.view.set(pos, marker);
    }

    /// Roll for an enemy on the cell at `pos`: a 1–100 roll below
    /// `chance`, on anything but water, yields a fresh copy of a random
    /// roster template.
    pub fn spawn_enemy(
        &self,
        pos: Point,
        chance: u32,
        roster: &EnemyRoster,
        rng: &mut impl Rng,
    ) -> Option<Combatant> {
        let roll: u32 = rng.random_range(1..=100);
        let tile = self.terrain_at(pos)?;
        if roll < chance && !tile.blocks_spawns() {
            roster.spawn(rng)
        } else {
            None
        }
    }
}
